/// Formatter adapters for the license report formats
mod csv_formatter;
mod json_formatter;
mod text_formatter;

pub use csv_formatter::CsvFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;

/// Column titles of the license summary report
pub(crate) const SUMMARY_TITLES: [&str; 5] = [
    "Policy",
    "Type",
    "ID/Name/Expression",
    "Component(s)",
    "Package URL (pURL)",
];

/// Separator joining list values (notes, annotation refs) inside one cell
pub(crate) const LIST_SEPARATOR: &str = ", ";
