use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, TextFormatter};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use sbom_inspect::application::dto::ReportFormat;
    /// use sbom_inspect::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Csv);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Txt => Box::new(TextFormatter::new()),
            ReportFormat::Csv => Box::new(CsvFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified report format
    ///
    /// # Examples
    /// ```
    /// use sbom_inspect::application::dto::ReportFormat;
    /// use sbom_inspect::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(ReportFormat::Csv);
    /// assert_eq!(message, "📝 Generating CSV report...");
    /// ```
    pub fn progress_message(format: ReportFormat) -> &'static str {
        match format {
            ReportFormat::Txt => "📝 Generating text report...",
            ReportFormat::Csv => "📝 Generating CSV report...",
            ReportFormat::Json => "📝 Generating JSON report...",
        }
    }
}
