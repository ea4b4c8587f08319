use super::{LIST_SEPARATOR, SUMMARY_TITLES};
use crate::application::read_models::{LicenseSummaryRow, PolicyRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

const POLICY_TITLES: [&str; 5] = ["Policy", "Family", "SPDX ID", "Name", "Notes"];

/// Minimum width of a padded column
const MIN_COLUMN_WIDTH: usize = 8;

/// Spaces between the widest cell of a column and the next column
const COLUMN_PADDING: usize = 2;

const MAX_FAMILY_WIDTH: usize = 16;
const MAX_NAME_WIDTH: usize = 16;
const MAX_NOTES_WIDTH: usize = 32;

/// TextFormatter adapter rendering reports as aligned text tables
///
/// Every table starts with a title row and a dashed underline row. The last
/// column is never padded, so lines carry no trailing whitespace.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_table(titles: &[&str], rows: Vec<Vec<String>>) -> String {
        let underline: Vec<String> = titles.iter().map(|t| "-".repeat(t.chars().count())).collect();
        let mut lines: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 2);
        lines.push(titles.iter().map(|t| t.to_string()).collect());
        lines.push(underline);
        lines.extend(rows);

        let widths: Vec<usize> = (0..titles.len())
            .map(|column| {
                let widest = lines
                    .iter()
                    .filter_map(|line| line.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                (widest + COLUMN_PADDING).max(MIN_COLUMN_WIDTH)
            })
            .collect();

        let mut output = String::new();
        for line in &lines {
            let last = line.len().saturating_sub(1);
            for (column, cell) in line.iter().enumerate() {
                output.push_str(cell);
                if column < last {
                    let pad = widths[column].saturating_sub(cell.chars().count());
                    output.push_str(&" ".repeat(pad));
                }
            }
            output.push('\n');
        }
        output
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format_license_summary(&self, rows: &[LicenseSummaryRow]) -> Result<String> {
        let cells = rows
            .iter()
            .map(|row| {
                vec![
                    row.policy.to_string(),
                    row.choice_type.to_string(),
                    row.license.clone(),
                    row.component.clone(),
                    row.purl.clone(),
                ]
            })
            .collect();
        Ok(Self::render_table(&SUMMARY_TITLES, cells))
    }

    fn format_policies(&self, rows: &[PolicyRow]) -> Result<String> {
        let cells = rows
            .iter()
            .map(|row| {
                vec![
                    row.usage_policy.clone(),
                    truncate(&row.family, MAX_FAMILY_WIDTH),
                    row.id.clone(),
                    truncate(&row.name, MAX_NAME_WIDTH),
                    truncate(&row.notes.join(LIST_SEPARATOR), MAX_NOTES_WIDTH),
                ]
            })
            .collect();
        Ok(Self::render_table(&POLICY_TITLES, cells))
    }
}

/// Keeps at most `max_chars` characters of `value`
fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
