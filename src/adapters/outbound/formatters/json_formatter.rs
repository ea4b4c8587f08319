use crate::application::read_models::{LicenseSummaryRow, PolicyRow};
use crate::license_compliance::domain::CdxLicenseChoice;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering reports as pretty-printed JSON arrays
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Formats raw CycloneDX license choices, as listed without `--summary`
    pub fn format_license_choices(&self, choices: &[CdxLicenseChoice]) -> Result<String> {
        Ok(serde_json::to_string_pretty(choices)? + "\n")
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_license_summary(&self, rows: &[LicenseSummaryRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)? + "\n")
    }

    fn format_policies(&self, rows: &[PolicyRow]) -> Result<String> {
        Ok(serde_json::to_string_pretty(rows)? + "\n")
    }
}
