use crate::application::read_models::{LicenseSummaryRow, PolicyRow};
use crate::shared::Result;

/// ReportFormatter port for rendering license reports
///
/// Implementations decide the output format (text table, CSV, JSON);
/// the rows arrive fully resolved and in display order.
pub trait ReportFormatter {
    /// Formats the per-record license summary
    ///
    /// # Arguments
    /// * `rows` - One row per (license key, component) record
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_license_summary(&self, rows: &[LicenseSummaryRow]) -> Result<String>;

    /// Formats the configured license policy table
    ///
    /// # Arguments
    /// * `rows` - One row per configured policy entry
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_policies(&self, rows: &[PolicyRow]) -> Result<String>;
}
