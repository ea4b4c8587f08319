use super::{LIST_SEPARATOR, SUMMARY_TITLES};
use crate::application::read_models::{LicenseSummaryRow, PolicyRow};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use csv::{Writer, WriterBuilder};

const POLICY_TITLES: [&str; 6] = ["Policy", "Family", "SPDX ID", "Name", "Annotations", "Notes"];

/// CsvFormatter adapter rendering reports as comma-separated values
///
/// Values are written in full; quoting follows the `csv` crate's
/// necessary-only rules.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }

    fn writer() -> Writer<Vec<u8>> {
        WriterBuilder::new().has_headers(true).from_writer(Vec::new())
    }

    fn finish(writer: Writer<Vec<u8>>) -> Result<String> {
        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow::anyhow!("csv into inner error: {}", err))?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvFormatter {
    fn format_license_summary(&self, rows: &[LicenseSummaryRow]) -> Result<String> {
        let mut writer = Self::writer();
        writer.write_record(SUMMARY_TITLES)?;
        for row in rows {
            writer.write_record([
                row.policy.as_str(),
                row.choice_type.as_str(),
                row.license.as_str(),
                row.component.as_str(),
                row.purl.as_str(),
            ])?;
        }
        Self::finish(writer)
    }

    fn format_policies(&self, rows: &[PolicyRow]) -> Result<String> {
        let mut writer = Self::writer();
        writer.write_record(POLICY_TITLES)?;
        for row in rows {
            writer.write_record([
                row.usage_policy.as_str(),
                row.family.as_str(),
                row.id.as_str(),
                row.name.as_str(),
                row.annotation_refs.join(LIST_SEPARATOR).as_str(),
                row.notes.join(LIST_SEPARATOR).as_str(),
            ])?;
        }
        Self::finish(writer)
    }
}
