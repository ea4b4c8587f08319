use crate::application::read_models::LicenseSummaryRow;
use crate::license_compliance::domain::CdxLicenseChoice;
use crate::license_compliance::services::RejectedComponent;

/// Result rows of a license listing
#[derive(Debug, Clone, PartialEq)]
pub enum LicenseListing {
    /// Raw license choices in group order
    Choices(Vec<CdxLicenseChoice>),
    /// One resolved row per license record
    Summary(Vec<LicenseSummaryRow>),
}

/// LicenseListResponse - Response DTO for the license listing use case
#[derive(Debug, Clone)]
pub struct LicenseListResponse {
    pub listing: LicenseListing,
    /// Components skipped because of malformed license choices
    pub rejected: Vec<RejectedComponent>,
}

impl LicenseListResponse {
    pub fn new(listing: LicenseListing, rejected: Vec<RejectedComponent>) -> Self {
        Self { listing, rejected }
    }
}
