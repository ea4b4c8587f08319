use crate::application::dto::{LicenseListRequest, LicenseListResponse, LicenseListing};
use crate::license_compliance::services::{LicenseCollector, PolicyIndex, PolicyResolver};
use crate::ports::outbound::{ProgressReporter, SbomDocumentReader};
use crate::shared::Result;

/// ListLicensesUseCase - Lists the licenses declared in an SBOM
///
/// This use case orchestrates the listing workflow using generic
/// dependency injection for its infrastructure dependencies.
///
/// # Type Parameters
/// * `DR` - SbomDocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ListLicensesUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> ListLicensesUseCase<DR, PR>
where
    DR: SbomDocumentReader,
    PR: ProgressReporter,
{
    /// Creates a new ListLicensesUseCase with injected dependencies
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Executes the license listing use case
    ///
    /// # Arguments
    /// * `request` - Document path and listing mode
    /// * `index` - Policy index used when `request.summary` is set
    ///
    /// # Returns
    /// The listing plus any components skipped for malformed license choices
    pub fn execute(
        &self,
        request: &LicenseListRequest,
        index: &PolicyIndex,
    ) -> Result<LicenseListResponse> {
        // Step 1: Read the components
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.document_path.display()
        ));
        let components = self
            .document_reader
            .read_components(&request.document_path)?;
        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", components.len()));

        // Step 2: Collect and group license declarations
        let inventory = LicenseCollector::collect(&components);
        for rejected in inventory.rejected() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped component '{}': {}",
                rejected.component.name, rejected.reason
            ));
        }

        // Step 3: Resolve policies or pass the raw choices through
        let listing = if request.summary {
            let resolver = PolicyResolver::new(index);
            LicenseListing::Summary(inventory.summarize(&resolver))
        } else {
            LicenseListing::Choices(inventory.license_choices().into_iter().cloned().collect())
        };

        self.progress_reporter.report(&format!(
            "🔍 Found {} license record(s) under {} distinct license(s)",
            inventory.record_count(),
            inventory.groups().len()
        ));

        Ok(LicenseListResponse::new(
            listing,
            inventory.rejected().to_vec(),
        ))
    }
}
