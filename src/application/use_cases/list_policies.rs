use crate::application::dto::PolicySet;
use crate::application::read_models::PolicyRow;
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// ListPoliciesUseCase - Produces the policy table for `license policy`
pub struct ListPoliciesUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ListPoliciesUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Lists every configured entry in file order
    ///
    /// # Errors
    /// Returns [`SbomError::EmptyPolicyConfig`] if the configuration declares
    /// no policies.
    pub fn execute(&self, policies: &PolicySet) -> Result<Vec<PolicyRow>> {
        if policies.config.is_empty() {
            return Err(SbomError::EmptyPolicyConfig {
                path: policies.source.clone(),
            }
            .into());
        }

        let rows = PolicyRow::from_config(&policies.config);
        self.progress_reporter
            .report(&format!("📋 Listing {} license policies", rows.len()));
        Ok(rows)
    }
}
