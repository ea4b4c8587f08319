use crate::application::dto::PolicySet;
use crate::license_compliance::services::PolicyIndex;
use crate::ports::outbound::{PolicyConfigReader, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

/// LoadPoliciesUseCase - Loads the license policy configuration and indexes it
///
/// # Type Parameters
/// * `PCR` - PolicyConfigReader implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadPoliciesUseCase<PCR, PR> {
    policy_config_reader: PCR,
    progress_reporter: PR,
}

impl<PCR, PR> LoadPoliciesUseCase<PCR, PR>
where
    PCR: PolicyConfigReader,
    PR: ProgressReporter,
{
    /// Creates a new LoadPoliciesUseCase with injected dependencies
    pub fn new(policy_config_reader: PCR, progress_reporter: PR) -> Self {
        Self {
            policy_config_reader,
            progress_reporter,
        }
    }

    /// Reads the policy file at `policy_path` and builds its index
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or decoded, or if the
    /// policies conflict (duplicate SPDX ID, disagreeing family usage). The
    /// conflict is kept in the error chain as a `PolicyError`.
    pub fn execute(&self, policy_path: &Path) -> Result<PolicySet> {
        self.progress_reporter.report(&format!(
            "📜 Loading license policies from: {}",
            policy_path.display()
        ));

        let config = self.policy_config_reader.read_policy_config(policy_path)?;
        let index = PolicyIndex::build(&config.policy_list).with_context(|| {
            format!(
                "Invalid license policy configuration: {}",
                policy_path.display()
            )
        })?;

        let indexed = index_entry_count(&index);
        let skipped = config.policy_list.len() - indexed;
        if skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} invalid policy entry(ies). Run with --debug for details.",
                skipped
            ));
        }
        self.progress_reporter.report(&format!(
            "✅ Loaded {} policy entry(ies) in {} family(ies)",
            indexed,
            index.len()
        ));

        Ok(PolicySet {
            source: policy_path.to_path_buf(),
            config,
            index,
        })
    }
}

/// Number of configuration entries that made it into the index
fn index_entry_count(index: &PolicyIndex) -> usize {
    index
        .family_keys()
        .map(|family| index.family_members(family).len())
        .sum()
}
