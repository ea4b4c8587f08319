use crate::license_compliance::domain::{LicenseComplianceConfig, LicensePolicy};
use serde::Serialize;

/// One configured policy entry as shown by `license policy`
///
/// Built from the raw configuration, so entries the index rejected still
/// appear with their original usage value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRow {
    pub usage_policy: String,
    pub family: String,
    pub id: String,
    pub name: String,
    pub annotation_refs: Vec<String>,
    pub notes: Vec<String>,
}

impl PolicyRow {
    pub fn from_policy(policy: &LicensePolicy) -> Self {
        Self {
            usage_policy: policy.usage_policy.clone(),
            family: policy.family.clone(),
            id: policy.id.clone(),
            name: policy.name.clone(),
            annotation_refs: policy.annotation_refs.clone(),
            notes: policy.notes.clone(),
        }
    }

    /// Rows for every configured entry in file order
    pub fn from_config(config: &LicenseComplianceConfig) -> Vec<Self> {
        config.policy_list.iter().map(Self::from_policy).collect()
    }
}
