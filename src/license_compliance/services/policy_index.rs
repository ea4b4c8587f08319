use crate::license_compliance::domain::{LicensePolicy, PolicyVerdict};
use crate::license_compliance::policies::validate_entry;
use crate::shared::error::PolicyError;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Placeholder family key used by upstream data feeds for unclassified entries
const PLACEHOLDER_FAMILY_KEY: &str = "?";

/// Read-only lookup tables over the configured license policies.
///
/// Built once from the policy configuration. Two invariants hold after
/// [`PolicyIndex::build`] succeeds:
/// - every SPDX ID maps to exactly one policy
/// - all policies of one family share the same usage policy
#[derive(Debug, Clone, Default)]
pub struct PolicyIndex {
    by_id: HashMap<String, LicensePolicy>,
    by_family: IndexMap<String, Vec<LicensePolicy>>,
}

impl PolicyIndex {
    /// Indexes every valid entry of `policies`.
    ///
    /// Invalid entries are skipped with a warning. Duplicate SPDX IDs and
    /// families with disagreeing usage policies are fatal.
    pub fn build(policies: &[LicensePolicy]) -> Result<Self, PolicyError> {
        let mut index = Self::default();

        for policy in policies {
            if !validate_entry(policy) {
                continue;
            }

            if !policy.id.is_empty() {
                if index.by_id.contains_key(&policy.id) {
                    return Err(PolicyError::DuplicateId {
                        id: policy.id.clone(),
                    });
                }
                log::trace!(
                    "ID index: adding policy Id=`{}`, Name=`{}`, Family=`{}`",
                    policy.id,
                    policy.name,
                    policy.family
                );
                index.by_id.insert(policy.id.clone(), policy.clone());
            }

            let members = index.by_family.entry(policy.family.clone()).or_default();
            if let Some(existing) = members
                .iter()
                .find(|member| member.usage() != policy.usage())
            {
                return Err(PolicyError::FamilyConflict {
                    family: policy.family.clone(),
                    id: policy.id.clone(),
                    existing: existing.usage_policy.clone(),
                    candidate: policy.usage_policy.clone(),
                });
            }
            log::trace!(
                "Family index: adding policy Id=`{}`, Name=`{}`, Family=`{}`",
                policy.id,
                policy.name,
                policy.family
            );
            members.push(policy.clone());
        }

        Ok(index)
    }

    /// Number of distinct families indexed
    pub fn len(&self) -> usize {
        self.by_family.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_family.is_empty()
    }

    pub fn policies_by_id(&self) -> &HashMap<String, LicensePolicy> {
        &self.by_id
    }

    /// Family keys in the order they were first declared
    pub fn family_keys(&self) -> impl Iterator<Item = &str> {
        self.by_family.keys().map(String::as_str)
    }

    pub fn family_members(&self, family: &str) -> &[LicensePolicy] {
        self.by_family
            .get(family)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Exact SPDX ID match
    pub fn find_by_id(&self, id: &str) -> Option<&LicensePolicy> {
        self.by_id.get(id)
    }

    pub fn lookup_by_id(&self, id: &str) -> PolicyVerdict {
        match self.find_by_id(id) {
            Some(policy) => verdict_of(policy),
            None => {
                log::trace!("No policy match found for SPDX ID=`{}`", id);
                PolicyVerdict::Unmatched
            }
        }
    }

    /// Finds the family whose key appears in a free-text license name.
    ///
    /// Matching is a case-sensitive substring test. When several family keys
    /// occur in `text`, the longest key wins and equal lengths fall back to
    /// lexicographic order, so the answer never depends on map iteration order.
    pub fn find_by_family_name_contains(&self, text: &str) -> Option<&LicensePolicy> {
        let family = self
            .by_family
            .keys()
            .filter(|key| key.as_str() != PLACEHOLDER_FAMILY_KEY)
            .filter(|key| text.contains(key.as_str()))
            .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| b.cmp(a)))?;

        log::trace!(
            "Match found: family name `{}` in license name `{}`",
            family,
            text
        );
        self.by_family.get(family).and_then(|members| members.first())
    }

    pub fn lookup_by_family_name_contains(&self, text: &str) -> PolicyVerdict {
        match self.find_by_family_name_contains(text) {
            Some(policy) => verdict_of(policy),
            None => {
                log::trace!("No policy match found for license family name=`{}`", text);
                PolicyVerdict::Unmatched
            }
        }
    }
}

fn verdict_of(policy: &LicensePolicy) -> PolicyVerdict {
    // Only validated entries are indexed, so the usage always parses.
    policy
        .usage()
        .map(PolicyVerdict::from)
        .unwrap_or(PolicyVerdict::Unmatched)
}
