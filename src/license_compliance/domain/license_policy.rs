use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw usage policy value for an allowed license
pub const POLICY_ALLOW: &str = "allow";
/// Raw usage policy value for a denied license
pub const POLICY_DENY: &str = "deny";
/// Rendering of a declaration no configured policy applies to
pub const POLICY_UNMATCHED: &str = "UNMATCHED";

/// Validated usage policy of a configured license rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsagePolicy {
    Allow,
    Deny,
}

impl UsagePolicy {
    /// Parses a raw `usagePolicy` value. Only the exact lowercase values are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            POLICY_ALLOW => Some(UsagePolicy::Allow),
            POLICY_DENY => Some(UsagePolicy::Deny),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UsagePolicy::Allow => POLICY_ALLOW,
            UsagePolicy::Deny => POLICY_DENY,
        }
    }
}

impl fmt::Display for UsagePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a license declaration against the policy index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PolicyVerdict {
    Allow,
    Deny,
    /// No configured policy applies
    #[default]
    Unmatched,
}

impl PolicyVerdict {
    pub fn is_allow(&self) -> bool {
        matches!(self, PolicyVerdict::Allow)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyVerdict::Allow => POLICY_ALLOW,
            PolicyVerdict::Deny => POLICY_DENY,
            PolicyVerdict::Unmatched => POLICY_UNMATCHED,
        }
    }
}

impl From<UsagePolicy> for PolicyVerdict {
    fn from(usage: UsagePolicy) -> Self {
        match usage {
            UsagePolicy::Allow => PolicyVerdict::Allow,
            UsagePolicy::Deny => PolicyVerdict::Deny,
        }
    }
}

impl fmt::Display for PolicyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PolicyVerdict {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One caller-supplied license rule.
///
/// An empty `id` marks a family record whose `children` list the SPDX IDs
/// grouped under `family`. `usage_policy` is kept as the raw string so that
/// entries with unsupported values still decode and can be skipped when the
/// index is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LicensePolicy {
    pub id: String,
    pub family: String,
    pub name: String,
    pub usage_policy: String,
    pub children: Vec<String>,
    pub notes: Vec<String>,
    pub urls: Vec<String>,
    pub annotation_refs: Vec<String>,
}

impl LicensePolicy {
    /// Builds a discrete (SPDX ID keyed) policy entry
    pub fn discrete(id: &str, family: &str, usage_policy: &str) -> Self {
        Self {
            id: id.to_string(),
            family: family.to_string(),
            name: id.to_string(),
            usage_policy: usage_policy.to_string(),
            ..Self::default()
        }
    }

    /// Builds a family policy entry covering `children`
    pub fn family(family: &str, usage_policy: &str, children: &[&str]) -> Self {
        Self {
            family: family.to_string(),
            name: family.to_string(),
            usage_policy: usage_policy.to_string(),
            children: children.iter().map(|c| c.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn is_family_record(&self) -> bool {
        self.id.is_empty()
    }

    /// The validated usage policy, or `None` for unsupported values
    pub fn usage(&self) -> Option<UsagePolicy> {
        UsagePolicy::parse(&self.usage_policy)
    }
}

/// Contents of the license policy configuration file
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LicenseComplianceConfig {
    #[serde(rename = "policies")]
    pub policy_list: Vec<LicensePolicy>,
    pub annotations: IndexMap<String, String>,
}

impl LicenseComplianceConfig {
    pub fn new(policy_list: Vec<LicensePolicy>) -> Self {
        Self {
            policy_list,
            annotations: IndexMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.policy_list.is_empty()
    }
}
