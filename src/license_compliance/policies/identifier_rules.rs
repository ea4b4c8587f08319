use crate::license_compliance::domain::LicensePolicy;

/// Reserved markers used by upstream policy feeds to flag unresolved entries.
/// Family keys containing them (case-insensitively) never name a real family.
const RESERVED_FAMILY_KEYWORDS: [&str; 2] = ["conflict", "unknown"];

/// Validates an SPDX license identifier.
///
/// SPDX defines `idstring = 1*(ALPHA / DIGIT / "-" / "." )`, so the value must
/// be non-empty and made only of ASCII alphanumerics, hyphens and dots.
pub fn validate_identifier(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.')
}

/// Validates a policy family key.
///
/// Family keys follow the identifier rules and must not contain a reserved
/// placeholder keyword.
pub fn validate_family_key(key: &str) -> bool {
    if !validate_identifier(key) {
        return false;
    }
    let lowered = key.to_lowercase();
    !RESERVED_FAMILY_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Checks whether a policy entry may be indexed.
///
/// Rejections are logged as warnings; the caller skips the entry.
pub fn validate_entry(policy: &LicensePolicy) -> bool {
    if !policy.id.is_empty() && !validate_identifier(&policy.id) {
        log::warn!(
            "invalid SPDX ID: `{}` (Name=`{}`). Skipping...",
            policy.id,
            policy.name
        );
        return false;
    }

    if policy.name.trim().is_empty() {
        log::warn!("invalid Name: `{}` (Id=`{}`).", policy.name, policy.id);
    }

    if policy.usage().is_none() {
        log::warn!(
            "invalid Usage Policy: `{}` (Id=`{}`, Name=`{}`). Skipping...",
            policy.usage_policy,
            policy.id,
            policy.name
        );
        return false;
    }

    if !validate_family_key(&policy.family) {
        log::warn!(
            "invalid Family: `{}` (Id=`{}`, Name=`{}`). Skipping...",
            policy.family,
            policy.id,
            policy.name
        );
        return false;
    }

    if policy.is_family_record() {
        if policy.children.is_empty() {
            log::trace!(
                "Family (policy): `{}`. Has no children (SPDX IDs) listed.",
                policy.family
            );
        }
        if let Some(child) = policy.children.iter().find(|c| !validate_identifier(c)) {
            log::warn!(
                "invalid Id: `{}` for Family: `{}`. Skipping...",
                child,
                policy.family
            );
            return false;
        }
    }

    true
}
