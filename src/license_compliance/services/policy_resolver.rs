use super::expression_parser;
use super::policy_index::PolicyIndex;
use crate::license_compliance::domain::{CdxLicenseChoice, LicenseDeclaration, PolicyVerdict};
use crate::shared::error::DeclarationError;

/// PolicyResolver - Determines the usage policy of a license declaration
///
/// Resolution is a pure function of the declaration and the index: resolving
/// the same declaration twice always gives the same verdict.
#[derive(Debug, Clone, Copy)]
pub struct PolicyResolver<'a> {
    index: &'a PolicyIndex,
}

impl<'a> PolicyResolver<'a> {
    pub fn new(index: &'a PolicyIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a PolicyIndex {
        self.index
    }

    /// Resolves a declaration to `allow`, `deny` or `UNMATCHED`.
    ///
    /// - identifiers use an exact SPDX ID match
    /// - names use a family-key substring match
    /// - expressions are parsed and combined per conjunction
    pub fn resolve(&self, declaration: &LicenseDeclaration) -> PolicyVerdict {
        match declaration {
            LicenseDeclaration::ById(id) => self.index.lookup_by_id(id),
            LicenseDeclaration::ByName(name) => self.index.lookup_by_family_name_contains(name),
            LicenseDeclaration::ByExpression(expression) => {
                expression_parser::parse(expression, self.index).resolved_policy
            }
        }
    }

    /// Resolves a raw CycloneDX license choice
    pub fn resolve_choice(
        &self,
        choice: &CdxLicenseChoice,
    ) -> Result<PolicyVerdict, DeclarationError> {
        LicenseDeclaration::from_choice(choice).map(|declaration| self.resolve(&declaration))
    }
}
