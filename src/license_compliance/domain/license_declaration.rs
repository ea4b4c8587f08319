use super::cyclonedx::CdxLicenseChoice;
use super::expression::{nesting_depth, MAX_NESTING_DEPTH};
use crate::shared::error::DeclarationError;
use serde::Serialize;
use std::fmt;

/// Discriminant of a license declaration, as shown in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LicenseChoiceType {
    Id,
    Name,
    Expression,
}

impl LicenseChoiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseChoiceType::Id => "id",
            LicenseChoiceType::Name => "name",
            LicenseChoiceType::Expression => "exp",
        }
    }
}

impl fmt::Display for LicenseChoiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LicenseChoiceType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A license attached to a component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LicenseDeclaration {
    /// SPDX license identifier
    ById(String),
    /// Free-text license name
    ByName(String),
    /// Raw SPDX license expression
    ByExpression(String),
}

impl LicenseDeclaration {
    /// Converts a CycloneDX license choice.
    ///
    /// `license.id` takes precedence over `license.name`, which takes
    /// precedence over `expression`. Empty strings count as absent.
    ///
    /// # Errors
    /// - [`DeclarationError::EmptyChoice`] when nothing is set
    /// - [`DeclarationError::ExpressionTooDeep`] when the expression nests
    ///   parentheses deeper than [`MAX_NESTING_DEPTH`]
    pub fn from_choice(choice: &CdxLicenseChoice) -> Result<Self, DeclarationError> {
        let non_empty = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        if let Some(license) = &choice.license {
            if let Some(id) = non_empty(&license.id) {
                return Ok(LicenseDeclaration::ById(id));
            }
            if let Some(name) = non_empty(&license.name) {
                return Ok(LicenseDeclaration::ByName(name));
            }
        }

        let expression = non_empty(&choice.expression).ok_or(DeclarationError::EmptyChoice)?;
        let depth = nesting_depth(&expression);
        if depth > MAX_NESTING_DEPTH {
            return Err(DeclarationError::ExpressionTooDeep {
                depth,
                max: MAX_NESTING_DEPTH,
            });
        }
        Ok(LicenseDeclaration::ByExpression(expression))
    }

    pub fn choice_type(&self) -> LicenseChoiceType {
        match self {
            LicenseDeclaration::ById(_) => LicenseChoiceType::Id,
            LicenseDeclaration::ByName(_) => LicenseChoiceType::Name,
            LicenseDeclaration::ByExpression(_) => LicenseChoiceType::Expression,
        }
    }

    /// Textual key used to group declarations in reports
    pub fn key(&self) -> &str {
        match self {
            LicenseDeclaration::ById(value)
            | LicenseDeclaration::ByName(value)
            | LicenseDeclaration::ByExpression(value) => value,
        }
    }
}
