//! Minimal CycloneDX document records.
//!
//! Only the fields read by the license commands are modeled; anything else in
//! the document is ignored during decoding.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CdxBom {
    pub bom_format: String,
    pub spec_version: String,
    pub components: Option<Vec<CdxComponent>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdxComponent {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub purl: String,
    #[serde(rename = "bom-ref", skip_serializing_if = "String::is_empty")]
    pub bom_ref: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<CdxLicenseChoice>,
}

impl CdxComponent {
    pub fn new(name: &str, purl: &str) -> Self {
        Self {
            name: name.to_string(),
            purl: purl.to_string(),
            ..Self::default()
        }
    }

    pub fn with_license(mut self, choice: CdxLicenseChoice) -> Self {
        self.licenses.push(choice);
        self
    }
}

/// CycloneDX `LicenseChoice`: either a `license` object or an `expression`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdxLicenseChoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<CdxLicense>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
}

impl CdxLicenseChoice {
    pub fn id(id: &str) -> Self {
        Self {
            license: Some(CdxLicense {
                id: Some(id.to_string()),
                ..CdxLicense::default()
            }),
            expression: None,
        }
    }

    pub fn name(name: &str) -> Self {
        Self {
            license: Some(CdxLicense {
                name: Some(name.to_string()),
                ..CdxLicense::default()
            }),
            expression: None,
        }
    }

    pub fn expression(expression: &str) -> Self {
        Self {
            license: None,
            expression: Some(expression.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdxLicense {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
