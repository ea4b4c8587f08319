use super::cyclonedx::{CdxComponent, CdxLicenseChoice};
use super::license_declaration::{LicenseChoiceType, LicenseDeclaration};

/// Identity of the component a license was declared on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    pub name: String,
    pub version: String,
    pub purl: String,
    pub bom_ref: String,
}

impl From<&CdxComponent> for ComponentRef {
    fn from(component: &CdxComponent) -> Self {
        Self {
            name: component.name.clone(),
            version: component.version.clone(),
            purl: component.purl.clone(),
            bom_ref: component.bom_ref.clone(),
        }
    }
}

/// A license declaration paired with its owning component
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentLicenseRecord {
    declaration: LicenseDeclaration,
    choice: CdxLicenseChoice,
    component: ComponentRef,
}

impl ComponentLicenseRecord {
    pub fn new(
        declaration: LicenseDeclaration,
        choice: CdxLicenseChoice,
        component: ComponentRef,
    ) -> Self {
        Self {
            declaration,
            choice,
            component,
        }
    }

    pub fn declaration(&self) -> &LicenseDeclaration {
        &self.declaration
    }

    /// The license choice exactly as it appeared in the document
    pub fn choice(&self) -> &CdxLicenseChoice {
        &self.choice
    }

    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    pub fn choice_type(&self) -> LicenseChoiceType {
        self.declaration.choice_type()
    }

    pub fn key(&self) -> &str {
        self.declaration.key()
    }
}
