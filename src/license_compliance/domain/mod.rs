pub mod component_license;
pub mod cyclonedx;
pub mod expression;
pub mod license_declaration;
pub mod license_policy;

pub use component_license::{ComponentLicenseRecord, ComponentRef};
pub use cyclonedx::{CdxBom, CdxComponent, CdxLicense, CdxLicenseChoice};
pub use expression::{Conjunction, ExpressionNode, Operand, Preposition};
pub use license_declaration::{LicenseChoiceType, LicenseDeclaration};
pub use license_policy::{LicenseComplianceConfig, LicensePolicy, PolicyVerdict, UsagePolicy};
