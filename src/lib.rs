//! sbom-inspect - license inspection for CycloneDX SBOMs
//!
//! This library reads the license declarations of CycloneDX components and
//! evaluates them against a user-supplied allow/deny policy file, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`license_compliance`): policy index, SPDX expression
//!   parser and resolver
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_inspect::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let reporter = StderrProgressReporter::new();
//!
//! // Load and index the policy file
//! let policies = LoadPoliciesUseCase::new(FileSystemReader::new(), &reporter)
//!     .execute(Path::new("license.json"))?;
//!
//! // Resolve every license in the SBOM
//! let request = LicenseListRequest::new(PathBuf::from("bom.json"), true);
//! let response = ListLicensesUseCase::new(FileSystemReader::new(), &reporter)
//!     .execute(&request, &policies.index)?;
//!
//! if let LicenseListing::Summary(rows) = &response.listing {
//!     println!("{}", TextFormatter::new().format_license_summary(rows)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod license_compliance;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvFormatter, JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        LicenseListRequest, LicenseListResponse, LicenseListing, PolicySet, ReportFormat,
    };
    pub use crate::application::read_models::{LicenseSummaryRow, PolicyRow};
    pub use crate::application::use_cases::{
        ListLicensesUseCase, ListPoliciesUseCase, LoadPoliciesUseCase,
    };
    pub use crate::license_compliance::domain::{
        CdxBom, CdxComponent, CdxLicense, CdxLicenseChoice, ExpressionNode, LicenseChoiceType,
        LicenseComplianceConfig, LicenseDeclaration, LicensePolicy, PolicyVerdict, UsagePolicy,
    };
    pub use crate::license_compliance::services::{
        LicenseCollector, LicenseInventory, PolicyIndex, PolicyResolver, RejectedComponent,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, PolicyConfigReader, ProgressReporter, ReportFormatter,
        SbomDocumentReader,
    };
    pub use crate::shared::error::{DeclarationError, ExitCode, PolicyError, SbomError};
    pub use crate::shared::Result;
}
