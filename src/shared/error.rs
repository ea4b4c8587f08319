use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a broken license policy
/// configuration from ordinary runtime failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Application error (file I/O, malformed document, missing configuration, etc.)
    ApplicationError = 1,
    /// The license policy configuration is internally inconsistent
    ValidationError = 2,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error chain to the exit code the process should terminate with.
    ///
    /// Any [`PolicyError`] in the chain is a validation failure; everything
    /// else is an application failure.
    pub fn for_error(error: &anyhow::Error) -> Self {
        if error.chain().any(|cause| cause.is::<PolicyError>()) {
            ExitCode::ValidationError
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::ValidationError => write!(f, "Validation Error (2)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (3)"),
        }
    }
}

/// Application-specific errors for SBOM inspection.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("SBOM document not found: {path}\n\n💡 Hint: Specify an existing CycloneDX JSON file with --input-file")]
    DocumentNotFound { path: PathBuf },

    #[error("Failed to parse SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX JSON document")]
    DocumentParseError { path: PathBuf, details: String },

    #[error("No components found in SBOM document: {path}\n\n💡 Hint: The license commands read the top-level `components` array")]
    NoComponents { path: PathBuf },

    #[error("License policy file not found: {path}\n\n💡 Hint: Use --policy-file or set `policy_file` in sbom-inspect.config.yml")]
    PolicyConfigNotFound { path: PathBuf },

    #[error("Failed to parse license policy file: {path}\nDetails: {details}\n\n💡 Hint: The file must be a JSON object with a `policies` array")]
    PolicyConfigParseError { path: PathBuf, details: String },

    #[error("License policy is empty: {path}\n\n💡 Hint: Verify that the license policy file declares at least one policy")]
    EmptyPolicyConfig { path: PathBuf },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Fatal inconsistencies in the license policy configuration.
///
/// Resolution answers cannot be trusted once one of these is detected, so
/// they abort the run with [`ExitCode::ValidationError`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Multiple (possibly conflicting) policies declared for SPDX ID `{id}`\n\n💡 Hint: Each discrete SPDX ID may appear in only one policy entry")]
    DuplicateId { id: String },

    #[error("Policy (ID: `{id}`, Family: `{family}`, Policy: `{candidate}`) conflicts with the `{existing}` policy already declared for the same family\n\n💡 Hint: All entries of a license family must share one usage policy")]
    FamilyConflict {
        family: String,
        id: String,
        existing: String,
        candidate: String,
    },
}

/// Per-component license declaration errors.
///
/// These abort processing of the owning component only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationError {
    #[error("invalid license choice: none of `license.id`, `license.name` or `expression` is set")]
    EmptyChoice,

    #[error("license expression nests parentheses {depth} levels deep (maximum {max})")]
    ExpressionTooDeep { depth: usize, max: usize },
}
