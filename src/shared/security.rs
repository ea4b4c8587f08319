use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of an input document or policy file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` is a regular file of acceptable size before reading it.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns [`SbomError::SecurityError`] for symbolic links, non-regular files
/// and files larger than `max_size`; metadata failures are returned as-is.
pub fn validate_readable_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)?;

    if metadata.is_symlink() {
        return Err(security_error(
            path,
            "the path is a symbolic link",
            "Pass the real file path; symbolic links are not followed",
        ));
    }

    if !metadata.is_file() {
        return Err(security_error(
            path,
            "the path is not a regular file",
            "Pass a path to a JSON file, not a directory or device",
        ));
    }

    if metadata.len() > max_size {
        return Err(security_error(
            path,
            &format!(
                "the file is too large ({} bytes, maximum {} bytes)",
                metadata.len(),
                max_size
            ),
            "Split the document or raise the limit",
        ));
    }

    Ok(())
}

/// Rejects an existing output path that is a symbolic link
pub fn validate_not_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(security_error(
            path,
            "the output path is a symbolic link",
            "Write to a regular file path instead",
        )),
        _ => Ok(()),
    }
}

fn security_error(path: &Path, reason: &str, hint: &str) -> anyhow::Error {
    SbomError::SecurityError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
        hint: hint.to_string(),
    }
    .into()
}
