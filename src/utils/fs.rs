use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size for session JSONL files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    // Avoid double allocation when converting Cow to String
    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_validate_small_file_ok() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();
        file.flush().unwrap();
        let handle = File::open(file.path()).unwrap();
        assert!(validate_file_size(&handle, file.path()).is_ok());
    }

    #[test]
    fn test_validate_oversized_file_rejected() {
        let file = NamedTempFile::new().unwrap();
        // Sparse file: allocates no disk space but reports the full length
        file.as_file().set_len(MAX_FILE_SIZE_BYTES + 1).unwrap();

        let result = validate_file_size(file.as_file(), file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("File too large"));
    }

    #[test]
    fn test_validate_file_at_exact_limit_ok() {
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_FILE_SIZE_BYTES).unwrap();

        assert!(validate_file_size(file.as_file(), file.path()).is_ok());
    }

    #[test]
    fn test_format_path_with_tilde() {
        let path = PathBuf::from("/Users/testuser/Documents/project");
        let formatted = format_path_with_tilde_internal(&path, Some("/Users/testuser"));
        assert_eq!(formatted, "~/Documents/project");

        // Path not under home
        let path2 = PathBuf::from("/opt/local/bin");
        let formatted2 = format_path_with_tilde_internal(&path2, Some("/Users/testuser"));
        assert_eq!(formatted2, "/opt/local/bin");
    }
}
