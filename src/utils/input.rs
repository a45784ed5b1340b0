use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

// Maximum viminfo size accepted: 64MB
const MAX_FILE_SIZE_BYTES: u64 = 64 * 1024 * 1024;

/// Read a viminfo file into its lines
///
/// Trailing whitespace (including `\r` from CRLF files) is stripped from every
/// line so that whitespace-only lines count as blank. Bytes that are not valid
/// UTF-8 are replaced rather than rejected.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or is larger than
/// 64MB.
pub fn read_viminfo(path: &Path) -> Result<Vec<String>> {
    // Validate size on the open handle to avoid TOCTOU race condition
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open viminfo file: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read viminfo file: {}", path.display()))?;

    let text = String::from_utf8_lossy(&bytes);
    if matches!(text, Cow::Owned(_)) {
        warn!(path = %path.display(), "viminfo file is not valid UTF-8, invalid bytes replaced");
    }

    let lines = split_lines(&text);
    debug!(path = %path.display(), lines = lines.len(), "read viminfo file");
    Ok(lines)
}

/// Split text into lines with trailing whitespace removed
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

/// Validates that a file's size is within acceptable limits (64MB)
///
/// Takes an open file handle so the size check and the subsequent read see
/// the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 64MB
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
