/// Key output: newline-delimited to stdout, or an atomically replaced file.
use std::fs::Permissions;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::github::ApiError;
use crate::keys::FetchError;

/// Permission bits for the output file.
const OUTPUT_MODE: u32 = 0o600;

// --- Stdout output ---

/// Render keys as one newline-terminated block.
fn render(keys: &[String]) -> String {
    let mut out = keys.join("\n");
    out.push('\n');
    out
}

/// Write keys to stdout, one per line.
pub fn write_stdout(keys: &[String]) {
    print!("{}", render(keys));
}

// --- File output ---

/// Write keys to `path`, one per line, replacing any existing file.
///
/// The keys land in a temporary file next to the destination first, with
/// mode 0600, and move into place in a single rename. A failure part way
/// through leaves the destination untouched.
///
/// # Errors
///
/// Returns any IO error from creating, writing, syncing, or renaming the
/// temporary file.
pub fn write_file(keys: &[String], path: &Path) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    for key in keys {
        writeln!(tmp, "{key}")?;
    }
    tmp.as_file()
        .set_permissions(Permissions::from_mode(OUTPUT_MODE))?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &FetchError) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
    if let FetchError::Api(ApiError::Status {
        documentation_url: Some(url),
        ..
    }) = err
    {
        let _ = writeln!(out, "  See: {url}");
    }
}
