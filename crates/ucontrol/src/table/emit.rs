//! Artifact serialization.
//!
//! The artifact is read by the RTL memory initializer and has a fixed format:
//! one `//` banner line followed by exactly 128 lines of 32 binary digits, one
//! per ROM address in ascending order, each terminated by `\n`. Nothing else.
//!
//! The file is written to a temporary sibling, optionally read back, and only
//! then renamed into place, so a failed or mismatched write never replaces a
//! valid artifact.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::decode::DecodeTable;
use crate::common::{GenError, TABLE_ENTRIES};
use crate::control::ControlWord;

/// Banner line of the artifact.
pub const BANNER: &str = "// Mirfak control signals";

/// A parsed artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// Banner line, without its newline.
    pub banner: String,
    /// Words in address order.
    pub words: Vec<ControlWord>,
}

/// Writes the artifact text for `table` to `out`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_to<W: Write>(table: &DecodeTable, banner: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{banner}")?;
    for word in table.words() {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Renders the artifact text for `table`.
pub fn render(table: &DecodeTable, banner: &str) -> String {
    let mut text = String::with_capacity((TABLE_ENTRIES + 1) * 33 + banner.len());
    text.push_str(banner);
    text.push('\n');
    for word in table.words() {
        text.push_str(&word.to_string());
        text.push('\n');
    }
    text
}

/// Writes the artifact to `path`, replacing any previous file atomically.
///
/// The temporary file takes the permissions of the file it replaces, or `0644`
/// for a new artifact. With `verify` set it is read back and compared with
/// `table` before the rename, so a mismatch never reaches `path`.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the temporary file cannot be created or written,
/// or the rename into place fails, and [`GenError::Verify`] if the read-back does
/// not match. The destination is left untouched in every case.
pub fn write_artifact(table: &DecodeTable, banner: &str, path: &Path, verify: bool) -> Result<(), GenError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| GenError::io(dir, e))?;
    debug!(tmp = %tmp.path().display(), "writing artifact to temporary file");

    if let Some(permissions) = artifact_permissions(path) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| GenError::io(tmp.path(), e))?;
    }
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write_to(table, banner, &mut out).map_err(|e| GenError::io(path, e))?;
        out.flush().map_err(|e| GenError::io(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| GenError::io(path, e))?;

    if verify {
        let text = fs::read_to_string(tmp.path()).map_err(|e| GenError::io(tmp.path(), e))?;
        check(table, banner, &text).map_err(|reason| GenError::Verify {
            path: path.to_path_buf(),
            reason,
        })?;
        debug!(path = %path.display(), "artifact read back and matches table");
    }

    let _ = tmp.persist(path).map_err(|e| GenError::io(path, e.error))?;
    info!(path = %path.display(), entries = TABLE_ENTRIES, "control ROM artifact written");
    Ok(())
}

/// Permissions for the artifact: those of the file being replaced, else `0644`.
fn artifact_permissions(path: &Path) -> Option<fs::Permissions> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        #[cfg(unix)]
        _ => {
            use std::os::unix::fs::PermissionsExt;
            Some(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        _ => None,
    }
}

/// Parses artifact text.
///
/// # Errors
///
/// Returns a description of the first format violation: a missing or non-comment
/// banner, a data line that is not 32 binary digits, the wrong number of data
/// lines, or a missing final newline.
pub fn parse(text: &str) -> Result<Artifact, String> {
    let Some(body) = text.strip_suffix('\n') else {
        return Err("artifact does not end with a newline".to_owned());
    };
    let mut lines = body.split('\n');
    let banner = match lines.next() {
        Some(line) if line.starts_with("//") => line.to_owned(),
        Some(line) => return Err(format!("line 1 is not a comment banner: {line:?}")),
        None => return Err("artifact is empty".to_owned()),
    };
    let mut words = Vec::with_capacity(TABLE_ENTRIES);
    for (index, line) in lines.enumerate() {
        let word = line
            .parse::<ControlWord>()
            .map_err(|e| format!("line {}: {e}", index + 2))?;
        words.push(word);
    }
    if words.len() != TABLE_ENTRIES {
        return Err(format!("expected {TABLE_ENTRIES} data lines, found {}", words.len()));
    }
    Ok(Artifact { banner, words })
}

/// Reads and parses the artifact at `path`.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be read and [`GenError::Verify`] if
/// it is malformed.
pub fn read_artifact(path: &Path) -> Result<Artifact, GenError> {
    let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    parse(&text).map_err(|reason| GenError::Verify {
        path: path.to_path_buf(),
        reason,
    })
}

/// Reads `path` back and checks it matches `table` entry for entry.
///
/// # Errors
///
/// Returns [`GenError::Io`] if the file cannot be read and [`GenError::Verify`]
/// naming the first differing line.
pub fn verify_artifact(table: &DecodeTable, banner: &str, path: &Path) -> Result<(), GenError> {
    let text = fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
    check(table, banner, &text).map_err(|reason| GenError::Verify {
        path: path.to_path_buf(),
        reason,
    })
}

fn check(table: &DecodeTable, banner: &str, text: &str) -> Result<(), String> {
    let artifact = parse(text)?;
    if artifact.banner != banner {
        return Err(format!("banner is {:?}, expected {banner:?}", artifact.banner));
    }
    for ((address, expected), found) in table.words().enumerate().zip(&artifact.words) {
        if expected != *found {
            return Err(format!("address {address} holds {found}, expected {expected}"));
        }
    }
    Ok(())
}
