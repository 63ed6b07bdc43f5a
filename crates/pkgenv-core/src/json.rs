//! Whole-file JSON reads and writes shared by every store.

use std::{
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use serde::Serialize;
use serde_json::Value;

use crate::error::{EnvError, EnvResult, io_error, read_error};

/// Read a file that must exist.
pub(crate) fn read_required(path: &Path) -> EnvResult<String> {
    fs::read_to_string(path).map_err(|e| read_error(path, e))
}

/// Read a file that may legitimately be absent.
pub(crate) fn read_optional(path: &Path) -> EnvResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_error(path, err)),
    }
}

pub(crate) fn parse_value(path: &Path, text: &str) -> EnvResult<Value> {
    serde_json::from_str(text).map_err(|source| EnvError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn to_pretty(value: &impl Serialize) -> EnvResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Replace `path` with `contents` unless it already holds exactly that.
///
/// Returns whether the file was written. The new content goes to a sibling
/// temp file first and is renamed over the target.
pub(crate) fn write_if_changed(path: &Path, contents: &str) -> EnvResult<bool> {
    if let Some(current) = read_optional(path)? {
        if current == contents {
            tracing::debug!("Unchanged, not rewriting: {}", path.display());
            return Ok(false);
        }
    }
    write_atomic(path, contents.as_bytes())?;
    Ok(true)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> EnvResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| io_error(&parent, e))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let tmp_path = parent.join(format!(".{name}.pkgenv-tmp-{nanos}"));

    fs::write(&tmp_path, bytes).map_err(|e| io_error(&tmp_path, e))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(io_error(path, err));
    }
    Ok(())
}

/// Remove `//` and `/* */` comments outside of string literals.
///
/// Line comments keep their terminating newline so error positions from the
/// JSON parser still point at the right line.
pub(crate) fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let lookahead = chars.peek().copied();
        match (c, lookahead) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
            }
            _ => out.push(c),
        }
    }
    out
}
