//! Reader for `key=value` configuration files.
//!
//! Supports:
//! - Key-value pairs: `key=value` (whitespace around key and value is
//!   trimmed, the value runs to the end of the line and may contain `=`)
//! - Comments: lines starting with `#`
//! - Blank lines
//!
//! Lines without `=` are ignored.

use std::path::Path;

use crate::error::{Error, Result};

/// Call `f` for each `key=value` line of `content`, in order.
pub fn parse_str<F>(content: &str, mut f: F)
where
    F: FnMut(&str, &str),
{
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = trimmed.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                f(key, value.trim());
            }
        }
    }
}

/// Read `path` and call `f` for each `key=value` line.
pub fn parse_file<P, F>(path: P, f: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&str, &str),
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&content, f);
    Ok(())
}
