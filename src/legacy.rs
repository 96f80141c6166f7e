//! Legacy per-repository configuration.
//!
//! Repositories may carry metadata in their git-style `config` file, written
//! for gitweb or in this tool's own `cgit.` namespace:
//!
//! ```ini
//! [gitweb]
//!     owner = Jane Doe
//!     description = Shared tooling
//!     category = tools
//! [cgit]
//!     defbranch = main
//! ```
//!
//! [`translate`] maps the recognized keys onto the setting names understood
//! by the registration callback and drops everything else.

use std::path::Path;

use ini::Ini;

use crate::error::{Error, Result};

/// Prefix of keys that pass through with the prefix removed.
pub const NATIVE_PREFIX: &str = "cgit.";

/// Map a fully qualified legacy key onto a setting name.
///
/// Returns `None` for keys that are not forwarded.
pub fn translate(key: &str) -> Option<&str> {
    match key {
        "gitweb.owner" => Some("owner"),
        "gitweb.description" => Some("desc"),
        "gitweb.category" => Some("section"),
        _ => key.strip_prefix(NATIVE_PREFIX).filter(|rest| !rest.is_empty()),
    }
}

/// Parse git-style INI `content` and call `f` with every translated setting,
/// in file order.
///
/// Section and key names are case-insensitive and are lower-cased before
/// translation. `;` and `#` start a comment at the beginning of a line or
/// after whitespace; otherwise values are passed through unchanged.
pub fn parse_str<F>(content: &str, mut f: F) -> std::result::Result<(), ini::ParseError>
where
    F: FnMut(&str, &str),
{
    let ini = Ini::load_from_str(content)?;
    for (section, properties) in ini.iter() {
        let section = match section {
            Some(section) => section.trim().to_lowercase(),
            None => continue,
        };
        for (key, value) in properties.iter() {
            let full_key = format!("{}.{}", section, key.trim().to_lowercase());
            if let Some(setting) = translate(&full_key) {
                f(setting, value);
            }
        }
    }
    Ok(())
}

/// Read the legacy config file at `path` and call `f` with every
/// translated setting.
pub fn read_config<P, F>(path: P, f: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnMut(&str, &str),
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_str(&content, f).map_err(|e| Error::LegacyConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
