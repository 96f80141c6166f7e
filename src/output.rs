//! # Output
//!
//! This module renders scan results and controls how they look on a
//! terminal.
//!
//! ## Formats
//!
//! - `text`: repositories grouped by section, one per line.
//! - `cgitrc`: `section=` and `repo.*=` lines that can be included from a
//!   web front end's configuration.
//! - `json` / `yaml`: the serialized record list.
//!
//! ## Respecting User Preferences
//!
//! Styling in the `text` format honors:
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;
use std::fmt::Write as _;

use crate::error::Result;
use crate::record::RepositoryRecord;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether styled output should be used.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is one of `always`, `never` or `auto`. In auto mode,
    /// colors are disabled if `NO_COLOR` is set, `CLICOLOR=0`, `TERM=dumb`,
    /// or stdout is not a TTY (unless `CLICOLOR_FORCE=1`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of the variable (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    pub fn without_color() -> Self {
        Self { use_color: false }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).bold().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            console::style(text).dim().force_styling(true).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Listing format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Cgitrc,
    Json,
    Yaml,
}

/// Records that belong in a listing: never `ignore`d ones, and `hide`den
/// ones only when `include_hidden` is set.
pub fn visible<'a, I>(records: I, include_hidden: bool) -> Vec<&'a RepositoryRecord>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    records
        .into_iter()
        .filter(|r| !r.ignore && (include_hidden || !r.hide))
        .collect()
}

/// Render `records` in `format`.
pub fn render(
    records: &[&RepositoryRecord],
    format: OutputFormat,
    output: &OutputConfig,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(records, output)),
        OutputFormat::Cgitrc => Ok(render_cgitrc(records)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(records)?),
    }
}

/// Records stably ordered by section, unsectioned ones first.
fn by_section<'a>(records: &[&'a RepositoryRecord]) -> Vec<&'a RepositoryRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.section.cmp(&b.section));
    sorted
}

fn render_text(records: &[&RepositoryRecord], output: &OutputConfig) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No repositories found.\n");
        return out;
    }

    let width = records.iter().map(|r| r.name.len()).max().unwrap_or(0);
    let mut current: Option<&str> = None;
    for (i, record) in by_section(records).into_iter().enumerate() {
        let section = record.section.as_deref();
        if i == 0 || section != current {
            if let Some(name) = section {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", output.bold(&format!("{}:", name)));
            }
            current = section;
        }
        let indent = if section.is_some() { "  " } else { "" };
        let desc = record.description.as_deref().unwrap_or_default();
        let _ = write!(out, "{}{:<width$}  {}", indent, record.name, desc, width = width);
        if let Some(owner) = &record.owner {
            let _ = write!(out, "  {}", output.dim(&format!("({})", owner)));
        }
        out.push('\n');
    }

    let _ = writeln!(out, "\n{} repositor{}", records.len(), if records.len() == 1 { "y" } else { "ies" });
    out
}

fn render_cgitrc(records: &[&RepositoryRecord]) -> String {
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for (i, record) in by_section(records).into_iter().enumerate() {
        let section = record.section.as_deref();
        if section != current {
            let _ = writeln!(out, "section={}", section.unwrap_or_default());
            out.push('\n');
            current = section;
        }
        for (key, value) in record.settings() {
            let value = value.replace('\n', " ");
            let _ = writeln!(out, "repo.{}={}", key, value);
        }
        if i + 1 < records.len() {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(name: &str, section: Option<&str>) -> RepositoryRecord {
        let mut record = RepositoryRecord::new(name);
        record.path = PathBuf::from(format!("/srv/git/{}", name));
        record.section = section.map(str::to_string);
        record
    }

    #[test]
    fn test_color_always() {
        let config = OutputConfig::from_env_and_flag("always");
        assert!(config.use_color);
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::from_env_and_flag("never");
        assert!(!config.use_color);
    }

    #[test]
    #[serial_test::serial]
    fn test_no_color_env_disables_auto() {
        std::env::set_var("NO_COLOR", "1");
        let config = OutputConfig::from_env_and_flag("auto");
        std::env::remove_var("NO_COLOR");
        assert!(!config.use_color);
    }

    #[test]
    fn test_visible_filters_hidden_and_ignored() {
        let mut hidden = record("hidden", None);
        hidden.hide = true;
        let mut ignored = record("ignored", None);
        ignored.ignore = true;
        let shown = record("shown", None);
        let all = [hidden, ignored, shown];

        let names = |v: Vec<&RepositoryRecord>| v.iter().map(|r| r.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(visible(&all, false)), vec!["shown"]);
        assert_eq!(names(visible(&all, true)), vec!["hidden", "shown"]);
    }

    #[test]
    fn test_render_text_groups_by_section() {
        let a = record("a", Some("tools"));
        let b = record("b", None);
        let out = render(&[&a, &b], OutputFormat::Text, &OutputConfig::without_color()).unwrap();
        let b_pos = out.find("b ").unwrap();
        let tools_pos = out.find("tools:").unwrap();
        assert!(b_pos < tools_pos);
        assert!(out.contains("  a  [no description]"));
        assert!(out.contains("2 repositories"));
    }

    #[test]
    fn test_render_text_empty() {
        let out = render(&[], OutputFormat::Text, &OutputConfig::without_color()).unwrap();
        assert_eq!(out, "No repositories found.\n");
    }

    #[test]
    fn test_render_cgitrc() {
        let mut a = record("a", Some("tools"));
        a.owner = Some("Jane".to_string());
        let out = render(&[&a], OutputFormat::Cgitrc, &OutputConfig::without_color()).unwrap();
        assert_eq!(
            out,
            "section=tools\n\nrepo.url=a\nrepo.name=a\nrepo.path=/srv/git/a\nrepo.desc=[no description]\nrepo.owner=Jane\n"
        );
    }

    #[test]
    fn test_render_json_roundtrips_names() {
        let a = record("a", None);
        let out = render(&[&a], OutputFormat::Json, &OutputConfig::without_color()).unwrap();
        let parsed: Vec<RepositoryRecord> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0].name, "a");
    }
}
