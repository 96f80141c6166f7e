//! Section extraction from relative repository paths.
//!
//! A section groups repositories for display. It is the relative path cut
//! at a configurable number of `/` separators, counted either from the
//! start (`n > 0`) or from the end (`n < 0`) of the path.

/// Everything before the `n`-th separator counted from the start.
///
/// `leading("a/b/c/d", 2) == Some("a/b")`. Returns `None` when `n` is zero
/// or the path has fewer than `n` separators.
pub fn leading(path: &str, n: usize) -> Option<&str> {
    let cut = path.match_indices('/').nth(n.checked_sub(1)?)?.0;
    Some(&path[..cut])
}

/// Everything before the `n`-th separator counted from the end.
///
/// `trailing("a/b/c/d", 1) == Some("a/b/c")`. Returns `None` when `n` is
/// zero or the path has fewer than `n` separators.
pub fn trailing(path: &str, n: usize) -> Option<&str> {
    let cut = path.rmatch_indices('/').nth(n.checked_sub(1)?)?.0;
    Some(&path[..cut])
}

/// Derive the section for `path` using a signed segment count.
///
/// Empty results are treated as no section.
pub fn from_path(path: &str, n: i32) -> Option<&str> {
    let count = n.unsigned_abs() as usize;
    let section = match n.signum() {
        1 => leading(path, count),
        -1 => trailing(path, count),
        _ => None,
    }?;
    (!section.is_empty()).then_some(section)
}

/// Remove `section` and one following `/` from the front of `name`.
///
/// Returns `name` unchanged when it does not start with `section`.
pub fn strip_section<'a>(name: &'a str, section: &str) -> &'a str {
    match name.strip_prefix(section) {
        Some(rest) => rest.strip_prefix('/').unwrap_or(rest),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading() {
        assert_eq!(leading("a/b/c/d", 1), Some("a"));
        assert_eq!(leading("a/b/c/d", 2), Some("a/b"));
        assert_eq!(leading("a/b/c/d", 3), Some("a/b/c"));
        assert_eq!(leading("a/b/c/d", 4), None);
        assert_eq!(leading("a/b/c/d", 0), None);
    }

    #[test]
    fn test_trailing() {
        assert_eq!(trailing("a/b/c/d", 1), Some("a/b/c"));
        assert_eq!(trailing("a/b/c/d", 2), Some("a/b"));
        assert_eq!(trailing("a/b/c/d", 3), Some("a"));
        assert_eq!(trailing("a/b/c/d", 4), None);
        assert_eq!(trailing("a/b/c/d", 0), None);
    }

    #[test]
    fn test_from_path_signed() {
        assert_eq!(from_path("a/b/c/d", 2), Some("a/b"));
        assert_eq!(from_path("a/b/c/d", -1), Some("a/b/c"));
        assert_eq!(from_path("a/b/c/d", 0), None);
    }

    #[test]
    fn test_from_path_without_separator() {
        assert_eq!(from_path("repo", 1), None);
        assert_eq!(from_path("repo", -1), None);
    }

    #[test]
    fn test_from_path_extreme_counts() {
        assert_eq!(from_path("a/b", i32::MAX), None);
        assert_eq!(from_path("a/b", i32::MIN), None);
    }

    #[test]
    fn test_from_path_empty_section_is_none() {
        assert_eq!(from_path("/a", 1), None);
    }

    #[test]
    fn test_strip_section() {
        assert_eq!(strip_section("a/b/c/d", "a/b"), "c/d");
        assert_eq!(strip_section("a/b/c/d", "x"), "a/b/c/d");
        assert_eq!(strip_section("ab", "a"), "b");
    }
}
