//! JSDoc annotation handling
//!
//! Block interfaces describe their properties with a handful of tags:
//!
//! ```text
//! /**
//!  * @description The heading displayed
//!  * @defaultValue Define the default value of the property if required
//!  * @placeholder This is a defined placeholder value
//!  */
//! header: string;
//! ```
//!
//! A comment is turned into a list of cleaned lines once, at parse time.
//! Everything downstream works on those lines through [`extract_tag`].

use lazy_static::lazy_static;
use regex::Regex;

/// Excludes a property or enum member from the output
pub const TAG_IGNORE: &str = "@ignore";
/// Human readable description of a property
pub const TAG_DESCRIPTION: &str = "@description";
/// Documented default value of a property
pub const TAG_DEFAULT_VALUE: &str = "@defaultValue";
/// Value used for the property in the generated example
pub const TAG_PLACEHOLDER: &str = "@placeholder";
/// Names the string-literal union a property is typed with
pub const TAG_RAW_NAME: &str = "@rawName";

lazy_static! {
    /// Comment opener or the leading asterisks of a continuation line
    static ref LINE_PREFIX_REGEX: Regex = Regex::new(r"^(?:/\*\*|\*+)\s?").unwrap();

    /// Comment terminator at the end of a line
    static ref LINE_SUFFIX_REGEX: Regex = Regex::new(r"\s*\*/$").unwrap();
}

/// Split a JSDoc comment into cleaned, non-empty lines.
///
/// Accepts the comment with or without its `/**` and `*/` delimiters, which
/// is how SWC hands out block comment text.
pub fn doc_lines(comment: &str) -> Vec<String> {
    comment
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            let without_prefix = LINE_PREFIX_REGEX.replace(trimmed, "");
            let content = LINE_SUFFIX_REGEX.replace(&without_prefix, "");
            let content = content.trim();

            if content.is_empty() || content == "/" {
                None
            } else {
                Some(content.to_string())
            }
        })
        .collect()
}

/// Return the value following `tag` on the first line that mentions it.
///
/// The first occurrence of `"<tag> "` is removed from the matching line and
/// the rest is returned. No match yields an empty string; absence is a valid
/// outcome, not an error. A bare tag with nothing after it (`@ignore`) comes
/// back unchanged, so a non-empty result also signals presence.
pub fn extract_tag<S: AsRef<str>>(lines: &[S], tag: &str) -> String {
    let needle = format!("{} ", tag);

    lines
        .iter()
        .map(AsRef::as_ref)
        .find(|line| line.contains(tag))
        .map(|line| line.replacen(&needle, "", 1))
        .unwrap_or_default()
}

/// Whether any line mentions `tag`
pub fn has_tag<S: AsRef<str>>(lines: &[S], tag: &str) -> bool {
    !extract_tag(lines, tag).is_empty()
}

/// Whether the annotation lines exclude their declaration from output
pub fn is_ignored<S: AsRef<str>>(lines: &[S]) -> bool {
    has_tag(lines, TAG_IGNORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_DOC: &str = r#"*
	 * @description The heading displayed
	 * @defaultValue Define the default value of the property if required
	 * @placeholder This is a defined placeholder value
	 "#;

    #[test]
    fn test_doc_lines_strips_delimiters() {
        let lines = doc_lines(HEADER_DOC);
        assert_eq!(
            lines,
            vec![
                "@description The heading displayed",
                "@defaultValue Define the default value of the property if required",
                "@placeholder This is a defined placeholder value",
            ]
        );
    }

    #[test]
    fn test_doc_lines_single_line_comment() {
        let lines = doc_lines("/** @ignore */");
        assert_eq!(lines, vec!["@ignore"]);
    }

    #[test]
    fn test_extract_tag() {
        let lines = doc_lines(HEADER_DOC);
        assert_eq!(
            extract_tag(&lines, TAG_DESCRIPTION),
            "The heading displayed"
        );
        assert_eq!(
            extract_tag(&lines, TAG_PLACEHOLDER),
            "This is a defined placeholder value"
        );
        assert_eq!(extract_tag(&lines, TAG_RAW_NAME), "");
    }

    #[test]
    fn test_extract_tag_first_match_wins() {
        let lines = ["@description first", "@description second"];
        assert_eq!(extract_tag(&lines, TAG_DESCRIPTION), "first");
    }

    #[test]
    fn test_extract_tag_empty_input() {
        let lines: Vec<String> = vec![];
        assert_eq!(extract_tag(&lines, TAG_DESCRIPTION), "");
        assert!(!is_ignored(&lines));
    }

    #[test]
    fn test_bare_tag_signals_presence() {
        let lines = ["@ignore", "@description This is the Id"];
        assert_eq!(extract_tag(&lines, TAG_IGNORE), "@ignore");
        assert!(is_ignored(&lines));
        assert!(!is_ignored(&["@description visible"]));
    }
}
