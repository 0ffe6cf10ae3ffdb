//! Locating the explanation section inside a full wiki page.

use super::response::MediaWikiResponse;
use crate::{Error, Result, WikiTextToHtml};

const INCOMPLETE_MARKER: &str = "{{incomplete|";
const EXPLANATION_HEADINGS: [&str; 2] = ["== Explanation ==", "==Explanation=="];
const TRANSCRIPT_HEADINGS: [&str; 2] = ["==Transcript==", "== Transcript =="];

/// Returns the trimmed wikitext of the explanation section.
///
/// The section starts on the line after an `{{incomplete|` notice or, when
/// there is none, after the Explanation heading. It ends at the Transcript
/// heading or at the end of the page. Markers match ASCII case-insensitively.
/// An `{{incomplete|` notice on the last line means no start is found; the
/// heading is not tried in that case.
pub fn extract_explanation_section(wikitext: &str) -> Option<&str> {
    let marker = match find_ignore_ascii_case(wikitext, INCOMPLETE_MARKER, 0) {
        Some(index) => index,
        None => find_first(wikitext, &EXPLANATION_HEADINGS, 0)?,
    };
    let start = wikitext[marker..].find('\n').map(|offset| marker + offset + 1)?;
    let end = find_first(wikitext, &TRANSCRIPT_HEADINGS, start).unwrap_or(wikitext.len());

    Some(wikitext[start..end].trim())
}

/// Decodes a MediaWiki API payload and converts its explanation section.
pub fn explanation_from_response(
    json: &str,
    comic_id: u32,
    converter: &WikiTextToHtml,
) -> Result<String> {
    let response: Option<MediaWikiResponse> = serde_json::from_str(json)?;
    let content = response
        .as_ref()
        .and_then(MediaWikiResponse::page_content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(Error::ExplanationNotFound)?;

    let section = extract_explanation_section(content).ok_or(Error::SectionNotFound)?;
    log::debug!(
        "comic {comic_id}: explanation section is {} of {} bytes",
        section.len(),
        content.len()
    );
    Ok(converter.convert(section, comic_id))
}

/// Tries each needle in order, returning the position of the first one found.
fn find_first(haystack: &str, needles: &[&str], from: usize) -> Option<usize> {
    needles
        .iter()
        .find_map(|needle| find_ignore_ascii_case(haystack, needle, from))
}

fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack
        .as_bytes()
        .get(from..)?
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|position| position + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_between_headings() {
        let page = "intro\n== Explanation ==\nBODY\n== Transcript ==\ntranscript";
        assert_eq!(extract_explanation_section(page), Some("BODY"));
    }

    #[test]
    fn test_compact_headings_and_case() {
        let page = "==EXPLANATION==\r\n body \r\n==transcript==\nleak";
        assert_eq!(extract_explanation_section(page), Some("body"));
    }

    #[test]
    fn test_incomplete_notice_takes_precedence() {
        let page = "==Explanation==\n{{incomplete|Needs more}}\nBODY\n==Transcript==";
        assert_eq!(extract_explanation_section(page), Some("BODY"));
    }

    #[test]
    fn test_incomplete_notice_on_last_line_has_no_start() {
        let page = "==Explanation==\nBODY\n{{Incomplete|x}}";
        assert_eq!(extract_explanation_section(page), None);
    }

    #[test]
    fn test_missing_transcript_runs_to_end() {
        let page = "== Explanation ==\nfirst\n\nsecond\n";
        assert_eq!(extract_explanation_section(page), Some("first\n\nsecond"));
    }

    #[test]
    fn test_transcript_before_start_is_ignored() {
        let page = "==Transcript==\nold\n== Explanation ==\nBODY";
        assert_eq!(extract_explanation_section(page), Some("BODY"));
    }

    #[test]
    fn test_no_markers() {
        assert_eq!(extract_explanation_section("just a page"), None);
        assert_eq!(extract_explanation_section("== Explanation =="), None);
    }

    #[test]
    fn test_find_ignore_ascii_case_past_end() {
        assert_eq!(find_ignore_ascii_case("abc", "b", 5), None);
        assert_eq!(find_ignore_ascii_case("abcB", "b", 2), Some(3));
        assert_eq!(find_ignore_ascii_case("ab", "abc", 0), None);
    }

    #[test]
    fn test_response_without_section_start() {
        let json = r#"{"query":{"pages":{"1":{"revisions":[{"*":"no headings here"}]}}}}"#;
        let result = explanation_from_response(json, 1, &WikiTextToHtml::with_defaults());
        assert!(matches!(result, Err(Error::SectionNotFound)));
    }

    #[test]
    fn test_blank_content_is_not_found() {
        let json = r#"{"query":{"pages":{"1":{"revisions":[{"*":"  \n "}]}}}}"#;
        let result = explanation_from_response(json, 1, &WikiTextToHtml::with_defaults());
        assert!(matches!(result, Err(Error::ExplanationNotFound)));
    }

    #[test]
    fn test_null_payload_is_not_found() {
        let result = explanation_from_response("null", 1, &WikiTextToHtml::with_defaults());
        assert!(matches!(result, Err(Error::ExplanationNotFound)));
    }

    #[test]
    fn test_invalid_json() {
        let result = explanation_from_response("<html>", 1, &WikiTextToHtml::with_defaults());
        assert!(matches!(result, Err(Error::Json(_))));
    }
}
