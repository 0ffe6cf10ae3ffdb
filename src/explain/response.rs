//! MediaWiki query API response shapes.

use serde::Deserialize;
use std::collections::BTreeMap;

/// `action=query&prop=revisions` response.
#[derive(Debug, Default, Deserialize)]
pub struct MediaWikiResponse {
    pub query: Option<Query>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Query {
    /// Keyed by page id; a missing page is keyed `-1` and has no revisions.
    pub pages: Option<BTreeMap<String, Page>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Page {
    #[serde(rename = "pageid")]
    pub page_id: Option<i64>,
    pub ns: Option<i64>,
    pub title: Option<String>,
    /// Present (usually as an empty string) when the page does not exist.
    pub missing: Option<serde_json::Value>,
    pub revisions: Option<Vec<Revision>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Revision {
    /// Wikitext of the revision; `content` in the newer response format.
    #[serde(rename = "*", alias = "content")]
    pub content: Option<String>,
}

impl MediaWikiResponse {
    /// Wikitext of the first revision of the first page, if any.
    pub fn page_content(&self) -> Option<&str> {
        self.query
            .as_ref()?
            .pages
            .as_ref()?
            .values()
            .next()?
            .revisions
            .as_ref()?
            .first()?
            .content
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_of_legacy_format() {
        let response: MediaWikiResponse = serde_json::from_str(
            r#"{"query":{"pages":{"661":{"pageid":661,"ns":0,"title":"74: Hell","revisions":[{"*":"text"}]}}}}"#,
        )
        .expect("valid payload");
        assert_eq!(response.page_content(), Some("text"));
    }

    #[test]
    fn test_content_of_format_version_two() {
        let response: MediaWikiResponse =
            serde_json::from_str(r#"{"query":{"pages":{"1":{"revisions":[{"content":"v2"}]}}}}"#)
                .expect("valid payload");
        assert_eq!(response.page_content(), Some("v2"));
    }

    #[test]
    fn test_missing_page_has_no_content() {
        let response: MediaWikiResponse = serde_json::from_str(
            r#"{"batchcomplete":"","query":{"pages":{"-1":{"ns":0,"title":"9999","missing":""}}}}"#,
        )
        .expect("valid payload");
        let page = response
            .query
            .as_ref()
            .and_then(|q| q.pages.as_ref())
            .and_then(|p| p.get("-1"))
            .expect("page entry");
        assert!(page.missing.is_some());
        assert_eq!(response.page_content(), None);
    }

    #[test]
    fn test_empty_object_has_no_content() {
        let response: MediaWikiResponse = serde_json::from_str("{}").expect("valid payload");
        assert_eq!(response.page_content(), None);
    }
}
