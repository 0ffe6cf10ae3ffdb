//! # xkcd-wikitext
//!
//! Converts explainxkcd.com wikitext into HTML fragments, and extracts the
//! "Explanation" section of a comic's wiki page.
//!
//! ## Example
//!
//! ```
//! use xkcd_wikitext::{ParseOptions, WikiTextToHtml};
//!
//! let converter = WikiTextToHtml::new(ParseOptions::default());
//! let html = converter.convert("'''Bold''' and [[123: Comic Title]]", 123);
//! assert_eq!(
//!     html,
//!     "<p><b>Bold</b> and <a href=\"https://xkcd.com/123\">123: Comic Title</a></p>"
//! );
//! ```

pub mod converter;
pub mod error;
pub mod explain;
pub mod localization;
pub mod render;

pub use converter::WikiTextToHtml;
pub use error::{Error, Result};
pub use explain::{
    explanation_from_response, extract_explanation_section, ExplainClient, ExplainClientOptions,
};
pub use localization::{DefaultLocalization, LocalizationStrategy};

/// Default target for numbered comic links.
pub const DEFAULT_COMIC_BASE: &str = "https://xkcd.com/";
/// Default target for `[[wiki links]]`.
pub const DEFAULT_WIKI_BASE: &str = "https://www.explainxkcd.com/wiki/index.php/";
/// Default target for `{{w|...}}` links.
pub const DEFAULT_WIKIPEDIA_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Options for wikitext to HTML conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Prefix for `[[123: Title]]` links; the comic number is appended.
    pub comic_base: String,
    /// Prefix for internal wiki links; the escaped page name is appended.
    pub wiki_base: String,
    /// Prefix for Wikipedia shorthand links; the escaped article is appended.
    pub wikipedia_base: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            comic_base: DEFAULT_COMIC_BASE.to_string(),
            wiki_base: DEFAULT_WIKI_BASE.to_string(),
            wikipedia_base: DEFAULT_WIKIPEDIA_BASE.to_string(),
        }
    }
}

/// Converts `wikitext` with the default options.
///
/// Shorthand for `WikiTextToHtml::with_defaults().convert(wikitext, document_id)`.
pub fn parse(wikitext: &str, document_id: u32) -> String {
    WikiTextToHtml::with_defaults().convert(wikitext, document_id)
}
