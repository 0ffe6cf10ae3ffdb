//! Explanation extraction: slices the "Explanation" section out of an
//! explainxkcd page and converts it.

mod client;
mod response;
mod section;

pub use self::client::{ExplainClient, ExplainClientOptions, DEFAULT_WIKI_URL};
pub use self::response::{MediaWikiResponse, Page, Query, Revision};
pub use self::section::{explanation_from_response, extract_explanation_section};
