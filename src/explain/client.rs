//! HTTP client for explainxkcd's MediaWiki API.

use super::explanation_from_response;
use crate::localization::{DefaultLocalization, LocalizationStrategy};
use crate::{ParseOptions, Result, WikiTextToHtml};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default wiki location.
pub const DEFAULT_WIKI_URL: &str = "https://www.explainxkcd.com/";

const API_PATH: &str = "wiki/api.php";

/// Options for [`ExplainClient`].
#[derive(Debug, Clone)]
pub struct ExplainClientOptions {
    /// Wiki root; the API lives at `wiki/api.php` below it, so keep the
    /// trailing slash when pointing at a sub-path.
    pub base_url: Url,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Prebuilt HTTP client. When set, `user_agent` and `timeout` are not
    /// applied to it.
    pub http_client: Option<reqwest::Client>,
    /// Options for converting the fetched wikitext.
    pub parse_options: ParseOptions,
}

impl Default for ExplainClientOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_WIKI_URL).expect("default wiki URL is valid"),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Some(Duration::from_secs(30)),
            http_client: None,
            parse_options: ParseOptions::default(),
        }
    }
}

/// Fetches comic explanations and converts them to HTML.
///
/// Cloning is cheap; clones share the connection pool. A request is cancelled
/// by dropping its future. Failed requests are not retried.
#[derive(Clone)]
pub struct ExplainClient {
    client: reqwest::Client,
    api_url: Url,
    converter: WikiTextToHtml,
    localization: Arc<dyn LocalizationStrategy>,
}

impl ExplainClient {
    /// Creates a client from the given options.
    pub fn new(options: ExplainClientOptions) -> Result<Self> {
        let api_url = options.base_url.join(API_PATH)?;
        let client = match options.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(options.user_agent);
                if let Some(timeout) = options.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Self {
            client,
            api_url,
            converter: WikiTextToHtml::new(options.parse_options),
            localization: Arc::new(DefaultLocalization),
        })
    }

    /// Creates a client for explainxkcd.com with default options.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ExplainClientOptions::default())
    }

    /// Replaces the strategy used to word failure messages.
    pub fn with_localization(mut self, localization: impl LocalizationStrategy + 'static) -> Self {
        self.localization = Arc::new(localization);
        self
    }

    /// Query URL for the page titled `comic_id`, following redirects.
    pub fn request_url(&self, comic_id: u32) -> Url {
        let mut url = self.api_url.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("prop", "revisions")
            .append_pair("rvprop", "content")
            .append_pair("format", "json")
            .append_pair("redirects", "1")
            .append_pair("titles", &comic_id.to_string());
        url
    }

    /// Fetches the explanation of `comic_id` as HTML.
    ///
    /// # Errors
    /// * [`Error::Status`](crate::Error::Status) for a non-success response
    /// * [`Error::Http`](crate::Error::Http) when the request fails
    /// * [`Error::Json`](crate::Error::Json) for an undecodable payload
    /// * [`Error::ExplanationNotFound`](crate::Error::ExplanationNotFound) and
    ///   [`Error::SectionNotFound`](crate::Error::SectionNotFound) from extraction
    pub async fn try_get_explanation(&self, comic_id: u32) -> Result<String> {
        let url = self.request_url(comic_id);
        log::debug!("fetching explanation for comic {comic_id}: {url}");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(crate::Error::Status(status));
        }

        let body = response.text().await?;
        explanation_from_response(&body, comic_id, &self.converter)
    }

    /// Fetches the explanation of `comic_id`, always producing something to
    /// display: the HTML on success, a localized message otherwise.
    pub async fn get_explanation(&self, comic_id: u32) -> String {
        match self.try_get_explanation(comic_id).await {
            Ok(html) => html,
            Err(err) => {
                log::warn!("no explanation for comic {comic_id}: {err}");
                self.localization.describe(&err)
            }
        }
    }
}
