//! Localization strategy for user-facing explanation messages.

use crate::Error;

/// Strategy for wording the messages shown instead of an explanation.
pub trait LocalizationStrategy: Send + Sync {
    /// The wiki answered with a non-success status.
    fn network_error(&self) -> String;

    /// The wiki has no page, or an empty page, for the comic.
    fn explanation_not_found(&self) -> String;

    /// The page exists but has no recognizable explanation section.
    fn section_not_found(&self) -> String;

    /// Transport or decoding failed; `detail` is the underlying message.
    fn fetch_failed(&self, detail: &str) -> String;

    /// Maps an extraction error to the message to display.
    fn describe(&self, error: &Error) -> String {
        match error {
            Error::Status(_) => self.network_error(),
            Error::ExplanationNotFound => self.explanation_not_found(),
            Error::SectionNotFound => self.section_not_found(),
            other => self.fetch_failed(&other.to_string()),
        }
    }
}

/// English messages.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultLocalization;

impl LocalizationStrategy for DefaultLocalization {
    fn network_error(&self) -> String {
        "Could not find an explanation for this comic (network error).".to_string()
    }

    fn explanation_not_found(&self) -> String {
        "Could not find an explanation for this comic.".to_string()
    }

    fn section_not_found(&self) -> String {
        "Could not find the start of the explanation section.".to_string()
    }

    fn fetch_failed(&self, detail: &str) -> String {
        format!("Error fetching or parsing explanation: {detail}")
    }
}
