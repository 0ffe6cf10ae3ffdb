//! Converter modules for wikitext to HTML transformation.

mod block;
mod context;
mod heading;
mod inline;
mod table;

use crate::render::render_references;
use crate::ParseOptions;

pub use self::block::BlockContext;
pub use self::context::ParseState;
pub use self::heading::{match_heading, Heading, MAX_HEADING_LEVEL};
pub use self::inline::convert_line;
pub use self::table::{CellKind, TableConverter};

/// Main converter struct that turns wikitext into an HTML fragment.
///
/// The converter itself holds only options; all scanning state lives in the
/// call to [`convert`](Self::convert), so one instance can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct WikiTextToHtml {
    options: ParseOptions,
}

impl WikiTextToHtml {
    /// Creates a new converter with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ParseOptions::default())
    }

    /// Converts wikitext to a sequence of sibling HTML elements.
    ///
    /// # Arguments
    /// * `wikitext` - Raw wikitext, lines separated by `\r`, `\n` or `\r\n`
    /// * `document_id` - Id of the document being converted (the comic number)
    ///
    /// # Returns
    /// The HTML fragment. Malformed markup degrades to escaped text, so this
    /// never fails; empty input gives an empty string.
    pub fn convert(&self, wikitext: &str, document_id: u32) -> String {
        let mut state = ParseState::new(document_id, &self.options);
        let mut blocks = BlockContext::new();
        let mut html = String::with_capacity(wikitext.len());

        for raw_line in wiki_lines(wikitext) {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            Self::convert_block_line(line, &mut blocks, &mut html, &mut state);
        }

        blocks.finish(&mut html);

        log::trace!(
            "converted document {} with {} reference(s)",
            state.document_id(),
            state.reference_count()
        );
        html.push_str(&render_references(state.references()));
        html
    }

    fn convert_block_line(
        line: &str,
        blocks: &mut BlockContext,
        html: &mut String,
        state: &mut ParseState<'_>,
    ) {
        // Bullet points
        if line.starts_with('*') {
            blocks.close_quote(html);
            let level = line.bytes().take_while(|&b| b == b'*').count();
            blocks.set_bullet_level(level, html);
            html.push_str("<li>");
            convert_line(line[level..].trim(), html, state);
            html.push_str("</li>");
            return;
        }

        blocks.close_lists(html);

        // Quotes
        if let Some(rest) = line.strip_prefix(':') {
            blocks.open_quote(html);
            html.push_str("<dd>");
            convert_line(rest.trim(), html, state);
            html.push_str("</dd>");
            return;
        }
        blocks.close_quote(html);

        // Tables
        if let Some(attrs) = line.strip_prefix("{|") {
            html.push_str(&format!("<table {}>", attrs.trim()));
            return;
        }
        if line.starts_with("|-") {
            blocks.start_row(html);
            return;
        }
        if line.starts_with("|}") {
            blocks.close_row(html);
            html.push_str("</table>");
            return;
        }
        if let Some(rest) = line.strip_prefix('!') {
            Self::convert_row(rest, CellKind::Header, blocks, html, state);
            return;
        }
        if let Some(rest) = line.strip_prefix('|') {
            Self::convert_row(rest, CellKind::Data, blocks, html, state);
            return;
        }

        // Paragraphs, or a heading when the whole line is one
        if match_heading(line).is_some() {
            convert_line(line, html, state);
        } else {
            html.push_str("<p>");
            convert_line(line, html, state);
            html.push_str("</p>");
        }
    }

    fn convert_row(
        cells: &str,
        kind: CellKind,
        blocks: &mut BlockContext,
        html: &mut String,
        state: &mut ParseState<'_>,
    ) {
        blocks.ensure_row(html);
        TableConverter::convert_cells(cells, kind, html, state);
        blocks.finish_row(html);
    }
}

/// Splits on `\r\n`, `\r` or `\n`, yielding every line including blank ones.
fn wiki_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(end) => {
                let skip = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                let next = &current[end + skip..];
                rest = Some(next).filter(|t| !t.is_empty());
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
