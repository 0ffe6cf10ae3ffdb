use crate::render::footnote_marker;
use crate::ParseOptions;

/// State carried through one conversion for shared mutable data.
///
/// A fresh context is created for every call to
/// [`WikiTextToHtml::convert`](super::WikiTextToHtml::convert), so reference
/// numbering never leaks between documents.
pub struct ParseState<'a> {
    document_id: u32,
    options: &'a ParseOptions,
    ref_counter: usize,
    refs: Vec<String>,
}

impl<'a> ParseState<'a> {
    pub fn new(document_id: u32, options: &'a ParseOptions) -> Self {
        Self {
            document_id,
            options,
            ref_counter: 0,
            refs: Vec::new(),
        }
    }

    pub fn document_id(&self) -> u32 {
        self.document_id
    }

    pub fn options(&self) -> &ParseOptions {
        self.options
    }

    /// Records a bare external link as a footnote and returns its marker.
    ///
    /// The index is taken before the note is stored.
    pub fn register_external_link(&mut self, escaped_url: &str) -> String {
        let index = self.next_index();
        self.refs.push(format!("External link: {escaped_url}"));
        footnote_marker(index)
    }

    /// Records an already rendered `<ref>` body and returns its marker.
    ///
    /// The body has to be rendered before calling this, since nested bare
    /// links inside it claim their own indices first.
    pub fn register_reference(&mut self, body_html: String) -> String {
        self.refs.push(body_html);
        let index = self.next_index();
        footnote_marker(index)
    }

    pub fn reference_count(&self) -> usize {
        self.refs.len()
    }

    pub fn references(&self) -> &[String] {
        &self.refs
    }

    pub fn into_references(self) -> Vec<String> {
        self.refs
    }

    fn next_index(&mut self) -> usize {
        let index = self.ref_counter;
        self.ref_counter += 1;
        index
    }
}
