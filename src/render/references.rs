/// Renders the footnote marker placed inline where a reference occurs.
pub fn footnote_marker(index: usize) -> String {
    format!(
        "<sup id='ref-{index}'><a href='#note-{index}'>[{}]</a></sup>",
        index + 1
    )
}

/// Renders the trailing references list.
///
/// Nothing is emitted when no reference was collected. Each entry links back
/// to its inline marker.
pub fn render_references(refs: &[String]) -> String {
    if refs.is_empty() {
        return String::new();
    }

    let mut out = String::from("<div class='references'><ol>");
    for (i, note) in refs.iter().enumerate() {
        out.push_str(&format!(
            "<li id='note-{i}'><a href='#ref-{i}'>\u{2191}</a><span>{note}</span></li>"
        ));
    }
    out.push_str("</ol></div>");
    out
}
