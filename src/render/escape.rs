/// Escapes the five HTML-significant characters so `value` can be used as
/// element text or a quoted attribute value.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Percent-encodes a URI data segment.
///
/// Only the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`) is left as is.
/// Everything else, including `/`, `'` and spaces, is encoded from its UTF-8
/// bytes as uppercase `%XX`.
pub fn escape_uri_data(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
