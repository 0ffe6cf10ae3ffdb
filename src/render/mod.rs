mod escape;
mod references;

pub use escape::{escape_html, escape_uri_data};
pub use references::{footnote_marker, render_references};
