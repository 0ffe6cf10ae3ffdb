//! Table converter - turns one `!` or `|` table line into cells.

use super::{convert_line, ParseState};

/// Kind of cells a table line carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// `! a !! b`
    Header,
    /// `| a || b`
    Data,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            CellKind::Header => "th",
            CellKind::Data => "td",
        }
    }

    fn delimiter(self) -> &'static str {
        match self {
            CellKind::Header => "!!",
            CellKind::Data => "||",
        }
    }
}

/// Converter for table cell lines.
pub struct TableConverter;

impl TableConverter {
    /// Appends every cell of `line` (the text after the leading `!` or `|`).
    ///
    /// Cells are trimmed and resolved as inline markup; an empty line still
    /// yields one empty cell.
    pub fn convert_cells(
        line: &str,
        kind: CellKind,
        out: &mut String,
        state: &mut ParseState<'_>,
    ) {
        let tag = kind.tag();
        for cell in line.split(kind.delimiter()) {
            out.push_str(&format!("<{tag}>"));
            convert_line(cell.trim(), out, state);
            out.push_str(&format!("</{tag}>"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseOptions;

    fn cells(line: &str, kind: CellKind) -> String {
        let options = ParseOptions::default();
        let mut state = ParseState::new(1, &options);
        let mut out = String::new();
        TableConverter::convert_cells(line, kind, &mut out, &mut state);
        out
    }

    #[test]
    fn test_header_cells_split_on_double_bang() {
        assert_eq!(
            cells(" Header 1 !! Header 2", CellKind::Header),
            "<th>Header 1</th><th>Header 2</th>"
        );
    }

    #[test]
    fn test_data_cells_resolve_inline_markup() {
        assert_eq!(
            cells(" '''a''' || b & c", CellKind::Data),
            "<td><b>a</b></td><td>b &amp; c</td>"
        );
    }

    #[test]
    fn test_single_delimiter_does_not_split() {
        assert_eq!(cells(" a | b", CellKind::Data), "<td>a | b</td>");
    }

    #[test]
    fn test_empty_line_yields_one_empty_cell() {
        assert_eq!(cells("", CellKind::Data), "<td></td>");
    }
}
