//! Block context tracked while scanning lines.

/// Open list, quote and table-row state between lines of one document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlockContext {
    bullet_level: usize,
    in_quote: bool,
    in_table_row: bool,
}

impl BlockContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bullet_level(&self) -> usize {
        self.bullet_level
    }

    pub fn in_table_row(&self) -> bool {
        self.in_table_row
    }

    /// Opens or closes `<ul>` tags until `level` lists are open.
    pub fn set_bullet_level(&mut self, level: usize, out: &mut String) {
        while self.bullet_level < level {
            out.push_str("<ul>");
            self.bullet_level += 1;
        }
        while self.bullet_level > level {
            out.push_str("</ul>");
            self.bullet_level -= 1;
        }
    }

    pub fn close_lists(&mut self, out: &mut String) {
        self.set_bullet_level(0, out);
    }

    pub fn open_quote(&mut self, out: &mut String) {
        if !self.in_quote {
            out.push_str("<dl>");
            self.in_quote = true;
        }
    }

    pub fn close_quote(&mut self, out: &mut String) {
        if self.in_quote {
            out.push_str("</dl>");
            self.in_quote = false;
        }
    }

    /// `|-`: ends the current row, if any, and starts a new one.
    pub fn start_row(&mut self, out: &mut String) {
        self.close_row(out);
        out.push_str("<tr>");
        self.in_table_row = true;
    }

    /// Opens a row for a cell line unless `|-` already did.
    pub fn ensure_row(&mut self, out: &mut String) {
        if !self.in_table_row {
            out.push_str("<tr>");
        }
    }

    /// Closes the row after a cell line, whether or not it was open before.
    pub fn finish_row(&mut self, out: &mut String) {
        out.push_str("</tr>");
        self.in_table_row = false;
    }

    pub fn close_row(&mut self, out: &mut String) {
        if self.in_table_row {
            out.push_str("</tr>");
            self.in_table_row = false;
        }
    }

    /// Closes everything still open at the end of the document.
    pub fn finish(&mut self, out: &mut String) {
        self.close_lists(out);
        self.close_quote(out);
        self.close_row(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_level_moves_both_ways() {
        let mut ctx = BlockContext::new();
        let mut out = String::new();

        ctx.set_bullet_level(3, &mut out);
        assert_eq!(out, "<ul><ul><ul>");
        assert_eq!(ctx.bullet_level(), 3);

        out.clear();
        ctx.set_bullet_level(1, &mut out);
        assert_eq!(out, "</ul></ul>");
        assert_eq!(ctx.bullet_level(), 1);
    }

    #[test]
    fn test_quote_open_is_idempotent() {
        let mut ctx = BlockContext::new();
        let mut out = String::new();
        ctx.open_quote(&mut out);
        ctx.open_quote(&mut out);
        ctx.close_quote(&mut out);
        ctx.close_quote(&mut out);
        assert_eq!(out, "<dl></dl>");
    }

    #[test]
    fn test_start_row_closes_previous_row() {
        let mut ctx = BlockContext::new();
        let mut out = String::new();
        ctx.start_row(&mut out);
        ctx.start_row(&mut out);
        assert_eq!(out, "<tr></tr><tr>");
        assert!(ctx.in_table_row());
    }

    #[test]
    fn test_finish_closes_in_order() {
        let mut ctx = BlockContext::new();
        let mut out = String::new();
        ctx.set_bullet_level(2, &mut out);
        ctx.start_row(&mut out);
        out.clear();

        ctx.finish(&mut out);
        assert_eq!(out, "</ul></ul></tr>");
        assert_eq!(ctx, BlockContext::default());
    }
}
