//! Inline markup resolution.
//!
//! Every rule is an independent regex paired with a renderer. All matches of
//! all rules are collected for a span, stably sorted by start offset and
//! consumed left to right; a match that starts inside an already consumed
//! match is dropped. When two rules match at the same offset, the rule listed
//! first in [`RULES`] wins.

use super::heading::match_heading;
use super::ParseState;
use crate::render::{escape_html, escape_uri_data};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

type RenderFn = fn(&Captures<'_>, &mut String, &mut ParseState<'_>);

/// A markup pattern and the function that turns its match into HTML.
struct InlineRule {
    name: &'static str,
    regex: Regex,
    render: RenderFn,
}

impl InlineRule {
    fn new(name: &'static str, pattern: &str, render: RenderFn) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid inline pattern for {name}: {e}"));
        Self {
            name,
            regex,
            render,
        }
    }
}

/// A match waiting to be merged into the output.
struct MatchInfo<'h> {
    captures: Captures<'h>,
    rule: &'static InlineRule,
}

impl MatchInfo<'_> {
    fn start(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.start())
    }

    fn end(&self) -> usize {
        self.captures.get(0).map_or(0, |m| m.end())
    }
}

// Order matters: it breaks ties between matches starting at the same offset.
static RULES: Lazy<Vec<InlineRule>> = Lazy::new(|| {
    vec![
        InlineRule::new(
            "comic link",
            r"\[\[([0-9]+): ([^\]|]+)(?:\|[^\]]+)?\]\]",
            render_comic_link,
        ),
        InlineRule::new(
            "wiki link",
            r"\[\[([^\]|]+)(?:\|([^\]]+))?\]\]",
            render_wiki_link,
        ),
        InlineRule::new(
            "wikipedia link",
            r"\{\{[wW]\|([^|}]+)(?:\|([^}]+))?\}\}",
            render_wikipedia_link,
        ),
        InlineRule::new(
            "external link",
            r"\[(https?://[^ ]+) ([^\]]+)\]",
            render_external_link,
        ),
        InlineRule::new(
            "bare external link",
            r"\[(https?://[^\]]+)\]",
            render_bare_external_link,
        ),
        InlineRule::new("reference", r"<ref>(.+?)</ref>", render_reference),
        InlineRule::new("bold", r"'''(.+?)'''", render_bold),
        InlineRule::new("italic", r"''(.+?)''", render_italic),
    ]
});

/// Converts one span of wikitext to HTML, appending to `out`.
///
/// A span that is entirely a heading becomes `<hN>`; anything else is
/// resolved against the inline rules. Text outside any match is escaped.
pub fn convert_line(line: &str, out: &mut String, state: &mut ParseState<'_>) {
    if line.is_empty() {
        return;
    }

    if let Some(heading) = match_heading(line) {
        let level = heading.level();
        out.push_str(&format!("<h{level}>"));
        convert_line(heading.content, out, state);
        out.push_str(&format!("</h{level}>"));
        return;
    }

    let mut matches: Vec<MatchInfo<'_>> = RULES
        .iter()
        .flat_map(|rule| {
            rule.regex
                .captures_iter(line)
                .map(move |captures| MatchInfo { captures, rule })
        })
        .collect();
    // `sort_by_key` is stable, which keeps rule order for equal offsets.
    matches.sort_by_key(MatchInfo::start);

    let mut cursor = 0;
    for info in &matches {
        if info.start() < cursor {
            log::trace!("dropping overlapped {} at {}", info.rule.name, info.start());
            continue;
        }
        out.push_str(&escape_html(&line[cursor..info.start()]));
        (info.rule.render)(&info.captures, out, state);
        cursor = info.end();
    }

    if cursor < line.len() {
        out.push_str(&escape_html(&line[cursor..]));
    }
}

fn group<'h>(captures: &Captures<'h>, index: usize) -> &'h str {
    captures.get(index).map_or("", |m| m.as_str())
}

fn optional_group<'h>(captures: &Captures<'h>, index: usize) -> Option<&'h str> {
    captures
        .get(index)
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

fn render_nested(
    open: &str,
    close: &str,
    inner: &str,
    out: &mut String,
    state: &mut ParseState<'_>,
) {
    out.push_str(open);
    convert_line(inner, out, state);
    out.push_str(close);
}

fn render_comic_link(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    let number = group(captures, 1);
    let title = group(captures, 2);
    out.push_str(&format!(
        "<a href=\"{}{number}\">{number}: {}</a>",
        state.options().comic_base,
        escape_html(title)
    ));
}

// [[Display|Target]]: the first group is shown, the second one is linked.
fn render_wiki_link(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    let display = group(captures, 1);
    let target = optional_group(captures, 2).unwrap_or(display);
    let open = format!(
        "<a href=\"{}{}\" title=\"{}\">",
        state.options().wiki_base,
        escape_uri_data(target),
        escape_html(target)
    );
    render_nested(&open, "</a>", display, out, state);
}

fn render_wikipedia_link(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    let target = group(captures, 1);
    let display = optional_group(captures, 2).unwrap_or(target);
    let open = format!(
        "<a href=\"{}{}\" title=\"wikipedia:{}\">",
        state.options().wikipedia_base,
        escape_uri_data(target),
        escape_html(target)
    );
    render_nested(&open, "</a>", display, out, state);
}

fn render_external_link(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    let open = format!(
        "<a rel=\"nofollow\" href=\"{}\">",
        escape_html(group(captures, 1))
    );
    render_nested(&open, "</a>", group(captures, 2), out, state);
}

fn render_bare_external_link(
    captures: &Captures<'_>,
    out: &mut String,
    state: &mut ParseState<'_>,
) {
    let marker = state.register_external_link(&escape_html(group(captures, 1)));
    out.push_str(&marker);
}

fn render_reference(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    let mut body = String::new();
    convert_line(group(captures, 1), &mut body, state);
    let marker = state.register_reference(body);
    out.push_str(&marker);
}

fn render_bold(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    render_nested("<b>", "</b>", group(captures, 1), out, state);
}

fn render_italic(captures: &Captures<'_>, out: &mut String, state: &mut ParseState<'_>) {
    render_nested("<i>", "</i>", group(captures, 1), out, state);
}
