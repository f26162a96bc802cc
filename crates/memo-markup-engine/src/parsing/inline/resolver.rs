use crate::parsing::span::Span;

use super::{
    cursor::Cursor,
    kinds::Italic,
    types::{InlineSpan, InlineStyle},
};

/// Resolves bold, code and italic spans in one block's content.
///
/// # Returns
/// Spans sorted by start offset and pairwise non-overlapping, with offsets relative
/// to `text`. Unterminated delimiters and empty content (`****`, ``` `` ```) yield
/// no span; their characters stay plain text.
///
/// # Precedence
/// Passes run in [`InlineStyle::PRIORITY`] order. Each pass only scans regions no
/// earlier pass has claimed, and a match never crosses a claimed region.
pub fn resolve_spans(text: &str) -> Vec<InlineSpan> {
    let mut claimed: Vec<InlineSpan> = vec![];

    for style in InlineStyle::PRIORITY {
        let mut found = vec![];
        for gap in unclaimed(text.len(), &claimed) {
            let cur = Cursor::new(&text[gap.range()], gap.start);
            match style {
                InlineStyle::Italic => scan_italic(cur, &mut found),
                _ => scan_delimited(cur, style, &mut found),
            }
        }
        claimed.extend(found);
        claimed.sort_by_key(|s| s.span.start);
    }

    claimed
}

/// Regions of `[0, len)` not covered by any claimed span. `claimed` must be sorted.
fn unclaimed(len: usize, claimed: &[InlineSpan]) -> Vec<Span> {
    let mut gaps = vec![];
    let mut at = 0;
    for c in claimed {
        if c.span.start > at {
            gaps.push(Span::new(at, c.span.start));
        }
        at = at.max(c.span.end);
    }
    if len > at {
        gaps.push(Span::new(at, len));
    }
    gaps
}

/// Leftmost-first, shortest matches of `D(.+?)D` for the style's delimiter `D`.
fn scan_delimited(mut cur: Cursor<'_>, style: InlineStyle, out: &mut Vec<InlineSpan>) {
    let delim = style.delimiter();

    while !cur.eof() {
        if cur.starts_with(delim)
            && let Some(end) = close_delimited(&cur, delim)
        {
            out.push(InlineSpan::new(cur.pos(), cur.base + end, style));
            cur.jump_to(end);
            continue;
        }
        cur.bump();
    }
}

/// Local end index of a delimited span opening at the cursor, if it closes.
fn close_delimited(cur: &Cursor<'_>, delim: &str) -> Option<usize> {
    let content_start = cur.i + delim.len();
    // At least one char of content.
    let search_from = content_start + cur.char_len_at(content_start)?;
    let close = cur.s.get(search_from..)?.find(delim)?;
    Some(search_from + close + delim.len())
}

/// Leftmost-first, shortest matches of a single `*…*` where neither delimiter
/// touches another `*` inside the scanned region.
fn scan_italic(mut cur: Cursor<'_>, out: &mut Vec<InlineSpan>) {
    while !cur.eof() {
        if is_lone_star(&cur, cur.i)
            && let Some(end) = close_italic(&cur)
        {
            out.push(InlineSpan::new(cur.pos(), cur.base + end, InlineStyle::Italic));
            cur.jump_to(end);
            continue;
        }
        cur.bump();
    }
}

fn close_italic(cur: &Cursor<'_>) -> Option<usize> {
    let content_start = cur.i + Italic::MARKER.len();
    let mut at = content_start + cur.char_len_at(content_start)?;
    while at < cur.s.len() {
        if is_lone_star(cur, at) {
            return Some(at + Italic::MARKER.len());
        }
        at += cur.char_len_at(at)?;
    }
    None
}

fn is_lone_star(cur: &Cursor<'_>, at: usize) -> bool {
    cur.byte_at(at) == Some(Italic::STAR)
        && cur.byte_before(at) != Some(Italic::STAR)
        && cur.byte_at(at + 1) != Some(Italic::STAR)
}
