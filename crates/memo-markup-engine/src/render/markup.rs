use std::fmt::Write as _;

use serde::Serialize;

use crate::parsing::{Block, BlockKind, Document, InlineStyle};

use super::{
    display::StyledText,
    regions::{CodeRegion, Segment, segments},
};

/// Options for the markup renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MarkupOptions {
    /// Wrap the fragment in a complete HTML document for a sandboxed web view.
    pub standalone: bool,
    /// Document title when `standalone`; escaped like any other text.
    pub title: Option<String>,
}

const STYLESHEET: &str = "body{font:-apple-system-body,system-ui,sans-serif;line-height:1.5;margin:16px}\
blockquote{border-left:3px solid #4a90d9;margin:0;padding-left:12px;color:#666;font-style:italic}\
pre{background:#f2f2f7;border:1px solid #d1d1d6;border-radius:8px;padding:12px;overflow-x:auto}\
code{font-family:ui-monospace,monospace}\
p code,li code,h1 code,h2 code,h3 code,blockquote code{background:rgba(128,128,128,.2)}";

/// Renders `doc` as HTML, one element per line (code regions as one `pre`).
///
/// Every piece of source text is escaped before it is wrapped in tags. List
/// items are emitted flat, without a surrounding list element.
pub fn render_markup(doc: &Document, options: &MarkupOptions) -> String {
    let body = segments(doc)
        .iter()
        .map(|segment| match segment {
            Segment::Line(block) => line_element(block),
            Segment::Code(region) => code_element(region),
        })
        .collect::<Vec<_>>()
        .join("\n");

    if options.standalone {
        standalone(&body, options.title.as_deref())
    } else {
        body
    }
}

fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_safe(text)
}

fn line_element(block: &Block) -> String {
    match &block.kind {
        BlockKind::Heading { level } => format!("<h{level}>{}</h{level}>", inline(block)),
        BlockKind::Paragraph => format!("<p>{}</p>", inline(block)),
        BlockKind::BlockQuote => format!("<blockquote>{}</blockquote>", inline(block)),
        BlockKind::UnorderedListItem { .. } => format!("<li>{}</li>", inline(block)),
        BlockKind::OrderedListItem { marker } => format!(
            "<li data-marker=\"{}\">{}</li>",
            escape(marker),
            inline(block)
        ),
        BlockKind::HorizontalRule => "<hr />".to_string(),
        BlockKind::Blank => "<br />".to_string(),
        // Grouped into regions by `segments`.
        BlockKind::CodeFence { .. } | BlockKind::CodeBlockBody => String::new(),
    }
}

fn inline(block: &Block) -> String {
    let mut out = String::new();
    for run in StyledText::from_block(block).runs() {
        let text = escape(&run.text);
        match run.style {
            None => out.push_str(&text),
            Some(InlineStyle::Bold) => {
                let _ = write!(out, "<strong>{text}</strong>");
            }
            Some(InlineStyle::Italic) => {
                let _ = write!(out, "<em>{text}</em>");
            }
            Some(InlineStyle::Code) => {
                let _ = write!(out, "<code>{text}</code>");
            }
        }
    }
    out
}

fn code_element(region: &CodeRegion<'_>) -> String {
    let class = region
        .info
        .map(|info| format!(" class=\"language-{}\"", escape(info)))
        .unwrap_or_default();
    format!("<pre><code{class}>{}</code></pre>", escape(&region.code()))
}

fn standalone(body: &str, title: Option<&str>) -> String {
    let title = title.map(escape).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
<title>{title}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
