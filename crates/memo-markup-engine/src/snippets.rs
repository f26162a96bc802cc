//! Markup snippets inserted by the editor toolbar.
//!
//! Insertion happens at the caret rather than at the end of the note, and the
//! caret lands where the user types next (between paired delimiters, on the
//! empty line of a code block), so the live buffer never jumps.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Snippet {
    Heading1,
    Heading2,
    Heading3,
    Bold,
    Italic,
    Code,
    Link,
    Image,
    BulletItem,
    NumberedItem,
    Quote,
    CodeBlock,
    Rule,
}

/// Text after a snippet insertion and where the caret goes, as a byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetEdit {
    pub text: String,
    pub caret: usize,
}

impl Snippet {
    pub const ALL: [Snippet; 13] = [
        Snippet::Heading1,
        Snippet::Heading2,
        Snippet::Heading3,
        Snippet::Bold,
        Snippet::Italic,
        Snippet::Code,
        Snippet::Link,
        Snippet::Image,
        Snippet::BulletItem,
        Snippet::NumberedItem,
        Snippet::Quote,
        Snippet::CodeBlock,
        Snippet::Rule,
    ];

    /// The inserted text. Link and image only get their opening syntax.
    pub fn template(self) -> &'static str {
        match self {
            Snippet::Heading1 => "# ",
            Snippet::Heading2 => "## ",
            Snippet::Heading3 => "### ",
            Snippet::Bold => "****",
            Snippet::Italic => "**",
            Snippet::Code => "``",
            Snippet::Link => "[](",
            Snippet::Image => "![](",
            Snippet::BulletItem => "- ",
            Snippet::NumberedItem => "1. ",
            Snippet::Quote => "> ",
            Snippet::CodeBlock => "```\n\n```",
            Snippet::Rule => "\n---\n",
        }
    }

    /// Caret position within [`Snippet::template`] after insertion.
    pub fn caret_offset(self) -> usize {
        match self {
            Snippet::Bold => 2,
            Snippet::Italic | Snippet::Code | Snippet::Link => 1,
            Snippet::Image => 2,
            Snippet::CodeBlock => 4,
            _ => self.template().len(),
        }
    }

    /// Short toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Snippet::Heading1 => "H1",
            Snippet::Heading2 => "H2",
            Snippet::Heading3 => "H3",
            Snippet::Bold => "Bold",
            Snippet::Italic => "Italic",
            Snippet::Code => "Code",
            Snippet::Link => "Link",
            Snippet::Image => "Image",
            Snippet::BulletItem => "List",
            Snippet::NumberedItem => "Numbered",
            Snippet::Quote => "Quote",
            Snippet::CodeBlock => "Code block",
            Snippet::Rule => "Rule",
        }
    }

    /// Inserts the snippet at `caret` (a byte offset, clamped to the text and
    /// moved back onto a char boundary).
    pub fn apply(self, text: &str, caret: usize) -> SnippetEdit {
        let mut at = caret.min(text.len());
        while !text.is_char_boundary(at) {
            at -= 1;
        }
        let template = self.template();
        let mut out = String::with_capacity(text.len() + template.len());
        out.push_str(&text[..at]);
        out.push_str(template);
        out.push_str(&text[at..]);
        SnippetEdit {
            text: out,
            caret: at + self.caret_offset(),
        }
    }
}
