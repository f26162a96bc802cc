//! UniFFI bindings for memo-markup mobile apps
//!
//! Every function takes the whole note text and returns freshly rendered
//! output. There are no handles and nothing is kept between calls, so hosts
//! can call from any thread. Offsets crossing the boundary are UTF-16 code
//! units, the unit of both Apple and Android text widgets.

use memo_markup_config::Config;
use memo_markup_engine::{
    self as engine, DisplayBlock, InlineStyle, ListMarker, OffsetUnit, Snippet, StyledText,
    render::offsets::{OffsetConverter, to_byte_offset},
};

uniffi::setup_scaffolding!();

/// Offsets past `u32::MAX` saturate; hosts never hold texts that large.
fn to_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

// ============ DTOs ============

/// Renderer settings a host can keep and pass back on every call.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct RenderOptionsDto {
    /// Height of the spacer a blank line renders as, in points
    pub spacer_height: f32,
    /// Wrap markup output in a complete HTML document
    pub standalone_markup: bool,
}

impl RenderOptionsDto {
    fn from_config(config: &Config) -> Self {
        Self {
            spacer_height: config.spacer_height,
            standalone_markup: config.standalone_markup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum InlineStyleDto {
    Bold,
    Italic,
    Code,
}

impl From<InlineStyle> for InlineStyleDto {
    fn from(style: InlineStyle) -> Self {
        match style {
            InlineStyle::Bold => Self::Bold,
            InlineStyle::Italic => Self::Italic,
            InlineStyle::Code => Self::Code,
        }
    }
}

/// A styled range of a display block's text, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct TextSpanDto {
    pub start: u32,
    pub end: u32,
    pub style: InlineStyleDto,
}

/// A single renderable block.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct DisplayBlockDto {
    /// Block type: "heading", "paragraph", "quote", "list_item", "divider",
    /// "spacer" or "code_block"
    pub kind: String,
    /// Heading level (1-3) if this is a heading, 0 otherwise
    pub heading_level: u8,
    /// Marker as typed ("1.") for numbered items, "•" for bullets
    pub list_marker: Option<String>,
    /// Spacer height, 0 for other kinds
    pub height: f32,
    /// Info string after the opening fence of a code block
    pub code_info: Option<String>,
    /// Text without markup; verbatim code for code blocks
    pub text: String,
    pub spans: Vec<TextSpanDto>,
}

impl DisplayBlockDto {
    fn empty(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            heading_level: 0,
            list_marker: None,
            height: 0.0,
            code_info: None,
            text: String::new(),
            spans: vec![],
        }
    }

    fn with_text(kind: &str, text: &StyledText) -> Self {
        let mut conv = OffsetConverter::new(&text.text, OffsetUnit::Utf16);
        let spans = text
            .spans
            .iter()
            .map(|span| TextSpanDto {
                start: to_u32(conv.convert(span.range.start)),
                end: to_u32(conv.convert(span.range.end)),
                style: span.style.into(),
            })
            .collect();
        Self {
            text: text.text.clone(),
            spans,
            ..Self::empty(kind)
        }
    }

    fn from_engine(block: DisplayBlock) -> Self {
        match block {
            DisplayBlock::Heading { level, text } => Self {
                heading_level: level,
                ..Self::with_text("heading", &text)
            },
            DisplayBlock::Paragraph { text } => Self::with_text("paragraph", &text),
            DisplayBlock::Quote { text } => Self::with_text("quote", &text),
            DisplayBlock::ListItem { marker, text } => Self {
                list_marker: Some(match marker {
                    ListMarker::Bullet => "•".to_string(),
                    ListMarker::Number(number) => number,
                }),
                ..Self::with_text("list_item", &text)
            },
            DisplayBlock::Divider => Self::empty("divider"),
            DisplayBlock::Spacer { height } => Self {
                height,
                ..Self::empty("spacer")
            },
            DisplayBlock::CodeBlock { info, code } => Self {
                code_info: info,
                text: code,
                ..Self::empty("code_block")
            },
        }
    }
}

/// Attributes for one range of the note text, in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct StyledRunDto {
    pub start: u32,
    pub end: u32,
    /// Heading level (1-3) or 0
    pub heading_level: u8,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub quote: bool,
    pub list_item: bool,
    pub code_block: bool,
    pub rule: bool,
    /// Markup characters; usually dimmed
    pub syntax: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum SnippetDto {
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

impl From<SnippetDto> for Snippet {
    fn from(snippet: SnippetDto) -> Self {
        match snippet {
            SnippetDto::Heading1 => Snippet::Heading1,
            SnippetDto::Heading2 => Snippet::Heading2,
            SnippetDto::Heading3 => Snippet::Heading3,
            SnippetDto::Bold => Snippet::Bold,
            SnippetDto::Italic => Snippet::Italic,
            SnippetDto::Code => Snippet::Code,
            SnippetDto::Link => Snippet::Link,
            SnippetDto::Image => Snippet::Image,
            SnippetDto::BulletItem => Snippet::BulletItem,
            SnippetDto::NumberedItem => Snippet::NumberedItem,
            SnippetDto::Quote => Snippet::Quote,
            SnippetDto::CodeBlock => Snippet::CodeBlock,
            SnippetDto::Rule => Snippet::Rule,
        }
    }
}

/// Note text after a toolbar insertion, with the caret in UTF-16 code units.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct SnippetEditDto {
    pub text: String,
    pub caret: u32,
}

// ============ Standalone Functions ============

#[uniffi::export]
pub fn default_render_options() -> RenderOptionsDto {
    RenderOptionsDto::from_config(&Config::default())
}

/// Parse settings stored by the host in the config file format.
#[uniffi::export]
pub fn render_options_from_toml(toml: String) -> Result<RenderOptionsDto, FfiError> {
    let config = Config::from_toml_str(&toml).map_err(|e| FfiError::InvalidConfig {
        reason: e.to_string(),
    })?;
    Ok(RenderOptionsDto::from_config(&config))
}

#[uniffi::export]
pub fn render_display_blocks(text: String, options: RenderOptionsDto) -> Vec<DisplayBlockDto> {
    let display = engine::DisplayOptions {
        spacer_height: options.spacer_height,
    };
    engine::render_blocks(&engine::parse(&text), &display)
        .into_iter()
        .map(DisplayBlockDto::from_engine)
        .collect()
}

/// Escaped HTML for a web view. Standalone documents are titled after the note.
#[uniffi::export]
pub fn render_markup(text: String, options: RenderOptionsDto) -> String {
    let doc = engine::parse(&text);
    let markup = engine::MarkupOptions {
        standalone: options.standalone_markup,
        title: doc.title(),
    };
    engine::render_markup(&doc, &markup)
}

#[uniffi::export]
pub fn render_styled_runs(text: String) -> Vec<StyledRunDto> {
    engine::render_styled_runs(&engine::parse(&text), OffsetUnit::Utf16)
        .into_iter()
        .map(|run| {
            let a = run.attributes;
            StyledRunDto {
                start: to_u32(run.range.start),
                end: to_u32(run.range.end),
                heading_level: a.heading.unwrap_or(0),
                bold: a.bold,
                italic: a.italic,
                code: a.code,
                quote: a.quote,
                list_item: a.list_item,
                code_block: a.code_block,
                rule: a.rule,
                syntax: a.syntax,
            }
        })
        .collect()
}

#[uniffi::export]
pub fn document_title(text: String) -> Option<String> {
    engine::parse(&text).title()
}

/// Insert a toolbar snippet at the caret. The caret is clamped to the text.
#[uniffi::export]
pub fn apply_snippet(text: String, caret_utf16: u32, snippet: SnippetDto) -> SnippetEditDto {
    let byte = to_byte_offset(&text, OffsetUnit::Utf16, caret_utf16 as usize);
    let edit = Snippet::from(snippet).apply(&text, byte);
    let caret = OffsetConverter::new(&edit.text, OffsetUnit::Utf16).convert(edit.caret);
    SnippetEditDto {
        text: edit.text,
        caret: to_u32(caret),
    }
}

/// Short toolbar button label for a snippet.
#[uniffi::export]
pub fn snippet_label(snippet: SnippetDto) -> String {
    Snippet::from(snippet).label().to_string()
}
