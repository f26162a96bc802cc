use crate::parsing::{BlockKind, Document};

use super::{
    display::StyledText,
    regions::{Segment, segments},
};

/// Titles longer than this many characters are cut and get an ellipsis.
const TITLE_MAX_CHARS: usize = 20;

impl Document {
    /// Title for note lists: the text of a leading `# ` heading, or else the
    /// first non-blank line, shortened. `None` for blank documents.
    pub fn title(&self) -> Option<String> {
        let first = self.blocks.iter().find(|b| b.kind != BlockKind::Blank)?;

        if first.kind == (BlockKind::Heading { level: 1 }) {
            return Some(StyledText::from_block(first).text);
        }

        let line = first.text.trim();
        if line.chars().count() > TITLE_MAX_CHARS {
            let cut: String = line.chars().take(TITLE_MAX_CHARS).collect();
            Some(format!("{cut}…"))
        } else {
            Some(line.to_string())
        }
    }

    /// Readable text without markup: prefixes and inline delimiters removed,
    /// code kept verbatim, fences and rules dropped. Lines joined with `\n`.
    pub fn plain_text(&self) -> String {
        segments(self)
            .iter()
            .map(|segment| match segment {
                Segment::Code(region) => region.code(),
                Segment::Line(block) => match block.kind {
                    BlockKind::Blank | BlockKind::HorizontalRule => String::new(),
                    _ => StyledText::from_block(block).text,
                },
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
