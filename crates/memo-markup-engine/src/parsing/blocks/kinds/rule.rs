/// Horizontal rule type with owned delimiter constant.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: &'static str = "---";

    /// Only the exact marker counts; `***`, `___` and `- - -` are not rules here.
    pub fn matches(trimmed: &str) -> bool {
        trimmed == Self::MARKER
    }
}
