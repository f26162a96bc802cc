/// Code fence type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the trimmed line is a fence marker (opening or closing).
    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// Info string after the opening backticks, e.g. `rust` for ```` ```rust ````.
    ///
    /// Only meaningful on opening fences; closing fences ignore trailing text.
    pub fn info(trimmed: &str) -> Option<String> {
        let rest = trimmed.strip_prefix(Self::BACKTICKS)?.trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }
}
