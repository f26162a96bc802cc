/// Block quote type with owned delimiter constant.
///
/// Only a single quote level exists in this dialect: `> > x` is a quote whose
/// text is `> x`.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Returns the prefix length if `line` (already left-trimmed) opens a quote.
    pub fn prefix_len(line: &str) -> Option<usize> {
        line.starts_with(Self::PREFIX).then_some(Self::PREFIX.len())
    }
}
