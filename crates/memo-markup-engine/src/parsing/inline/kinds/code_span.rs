/// Code span inline type with owned delimiter constant.
///
/// Code is resolved after bold, so `` **`x`** `` is bold text containing literal
/// backticks, while `` `**x**` `` is bold too: bold claims the `**` pair first.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
