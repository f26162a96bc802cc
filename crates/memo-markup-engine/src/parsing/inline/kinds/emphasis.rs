/// Bold (strong emphasis) with owned delimiter constant.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";
}

/// Italic (emphasis) with owned delimiter constant.
///
/// A single `*` only counts when neither neighbour is another `*`.
pub struct Italic;

impl Italic {
    pub const MARKER: &'static str = "*";
    pub const STAR: u8 = b'*';
}
