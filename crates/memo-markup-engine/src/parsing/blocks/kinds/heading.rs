/// Heading type with owned delimiter constants.
pub struct Heading;

impl Heading {
    /// Longest prefix first: `"### "` also starts with `"#"`, never with `"# "`,
    /// but checking by length keeps the rule obvious.
    pub const PREFIXES: [(&'static str, u8); 3] = [("### ", 3), ("## ", 2), ("# ", 1)];

    /// Returns `(level, prefix_len)` if `line` (already left-trimmed) is a heading.
    pub fn detect(line: &str) -> Option<(u8, usize)> {
        Self::PREFIXES
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
            .map(|(prefix, level)| (*level, prefix.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some((1, 2)))]
    #[case("## Title", Some((2, 3)))]
    #[case("### Title", Some((3, 4)))]
    #[case("#### Title", None)]
    #[case("#Title", None)]
    #[case("#", None)]
    #[case("plain", None)]
    fn detects_levels(#[case] line: &str, #[case] expected: Option<(u8, usize)>) {
        assert_eq!(Heading::detect(line), expected);
    }
}
