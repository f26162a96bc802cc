use std::sync::OnceLock;

use regex::Regex;

/// List item type with owned delimiters for both bullet and numbered items.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    /// Returns `(bullet, prefix_len)` if `line` (already left-trimmed) is a bullet item.
    pub fn bullet(line: &str) -> Option<(char, usize)> {
        Self::BULLETS
            .iter()
            .find(|b| line.starts_with(*b))
            .and_then(|b| b.chars().next().map(|c| (c, b.len())))
    }

    /// Returns `(marker, prefix_len)` if `line` (already left-trimmed) is a numbered
    /// item. The marker keeps the number exactly as typed, e.g. `"01."`.
    pub fn numbered(line: &str) -> Option<(String, usize)> {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        let re = NUMBERED
            .get_or_init(|| Regex::new(r"^(\d+\.) ").expect("Invalid numbered list regex"));
        let caps = re.captures(line)?;
        let marker = caps.get(1)?.as_str().to_string();
        let prefix_len = caps.get(0)?.end();
        Some((marker, prefix_len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets() {
        assert_eq!(ListItem::bullet("- item"), Some(('-', 2)));
        assert_eq!(ListItem::bullet("* item"), Some(('*', 2)));
        assert_eq!(ListItem::bullet("-item"), None);
        assert_eq!(ListItem::bullet("+ item"), None);
    }

    #[test]
    fn numbered_keeps_marker_verbatim() {
        assert_eq!(ListItem::numbered("1. first"), Some(("1.".to_string(), 3)));
        assert_eq!(ListItem::numbered("42. answer"), Some(("42.".to_string(), 4)));
        assert_eq!(ListItem::numbered("007. bond"), Some(("007.".to_string(), 5)));
    }

    #[test]
    fn numbered_requires_dot_and_space() {
        assert_eq!(ListItem::numbered("1.first"), None);
        assert_eq!(ListItem::numbered("1) first"), None);
        assert_eq!(ListItem::numbered(". first"), None);
        assert_eq!(ListItem::numbered("a1. first"), None);
    }
}
