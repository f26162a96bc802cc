use super::span::Span;

/// A single line of the source with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line in the source, excluding its terminator.
    pub span: Span,
    /// The line text, excluding its terminator.
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// `\n`, `\r\n` and a lone `\r` each end one line; `\r\n` is a single separator.
/// A text ending in a separator yields a final empty line, so rejoining the lines
/// with `\n` reproduces the text up to separator normalization. The empty string
/// yields no lines at all.
pub fn lines_with_spans(text: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    let mut done = text.is_empty();

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let mut i = start;
        while i < bytes.len() && bytes[i] != b'\n' && bytes[i] != b'\r' {
            i += 1;
        }
        let line = LineRef {
            span: Span::new(start, i),
            text: &text[start..i],
        };
        if i >= bytes.len() {
            done = true;
        } else if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') {
            start = i + 2;
        } else {
            start = i + 1;
        }
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(s: &str) -> Vec<&str> {
        lines_with_spans(s).map(|l| l.text).collect()
    }

    #[rstest]
    #[case("", vec![])]
    #[case("one", vec!["one"])]
    #[case("a\nb", vec!["a", "b"])]
    #[case("a\r\nb", vec!["a", "b"])]
    #[case("a\rb", vec!["a", "b"])]
    #[case("a\n", vec!["a", ""])]
    #[case("\n", vec!["", ""])]
    #[case("a\r\n\r\nb", vec!["a", "", "b"])]
    #[case("a\n\rb", vec!["a", "", "b"])]
    fn splits_on_every_separator(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(texts(input), expected);
    }

    #[test]
    fn spans_point_back_into_source() {
        let src = "# Title\r\n\r\nbody";
        for line in lines_with_spans(src) {
            assert_eq!(&src[line.span.range()], line.text);
        }
        let spans: Vec<_> = lines_with_spans(src).map(|l| l.span).collect();
        assert_eq!(spans, vec![Span::new(0, 7), Span::new(9, 9), Span::new(11, 15)]);
    }

    #[test]
    fn multibyte_text_keeps_byte_offsets() {
        let src = "日本\n語";
        let spans: Vec<_> = lines_with_spans(src).map(|l| l.span).collect();
        assert_eq!(spans, vec![Span::new(0, 6), Span::new(7, 10)]);
    }
}
