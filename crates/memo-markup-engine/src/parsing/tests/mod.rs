//! Pipeline tests over whole documents.
//!
//! Scenario tests pin the documented behaviour end to end; property tests run the
//! invariant checks in `invariants` over a fixed corpus of awkward inputs and a
//! deterministic pseudo-random one.


use pretty_assertions::assert_eq;

use crate::{
    parsing::{BlockKind, Document, InlineSpan, InlineStyle, Span, parse, tokenize},
    render::{
        DisplayBlock, DisplayOptions, DisplaySpan, ListMarker, MarkupOptions, OffsetUnit,
        StyledText, render_blocks, render_markup, render_styled_runs,
    },
};

const CORPUS: &[&str] = &[
    "",
    "\n",
    "\r\n\r\n",
    "\r",
    "# Title\n\nHello **world**.",
    "`code` and *em*",
    "```\nfoo\nbar",
    "```",
    "```\n```",
    "``` \n```rust\n",
    "1. first\n2. second",
    "1. a\n1. b",
    "***x***",
    "****",
    "``",
    "** **",
    "* * *",
    "- - -",
    "---",
    "> > nested?",
    "<script>alert(1)</script> & **<b>**",
    "a\r\nb\rc\nd",
    "   # indented heading\n\t> tabbed quote",
    "日本語の**太字**と*斜体*と`コード`",
    "😀 **😀** *😀* `😀`",
    "**unterminated\n*also\n`and this",
    "```swift\nlet x = \"<&>\"\n```\nafter **bold**",
    "#### too deep\n#nospace\n##",
    "*a**b*",
    "**a*b**c*",
];

fn check_all(source: &str) -> Document {
    let doc = parse(source);
    invariants::check(source, &doc);
    invariants::check_markup(&render_markup(&doc, &MarkupOptions::default()));
    for unit in [OffsetUnit::Utf8, OffsetUnit::Char, OffsetUnit::Utf16] {
        invariants::check_runs(source, &render_styled_runs(&doc, unit), unit);
    }
    doc
}

// Scenario tests

#[test]
fn scenario_heading_blank_bold() {
    let doc = check_all("# Title\n\nHello **world**.");
    assert_eq!(
        render_blocks(&doc, &DisplayOptions::default()),
        vec![
            DisplayBlock::Heading {
                level: 1,
                text: StyledText {
                    text: "Title".to_string(),
                    spans: vec![],
                },
            },
            DisplayBlock::Spacer { height: 8.0 },
            DisplayBlock::Paragraph {
                text: StyledText {
                    text: "Hello world.".to_string(),
                    spans: vec![DisplaySpan {
                        range: Span::new(6, 11),
                        style: InlineStyle::Bold,
                    }],
                },
            },
        ]
    );
}

#[test]
fn scenario_code_and_italic() {
    let doc = check_all("`code` and *em*");
    assert_eq!(
        doc.blocks[0].spans,
        vec![
            InlineSpan::new(0, 6, InlineStyle::Code),
            InlineSpan::new(11, 15, InlineStyle::Italic),
        ]
    );
}

#[test]
fn scenario_unterminated_fence() {
    let doc = check_all("```\nfoo\nbar");
    assert_eq!(
        render_blocks(&doc, &DisplayOptions::default()),
        vec![DisplayBlock::CodeBlock {
            info: None,
            code: "foo\nbar".to_string(),
        }]
    );
}

#[test]
fn scenario_ordered_markers_verbatim() {
    for (source, expected) in [
        ("1. first\n2. second", ["1.", "2."]),
        ("1. a\n1. b", ["1.", "1."]),
    ] {
        let doc = check_all(source);
        let markers: Vec<ListMarker> = render_blocks(&doc, &DisplayOptions::default())
            .into_iter()
            .filter_map(|b| match b {
                DisplayBlock::ListItem { marker, .. } => Some(marker),
                _ => None,
            })
            .collect();
        assert_eq!(
            markers,
            expected
                .iter()
                .map(|m| ListMarker::Number(m.to_string()))
                .collect::<Vec<_>>()
        );
    }
}

#[test]
fn scenario_empty_input() {
    let doc = check_all("");
    assert!(doc.blocks.is_empty());
    assert!(render_blocks(&doc, &DisplayOptions::default()).is_empty());
    assert_eq!(render_markup(&doc, &MarkupOptions::default()), "");
    assert!(render_styled_runs(&doc, OffsetUnit::Char).is_empty());
}

#[test]
fn markers_never_pair_across_lines() {
    let doc = check_all("**a\nb**\n*c\nd*\n`e\nf`");
    assert_eq!(doc.blocks.len(), 6);
    for block in &doc.blocks {
        assert_eq!(block.kind, BlockKind::Paragraph);
        assert!(block.spans.is_empty(), "spans on {:?}", block.text);
    }
    let html = render_markup(&doc, &MarkupOptions::default());
    for tag in ["<strong>", "<em>", "<code>"] {
        assert!(!html.contains(tag), "{tag} in {html:?}");
    }
}

// Property tests

#[test]
fn corpus_holds_invariants() {
    for source in CORPUS {
        check_all(source);
    }
}

#[test]
fn tokenize_is_lossless_except_fences() {
    for source in CORPUS {
        let expected = invariants::normalized_lines(source)
            .into_iter()
            .filter(|l| !l.trim().starts_with("```"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(
            invariants::rejoin_without_fences(&tokenize(source)),
            expected,
            "source: {source:?}"
        );
    }
}

#[test]
fn retokenizing_rejoined_text_keeps_kinds() {
    for source in CORPUS {
        let blocks = tokenize(source);
        let rejoined = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let again: Vec<BlockKind> = tokenize(&rejoined).into_iter().map(|b| b.kind).collect();
        let kinds: Vec<BlockKind> = blocks.into_iter().map(|b| b.kind).collect();
        assert_eq!(again, kinds, "source: {source:?}");
    }
}

#[test]
fn script_tags_never_survive_markup() {
    let html = render_markup(
        &parse("<script>alert(1)</script>\n# <img onerror=x>\n> **<b>**"),
        &MarkupOptions::default(),
    );
    assert!(!html.contains("<script"));
    assert!(!html.contains("<img"));
    assert!(!html.contains("<b>"));
}

const CASES: usize = 300;
const MAX_LEN: usize = 200;
const CHARSET: &[&str] = &[
    "a", "b", "z", " ", " ", "\t", "\n", "\n", "\r\n", "\r", "#", "# ", "## ", "### ", "> ",
    "- ", "* ", "1. ", "42. ", "---", "```", "```rust", "*", "*", "**", "`", "<", ">", "&",
    "\"", "é", "日", "😀",
];

#[test]
fn random_input_holds_invariants() {
    let mut rng = Lcg::new(0x5eed_1e55_c0de_f00d);
    for _ in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source: String = (0..len)
            .map(|_| CHARSET[rng.gen_range(0, CHARSET.len())])
            .collect();
        check_all(&source);
    }
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let value = (self.next() >> 33) as usize;
        min + value % (max - min)
    }
}
