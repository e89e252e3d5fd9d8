//! # Reformatting
//!
//! A flat scan-and-search rewrite, not a parser. Scanning finds the leftmost
//! marker, then the leftmost later occurrence of the *same* marker string;
//! nothing is balanced. A span can swallow markers of other kinds, which
//! only get recognised when its interior is rewritten in turn.
//!
//! ## Rules
//!
//! - `[label](target)`: the first `)` after `[` closes it, and `](` must come
//!   before that `)`. Label and target are copied into the link template
//!   as-is, never rewritten.
//! - `_x_` / `*x*` italic, `__x__` / `**x**` bold, `` `x` `` code. A doubled
//!   marker is always taken as bold, so `***x***` is bold around `*x`
//!   followed by a literal `*`.
//! - A marker without a closer is literal, and scanning moves on by one
//!   byte. The second byte of an unclosed `**` may still open italic.
//!
//! Only interiors recurse; the text after a span is handled by the same
//! loop. An interior never contains its own marker string, so nesting depth
//! is bounded by the number of marker kinds.

use crate::cursor::Cursor;
use crate::kinds::{CodeSpan, Emphasis, Link};
use crate::params::{Delimiters, Format};

/// Span kinds written with an open/close delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Bold,
    Italic,
    Code,
}

impl SpanKind {
    /// Classifies the marker under the cursor, if any.
    fn opened_by(cur: &Cursor<'_>) -> Option<Self> {
        match cur.peek()? {
            b if Emphasis::is_marker(b) => {
                if cur.peek_nth(1) == Some(b) {
                    Some(SpanKind::Bold)
                } else {
                    Some(SpanKind::Italic)
                }
            }
            CodeSpan::TICK => Some(SpanKind::Code),
            _ => None,
        }
    }

    fn marker_len(self) -> usize {
        match self {
            SpanKind::Bold => 2,
            SpanKind::Italic | SpanKind::Code => 1,
        }
    }
}

impl Format {
    pub(crate) fn delimiters(&self, kind: SpanKind) -> &Delimiters {
        match kind {
            SpanKind::Bold => &self.bold,
            SpanKind::Italic => &self.italic,
            SpanKind::Code => &self.code,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Span<'t> {
    Link { label: &'t str, target: &'t str },
    Delimited { kind: SpanKind, inner: &'t str },
}

/// The first span in a text, with the literal text before it and the
/// unscanned text after it.
#[derive(Debug, PartialEq, Eq)]
struct Found<'t> {
    before: &'t str,
    span: Span<'t>,
    rest: &'t str,
}

fn find_span(text: &str) -> Option<Found<'_>> {
    let mut cur = Cursor::new(text);

    while !cur.eof() {
        let start = cur.pos();

        if cur.peek() == Some(Link::OPEN) {
            if let Some((label, target, rest)) = Link::split(&text[start + 1..]) {
                log::trace!("link span at byte {start}");
                return Some(Found {
                    before: cur.consumed(),
                    span: Span::Link { label, target },
                    rest,
                });
            }
        } else if let Some(kind) = SpanKind::opened_by(&cur) {
            let marker = &text[start..start + kind.marker_len()];
            let after = &text[start + marker.len()..];
            if let Some(close) = after.find(marker) {
                log::trace!("{kind:?} span at byte {start}");
                return Some(Found {
                    before: cur.consumed(),
                    span: Span::Delimited {
                        kind,
                        inner: &after[..close],
                    },
                    rest: &after[close + marker.len()..],
                });
            }
        }

        cur.bump();
    }

    None
}

/// Accumulates the rewritten text for one conversion.
pub(crate) struct Reformatter<'f> {
    format: &'f Format,
    out: String,
}

impl<'f> Reformatter<'f> {
    pub(crate) fn new(format: &'f Format) -> Self {
        Self {
            format,
            out: String::new(),
        }
    }

    pub(crate) fn run(mut self, text: &str) -> String {
        self.out.reserve(text.len());
        self.push_reformatted(text);
        self.out
    }

    fn push_reformatted(&mut self, mut text: &str) {
        while let Some(found) = find_span(text) {
            self.out.push_str(found.before);
            match found.span {
                Span::Link { label, target } => {
                    self.format.link.render_into(&mut self.out, target, label);
                }
                Span::Delimited { kind, inner } => {
                    let format = self.format;
                    let delimiters = format.delimiters(kind);
                    self.out.push_str(&delimiters.open);
                    self.push_reformatted(inner);
                    self.out.push_str(&delimiters.close);
                }
            }
            text = found.rest;
        }
        self.out.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{LinkTemplate, Slot};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TAGS: Format = Format {
        bold: Delimiters::new("<b>", "</b>"),
        italic: Delimiters::new("<i>", "</i>"),
        code: Delimiters::new("<c>", "</c>"),
        link: LinkTemplate::from_parts("{", Slot::Label, "|", "}"),
    };

    #[rstest]
    #[case::plain("nothing to see here", "nothing to see here")]
    #[case::italic_underscore("_word_", "<i>word</i>")]
    #[case::italic_star("*word*", "<i>word</i>")]
    #[case::code("`word`", "<c>word</c>")]
    #[case::bold_star("**word**", "<b>word</b>")]
    #[case::bold_underscore("__word__", "<b>word</b>")]
    #[case::triple_star("***word***", "<b>*word</b>*")]
    #[case::triple_underscore("___word___", "<b>_word</b>_")]
    #[case::unmatched_italic("_word", "_word")]
    #[case::unmatched_bold("**word", "**word")]
    #[case::unclosed_bold_reopens_italic("**a*", "*<i>a</i>")]
    #[case::empty_code("``", "<c></c>")]
    #[case::empty_bold("____", "<b></b>")]
    #[case::mixed_markers_do_not_pair("_a*", "_a*")]
    #[case::text_around("a _b_ c", "a <i>b</i> c")]
    #[case::several_spans("_a_ *b* `c`", "<i>a</i> <i>b</i> <c>c</c>")]
    fn emphasis_and_code(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(TAGS.reformat(input), expected);
    }

    #[rstest]
    #[case::link("[alpha](http://example.test)", "{alpha|http://example.test}")]
    #[case::two_links("[x](y) [z](w)", "{x|y} {z|w}")]
    #[case::label_not_rewritten("[_a_](b) _c_", "{_a_|b} <i>c</i>")]
    #[case::target_not_rewritten("[a](x_y_z)", "{a|x_y_z}")]
    #[case::no_target("[abc]", "[abc]")]
    #[case::space_before_target("[abc] (x)", "[abc] (x)")]
    #[case::unclosed_target("[a](b", "[a](b")]
    #[case::malformed_then_span("[abc] and _x_", "[abc] and <i>x</i>")]
    #[case::stray_brackets("a ) b [c", "a ) b [c")]
    #[case::link_inside_italic("_a [b](c) d_", "<i>a {b|c} d</i>")]
    fn links(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(TAGS.reformat(input), expected);
    }

    #[rstest]
    #[case::code_in_bold("**a `b` c**", "<b>a <c>b</c> c</b>")]
    #[case::italic_in_code("`_a_`", "<c><i>a</i></c>")]
    #[case::italic_in_bold("__*string*__", "<b><i>string</i></b>")]
    #[case::swallowed_marker("*a _b* c_", "<i>a _b</i> c_")]
    #[case::stray_star_inside_italic("_a * b_", "<i>a * b</i>")]
    fn nesting(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(TAGS.reformat(input), expected);
    }

    #[test]
    fn empty_input() {
        assert_eq!(TAGS.reformat(""), "");
    }

    #[test]
    fn newlines_are_preserved() {
        assert_eq!(
            TAGS.reformat("line one\n_two_\r\n\nthree"),
            "line one\n<i>two</i>\r\n\nthree"
        );
    }

    #[test]
    fn multibyte_text() {
        assert_eq!(TAGS.reformat("héllo _wörld_ 日本"), "héllo <i>wörld</i> 日本");
    }

    #[test]
    fn empty_delimiters_strip_markers() {
        let bare = Format {
            bold: Delimiters::new("", ""),
            italic: Delimiters::new("", ""),
            code: Delimiters::new("", ""),
            link: LinkTemplate::from_parts("", Slot::Target, "", ""),
        };
        assert_eq!(bare.reformat("**a** _b_ `c` [d](e)"), "a b c ed");
    }

    #[test]
    fn many_unclosed_links() {
        let input = "[a] ".repeat(2_000);
        assert_eq!(TAGS.reformat(&input), input);
    }

    #[test]
    fn find_span_reports_surrounding_text() {
        assert_eq!(
            find_span("x [a](b) y"),
            Some(Found {
                before: "x ",
                span: Span::Link {
                    label: "a",
                    target: "b"
                },
                rest: " y",
            })
        );
        assert_eq!(
            find_span("**a** b"),
            Some(Found {
                before: "",
                span: Span::Delimited {
                    kind: SpanKind::Bold,
                    inner: "a"
                },
                rest: " b",
            })
        );
        assert_eq!(find_span("no markers"), None);
    }
}
