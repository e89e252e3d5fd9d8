/// Code span inline type with owned delimiter constant.
///
/// Unlike emphasis there is no doubled form: two backticks are an empty
/// code span.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
