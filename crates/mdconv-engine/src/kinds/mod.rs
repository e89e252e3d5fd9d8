//! # Inline Kinds
//!
//! Span kinds that own their syntax delimiters. The scanner asks these
//! types which bytes are markers; it never hardcodes `_`, `` ` `` or `[`.
//!
//! ## Types
//!
//! - **`Emphasis`**: `UNDERSCORE = b'_'`, `STAR = b'*'` - one opens italic,
//!   the same byte twice opens bold
//! - **`CodeSpan`**: `TICK = b'\`'`
//! - **`Link`**: `OPEN = b'['`, `MIDDLE = "]("`, `CLOSE = ")"`

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use link::Link;
