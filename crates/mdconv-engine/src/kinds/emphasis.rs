/// Emphasis delimiters.
///
/// Both bytes are interchangeable. A single byte opens italic; the same byte
/// repeated opens bold. `_*` is an italic opener followed by another italic
/// opener, not bold.
pub struct Emphasis;

impl Emphasis {
    pub const UNDERSCORE: u8 = b'_';
    pub const STAR: u8 = b'*';

    /// Returns true if `b` opens an italic or bold span.
    pub fn is_marker(b: u8) -> bool {
        b == Self::UNDERSCORE || b == Self::STAR
    }
}
