/// Link inline type: `[label](target)`.
pub struct Link;

impl Link {
    /// Opens a candidate link. Emitted literally if the rest is malformed.
    pub const OPEN: u8 = b'[';
    /// Separates the label from the target.
    pub const MIDDLE: &'static str = "](";
    /// Closes the target. The first one after `OPEN` always wins.
    pub const CLOSE: &'static str = ")";

    /// Splits the text following `[` into `(label, target, rest)`.
    ///
    /// Returns `None` when there is no `)` at all, or when no `](` appears
    /// before the first `)`.
    pub fn split(after_open: &str) -> Option<(&str, &str, &str)> {
        let close = after_open.find(Self::CLOSE)?;
        let middle = after_open[..close].find(Self::MIDDLE)?;

        let label = &after_open[..middle];
        let target = &after_open[middle + Self::MIDDLE.len()..close];
        let rest = &after_open[close + Self::CLOSE.len()..];
        Some((label, target, rest))
    }
}
