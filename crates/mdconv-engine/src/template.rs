use std::borrow::Cow;
use std::fmt;

use crate::error::ConfigurationError;

/// Which value a template slot receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The link destination, from between `](` and `)`.
    Target,
    /// The visible text, from between `[` and `](`.
    Label,
}

impl Slot {
    fn other(self) -> Self {
        match self {
            Slot::Target => Slot::Label,
            Slot::Label => Slot::Target,
        }
    }

    fn sentinel(self) -> &'static str {
        match self {
            Slot::Target => LinkTemplate::TARGET,
            Slot::Label => LinkTemplate::LABEL,
        }
    }
}

/// A link format split around its two placeholders.
///
/// `"<a href=\":link:\">:alias:</a>"` is stored as the prefix `<a href="`,
/// the target slot, the infix `">`, the label slot and the suffix `</a>`.
/// Rendering writes each value exactly once, and a value that happens to
/// contain a sentinel is never substituted again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    prefix: Cow<'static, str>,
    first: Slot,
    infix: Cow<'static, str>,
    suffix: Cow<'static, str>,
}

impl LinkTemplate {
    /// Placeholder replaced by the link target.
    pub const TARGET: &'static str = ":link:";
    /// Placeholder replaced by the link label.
    pub const LABEL: &'static str = ":alias:";

    /// Builds a template from already split parts.
    pub(crate) const fn from_parts(
        prefix: &'static str,
        first: Slot,
        infix: &'static str,
        suffix: &'static str,
    ) -> Self {
        Self {
            prefix: Cow::Borrowed(prefix),
            first,
            infix: Cow::Borrowed(infix),
            suffix: Cow::Borrowed(suffix),
        }
    }

    /// Parses a link format containing exactly one [`Self::TARGET`] and
    /// exactly one [`Self::LABEL`], in either order.
    pub fn parse(format: &str) -> Result<Self, ConfigurationError> {
        let target_at = find_once(format, Self::TARGET)?;
        let label_at = find_once(format, Self::LABEL)?;

        let (first, first_at, second_at) = if target_at < label_at {
            (Slot::Target, target_at, label_at)
        } else {
            (Slot::Label, label_at, target_at)
        };
        let first_end = first_at + first.sentinel().len();
        if first_end > second_at {
            return Err(ConfigurationError::OverlappingPlaceholders);
        }
        let second_end = second_at + first.other().sentinel().len();

        Ok(Self {
            prefix: Cow::Owned(format[..first_at].to_owned()),
            first,
            infix: Cow::Owned(format[first_end..second_at].to_owned()),
            suffix: Cow::Owned(format[second_end..].to_owned()),
        })
    }

    /// Appends the rendered link to `out`.
    pub fn render_into(&self, out: &mut String, target: &str, label: &str) {
        let value = |slot: Slot| match slot {
            Slot::Target => target,
            Slot::Label => label,
        };
        out.push_str(&self.prefix);
        out.push_str(value(self.first));
        out.push_str(&self.infix);
        out.push_str(value(self.first.other()));
        out.push_str(&self.suffix);
    }

    /// Renders the link as a new string.
    pub fn render(&self, target: &str, label: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, target, label);
        out
    }
}

/// Writes the template back in its source form, sentinels included.
impl fmt::Display for LinkTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.prefix,
            self.first.sentinel(),
            self.infix,
            self.first.other().sentinel(),
            self.suffix
        )
    }
}

fn find_once(format: &str, placeholder: &'static str) -> Result<usize, ConfigurationError> {
    let mut found = format.match_indices(placeholder).map(|(at, _)| at);
    let at = found
        .next()
        .ok_or(ConfigurationError::MissingPlaceholder { placeholder })?;
    if found.next().is_some() {
        return Err(ConfigurationError::RepeatedPlaceholder { placeholder });
    }
    Ok(at)
}
