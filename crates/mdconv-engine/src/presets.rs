use std::fmt;
use std::str::FromStr;

use crate::params::{Delimiters, Format};
use crate::template::{LinkTemplate, Slot};

static PLAIN: Format = Format {
    bold: Delimiters::new("\"", "\""),
    italic: Delimiters::new("", ""),
    code: Delimiters::new("", ""),
    // :alias: (:link:)
    link: LinkTemplate::from_parts("", Slot::Label, " (", ")"),
};

static HTML: Format = Format {
    bold: Delimiters::new("<strong>", "</strong>"),
    italic: Delimiters::new("<em>", "</em>"),
    code: Delimiters::new("<font face=\"Courier New\">", "</font>"),
    // <a href=":link:" target="_blank">:alias:</a>
    link: LinkTemplate::from_parts("<a href=\"", Slot::Target, "\" target=\"_blank\">", "</a>"),
};

static CHAT: Format = Format {
    bold: Delimiters::new("*", "*"),
    italic: Delimiters::new("_", "_"),
    code: Delimiters::new("`", "`"),
    // <:link:|:alias:>
    link: LinkTemplate::from_parts("<", Slot::Target, "|", ">"),
};

/// Built-in target renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Bold in double quotes, italic and code markers dropped,
    /// links as `label (target)`.
    Plain,
    /// HTML fragment. Input is escaped first.
    Html,
    /// Slack message markup. Input is escaped first.
    Slack,
    /// Google Hangouts; same markup as Slack.
    Hangouts,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Plain, Preset::Html, Preset::Slack, Preset::Hangouts];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Plain => "plain",
            Preset::Html => "html",
            Preset::Slack => "slack",
            Preset::Hangouts => "hangouts",
        }
    }

    pub fn format(self) -> &'static Format {
        match self {
            Preset::Plain => &PLAIN,
            Preset::Html => &HTML,
            Preset::Slack | Preset::Hangouts => &CHAT,
        }
    }

    /// Whether markup-significant characters in the input are escaped
    /// before reformatting.
    pub fn escapes_html(self) -> bool {
        !matches!(self, Preset::Plain)
    }

    pub fn converter(self) -> Converter {
        Converter::new(self.format().clone(), self.escapes_html())
    }

    pub fn convert(self, text: &str) -> String {
        self.converter().convert(text)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown preset {0:?}")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// A format together with its input escaping policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converter {
    pub format: Format,
    pub escape_html: bool,
}

impl Converter {
    pub fn new(format: Format, escape_html: bool) -> Self {
        Self {
            format,
            escape_html,
        }
    }

    pub fn convert(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        if self.escape_html {
            self.format
                .reformat(&html_escape::encode_quoted_attribute(text))
        } else {
            self.format.reformat(text)
        }
    }
}
