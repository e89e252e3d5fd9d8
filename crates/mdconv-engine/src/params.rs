use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::reformat::Reformatter;
use crate::template::LinkTemplate;

/// Raw conversion options, as a caller or a config file supplies them.
///
/// Every delimiter may be any string, including the empty string.
/// `link_format` must contain [`LinkTemplate::TARGET`] and
/// [`LinkTemplate::LABEL`] exactly once each; that is checked when the
/// params are turned into a [`Format`]. Missing fields deserialize as empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertParams {
    pub open_bold: String,
    pub close_bold: String,
    pub open_italic: String,
    pub close_italic: String,
    pub open_code: String,
    pub close_code: String,
    pub link_format: String,
}

/// Strings written around a span's reformatted interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: Cow<'static, str>,
    pub close: Cow<'static, str>,
}

impl Delimiters {
    pub(crate) const fn new(open: &'static str, close: &'static str) -> Self {
        Self {
            open: Cow::Borrowed(open),
            close: Cow::Borrowed(close),
        }
    }

    fn owned(open: &str, close: &str) -> Self {
        Self {
            open: Cow::Owned(open.to_owned()),
            close: Cow::Owned(close.to_owned()),
        }
    }
}

/// A validated target format. Holding one means the link template is usable,
/// so reformatting with it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub bold: Delimiters,
    pub italic: Delimiters,
    pub code: Delimiters,
    pub link: LinkTemplate,
}

impl Format {
    /// Rewrites every recognised span in `text` using this format.
    pub fn reformat(&self, text: &str) -> String {
        Reformatter::new(self).run(text)
    }
}

impl TryFrom<&ConvertParams> for Format {
    type Error = ConfigurationError;

    fn try_from(params: &ConvertParams) -> Result<Self, Self::Error> {
        let link = LinkTemplate::parse(&params.link_format).inspect_err(|e| {
            log::debug!("rejecting link format {:?}: {e}", params.link_format);
        })?;

        Ok(Self {
            bold: Delimiters::owned(&params.open_bold, &params.close_bold),
            italic: Delimiters::owned(&params.open_italic, &params.close_italic),
            code: Delimiters::owned(&params.open_code, &params.close_code),
            link,
        })
    }
}

impl From<&Format> for ConvertParams {
    fn from(format: &Format) -> Self {
        Self {
            open_bold: format.bold.open.to_string(),
            close_bold: format.bold.close.to_string(),
            open_italic: format.italic.open.to_string(),
            close_italic: format.italic.close.to_string(),
            open_code: format.code.open.to_string(),
            close_code: format.code.close.to_string(),
            link_format: format.link.to_string(),
        }
    }
}
