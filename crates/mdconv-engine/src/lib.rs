//! # mdconv-engine
//!
//! Rewrites a small inline subset of markdown (bold, italic, inline code and
//! `[label](target)` links) into another markup by substituting delimiters.
//! There is no block structure and no syntax tree: the text is scanned once
//! and each recognised span is re-emitted with the target's delimiters
//! around its recursively rewritten interior.
//!
//! ```
//! use mdconv_engine::{ConvertParams, convert, to_html};
//!
//! assert_eq!(to_html("**bold** and _em_"), "<strong>bold</strong> and <em>em</em>");
//!
//! let params = ConvertParams {
//!     open_bold: "[b]".into(),
//!     close_bold: "[/b]".into(),
//!     link_format: "[url=:link:]:alias:[/url]".into(),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     convert("__hi__ [there](http://x.test)", &params).unwrap(),
//!     "[b]hi[/b] [url=http://x.test]there[/url]"
//! );
//! ```
//!
//! ## Modules
//!
//! - **`kinds`**: marker bytes owned per span kind
//! - **`cursor`**: byte cursor used by the scanner
//! - **`template`**: two-slot link template with `:link:` and `:alias:`
//! - **`params`**: raw [`ConvertParams`] and the validated [`Format`]
//! - **`reformat`**: the scanner itself
//! - **`presets`**: plain, HTML and chat renderings

pub mod cursor;
pub mod error;
pub mod kinds;
pub mod params;
pub mod presets;
pub mod reformat;
pub mod template;

pub use error::ConfigurationError;
pub use params::{ConvertParams, Delimiters, Format};
pub use presets::{Converter, Preset, UnknownPreset};
pub use template::LinkTemplate;

/// Converts `text` with caller-supplied delimiters.
///
/// The link format is validated before anything else, so an invalid one is
/// reported even for empty text. Earlier releases returned `""` for empty
/// text without looking at the format. No escaping is applied.
pub fn convert(text: &str, params: &ConvertParams) -> Result<String, ConfigurationError> {
    let format = Format::try_from(params)?;
    if text.is_empty() {
        return Ok(String::new());
    }
    Ok(format.reformat(text))
}

/// Converts to plain text.
pub fn to_text(md: &str) -> String {
    Preset::Plain.convert(md)
}

/// Converts to an HTML fragment, escaping the input first.
pub fn to_html(md: &str) -> String {
    Preset::Html.convert(md)
}

/// Converts to a Slack message, escaping the input first.
pub fn to_slack(md: &str) -> String {
    Preset::Slack.convert(md)
}

/// Converts to a Hangouts message. Identical to [`to_slack`].
pub fn to_hangouts(md: &str) -> String {
    Preset::Hangouts.convert(md)
}
