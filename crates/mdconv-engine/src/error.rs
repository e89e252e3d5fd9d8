/// A link format that cannot be used as a two-slot template.
///
/// This is the only error the engine reports. It is raised while building a
/// [`Format`](crate::Format), before any text is looked at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("link format is missing the {placeholder} placeholder")]
    MissingPlaceholder { placeholder: &'static str },
    #[error("link format contains the {placeholder} placeholder more than once")]
    RepeatedPlaceholder { placeholder: &'static str },
    #[error("link format placeholders overlap")]
    OverlappingPlaceholders,
}
