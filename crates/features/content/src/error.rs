use std::borrow::Cow;

/// Errors raised by the content store and its seed loading.
#[gnomix_derive::gnomix_error]
pub enum ContentError {
    /// Seed data violates an invariant (for example a duplicate id).
    #[error("Invalid content{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The seed file could not be read.
    #[error("Seed file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The seed file is not a valid seed document.
    #[error("Seed format error{}: {source}", format_context(.context))]
    Seed { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A backing store could not be reached.
    #[error("Content store unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal content error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
