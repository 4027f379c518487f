use super::types::SpanKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter or bracket construct was opened but its closing form could
    /// not be matched. `section` is `formatted`, `image` or `link`.
    #[error("Invalid Markdown, {section} section not closed")]
    MalformedMarkup { section: &'static str },
    #[error("Invalid text type: {0}")]
    UnknownTextType(String),
    #[error("{kind} span url does not match its kind")]
    UrlMismatch { kind: SpanKind },
}

impl InlineError {
    pub(crate) fn unclosed(section: &'static str) -> Self {
        InlineError::MalformedMarkup { section }
    }
}
