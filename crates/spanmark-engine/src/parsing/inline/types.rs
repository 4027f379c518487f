use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::InlineError;

/// The inline formatting kind of a [`TextSpan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    /// Raw text with no formatting. Only these spans are re-split by later passes.
    #[serde(rename = "text")]
    Plain,
    Bold,
    Italic,
    Code,
    /// Carries a URL: the `href` of the link.
    Link,
    /// Carries a URL: the `src` of the image. The span text is the alt text.
    Image,
}

impl SpanKind {
    /// Every kind.
    pub const ALL: [SpanKind; 6] = [
        SpanKind::Plain,
        SpanKind::Bold,
        SpanKind::Italic,
        SpanKind::Code,
        SpanKind::Image,
        SpanKind::Link,
    ];

    /// Tag name of the kind (`text`, `bold`, `italic`, `code`, `link`, `image`).
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "text",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Returns true for the kinds that must carry a URL.
    pub fn has_url(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SpanKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InlineError::UnknownTextType(s.to_string()))
    }
}

/// An immutable typed fragment of inline text.
///
/// `url` is `Some` exactly when `kind` is [`SpanKind::Link`] or
/// [`SpanKind::Image`]; the constructors uphold this. Passes build new spans
/// rather than mutating existing ones, so fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextSpan {
    text: String,
    kind: SpanKind,
    url: Option<String>,
}

impl TextSpan {
    /// Creates an unformatted span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Plain,
            url: None,
        }
    }

    /// Creates a span of a kind without a URL.
    ///
    /// Callers outside the crate use [`TextSpan::with_url`], which reports a
    /// bad kind as an error instead.
    ///
    /// # Panics
    /// Panics if `kind` is `Link` or `Image`.
    pub(crate) fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        assert!(!kind.has_url(), "{kind} spans need a url");
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Link,
            url: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            kind: SpanKind::Image,
            url: Some(url.into()),
        }
    }

    /// General constructor for callers holding a kind and an optional URL
    /// decided at runtime.
    ///
    /// Fails with [`InlineError::UrlMismatch`] when `url` presence does not
    /// match the kind.
    pub fn with_url(
        text: impl Into<String>,
        kind: SpanKind,
        url: Option<String>,
    ) -> Result<Self, InlineError> {
        if kind.has_url() != url.is_some() {
            return Err(InlineError::UrlMismatch { kind });
        }
        Ok(Self {
            text: text.into(),
            kind,
            url,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_when_all_fields_match() {
        let a = TextSpan::new("This is a text node", SpanKind::Bold);
        let b = TextSpan::new("This is a text node", SpanKind::Bold);
        assert_eq!(a, b);
    }

    #[test]
    fn not_equal_on_text() {
        let a = TextSpan::new("This is a text node", SpanKind::Bold);
        let b = TextSpan::new("This is a different text node", SpanKind::Bold);
        assert_ne!(a, b);
    }

    #[test]
    fn not_equal_on_kind() {
        let a = TextSpan::new("This is a text node", SpanKind::Bold);
        let b = TextSpan::new("This is a text node", SpanKind::Italic);
        assert_ne!(a, b);
    }

    #[test]
    fn not_equal_on_url() {
        let a = TextSpan::link("same", "https://a.example");
        let b = TextSpan::link("same", "https://b.example");
        assert_ne!(a, b);
    }

    #[test]
    fn display_includes_url() {
        let span = TextSpan::link("This is a text node", "https://www.boot.dev");
        assert_eq!(
            span.to_string(),
            "TextNode(This is a text node, link, https://www.boot.dev)"
        );
    }

    #[test]
    fn display_without_url() {
        let span = TextSpan::plain("hello");
        assert_eq!(span.to_string(), "TextNode(hello, text, None)");
    }

    #[test]
    fn url_present_only_for_link_and_image() {
        assert!(TextSpan::plain("x").url().is_none());
        assert_eq!(TextSpan::image("alt", "u").url(), Some("u"));
        assert_eq!(TextSpan::link("t", "v").url(), Some("v"));
    }

    #[test]
    fn with_url_rejects_mismatch() {
        let err = TextSpan::with_url("x", SpanKind::Bold, Some("u".to_string())).unwrap_err();
        assert!(matches!(err, InlineError::UrlMismatch { kind: SpanKind::Bold }));

        let err = TextSpan::with_url("x", SpanKind::Link, None).unwrap_err();
        assert!(matches!(err, InlineError::UrlMismatch { kind: SpanKind::Link }));
    }

    #[test]
    fn with_url_accepts_consistent_input() {
        let span = TextSpan::with_url("x", SpanKind::Image, Some("u".to_string())).unwrap();
        assert_eq!(span, TextSpan::image("x", "u"));

        let span = TextSpan::with_url("x", SpanKind::Bold, None).unwrap();
        assert_eq!(span, TextSpan::new("x", SpanKind::Bold));
    }

    #[test]
    #[should_panic(expected = "link spans need a url")]
    fn new_panics_for_link_kind() {
        let _ = TextSpan::new("x", SpanKind::Link);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in SpanKind::ALL {
            assert_eq!(kind.as_str().parse::<SpanKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_name_is_rejected() {
        let err = "strikethrough".parse::<SpanKind>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid text type: strikethrough");
    }
}
