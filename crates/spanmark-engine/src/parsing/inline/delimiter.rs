use super::{
    error::InlineError,
    kinds::Delimited,
    types::{SpanKind, TextSpan},
};

/// Splits every plain span on a symmetric delimiter.
///
/// Parts alternate plain / `kind` / plain ..., starting with plain. Empty
/// parts are dropped but still count towards the alternation, so
/// `"**x**"` yields a single bold `x`. Non-plain spans pass through untouched.
///
/// # Errors
/// - [`InlineError::MalformedMarkup`] if a plain span holds an odd number of
///   delimiters.
/// - [`InlineError::UrlMismatch`] if `kind` requires a URL.
///
/// An empty delimiter matches nothing and returns the input unchanged.
pub fn split_nodes_delimiter(
    spans: &[TextSpan],
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<TextSpan>, InlineError> {
    if delimiter.is_empty() {
        return Ok(spans.to_vec());
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if !span.is_plain() {
            out.push(span.clone());
            continue;
        }

        let parts: Vec<&str> = span.text().split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(InlineError::unclosed("formatted"));
        }

        for (index, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            if index % 2 == 0 {
                out.push(TextSpan::plain(part));
            } else {
                out.push(TextSpan::with_url(part, kind, None)?);
            }
        }
    }
    Ok(out)
}

/// [`split_nodes_delimiter`] driven by a kind's own delimiter.
pub fn split_delimited<K: Delimited>(spans: &[TextSpan]) -> Result<Vec<TextSpan>, InlineError> {
    split_nodes_delimiter(spans, K::DELIM, K::KIND)
}
