use super::{
    cursor::Cursor,
    error::InlineError,
    kinds::{Bracketed, Image, Link},
    types::TextSpan,
};

/// Splits `![alt](url)` constructs out of each span into image spans.
pub fn split_nodes_image(spans: &[TextSpan]) -> Result<Vec<TextSpan>, InlineError> {
    split_bracketed::<Image>(spans)
}

/// Splits `[text](url)` constructs out of each span into link spans.
pub fn split_nodes_link(spans: &[TextSpan]) -> Result<Vec<TextSpan>, InlineError> {
    split_bracketed::<Link>(spans)
}

/// Partitions each span into plain text interleaved with `K` spans.
///
/// A span with no `K` construct passes through verbatim, whatever its kind.
/// A typed span that does contain one is split like a plain span; the
/// pipeline never produces that case because delimiters are split first.
/// Output for each input span is appended in order; adjacent plain spans from
/// different inputs are not merged.
pub fn split_bracketed<K: Bracketed>(spans: &[TextSpan]) -> Result<Vec<TextSpan>, InlineError> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let matches = K::extract(span.text());
        if matches.is_empty() {
            out.push(span.clone());
            continue;
        }
        split_on_matches::<K>(span.text(), &matches, &mut out)?;
    }
    Ok(out)
}

/// Consumes `text` left to right, one rendered marker per match.
///
/// Fails with [`InlineError::MalformedMarkup`] when a marker does not occur
/// in the unconsumed tail.
fn split_on_matches<K: Bracketed>(
    text: &str,
    matches: &[(&str, &str)],
    out: &mut Vec<TextSpan>,
) -> Result<(), InlineError> {
    let mut cur = Cursor::new(text);

    for &(label, url) in matches {
        let marker = K::marker(label, url);
        let before = cur
            .take_through(&marker)
            .ok_or_else(|| InlineError::unclosed(K::SECTION))?;
        if !before.is_empty() {
            out.push(TextSpan::plain(before));
        }
        out.push(TextSpan::with_url(label, K::KIND, Some(url.to_string()))?);
    }

    if !cur.eof() {
        out.push(TextSpan::plain(cur.take_rest()));
    }
    Ok(())
}
