//! Regex extraction of `![alt](url)` and `[text](url)` constructs.
//!
//! Each capture is the shortest run up to the next `](` or `)`, so labels may
//! hold `[` and a URL ends at its first `)`. Nested brackets are not balanced.

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

// The regex crate has no lookbehind; `!`-prefixed hits are skipped in
// `extract_markdown_links` by resuming the search just past their `[`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

/// Returns `(alt, url)` for every image in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_RE
        .captures_iter(text)
        .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
        .collect()
}

/// Returns `(text, url)` for every link in `text`, left to right.
///
/// A bracket construct directly after `!` is an image and is never returned,
/// but a link starting inside it still is.
pub fn extract_markdown_links(text: &str) -> Vec<(&str, &str)> {
    let mut out = Vec::new();
    let mut pos = 0;

    while let Some(caps) = LINK_RE.captures_at(text, pos) {
        let (Some(full), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            break;
        };
        if text[..full.start()].ends_with('!') {
            // `[` is one byte, so this stays on a char boundary.
            pos = full.start() + 1;
            continue;
        }
        out.push((label.as_str(), url.as_str()));
        pos = full.end();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn extracts_images() {
        let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            extract_markdown_images(text),
            vec![
                ("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                ("obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
            ]
        );
    }

    #[test]
    fn extracts_links() {
        let text = "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com/@bootdotdev)";
        assert_eq!(
            extract_markdown_links(text),
            vec![
                ("to boot dev", "https://www.boot.dev"),
                ("to youtube", "https://www.youtube.com/@bootdotdev"),
            ]
        );
    }

    #[test]
    fn short_image_pair() {
        assert_eq!(
            extract_markdown_images("![a](u1) and ![b](u2)"),
            vec![("a", "u1"), ("b", "u2")]
        );
    }

    #[test]
    fn images_and_links_never_share_a_match() {
        let text = "![img](i.png) [link](l.html) ![img2](j.png)";
        assert_eq!(
            extract_markdown_images(text),
            vec![("img", "i.png"), ("img2", "j.png")]
        );
        assert_eq!(extract_markdown_links(text), vec![("link", "l.html")]);
    }

    #[test]
    fn adjacent_links() {
        assert_eq!(
            extract_markdown_links("[a](b)[c](d)"),
            vec![("a", "b"), ("c", "d")]
        );
    }

    #[test]
    fn link_directly_after_image() {
        assert_eq!(
            extract_markdown_links("![a](b)[c](d)"),
            vec![("c", "d")]
        );
    }

    #[rstest]
    #[case("see [a](f(x)) ok", vec![("a", "f(x")])]
    #[case("[a [b](u)", vec![("a [b", "u")])]
    #[case("![x [y](z)", vec![("y", "z")])]
    #[case("[not] a [link](u)", vec![("not] a [link", "u")])]
    #[case("![a](b) ![c](d)", vec![])]
    fn link_captures_stop_at_first_closer(
        #[case] text: &str,
        #[case] expected: Vec<(&str, &str)>,
    ) {
        assert_eq!(extract_markdown_links(text), expected);
    }

    #[rstest]
    #[case("![a](f(x))", vec![("a", "f(x")])]
    #[case("![x [y](z)", vec![("x [y", "z")])]
    #[case("[link](u) ![img](v)", vec![("img", "v")])]
    fn image_captures_stop_at_first_closer(
        #[case] text: &str,
        #[case] expected: Vec<(&str, &str)>,
    ) {
        assert_eq!(extract_markdown_images(text), expected);
    }

    #[test]
    fn empty_label_and_url() {
        assert_eq!(extract_markdown_links("[]()"), vec![("", "")]);
        assert_eq!(extract_markdown_images("![]()"), vec![("", "")]);
    }

    #[test]
    fn no_matches_without_brackets() {
        assert!(extract_markdown_images("plain text (with parens)").is_empty());
        assert!(extract_markdown_links("plain text [with brackets]").is_empty());
    }
}
