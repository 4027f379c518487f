use super::{Bracketed, SpanKind};
use crate::parsing::inline::extract::extract_markdown_images;

/// Image inline type, `![alt](url)`.
///
/// Claimed before [`super::Link`] since its trailing syntax is a link.
pub struct Image;

impl Bracketed for Image {
    const PREFIX: &'static str = "!";
    const KIND: SpanKind = SpanKind::Image;
    const SECTION: &'static str = "image";

    fn extract(text: &str) -> Vec<(&str, &str)> {
        extract_markdown_images(text)
    }
}
