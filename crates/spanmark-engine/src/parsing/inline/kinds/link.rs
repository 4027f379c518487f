use super::{Bracketed, SpanKind};
use crate::parsing::inline::extract::extract_markdown_links;

pub struct Link;

impl Bracketed for Link {
    const PREFIX: &'static str = "";
    const KIND: SpanKind = SpanKind::Link;
    const SECTION: &'static str = "link";

    fn extract(text: &str) -> Vec<(&str, &str)> {
        extract_markdown_links(text)
    }
}
