use super::{Delimited, SpanKind};

/// Strong emphasis, `**bold**`.
///
/// Must be split before [`super::Italic`]: `*` is a substring of `**`.
pub struct Bold;

impl Delimited for Bold {
    const DELIM: &'static str = "**";
    const KIND: SpanKind = SpanKind::Bold;
}
