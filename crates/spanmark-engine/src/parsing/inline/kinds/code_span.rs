use super::{Delimited, SpanKind};

/// Code span inline type with owned delimiter constant.
///
/// A single backtick on each side. Split after bold and italic, so `*` inside
/// backticks has already been claimed by those passes.
pub struct CodeSpan;

impl Delimited for CodeSpan {
    const DELIM: &'static str = "`";
    const KIND: SpanKind = SpanKind::Code;
}
