use super::{Delimited, SpanKind};

pub struct Italic;

impl Delimited for Italic {
    const DELIM: &'static str = "*";
    const KIND: SpanKind = SpanKind::Italic;
}
