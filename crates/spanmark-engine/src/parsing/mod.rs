pub mod inline;

pub use inline::{InlineError, SpanKind, TextSpan, text_to_textnodes};
