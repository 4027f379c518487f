//! # Inline Kinds
//!
//! Each formatting kind owns its syntax: delimiter strings for the symmetric
//! kinds, marker rendering for the bracket kinds.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIM = "**"`
//! - **`Italic`**: `DELIM = "*"`
//! - **`CodeSpan`**: ``DELIM = "`"``
//! - **`Image`**: `![alt](url)`
//! - **`Link`**: `[text](url)`
//!
//! The splitters call these; they never hardcode `**` or `](`.

pub mod bold;
pub mod code_span;
pub mod image;
pub mod italic;
pub mod link;

pub use bold::Bold;
pub use code_span::CodeSpan;
pub use image::Image;
pub use italic::Italic;
pub use link::Link;

use super::types::SpanKind;

/// A kind delimited by the same literal string on both sides.
pub trait Delimited {
    const DELIM: &'static str;
    const KIND: SpanKind;
}

/// A kind written as `[label](url)`, optionally behind a prefix.
pub trait Bracketed {
    /// Literal text before the `[`: `"!"` for images, empty for links.
    const PREFIX: &'static str;
    const KIND: SpanKind;
    /// Name used in the unclosed-section error.
    const SECTION: &'static str;

    /// Returns `(label, url)` for every construct of this kind in `text`.
    fn extract(text: &str) -> Vec<(&str, &str)>;

    /// Renders the literal source form of a match, e.g. `![alt](url)`.
    fn marker(label: &str, url: &str) -> String {
        format!("{}[{label}]({url})", Self::PREFIX)
    }
}
