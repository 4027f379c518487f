//! # Inline Parsing
//!
//! Multi-pass splitting of one block of inline markdown into typed
//! [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Input starts as a single plain span. Each pass takes the span sequence and
//! returns a new, usually longer, one. Only plain text is re-split by the
//! delimiter passes; already-typed spans flow through unchanged.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan` and the closed `SpanKind` enum
//! - **`kinds`**: per-kind syntax (delimiters, bracket markers)
//! - **`delimiter`**: symmetric delimiter splitting (`**`, `*`, `` ` ``)
//! - **`extract`**: regex extraction of image and link constructs
//! - **`brackets`**: splitting spans around extracted images and links
//! - **`cursor`**: consumed-prefix tracking for bracket splitting
//! - **`parser`**: `text_to_textnodes()` main entry point
//!
//! ## Pass Precedence
//!
//! Bold before italic, images before links. Formatting does not nest.

pub mod brackets;
pub mod cursor;
pub mod delimiter;
pub mod error;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use brackets::{split_nodes_image, split_nodes_link};
pub use delimiter::split_nodes_delimiter;
pub use error::InlineError;
pub use extract::{extract_markdown_images, extract_markdown_links};
pub use parser::text_to_textnodes;
pub use types::{SpanKind, TextSpan};
