pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{LeafNode, inline_to_html, text_node_to_html_node};
pub use parsing::inline::{
    InlineError, SpanKind, TextSpan, extract_markdown_images, extract_markdown_links,
    split_nodes_delimiter, split_nodes_image, split_nodes_link, text_to_textnodes,
};
