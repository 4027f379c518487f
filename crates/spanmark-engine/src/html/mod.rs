//! # HTML Lowering
//!
//! Maps each [`TextSpan`] to a single HTML leaf node and renders it.
//!
//! | kind   | tag    | value     | props                 |
//! |--------|--------|-----------|-----------------------|
//! | Plain  | none   | text      |                       |
//! | Bold   | `b`    | text      |                       |
//! | Italic | `i`    | text      |                       |
//! | Code   | `code` | text      |                       |
//! | Link   | `a`    | text      | `href`                |
//! | Image  | `img`  | empty     | `src`, `alt`          |

use std::borrow::Cow;
use std::fmt::Write;

use crate::parsing::inline::{InlineError, SpanKind, TextSpan, text_to_textnodes};

/// An HTML element with no children, or a raw text node when `tag` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<&'static str>,
    pub value: String,
    /// Attributes in insertion order.
    pub props: Vec<(&'static str, String)>,
}

impl LeafNode {
    pub fn new(tag: Option<&'static str>, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
            props: Vec::new(),
        }
    }

    pub fn with_prop(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.props.push((name, value.into()));
        self
    }

    /// Looks up an attribute by name.
    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Renders the props as ` k="v"` pairs.
    pub fn props_to_html(&self, escape: bool) -> String {
        let mut out = String::new();
        for (name, value) in &self.props {
            let value = if escape {
                html_escape::encode_double_quoted_attribute(value)
            } else {
                Cow::Borrowed(value.as_str())
            };
            write!(out, r#" {name}="{value}""#).unwrap();
        }
        out
    }

    /// Renders the node with text and attribute values escaped.
    pub fn to_html(&self) -> String {
        self.render(true)
    }

    /// Renders the node. `img` is written as a void element.
    pub fn render(&self, escape: bool) -> String {
        let value = if escape {
            html_escape::encode_text(&self.value)
        } else {
            Cow::Borrowed(self.value.as_str())
        };
        match self.tag {
            None => value.into_owned(),
            Some(tag @ "img") => format!("<{tag}{}>", self.props_to_html(escape)),
            Some(tag) => format!("<{tag}{}>{value}</{tag}>", self.props_to_html(escape)),
        }
    }
}

/// Lowers one span to its leaf node.
pub fn text_node_to_html_node(span: &TextSpan) -> LeafNode {
    let url = span.url().unwrap_or_default();
    match span.kind() {
        SpanKind::Plain => LeafNode::new(None, span.text()),
        SpanKind::Bold => LeafNode::new(Some("b"), span.text()),
        SpanKind::Italic => LeafNode::new(Some("i"), span.text()),
        SpanKind::Code => LeafNode::new(Some("code"), span.text()),
        SpanKind::Link => LeafNode::new(Some("a"), span.text()).with_prop("href", url),
        SpanKind::Image => LeafNode::new(Some("img"), "")
            .with_prop("src", url)
            .with_prop("alt", span.text()),
    }
}

/// Runs the inline pipeline over `text` and renders the result as HTML.
pub fn inline_to_html(text: &str, escape: bool) -> Result<String, InlineError> {
    let spans = text_to_textnodes(text)?;
    Ok(spans
        .iter()
        .map(|span| text_node_to_html_node(span).render(escape))
        .collect())
}
