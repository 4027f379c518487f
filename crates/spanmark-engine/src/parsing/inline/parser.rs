use super::{
    brackets::{split_nodes_image, split_nodes_link},
    delimiter::split_delimited,
    error::InlineError,
    kinds::{Bold, CodeSpan, Italic},
    types::TextSpan,
};

/// Converts one block of inline markdown into typed spans.
///
/// # Pass order
/// 1. `**` bold, before italic since `*` is a substring of `**`
/// 2. `*` italic
/// 3. `` ` `` code
/// 4. `![alt](url)` images, before links since an image ends in a link
/// 5. `[text](url)` links
///
/// Typed spans are never re-scanned by the delimiter passes, so formatting
/// does not nest: `**a *b* c**` is one bold span containing the stars.
///
/// # Errors
/// Any pass failing aborts the whole conversion; there is no partial output.
pub fn text_to_textnodes(text: &str) -> Result<Vec<TextSpan>, InlineError> {
    let spans = vec![TextSpan::plain(text)];

    let spans = split_delimited::<Bold>(&spans)?;
    log::trace!("bold pass: {} spans", spans.len());
    let spans = split_delimited::<Italic>(&spans)?;
    log::trace!("italic pass: {} spans", spans.len());
    let spans = split_delimited::<CodeSpan>(&spans)?;
    log::trace!("code pass: {} spans", spans.len());
    let spans = split_nodes_image(&spans)?;
    log::trace!("image pass: {} spans", spans.len());
    let spans = split_nodes_link(&spans)?;
    log::trace!("link pass: {} spans", spans.len());

    Ok(spans)
}
