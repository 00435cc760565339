//! Inline style attribute parsing

use crate::Declaration;

/// Parse `name: value; name: value` into declarations, in order
///
/// Segments without a colon or with an empty name are skipped. Values may be
/// empty and may contain further colons.
pub fn parse_inline_style(text: &str) -> Vec<Declaration> {
    text.split(';')
        .filter_map(|segment| {
            let (name, value) = segment.split_once(':')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(Declaration::new(name, value.trim()))
        })
        .collect()
}
