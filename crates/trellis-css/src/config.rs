//! Style resolution configuration

/// Knobs shared by the stylesheet parser and the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Attribute holding inline declarations
    pub inline_style_attribute: String,
    /// Fail extraction when a `{` opens inside a rule block
    pub reject_nested_blocks: bool,
    /// Overlay inline declarations after stylesheet rules
    pub apply_inline_styles: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inline_style_attribute: "style".to_string(),
            reject_nested_blocks: true,
            apply_inline_styles: true,
        }
    }
}
