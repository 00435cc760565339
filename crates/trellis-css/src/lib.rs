//! Trellis CSS - Selectors & Cascade
//!
//! Selector parsing and matching, stylesheet rule extraction and cascade
//! resolution over a [`trellis_dom::DomTree`].

mod config;
mod error;
mod selector;
mod parser;
mod specificity;
mod matcher;
mod scanner;
mod extractor;
mod inline;
mod cascade;
mod query;

pub use config::Config;
pub use error::{SelectorError, StylesheetError};
pub use selector::{AttributeOperator, AttributePredicate, Selector, SimpleSelector};
pub use parser::parse_selector;
pub use specificity::Specificity;
pub use matcher::matches;
pub use scanner::tokenize_stylesheet;
pub use extractor::{extract_rules, StylesheetParser};
pub use inline::parse_inline_style;
pub use cascade::{apply_stylesheet, determine_properties, matching_rules, StyleResolver};
pub use query::{find, find_all, find_all_matching, find_matching};

/// Scan and extract a stylesheet with the default configuration
pub fn parse_stylesheet(css: &str) -> Result<Stylesheet, StylesheetError> {
    StylesheetParser::new().parse(css)
}

/// Parsed stylesheet: rules in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Append rules, keeping source order
    pub fn extend(&mut self, other: Stylesheet) {
        self.rules.extend(other.rules);
    }
}

impl<'a> IntoIterator for &'a Stylesheet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// One selector with its declarations
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: Selector,
    pub declarations: Vec<Declaration>,
}

/// Declaration (property: value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}
