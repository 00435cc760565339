//! Selector AST
//!
//! Immutable once parsed. `Display` writes the canonical text form, which
//! parses back to an equal AST.

use std::fmt;

/// Parsed selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Compound of tag, id, classes and attribute predicates
    Simple(SimpleSelector),
    /// `ancestor descendant`
    Descendant {
        ancestor: Box<Selector>,
        descendant: Box<Selector>,
    },
    /// `parent > child`
    Child {
        parent: Box<Selector>,
        child: Box<Selector>,
    },
    /// `first + second`
    AdjacentSibling {
        first: Box<Selector>,
        second: Box<Selector>,
    },
    /// `inner:first-child`
    FirstChild(Box<Selector>),
    /// `inner:last-child`
    LastChild(Box<Selector>),
    /// `inner:nth-child(n)`, 1-based
    NthChild { inner: Box<Selector>, n: i32 },
    /// `base:not(negation)`
    Not {
        base: Box<Selector>,
        negation: Box<Selector>,
    },
}

/// Compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributePredicate>,
}

impl SimpleSelector {
    /// Selector matching a tag name
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Nothing constrained at all
    pub fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }
}

/// `[name op "value"]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePredicate {
    pub name: String,
    pub operator: AttributeOperator,
    pub value: String,
}

/// Attribute comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeOperator {
    /// `[name]`
    Exists,
    /// `[name="v"]`
    Exact,
    /// `[name*="v"]`
    Contains,
    /// `[name^="v"]`
    StartsWith,
    /// `[name$="v"]`
    EndsWith,
    /// `[name|="v"]`
    HyphenSeparated,
}

impl AttributeOperator {
    /// Operator text, empty for `Exists`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exists => "",
            Self::Exact => "=",
            Self::Contains => "*=",
            Self::StartsWith => "^=",
            Self::EndsWith => "$=",
            Self::HyphenSeparated => "|=",
        }
    }

    /// Check an attribute value against the expected one
    pub fn test(self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Exists => true,
            Self::Exact => actual == expected,
            Self::Contains => actual.contains(expected),
            Self::StartsWith => actual.starts_with(expected),
            Self::EndsWith => actual.ends_with(expected),
            Self::HyphenSeparated => {
                actual == expected
                    || actual
                        .strip_prefix(expected)
                        .is_some_and(|rest| rest.starts_with('-'))
            }
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }
        for attr in &self.attributes {
            write!(f, "{}", attr)?;
        }
        Ok(())
    }
}

impl fmt::Display for AttributePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            AttributeOperator::Exists => write!(f, "[{}]", self.name),
            op => write!(f, "[{}{}\"{}\"]", self.name, op.as_str(), self.value),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple(simple) => write!(f, "{}", simple),
            Self::Descendant { ancestor, descendant } => write!(f, "{} {}", ancestor, descendant),
            Self::Child { parent, child } => write!(f, "{} > {}", parent, child),
            Self::AdjacentSibling { first, second } => write!(f, "{} + {}", first, second),
            Self::FirstChild(inner) => write!(f, "{}:first-child", inner),
            Self::LastChild(inner) => write!(f, "{}:last-child", inner),
            Self::NthChild { inner, n } => write!(f, "{}:nth-child({})", inner, n),
            Self::Not { base, negation } => write!(f, "{}:not({})", base, negation),
        }
    }
}
