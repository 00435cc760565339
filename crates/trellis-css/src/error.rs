//! Parse errors

/// Selector parsing error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("combinator '{0}' has no selector before it")]
    CombinatorAtStart(char),

    #[error("combinator '{0}' has no selector after it")]
    DanglingCombinator(char),

    #[error("unbalanced brackets")]
    UnbalancedBrackets,

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("invalid attribute selector [{0}]")]
    InvalidAttribute(String),

    #[error("unknown pseudo-class :{0}")]
    UnknownPseudoClass(String),

    #[error("nth-child expects an integer, got '{0}'")]
    InvalidNthChild(String),

    #[error("invalid selector inside :not({inner})")]
    InvalidNot {
        inner: String,
        #[source]
        source: Box<SelectorError>,
    },

    #[error("missing name after '{0}'")]
    EmptyName(String),
}

/// Stylesheet extraction error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylesheetError {
    #[error("invalid selector '{selector}'")]
    Selector {
        selector: String,
        #[source]
        source: SelectorError,
    },

    #[error("nested block inside a rule")]
    NestedBlock,
}
