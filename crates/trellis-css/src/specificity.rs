//! Selector Specificity

use std::ops::Add;

use crate::{Selector, SimpleSelector};

/// Selector specificity (ids, classes + attributes + pseudo-classes, tags)
///
/// Compared lexicographically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0);

    #[inline]
    pub fn ids(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn classes(self) -> u32 {
        self.1
    }

    #[inline]
    pub fn tags(self) -> u32 {
        self.2
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl std::fmt::Display for Specificity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

impl SimpleSelector {
    pub fn specificity(&self) -> Specificity {
        Specificity(
            u32::from(self.id.is_some()),
            u32::try_from(self.classes.len() + self.attributes.len()).unwrap_or(u32::MAX),
            u32::from(self.tag.as_deref().is_some_and(|t| !t.is_empty())),
        )
    }
}

impl Selector {
    /// Compositional specificity: combinators and `:not` sum their parts,
    /// structural pseudo-classes add one class-level point.
    pub fn specificity(&self) -> Specificity {
        const PSEUDO: Specificity = Specificity(0, 1, 0);

        match self {
            Self::Simple(simple) => simple.specificity(),
            Self::Descendant { ancestor: a, descendant: b }
            | Self::Child { parent: a, child: b }
            | Self::AdjacentSibling { first: a, second: b }
            | Self::Not { base: a, negation: b } => a.specificity() + b.specificity(),
            Self::FirstChild(inner) | Self::LastChild(inner) | Self::NthChild { inner, .. } => {
                inner.specificity() + PSEUDO
            }
        }
    }
}
