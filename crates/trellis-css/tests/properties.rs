//! Property tests for selector serialization and specificity

use proptest::prelude::*;
use trellis_css::{
    parse_selector, AttributeOperator, AttributePredicate, Selector, SimpleSelector, Specificity,
};

fn operator() -> impl Strategy<Value = AttributeOperator> {
    prop_oneof![
        Just(AttributeOperator::Exists),
        Just(AttributeOperator::Exact),
        Just(AttributeOperator::Contains),
        Just(AttributeOperator::StartsWith),
        Just(AttributeOperator::EndsWith),
        Just(AttributeOperator::HyphenSeparated),
    ]
}

fn attribute() -> impl Strategy<Value = AttributePredicate> {
    ("[a-z][a-z-]{0,5}", operator(), "[a-z0-9 ]{0,6}").prop_map(|(name, operator, value)| {
        let value = if operator == AttributeOperator::Exists { String::new() } else { value };
        AttributePredicate { name, operator, value }
    })
}

fn simple() -> impl Strategy<Value = SimpleSelector> {
    (
        proptest::option::of("[a-z][a-z0-9]{0,5}"),
        proptest::option::of("[a-z][a-z0-9-]{0,5}"),
        proptest::collection::vec("[a-z][a-z0-9_-]{0,5}", 0..3),
        proptest::collection::vec(attribute(), 0..3),
    )
        .prop_map(|(tag, id, classes, attributes)| SimpleSelector { tag, id, classes, attributes })
        .prop_filter("compound must constrain something", |s| !s.is_empty())
}

/// Compound with an optional pseudo-class
fn compound() -> impl Strategy<Value = Selector> {
    (simple(), 0..5u8, -5..20i32, simple()).prop_map(|(base, pseudo, n, negation)| {
        let base = Box::new(Selector::Simple(base));
        match pseudo {
            0 => Selector::FirstChild(base),
            1 => Selector::LastChild(base),
            2 => Selector::NthChild { inner: base, n },
            3 => Selector::Not { base, negation: Box::new(Selector::Simple(negation)) },
            _ => *base,
        }
    })
}

/// Left-folded chain of compounds, the only shape the parser produces
fn selector() -> impl Strategy<Value = Selector> {
    (compound(), proptest::collection::vec((0..3u8, compound()), 0..3)).prop_map(|(head, rest)| {
        rest.into_iter().fold(head, |left, (combinator, right)| {
            let (left, right) = (Box::new(left), Box::new(right));
            match combinator {
                0 => Selector::Descendant { ancestor: left, descendant: right },
                1 => Selector::Child { parent: left, child: right },
                _ => Selector::AdjacentSibling { first: left, second: right },
            }
        })
    })
}

proptest! {
    #[test]
    fn display_then_parse_is_identity(selector in selector()) {
        let text = selector.to_string();
        let reparsed = parse_selector(&text);
        prop_assert_eq!(reparsed, Ok(selector), "text was {:?}", text);
    }

    #[test]
    fn combining_never_lowers_specificity(left in selector(), right in compound()) {
        let (l, r) = (left.specificity(), right.specificity());
        let combined = Selector::Child { parent: Box::new(left), child: Box::new(right) };
        prop_assert!(combined.specificity() >= l);
        prop_assert!(combined.specificity() >= r);
    }

    #[test]
    fn adding_a_class_raises_specificity(mut base in simple(), class in "[a-z]{1,4}") {
        let before = base.specificity();
        base.classes.push(class);
        prop_assert!(base.specificity() > before);
        prop_assert_eq!(base.specificity().classes(), before.classes() + 1);
    }

    #[test]
    fn adding_an_attribute_raises_specificity(mut base in simple(), predicate in attribute()) {
        let before = base.specificity();
        base.attributes.push(predicate);
        prop_assert!(base.specificity() > before);
        prop_assert_eq!(base.specificity().classes(), before.classes() + 1);
        prop_assert_eq!(base.specificity().ids(), before.ids());
        prop_assert_eq!(base.specificity().tags(), before.tags());
    }

    #[test]
    fn adding_an_id_outranks_any_classes(
        mut base in simple(),
        id in "[a-z][a-z0-9-]{0,5}",
        extra in proptest::collection::vec("[a-z]{1,4}", 0..6)
    ) {
        base.id = None;
        let before = base.specificity();
        prop_assert_eq!(before.ids(), 0);

        // however many classes the id-less compound gains, the id still wins
        let mut classy = base.clone();
        classy.classes.extend(extra);

        base.id = Some(id);
        let after = base.specificity();
        prop_assert_eq!(after.ids(), 1);
        prop_assert_eq!((after.classes(), after.tags()), (before.classes(), before.tags()));
        prop_assert!(after > before);
        prop_assert!(after > classy.specificity());
    }

    #[test]
    fn pseudo_class_adds_one_class_point(base in simple()) {
        let before = Selector::Simple(base.clone()).specificity();
        let wrapped = Selector::LastChild(Box::new(Selector::Simple(base)));
        prop_assert_eq!(wrapped.specificity(), before + Specificity(0, 1, 0));
    }
}
