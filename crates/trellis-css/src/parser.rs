//! Selector Parser
//!
//! Selector text is split into tokens, then compounds are folded left to
//! right with the combinator consumed between them.

use std::iter::Peekable;
use std::str::{Chars, FromStr};
use std::vec::IntoIter;

use crate::{AttributeOperator, AttributePredicate, Selector, SelectorError, SimpleSelector};

type Tokens = Peekable<IntoIter<Token>>;

/// Selector token
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    /// No whitespace between this token and the previous one
    glued: bool,
}

/// Parse a selector string
pub fn parse_selector(text: &str) -> Result<Selector, SelectorError> {
    let mut tokens = tokenize(text)?.into_iter().peekable();
    let mut current: Option<Selector> = None;
    let mut pending: Option<char> = None;

    while let Some(token) = tokens.next() {
        let combinator = match token.text.as_str() {
            ">" => Some('>'),
            "+" => Some('+'),
            "]" => return Err(SelectorError::UnbalancedBrackets),
            _ => None,
        };

        if let Some(c) = combinator {
            if current.is_none() {
                return Err(SelectorError::CombinatorAtStart(c));
            }
            if let Some(previous) = pending {
                return Err(SelectorError::DanglingCombinator(previous));
            }
            pending = Some(c);
            continue;
        }

        let compound = parse_compound(token, &mut tokens)?;
        current = Some(match current {
            None => compound,
            Some(left) => combine(left, pending.take(), compound),
        });
    }

    if let Some(c) = pending {
        return Err(SelectorError::DanglingCombinator(c));
    }
    current.ok_or(SelectorError::Empty)
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_selector(s)
    }
}

fn combine(left: Selector, combinator: Option<char>, right: Selector) -> Selector {
    let (left, right) = (Box::new(left), Box::new(right));
    match combinator {
        Some('>') => Selector::Child { parent: left, child: right },
        Some('+') => Selector::AdjacentSibling { first: left, second: right },
        _ => Selector::Descendant { ancestor: left, descendant: right },
    }
}

// ============================================================================
// Tokenizer
// ============================================================================

/// `>`, `+`, `~`, `[` and `]` always stand alone
fn is_structural(c: char) -> bool {
    matches!(c, '>' | '+' | '~' | '[' | ']')
}

fn tokenize(text: &str) -> Result<Vec<Token>, SelectorError> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut word_glued = false;
    let mut spaced = true;
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            flush_word(&mut tokens, &mut word, word_glued);
            spaced = true;
        } else if is_structural(c) {
            flush_word(&mut tokens, &mut word, word_glued);
            tokens.push(Token { text: c.to_string(), glued: !spaced });
            spaced = false;
        } else {
            if word.is_empty() {
                word_glued = !spaced;
            }
            word.push(c);
            spaced = false;
            match c {
                '(' => read_parenthesized(&mut chars, &mut word)?,
                '"' | '\'' => read_quoted(&mut chars, &mut word, c),
                ')' => return Err(SelectorError::UnbalancedParentheses),
                _ => {}
            }
        }
    }
    flush_word(&mut tokens, &mut word, word_glued);

    Ok(tokens)
}

fn flush_word(tokens: &mut Vec<Token>, word: &mut String, glued: bool) {
    if !word.is_empty() {
        tokens.push(Token { text: std::mem::take(word), glued });
    }
}

/// Copy up to and including the matching `)`
fn read_parenthesized(chars: &mut Chars<'_>, word: &mut String) -> Result<(), SelectorError> {
    let mut depth = 1usize;
    while let Some(c) = chars.next() {
        word.push(c);
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            '"' | '\'' => read_quoted(chars, word, c),
            _ => {}
        }
    }
    Err(SelectorError::UnbalancedParentheses)
}

/// Copy up to and including the closing quote (or to the end)
fn read_quoted(chars: &mut Chars<'_>, word: &mut String, quote: char) {
    for c in chars.by_ref() {
        word.push(c);
        if c == quote {
            return;
        }
    }
}

// ============================================================================
// Compounds
// ============================================================================

/// Parse one compound starting at `head`, consuming glued `[..]` groups and
/// a trailing glued pseudo-class
fn parse_compound(head: Token, tokens: &mut Tokens) -> Result<Selector, SelectorError> {
    let (mut simple, mut pseudo) = if head.text == "[" {
        let mut simple = SimpleSelector::default();
        simple.attributes.push(read_attribute(tokens)?);
        (simple, None)
    } else {
        match head.text.split_once(':') {
            Some((main, pseudo)) => (parse_simple(main)?, Some(pseudo.to_string())),
            None => (parse_simple(&head.text)?, None),
        }
    };

    while pseudo.is_none() {
        match tokens.peek() {
            Some(next) if next.glued && next.text == "[" => {
                tokens.next();
                simple.attributes.push(read_attribute(tokens)?);
            }
            Some(next) if next.glued && next.text.starts_with(':') => {
                pseudo = tokens.next().map(|t| t.text[1..].to_string());
            }
            _ => break,
        }
    }

    apply_pseudo(Selector::Simple(simple), pseudo)
}

/// `tag#id.class.class`
fn parse_simple(text: &str) -> Result<SimpleSelector, SelectorError> {
    let mut simple = SimpleSelector::default();
    let mut parts = text.split('.');
    let head = parts.next().unwrap_or_default();

    let (tag, id) = match head.split_once('#') {
        Some((tag, id)) => (tag, Some(id)),
        None => (head, None),
    };
    if !tag.is_empty() {
        simple.tag = Some(tag.to_string());
    }
    if let Some(id) = id {
        if id.is_empty() {
            return Err(SelectorError::EmptyName("#".to_string()));
        }
        simple.id = Some(id.to_string());
    }

    for class in parts {
        if class.is_empty() {
            return Err(SelectorError::EmptyName(".".to_string()));
        }
        simple.classes.push(class.to_string());
    }

    Ok(simple)
}

/// Collect tokens up to `]` (the `[` is already consumed)
fn read_attribute(tokens: &mut Tokens) -> Result<AttributePredicate, SelectorError> {
    let mut content = String::new();
    loop {
        match tokens.next() {
            Some(token) if token.text == "]" => break,
            Some(token) if token.text == "[" => return Err(SelectorError::UnbalancedBrackets),
            Some(token) => content.push_str(&token.text),
            None => return Err(SelectorError::UnbalancedBrackets),
        }
    }
    parse_attribute(&content)
}

fn is_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// `name`, `name=value` or `name<op>=value`, value optionally quoted
fn parse_attribute(content: &str) -> Result<AttributePredicate, SelectorError> {
    let invalid = || SelectorError::InvalidAttribute(content.to_string());

    let Some((left, raw_value)) = content.split_once('=') else {
        if !is_attribute_name(content) {
            return Err(invalid());
        }
        return Ok(AttributePredicate {
            name: content.to_string(),
            operator: AttributeOperator::Exists,
            value: String::new(),
        });
    };

    let (name, operator) = match left.chars().last() {
        Some('^') => (&left[..left.len() - 1], AttributeOperator::StartsWith),
        Some('$') => (&left[..left.len() - 1], AttributeOperator::EndsWith),
        Some('*') => (&left[..left.len() - 1], AttributeOperator::Contains),
        Some('|') => (&left[..left.len() - 1], AttributeOperator::HyphenSeparated),
        _ => (left, AttributeOperator::Exact),
    };
    if !is_attribute_name(name) {
        return Err(invalid());
    }

    let value = unquote(raw_value.trim()).ok_or_else(invalid)?;
    Ok(AttributePredicate {
        name: name.to_string(),
        operator,
        value: value.to_string(),
    })
}

/// Strip a matching pair of quotes. An unterminated quote is an error.
fn unquote(value: &str) -> Option<&str> {
    for quote in ['"', '\''] {
        if let Some(rest) = value.strip_prefix(quote) {
            return rest.strip_suffix(quote);
        }
    }
    Some(value)
}

// ============================================================================
// Pseudo-classes
// ============================================================================

fn apply_pseudo(base: Selector, pseudo: Option<String>) -> Result<Selector, SelectorError> {
    let Some(pseudo) = pseudo else {
        return Ok(base);
    };
    let inner = Box::new(base);

    match pseudo.as_str() {
        "first-child" => return Ok(Selector::FirstChild(inner)),
        "last-child" => return Ok(Selector::LastChild(inner)),
        _ => {}
    }

    if let Some(arg) = function_argument(&pseudo, "nth-child") {
        let n = arg
            .trim()
            .parse::<i32>()
            .map_err(|_| SelectorError::InvalidNthChild(arg.to_string()))?;
        return Ok(Selector::NthChild { inner, n });
    }

    if let Some(arg) = function_argument(&pseudo, "not") {
        let negation = parse_selector(arg).map_err(|e| SelectorError::InvalidNot {
            inner: arg.to_string(),
            source: Box::new(e),
        })?;
        return Ok(Selector::Not { base: inner, negation: Box::new(negation) });
    }

    Err(SelectorError::UnknownPseudoClass(pseudo))
}

/// `name(arg)` -> `arg`
fn function_argument<'a>(pseudo: &'a str, name: &str) -> Option<&'a str> {
    pseudo.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(tag: &str) -> Box<Selector> {
        Box::new(Selector::Simple(SimpleSelector::tag(tag)))
    }

    #[test]
    fn test_tokenize_glue() {
        let tokens = tokenize("a[href] > b").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        let glued: Vec<_> = tokens.iter().map(|t| t.glued).collect();
        assert_eq!(texts, vec!["a", "[", "href", "]", ">", "b"]);
        assert_eq!(glued, vec![false, true, true, true, false, false]);
    }

    #[test]
    fn test_tokenize_keeps_parentheses_and_quotes() {
        let tokens = tokenize("li:not(ul > li) [title=\"a b\"]").unwrap();
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["li:not(ul > li)", "[", "title=\"a b\"", "]"]);
    }

    #[test]
    fn test_parse_compound() {
        let selector = parse_selector("div#main.card.highlight").unwrap();
        let Selector::Simple(simple) = selector else {
            panic!("expected a simple selector");
        };
        assert_eq!(simple.tag.as_deref(), Some("div"));
        assert_eq!(simple.id.as_deref(), Some("main"));
        assert_eq!(simple.classes, vec!["card", "highlight"]);
    }

    #[test]
    fn test_parse_id_and_class_only() {
        let Selector::Simple(simple) = parse_selector("#nav").unwrap() else {
            panic!("expected a simple selector");
        };
        assert_eq!(simple.tag, None);
        assert_eq!(simple.id.as_deref(), Some("nav"));

        let Selector::Simple(simple) = parse_selector(".a.b").unwrap() else {
            panic!("expected a simple selector");
        };
        assert_eq!(simple.classes, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_combinators_fold_left() {
        let selector = parse_selector("a > b c").unwrap();
        assert_eq!(
            selector,
            Selector::Descendant {
                ancestor: Box::new(Selector::Child { parent: simple("a"), child: simple("b") }),
                descendant: simple("c"),
            }
        );

        let selector = parse_selector("h1+p").unwrap();
        assert_eq!(selector, Selector::AdjacentSibling { first: simple("h1"), second: simple("p") });
    }

    #[test]
    fn test_parse_attributes() {
        let Selector::Simple(simple) = parse_selector("a[href][data-x^=\"ab\"][lang|=en]").unwrap()
        else {
            panic!("expected a simple selector");
        };
        assert_eq!(simple.tag.as_deref(), Some("a"));
        let ops: Vec<_> = simple.attributes.iter().map(|a| a.operator).collect();
        assert_eq!(
            ops,
            vec![
                AttributeOperator::Exists,
                AttributeOperator::StartsWith,
                AttributeOperator::HyphenSeparated
            ]
        );
        assert_eq!(simple.attributes[1].value, "ab");
        assert_eq!(simple.attributes[2].value, "en");
    }

    #[test]
    fn test_spaced_attribute_is_descendant() {
        let selector = parse_selector("a [href]").unwrap();
        assert!(matches!(selector, Selector::Descendant { .. }));
    }

    #[test]
    fn test_attribute_then_pseudo() {
        let selector = parse_selector("input[type=\"text\"]:first-child").unwrap();
        let Selector::FirstChild(inner) = selector else {
            panic!("expected first-child");
        };
        let Selector::Simple(simple) = *inner else {
            panic!("expected a simple selector");
        };
        assert_eq!(simple.attributes[0].operator, AttributeOperator::Exact);
        assert_eq!(simple.attributes[0].value, "text");
    }

    #[test]
    fn test_parse_pseudo_classes() {
        assert_eq!(parse_selector("li:last-child").unwrap(), Selector::LastChild(simple("li")));
        assert_eq!(
            parse_selector("li:nth-child(3)").unwrap(),
            Selector::NthChild { inner: simple("li"), n: 3 }
        );
        assert_eq!(
            parse_selector("p:not(.intro)").unwrap().to_string(),
            "p:not(.intro)"
        );
    }

    #[test]
    fn test_tilde_is_plain_text() {
        let selector = parse_selector("a ~ b").unwrap();
        assert_eq!(
            selector,
            Selector::Descendant {
                ancestor: Box::new(Selector::Descendant { ancestor: simple("a"), descendant: simple("~") }),
                descendant: simple("b"),
            }
        );
    }

    #[test]
    fn test_combinator_errors() {
        assert_eq!(parse_selector("> a"), Err(SelectorError::CombinatorAtStart('>')));
        assert_eq!(parse_selector("a +"), Err(SelectorError::DanglingCombinator('+')));
        assert_eq!(parse_selector("a > + b"), Err(SelectorError::DanglingCombinator('>')));
        assert_eq!(parse_selector("   "), Err(SelectorError::Empty));
    }

    #[test]
    fn test_bracket_errors() {
        assert_eq!(parse_selector("a[href"), Err(SelectorError::UnbalancedBrackets));
        assert_eq!(parse_selector("a]"), Err(SelectorError::UnbalancedBrackets));
        assert_eq!(parse_selector("a[[x]]"), Err(SelectorError::UnbalancedBrackets));
        assert_eq!(parse_selector("li:nth-child(2"), Err(SelectorError::UnbalancedParentheses));
        assert_eq!(parse_selector("li)"), Err(SelectorError::UnbalancedParentheses));
    }

    #[test]
    fn test_attribute_errors() {
        assert!(matches!(parse_selector("a[]"), Err(SelectorError::InvalidAttribute(_))));
        assert!(matches!(parse_selector("a[x~=\"y\"]"), Err(SelectorError::InvalidAttribute(_))));
        assert!(matches!(parse_selector("a[x!=y]"), Err(SelectorError::InvalidAttribute(_))));
        assert!(matches!(parse_selector("a[x=\"y\"z]"), Err(SelectorError::InvalidAttribute(_))));
    }

    #[test]
    fn test_pseudo_errors() {
        assert_eq!(
            parse_selector("a:hover"),
            Err(SelectorError::UnknownPseudoClass("hover".to_string()))
        );
        assert_eq!(
            parse_selector("li:nth-child(2n+1)"),
            Err(SelectorError::InvalidNthChild("2n+1".to_string()))
        );
        assert!(matches!(
            parse_selector("p:not(> a)"),
            Err(SelectorError::InvalidNot { .. })
        ));
    }

    #[test]
    fn test_empty_names() {
        assert_eq!(parse_selector("div."), Err(SelectorError::EmptyName(".".to_string())));
        assert_eq!(parse_selector("#"), Err(SelectorError::EmptyName("#".to_string())));
    }

    #[test]
    fn test_from_str() {
        let selector: Selector = "ul > li".parse().unwrap();
        assert_eq!(selector.to_string(), "ul > li");
    }
}
