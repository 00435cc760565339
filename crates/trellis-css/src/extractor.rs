//! Stylesheet Rule Extraction
//!
//! Three-state machine over token values. `{`, `}`, `:` and `;` drive the
//! transitions; everything else is accumulated into the current buffer.

use crate::{
    parse_selector, tokenize_stylesheet, Config, Declaration, Rule, Selector, Stylesheet,
    StylesheetError,
};

/// Extract rules from token values with the default configuration
pub fn extract_rules<I, S>(tokens: I) -> Result<Stylesheet, StylesheetError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    StylesheetParser::new().extract(tokens)
}

/// Stylesheet parser
#[derive(Debug, Clone, Default)]
pub struct StylesheetParser {
    config: Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Selector,
    Declaration,
    Value,
}

/// Rule under construction
#[derive(Default)]
struct PendingRule {
    selector: Option<Selector>,
    declarations: Vec<Declaration>,
}

impl StylesheetParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Scan and extract stylesheet text
    pub fn parse(&self, css: &str) -> Result<Stylesheet, StylesheetError> {
        self.extract(tokenize_stylesheet(css))
    }

    /// Run the state machine over token values
    ///
    /// All-or-nothing: the first invalid selector or rejected nested block
    /// fails the whole extraction.
    pub fn extract<I, S>(&self, tokens: I) -> Result<Stylesheet, StylesheetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stylesheet = Stylesheet::new();
        let mut state = State::Selector;
        let mut selector_buf = String::new();
        let mut name_buf = String::new();
        let mut value_buf = String::new();
        let mut rule = PendingRule::default();

        for token in tokens {
            let token = token.as_ref();
            match (state, token) {
                (State::Selector, "{") => {
                    let text = selector_buf.trim();
                    if !text.is_empty() {
                        let selector = parse_selector(text).map_err(|source| {
                            tracing::warn!("Invalid selector '{}': {}", text, source);
                            StylesheetError::Selector {
                                selector: text.to_string(),
                                source,
                            }
                        })?;
                        rule.selector = Some(selector);
                    }
                    selector_buf.clear();
                    state = State::Declaration;
                }

                (_, "{") => {
                    if self.config.reject_nested_blocks {
                        tracing::warn!("Nested block inside a rule");
                        return Err(StylesheetError::NestedBlock);
                    }
                    tracing::debug!("Ignoring nested block opener");
                }

                (_, "}") => {
                    if state == State::Value {
                        push_declaration(&mut rule, &name_buf, &value_buf);
                    }
                    let finished = std::mem::take(&mut rule);
                    match finished.selector {
                        Some(selector) if !finished.declarations.is_empty() => {
                            stylesheet.rules.push(Rule {
                                selector,
                                declarations: finished.declarations,
                            });
                        }
                        _ => tracing::trace!("Discarding incomplete rule block"),
                    }
                    selector_buf.clear();
                    name_buf.clear();
                    value_buf.clear();
                    state = State::Selector;
                }

                (State::Selector, _) => selector_buf.push_str(token),

                (State::Declaration, ":") => state = State::Value,
                (State::Declaration, ";") => name_buf.clear(),
                (State::Declaration, _) => name_buf.push_str(token),

                (State::Value, ";") => {
                    push_declaration(&mut rule, &name_buf, &value_buf);
                    name_buf.clear();
                    value_buf.clear();
                    state = State::Declaration;
                }
                (State::Value, _) => value_buf.push_str(token),
            }
        }

        tracing::debug!("Extracted {} rules", stylesheet.len());
        Ok(stylesheet)
    }
}

fn push_declaration(rule: &mut PendingRule, name: &str, value: &str) {
    let name = name.trim();
    if !name.is_empty() {
        rule.declarations.push(Declaration::new(name, value.trim()));
    }
}
