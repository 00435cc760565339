//! Stylesheet Scanner
//!
//! Flattens `cssparser`'s token stream into plain token values for the rule
//! extractor. Blocks come back as explicit open/close tokens, whitespace is
//! kept and comments are dropped.

use cssparser::{ParseError, Parser, ParserInput, ToCss, Token};

/// Scan stylesheet text into token values
pub fn tokenize_stylesheet(css: &str) -> Vec<String> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut tokens = Vec::new();
    scan_block(&mut parser, &mut tokens);
    tracing::trace!("Scanned {} stylesheet tokens", tokens.len());
    tokens
}

fn scan_block<'i>(parser: &mut Parser<'i, '_>, out: &mut Vec<String>) {
    loop {
        let token = match parser.next_including_whitespace() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };

        let close = match &token {
            Token::CurlyBracketBlock => Some(("{".to_string(), "}")),
            Token::ParenthesisBlock => Some(("(".to_string(), ")")),
            Token::SquareBracketBlock => Some(("[".to_string(), "]")),
            Token::Function(name) => Some((format!("{}(", &**name), ")")),
            other => {
                out.push(other.to_css_string());
                None
            }
        };

        if let Some((open, close)) = close {
            out.push(open);
            let mut content_end = None;
            let nested: Result<(), ParseError<'i, ()>> = parser.parse_nested_block(|inner| {
                scan_block(inner, out);
                content_end = Some(inner.position());
                Ok(())
            });
            if nested.is_err() {
                tracing::debug!("Nested stylesheet block failed to scan");
            }
            // cssparser closes blocks implicitly at end of input, so only
            // emit the close token when the source text has one
            if content_end.is_some_and(|end| parser.slice_from(end).starts_with(close)) {
                out.push(close.to_string());
            } else {
                tracing::debug!("Unterminated block in stylesheet");
            }
        }
    }
}
