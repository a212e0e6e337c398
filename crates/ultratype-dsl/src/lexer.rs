use logos::Logos;

use crate::error::Span;
use crate::token::Token;

/// A token paired with its source span.
///
/// `token` is `None` for bytes the lexer cannot match. The tag scanner stops
/// at the first such token instead of failing, so they are kept in the
/// stream rather than collected as errors.
#[derive(Debug, Clone)]
pub struct SpannedToken<'a> {
    pub token: Option<Token>,
    pub span: Span,
    pub text: &'a str,
}

/// Tokenizes a tag region into a sequence of spanned tokens.
pub fn tokenize(source: &str) -> Vec<SpannedToken<'_>> {
    Token::lexer(source)
        .spanned()
        .map(|(result, range)| SpannedToken {
            token: result.ok(),
            span: Span::new(range.start, range.end),
            text: &source[range],
        })
        .collect()
}
