//! Scanner for the tag region of a field line.
//!
//! The region is consumed left to right as a run of `target[?]:"values"`
//! triples, optionally interleaved with `-` fillers. Scanning stops at the
//! first token that does not continue the run; what remains is reported back
//! to the caller as trailing text.

use crate::error::Span;
use crate::lexer::{tokenize, SpannedToken};
use crate::token::Token;

/// One `target[?]:"values"` occurrence, borrowed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag<'a> {
    /// Target name without the `?` marker.
    pub target: &'a str,
    pub nullable: bool,
    /// Text between the quotes, not yet split on commas.
    pub values: &'a str,
    /// Span of the whole triple, relative to the scanned region.
    pub span: Span,
}

/// Unconsumed text after the last recognized tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trailing<'a> {
    pub text: &'a str,
    pub span: Span,
}

/// Result of scanning a tag region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagScan<'a> {
    pub tags: Vec<RawTag<'a>>,
    pub trailing: Option<Trailing<'a>>,
}

/// Scans `region` for tags.
///
/// Never fails: anything that does not form a tag ends the scan and is
/// returned in [`TagScan::trailing`].
pub fn scan_tags(region: &str) -> TagScan<'_> {
    let tokens = tokenize(region);
    let mut scan = TagScan::default();
    let mut pos = 0;

    while let Some(current) = tokens.get(pos) {
        match current.token {
            Some(Token::Filler) => {
                pos += 1;
            }
            Some(Token::Target) => match tag_triple(&tokens[pos..]) {
                Some(tag) => {
                    scan.tags.push(tag);
                    pos += 3;
                }
                None => break,
            },
            _ => break,
        }
    }

    if let Some(stop) = tokens.get(pos) {
        let text = region[stop.span.start..].trim_end();
        scan.trailing = Some(Trailing {
            text,
            span: Span::new(stop.span.start, stop.span.start + text.len()),
        });
    }

    scan
}

fn tag_triple<'a>(tokens: &[SpannedToken<'a>]) -> Option<RawTag<'a>> {
    let [target, colon, literal, ..] = tokens else {
        return None;
    };
    if colon.token != Some(Token::Colon) || literal.token != Some(Token::StringLiteral) {
        return None;
    }

    let (name, nullable) = match target.text.strip_suffix('?') {
        Some(name) => (name, true),
        None => (target.text, false),
    };
    let values = &literal.text[1..literal.text.len() - 1];

    Some(RawTag {
        target: name,
        nullable,
        values,
        span: Span::new(target.span.start, literal.span.end),
    })
}
