use logos::Logos;

/// Tokens of the tag region that follows a field's type.
///
/// Spaces and tabs between tokens are skipped automatically by logos.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    /// A tag target with an optional trailing `?` marker, e.g. `json?`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_\-]*\??")]
    Target,

    #[token(":")]
    Colon,

    /// A double-quoted value list. Quotes cannot be escaped.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// A bare `-` used to pad empty tag columns.
    #[token("-")]
    Filler,
}
