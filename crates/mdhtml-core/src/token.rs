//! Token types produced by the lexer.
//!
//! A token pairs a [`TokenKind`] with the exact source text it matched.
//! Tokens are immutable values: the lexer produces them once, in source
//! order, and nothing downstream mutates them.

use std::fmt;

/// The lexical class of a token.
///
/// Single characters map through a fixed table; letter and digit runs
/// collapse into `Identifier` and `Number`. Anything unmapped becomes
/// `None` with its literal preserved, so the lexer is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenKind {
    /// `#`
    Hashtag,
    /// `,`
    Comma,
    /// A maximal run of letters.
    Identifier,
    /// A maximal run of digits.
    Number,
    /// `\n`
    NewLine,
    /// `\r`
    CarriageReturn,
    /// A single space.
    WhiteSpace,
    /// `\t`
    Tab,
    /// `!`
    Exclamation,
    /// `*`
    Star,
    /// `_`
    Underscore,
    /// `-`
    Minus,
    /// `>`
    GreaterThan,
    /// `` ` ``
    BackTick,
    /// `.`
    Dot,
    /// `[`
    LeftSquareBracket,
    /// `]`
    RightSquareBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// End-of-input sentinel, always the last token. Also the kind of the
    /// zero-value token the parser hands out past the end of the stream.
    #[default]
    Eof,
    /// Any character with no mapping. The literal is preserved.
    None,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Hashtag => "Hashtag",
            TokenKind::Comma => "Comma",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::NewLine => "NewLine",
            TokenKind::CarriageReturn => "CarriageReturn",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::Tab => "Tab",
            TokenKind::Exclamation => "Exclamation",
            TokenKind::Star => "Star",
            TokenKind::Underscore => "Underscore",
            TokenKind::Minus => "Minus",
            TokenKind::GreaterThan => "GreaterThan",
            TokenKind::BackTick => "BackTick",
            TokenKind::Dot => "Dot",
            TokenKind::LeftSquareBracket => "LeftSquareBracket",
            TokenKind::RightSquareBracket => "RightSquareBracket",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Eof => "Eof",
            TokenKind::None => "None",
        };
        f.write_str(name)
    }
}

/// A single token: a kind plus the exact source text it matched.
///
/// The literal borrows from the input, so the token stream is zero-copy.
/// `Token::default()` is the `Eof` sentinel with an empty literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token<'a> {
    /// Lexical class.
    pub kind: TokenKind,
    /// The exact source text this token matched.
    pub literal: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: TokenKind, literal: &'a str) -> Self {
        Self { kind, literal }
    }
}
