//! Character-level lexer.
//!
//! The lexer makes a single left-to-right pass over the input with one
//! cursor and no re-scanning. Letters collapse into `Identifier` runs,
//! digits into `Number` runs, and every other character maps through a
//! fixed symbol table, falling back to `None` for anything unmapped. The
//! lexer is total: every input produces a token stream, terminated by
//! exactly one `Eof`.
//!
//! Token literals borrow directly from the input; the cursor is a byte
//! offset into the source and no text is copied.

use crate::token::{Token, TokenKind};

/// Tokenize `source` into a flat token sequence ending in `Eof`.
#[inline]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).tokenize()
}

/// Single-pass lexer over one in-memory document.
pub struct Lexer<'a> {
    /// The complete input text.
    source: &'a str,
    /// Byte offset of the cursor, always on a character boundary.
    current: usize,
    /// Tokens produced so far.
    tokens: Vec<Token<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for the given input.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            current: 0,
            tokens: Vec::with_capacity(source.len() / 2),
        }
    }

    /// Consume the lexer and produce the token sequence.
    ///
    /// The outer loop advances the cursor unconditionally after every
    /// token; run scanners account for this by retreating one position
    /// before returning.
    pub fn tokenize(mut self) -> Vec<Token<'a>> {
        while !self.is_end() {
            let token = self.scan_token();
            self.tokens.push(token);
            self.advance();
        }

        self.tokens.push(Token::new(TokenKind::Eof, ""));
        self.tokens
    }

    #[inline(always)]
    fn is_end(&self) -> bool {
        self.current >= self.source.len()
    }

    #[inline(always)]
    fn current_char(&self) -> char {
        match self.source[self.current..].chars().next() {
            Some(c) => c,
            None => '\0',
        }
    }

    /// Move one character forward. Only called with the cursor inside the
    /// source, so `current_char` is never the fallback NUL.
    #[inline(always)]
    fn advance(&mut self) {
        self.current += self.current_char().len_utf8();
    }

    /// Move one character back, landing on the previous boundary.
    #[inline(always)]
    fn retreat(&mut self) {
        self.current -= 1;
        while !self.source.is_char_boundary(self.current) {
            self.current -= 1;
        }
    }

    fn scan_token(&mut self) -> Token<'a> {
        let c = self.current_char();
        if c.is_alphabetic() {
            self.scan_run(TokenKind::Identifier, char::is_alphabetic)
        } else if c.is_ascii_digit() {
            self.scan_run(TokenKind::Number, |c: char| c.is_ascii_digit())
        } else {
            self.scan_symbol()
        }
    }

    /// Consume a maximal run of characters matching `pred` into one token.
    ///
    /// On return the cursor sits on the last character of the run, not one
    /// past it: the outer scan loop advances unconditionally, and skipping
    /// the retreat would silently drop the character after the run.
    fn scan_run(&mut self, kind: TokenKind, pred: fn(char) -> bool) -> Token<'a> {
        let start = self.current;
        while !self.is_end() && pred(self.current_char()) {
            self.advance();
        }
        let literal = &self.source[start..self.current];
        self.retreat();

        Token::new(kind, literal)
    }

    fn scan_symbol(&self) -> Token<'a> {
        let c = self.current_char();
        let literal = &self.source[self.current..self.current + c.len_utf8()];

        Token::new(symbol_kind(c), literal)
    }
}

/// The fixed character-to-kind table for single-character tokens.
fn symbol_kind(c: char) -> TokenKind {
    match c {
        '#' => TokenKind::Hashtag,
        ',' => TokenKind::Comma,
        '\n' => TokenKind::NewLine,
        '\r' => TokenKind::CarriageReturn,
        ' ' => TokenKind::WhiteSpace,
        '\t' => TokenKind::Tab,
        '!' => TokenKind::Exclamation,
        '*' => TokenKind::Star,
        '_' => TokenKind::Underscore,
        '-' => TokenKind::Minus,
        '>' => TokenKind::GreaterThan,
        '`' => TokenKind::BackTick,
        '.' => TokenKind::Dot,
        '[' => TokenKind::LeftSquareBracket,
        ']' => TokenKind::RightSquareBracket,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        _ => TokenKind::None,
    }
}
