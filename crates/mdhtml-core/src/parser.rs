//! Recursive-descent parser over the token sequence.
//!
//! The parser keeps a single cursor into the token stream and dispatches
//! on the current token kind to produce one block node at a time, using
//! at most two tokens of lookahead to disambiguate constructs that share
//! a starting character (a `*` may open a list item, an emphasis span, or
//! a horizontal rule).
//!
//! Speculative constructs (horizontal rule, fenced code block, emphasis
//! closing runs) go through an explicit save/attempt/restore combinator
//! rather than ad hoc cursor arithmetic, so mismatches restore the cursor
//! exactly.
//!
//! The parser recognizes no errors: malformed input degrades to partial
//! text or `NoNode` rather than failing. Every non-speculative path
//! consumes at least one token, so parsing always terminates.

use std::borrow::Cow;

use crate::ast::{
    BlockQuote, Bold, CodeBlock, Document, Header, Image, InlineCode, Italic, Link, List,
    ListItem, Node, Paragraph, Text,
};
use crate::token::{Token, TokenKind};

/// Parse a token sequence into a document tree.
#[inline]
pub fn parse<'a>(tokens: Vec<Token<'a>>) -> Document<'a> {
    Parser::new(tokens).parse()
}

/// Token-cursor parser for one document.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    current: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over the given token sequence.
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the whole stream into a document.
    pub fn parse(&mut self) -> Document<'a> {
        let mut nodes = Vec::with_capacity(16);

        while !self.at_end() && self.current().kind != TokenKind::Eof {
            nodes.push(self.parse_block());
        }

        Document { nodes }
    }

    // ------------------------------------------------------------------
    // Cursor primitives
    // ------------------------------------------------------------------

    /// The token under the cursor, or the `Eof` sentinel past the end.
    #[inline(always)]
    fn current(&self) -> Token<'a> {
        self.token_at(self.current)
    }

    /// One token of lookahead without consuming.
    #[inline(always)]
    fn peek(&self) -> Token<'a> {
        self.token_at(self.current + 1)
    }

    /// `n` tokens of lookahead without consuming.
    #[inline(always)]
    fn peek_at(&self, n: usize) -> Token<'a> {
        self.token_at(self.current + n)
    }

    #[inline(always)]
    fn token_at(&self, index: usize) -> Token<'a> {
        self.tokens.get(index).copied().unwrap_or_default()
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.current += 1;
    }

    #[inline(always)]
    fn at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Run a speculative parse. If `attempt` returns `None`, the cursor is
    /// restored to exactly where it was before the attempt.
    fn attempt<T>(&mut self, attempt: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.current;
        let result = attempt(self);
        if result.is_none() {
            self.current = saved;
        }
        result
    }

    /// Consume one line terminator if present: a `NewLine`, or a
    /// `CarriageReturn` with its paired `NewLine`.
    fn skip_line_break(&mut self) {
        match self.current().kind {
            TokenKind::NewLine => self.advance(),
            TokenKind::CarriageReturn => {
                self.advance();
                if self.current().kind == TokenKind::NewLine {
                    self.advance();
                }
            }
            _ => {}
        }
    }

    #[inline(always)]
    fn at_line_end(&self) -> bool {
        self.at_end()
            || matches!(
                self.current().kind,
                TokenKind::NewLine | TokenKind::CarriageReturn | TokenKind::Eof
            )
    }

    // ------------------------------------------------------------------
    // Block dispatch
    // ------------------------------------------------------------------

    /// Produce one top-level block node.
    ///
    /// Lookahead is used purely to disambiguate constructs that start with
    /// the same character; every arm either succeeds or falls back to a
    /// paragraph without losing tokens.
    fn parse_block(&mut self) -> Node<'a> {
        match self.current().kind {
            TokenKind::Number if self.peek().kind == TokenKind::Dot => self.parse_list(),
            TokenKind::Hashtag => self.parse_header(),
            TokenKind::LeftSquareBracket | TokenKind::Exclamation => self.parse_link_or_image(),
            TokenKind::Star | TokenKind::Minus
                if self.peek().kind == TokenKind::WhiteSpace =>
            {
                self.parse_list()
            }
            TokenKind::Star
                if self.peek().kind == TokenKind::Star
                    && self.peek_at(2).kind == TokenKind::Star =>
            {
                self.parse_horizontal_rule()
            }
            TokenKind::Minus => self.parse_horizontal_rule(),
            TokenKind::GreaterThan => self.parse_block_quote(),
            TokenKind::BackTick if self.peek().kind != TokenKind::BackTick => {
                self.parse_inline_code()
            }
            TokenKind::BackTick => self.parse_code_block(),
            _ => self.parse_paragraph(),
        }
    }

    // ------------------------------------------------------------------
    // Block constructs
    // ------------------------------------------------------------------

    /// `# Header` with the level clamped to 6.
    fn parse_header(&mut self) -> Node<'a> {
        let mut level = 1usize;

        self.advance();
        while self.current().kind == TokenKind::Hashtag {
            level += 1;
            self.advance();
        }
        if self.current().kind == TokenKind::WhiteSpace {
            self.advance();
        }

        let mut children = Vec::new();
        while !self.at_line_end() {
            children.push(self.parse_inline());
        }
        self.skip_line_break();

        Node::Header(Header {
            level: level.min(6) as u8,
            children,
        })
    }

    /// Fallback block: collect inline children up to a line break, an
    /// embedded header, or end of stream.
    ///
    /// A blank stretch collapses to a single `NoNode`, swallowing the
    /// whole run of consecutive `NewLine` tokens so that any number of
    /// empty lines produces exactly one `NoNode`.
    fn parse_paragraph(&mut self) -> Node<'a> {
        // A carriage return at block position opens an empty CRLF line and
        // spends both tokens of the pair.
        if self.current().kind == TokenKind::CarriageReturn {
            self.advance();
            self.advance();
            return Node::NoNode;
        }

        let mut content: Vec<Node<'a>> = Vec::new();
        while !self.at_end()
            && !matches!(
                self.current().kind,
                TokenKind::NewLine | TokenKind::Hashtag | TokenKind::Eof
            )
        {
            let node = self.parse_inline();

            // A blank CRLF line inside the paragraph terminates it.
            if matches!(content.last(), Some(Node::NewLine)) && matches!(node, Node::NewLine) {
                break;
            }
            content.push(node);
        }

        while matches!(content.last(), Some(Node::NewLine)) {
            content.pop();
        }
        content.retain(|node| !matches!(node, Node::NoNode));

        if content.is_empty() {
            while self.current().kind == TokenKind::NewLine {
                self.advance();
            }
            return Node::NoNode;
        }

        self.skip_line_break();
        Node::Paragraph(Paragraph { children: content })
    }

    /// A maximal run of list-item lines sharing one `<ul>`/`<ol>` group.
    fn parse_list(&mut self) -> Node<'a> {
        let ordered = self.current().kind == TokenKind::Number;
        let mut items = Vec::new();

        while self.at_list_item() {
            items.push(self.parse_list_item());

            while matches!(
                self.current().kind,
                TokenKind::NewLine | TokenKind::CarriageReturn
            ) {
                self.advance();
            }
        }

        Node::List(List { items, ordered })
    }

    /// A list marker only opens an item when followed by a space (bullet
    /// form) or a dot (ordered form); a bare `*`, `-`, or digit elsewhere
    /// stays ordinary text.
    fn at_list_item(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Star | TokenKind::Minus | TokenKind::Number
        ) && matches!(
            self.peek().kind,
            TokenKind::WhiteSpace | TokenKind::Dot
        )
    }

    fn parse_list_item(&mut self) -> Node<'a> {
        self.advance(); // marker
        if self.current().kind == TokenKind::Dot {
            self.advance();
        }
        if self.current().kind == TokenKind::WhiteSpace {
            self.advance();
        }

        let mut children = Vec::new();
        while !self.at_line_end() {
            let child = self.parse_inline();
            if !matches!(child, Node::NoNode) {
                children.push(child);
            }
        }

        Node::ListItem(ListItem { children })
    }

    /// `[text](url)` or `![alt](url)`.
    ///
    /// Malformed input is not an error: a missing `]` or `)` simply runs
    /// the accumulation loop to the end of the stream.
    fn parse_link_or_image(&mut self) -> Node<'a> {
        let is_image = self.current().kind == TokenKind::Exclamation;
        if is_image {
            self.advance();
        }
        self.advance(); // opening `[`

        let mut text = String::new();
        while !self.at_end()
            && !matches!(
                self.current().kind,
                TokenKind::RightSquareBracket | TokenKind::Eof
            )
        {
            text.push_str(self.current().literal);
            self.advance();
        }

        // The `](` pair is assumed; both tokens are consumed unconditionally.
        self.advance();
        self.advance();

        let mut url = String::new();
        while !self.at_end()
            && !matches!(self.current().kind, TokenKind::RightParen | TokenKind::Eof)
        {
            url.push_str(self.current().literal);
            self.advance();
        }
        self.advance(); // closing `)`

        if is_image {
            Node::Image(Image {
                alt: Cow::Owned(text),
                url: Cow::Owned(url),
            })
        } else {
            Node::Link(Link {
                text: Cow::Owned(text),
                url: Cow::Owned(url),
            })
        }
    }

    /// `> quoted line`.
    fn parse_block_quote(&mut self) -> Node<'a> {
        self.advance(); // `>`

        let mut children = Vec::new();
        while !self.at_line_end() {
            children.push(self.parse_inline());
        }
        self.skip_line_break();

        Node::BlockQuote(BlockQuote { children })
    }

    /// `***` or `---`: three identical markers ending the line.
    ///
    /// The trailing line-end requirement is what keeps `***x***` an
    /// emphasis span; on any mismatch the cursor is restored and the line
    /// re-dispatches as a paragraph.
    fn parse_horizontal_rule(&mut self) -> Node<'a> {
        let marker = self.current().kind;
        let rule = self.attempt(|p| {
            p.advance();
            for _ in 0..2 {
                if p.current().kind != marker {
                    return None;
                }
                p.advance();
            }
            if p.at_line_end() {
                Some(())
            } else {
                None
            }
        });

        match rule {
            Some(()) => {
                self.skip_line_break();
                Node::HorizontalRule
            }
            None => self.parse_paragraph(),
        }
    }

    /// `` `code` ``: accumulate literals up to the closing backtick.
    fn parse_inline_code(&mut self) -> Node<'a> {
        self.advance(); // opening backtick

        let mut content = String::new();
        while !self.at_end()
            && !matches!(self.current().kind, TokenKind::BackTick | TokenKind::Eof)
        {
            content.push_str(self.current().literal);
            self.advance();
        }
        self.advance(); // closing backtick

        Node::InlineCode(InlineCode {
            content: Cow::Owned(content),
        })
    }

    /// ```` ``` ````-fenced code block; falls back to a paragraph when
    /// fewer than three backticks open the fence.
    fn parse_code_block(&mut self) -> Node<'a> {
        let fence = self.attempt(|p| {
            for _ in 0..3 {
                if p.current().kind != TokenKind::BackTick {
                    return None;
                }
                p.advance();
            }
            Some(())
        });
        if fence.is_none() {
            return self.parse_paragraph();
        }

        let mut content = String::new();
        while !self.at_end()
            && !matches!(self.current().kind, TokenKind::BackTick | TokenKind::Eof)
        {
            content.push_str(self.current().literal);
            self.advance();
        }
        for _ in 0..3 {
            if self.current().kind == TokenKind::BackTick {
                self.advance();
            }
        }

        Node::CodeBlock(CodeBlock {
            content: Cow::Owned(content),
        })
    }

    // ------------------------------------------------------------------
    // Inline constructs
    // ------------------------------------------------------------------

    /// Produce one inline node. Shared by every block parser for its
    /// children; always consumes at least one token.
    fn parse_inline(&mut self) -> Node<'a> {
        match self.current().kind {
            TokenKind::Star | TokenKind::Underscore => self.parse_emphasis(),
            TokenKind::WhiteSpace => {
                self.advance();
                Node::WhiteSpace
            }
            TokenKind::NewLine | TokenKind::CarriageReturn => {
                // A line-break pair always spends two tokens.
                self.advance();
                self.advance();
                Node::NewLine
            }
            _ => {
                let content = self.current().literal;
                self.advance();
                Node::Text(Text {
                    content: Cow::Borrowed(content),
                })
            }
        }
    }

    /// Emphasis span opened by a marker run of `*` or `_`.
    ///
    /// The opening run length decides the result: 1 is italic, 2 is bold,
    /// 3 is bold wrapping italic. A run of the marker inside the span only
    /// closes it when its length matches the opening run; shorter or
    /// longer runs are restored and re-parsed as content, which is how
    /// spans of a different run length nest. An unclosed span simply ends
    /// at end of stream.
    fn parse_emphasis(&mut self) -> Node<'a> {
        let marker = self.current().kind;
        let opening = self.count_marker_run(marker);

        let mut children = Vec::new();
        while !self.at_end() && self.current().kind != TokenKind::Eof {
            if self.current().kind == marker {
                let closed = self.attempt(|p| {
                    if p.count_marker_run(marker) == opening {
                        Some(())
                    } else {
                        None
                    }
                });
                if closed.is_some() {
                    break;
                }
            }
            children.push(self.parse_inline());
        }

        match opening {
            1 => Node::Italic(Italic { children }),
            2 => Node::Bold(Bold { children }),
            _ => Node::Bold(Bold {
                children: vec![Node::Italic(Italic { children })],
            }),
        }
    }

    /// Consume a maximal run of `marker` tokens, returning its length.
    fn count_marker_run(&mut self, marker: TokenKind) -> usize {
        let mut count = 0;
        while self.current().kind == marker {
            count += 1;
            self.advance();
        }
        count
    }
}
