//! Abstract Syntax Tree types for parsed Markdown documents.
//!
//! The tree is a closed set of variants with exhaustive matching at every
//! consumer, so adding a node kind is a compile-time event. Nodes own
//! their children exclusively; the tree is acyclic by construction (built
//! bottom-up with forward-only token consumption) and read-only once the
//! parser returns it.
//!
//! Text fields use `Cow<'a, str>`: a `Text` node borrows its single token
//! literal from the input, while accumulated strings (link text, URLs,
//! code content) are owned.

/// Borrowed or owned string type for zero-copy parsing.
pub type CowStr<'a> = std::borrow::Cow<'a, str>;

/// A parsed document: an ordered sequence of top-level block nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document<'a> {
    /// Block-level nodes in source order.
    pub nodes: Vec<Node<'a>>,
}

/// A block- or inline-level Markdown construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// Section header (levels 1-6).
    Header(Header<'a>),
    /// Text paragraph with inline children.
    Paragraph(Paragraph<'a>),
    /// Strong emphasis (`**bold**` / `__bold__`).
    Bold(Bold<'a>),
    /// Emphasis (`*italic*` / `_italic_`).
    Italic(Italic<'a>),
    /// Plain text wrapping a single token literal.
    Text(Text<'a>),
    /// A single space.
    WhiteSpace,
    /// A line break within a block.
    NewLine,
    /// Semantic nothing, produced for blank or fully-suppressed lines.
    NoNode,
    /// Hyperlink with display text and URL.
    Link(Link<'a>),
    /// Image with alt text and URL.
    Image(Image<'a>),
    /// Ordered or unordered list.
    List(List<'a>),
    /// A single list item.
    ListItem(ListItem<'a>),
    /// Block quotation.
    BlockQuote(BlockQuote<'a>),
    /// Single-backtick code span.
    InlineCode(InlineCode<'a>),
    /// Triple-backtick fenced code block.
    CodeBlock(CodeBlock<'a>),
    /// Horizontal rule / thematic break.
    HorizontalRule,
}

/// Section header with level and inline children.
///
/// The level is always clamped to `[1, 6]` at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Header<'a> {
    /// Header level (1-6).
    pub level: u8,
    /// Inline children.
    pub children: Vec<Node<'a>>,
}

/// Text paragraph. Never contains a `NoNode` child; those are filtered
/// before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph<'a> {
    /// Inline children.
    pub children: Vec<Node<'a>>,
}

/// Strong emphasis span.
#[derive(Debug, Clone, PartialEq)]
pub struct Bold<'a> {
    /// Nested inline children.
    pub children: Vec<Node<'a>>,
}

/// Emphasis span.
#[derive(Debug, Clone, PartialEq)]
pub struct Italic<'a> {
    /// Nested inline children.
    pub children: Vec<Node<'a>>,
}

/// Plain text content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text<'a> {
    /// The text content, verbatim from the source.
    pub content: CowStr<'a>,
}

/// Hyperlink. Neither field is escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Link<'a> {
    /// Display text.
    pub text: CowStr<'a>,
    /// Destination URL, verbatim.
    pub url: CowStr<'a>,
}

/// Image reference. Neither field is escaped.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<'a> {
    /// Alt text.
    pub alt: CowStr<'a>,
    /// Source URL, verbatim.
    pub url: CowStr<'a>,
}

/// A list group: a maximal run of list-item lines.
#[derive(Debug, Clone, PartialEq)]
pub struct List<'a> {
    /// The items, each a [`Node::ListItem`].
    pub items: Vec<Node<'a>>,
    /// True when the group's first marker was a number.
    pub ordered: bool,
}

/// A single list item. Never contains a `NoNode` child.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem<'a> {
    /// Inline children.
    pub children: Vec<Node<'a>>,
}

/// Block quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockQuote<'a> {
    /// Inline children.
    pub children: Vec<Node<'a>>,
}

/// Single-backtick code span; content is not parsed for formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineCode<'a> {
    /// Literal code content.
    pub content: CowStr<'a>,
}

/// Triple-backtick fenced code block. No language tag is recognized.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock<'a> {
    /// Literal code content, including interior line breaks.
    pub content: CowStr<'a>,
}
