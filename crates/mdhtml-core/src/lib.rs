//! # mdhtml-core
//!
//! A permissive Markdown-to-HTML converter built as a three-stage batch
//! pipeline: a character-level lexer, a recursive-descent parser with
//! speculative lookahead, and a tree-to-HTML generator.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = mdhtml_core::to_html("# Hello\n");
//! assert_eq!(html, "<h1 id=\"header-1\">Hello</h1>\n");
//! ```
//!
//! The stages can also be driven individually:
//!
//! ```rust
//! use mdhtml_core::{HtmlGenerator, Lexer, Parser};
//!
//! let tokens = Lexer::new("*emphasis* and **strength**").tokenize();
//! let document = Parser::new(tokens).parse();
//! let html = HtmlGenerator::new().render(&document);
//!
//! assert!(html.contains("<em>emphasis</em>"));
//! ```
//!
//! ## Permissive by design
//!
//! The pipeline is total: every character lexes to some token, every
//! token sequence parses to some tree, and every tree renders. Malformed
//! Markdown degrades to best-effort output instead of an error, so none
//! of the stage entry points return a `Result`.
//!
//! Data flows strictly one way, from text to tokens to tree to markup,
//! with each intermediate produced completely before the next stage
//! starts. A pipeline instance is self-contained; run one per document
//! for concurrent conversions.

pub mod ast;
pub mod html;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Document, Node};
pub use html::HtmlGenerator;
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind};

/// Convert a Markdown document to HTML in one call.
pub fn to_html(source: &str) -> String {
    let tokens = Lexer::new(source).tokenize();
    let document = Parser::new(tokens).parse();
    HtmlGenerator::new().render(&document)
}
