//! HTML generation from the document tree.
//!
//! The generator walks the tree depth-first, emitting an opening tag,
//! recursing into children, and emitting a closing tag for container
//! nodes, and fixed fragments for leaves. A running header counter gives
//! every header a stable `header-<n>` identifier in document order,
//! regardless of level.
//!
//! Content is emitted verbatim: no HTML escaping is performed (documented
//! risk in the format contract, not a goal to fix).

use crate::ast::{Document, Node};

/// Render a document straight to HTML.
#[inline]
pub fn render(document: &Document<'_>) -> String {
    HtmlGenerator::new().render(document)
}

/// Tree-to-HTML generator.
///
/// The header counter is per-instance state, reset on every [`render`]
/// call, so independent conversions never interfere.
///
/// [`render`]: HtmlGenerator::render
#[derive(Debug, Default)]
pub struct HtmlGenerator {
    header_count: usize,
}

impl HtmlGenerator {
    /// Create a generator with a fresh header counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the document tree to an HTML fragment stream.
    pub fn render(&mut self, document: &Document<'_>) -> String {
        self.header_count = 0;

        let mut out = String::with_capacity(256);
        for node in &document.nodes {
            self.render_node(node, &mut out);
        }
        out
    }

    fn render_node(&mut self, node: &Node<'_>, out: &mut String) {
        match node {
            Node::Header(header) => {
                self.header_count += 1;
                out.push_str(&format!(
                    "<h{} id=\"header-{}\">",
                    header.level, self.header_count
                ));
                self.render_children(&header.children, out);
                out.push_str(&format!("</h{}>\n", header.level));
            }
            Node::Paragraph(paragraph) => {
                out.push_str("<p>");
                self.render_children(&paragraph.children, out);
                out.push_str("</p>\n");
            }
            Node::Bold(bold) => {
                out.push_str("<strong>");
                self.render_children(&bold.children, out);
                out.push_str("</strong>");
            }
            Node::Italic(italic) => {
                out.push_str("<em>");
                self.render_children(&italic.children, out);
                out.push_str("</em>");
            }
            Node::Text(text) => out.push_str(&text.content),
            Node::WhiteSpace => out.push(' '),
            Node::NewLine => out.push_str("<br>"),
            Node::NoNode => {}
            Node::Link(link) => {
                out.push_str(&format!("<a href=\"{}\">{}</a>\n", link.url, link.text));
            }
            Node::Image(image) => {
                out.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">\n",
                    image.url, image.alt
                ));
            }
            Node::List(list) => {
                out.push_str(if list.ordered { "<ol>\n" } else { "<ul>\n" });
                self.render_children(&list.items, out);
                out.push_str(if list.ordered { "</ol>\n" } else { "</ul>\n" });
            }
            Node::ListItem(item) => {
                out.push_str("<li>");
                self.render_children(&item.children, out);
                out.push_str("</li>\n");
            }
            Node::BlockQuote(quote) => {
                out.push_str("<blockquote>\n");
                self.render_children(&quote.children, out);
                out.push_str("\n</blockquote>\n");
            }
            Node::InlineCode(code) => {
                out.push_str("<code>");
                out.push_str(&code.content);
                out.push_str("</code>\n");
            }
            Node::CodeBlock(code) => {
                out.push_str("<pre><code>");
                out.push_str(&code.content);
                out.push_str("</code></pre>\n");
            }
            Node::HorizontalRule => out.push_str("<hr>\n"),
        }
    }

    fn render_children(&mut self, children: &[Node<'_>], out: &mut String) {
        for child in children {
            self.render_node(child, out);
        }
    }
}
