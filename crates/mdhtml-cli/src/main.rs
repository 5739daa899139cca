//! mdh - Convert Markdown documents to HTML
//!
//! Usage:
//!   mdh [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   html      Convert the document to HTML (default)
//!   tokens    Dump the token stream
//!   ast       Dump the parsed node tree

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use mdhtml_core::{Lexer, Node, Parser};
use serde::Serialize;

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read_to_string(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    match config.command {
        Command::Html => cmd_html(&input, &config),
        Command::Tokens => cmd_tokens(&input, &config),
        Command::Ast => cmd_ast(&input, &config),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    output: Option<String>,
    json: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Html,
    Tokens,
    Ast,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Html;
    let mut output = None;
    let mut json = false;
    let mut file = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdh {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-j" | "--json" => json = true,
            "-o" | "--output" => {
                i += 1;
                match args.get(i) {
                    Some(path) => output = Some(path.clone()),
                    None => return Err("missing path after -o/--output".to_string()),
                }
            }
            "html" => command = Command::Html,
            "tokens" => command = Command::Tokens,
            "ast" => command = Command::Ast,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
        i += 1;
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        output,
        json,
    })
}

fn print_help() {
    eprintln!(
        r#"mdh - Markdown to HTML converter

USAGE:
    mdh [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    html        Convert the document to HTML (default)
    tokens      Dump the token stream
    ast         Dump the parsed node tree

OPTIONS:
    -o, --output <PATH>    Write output to a file instead of stdout
    -j, --json             Output in JSON format (tokens and ast)
    -h, --help             Print help information
    -V, --version          Print version information

EXAMPLES:
    mdh document.md               Convert to HTML on stdout
    mdh -o out/out.html doc.md    Convert to a file
    mdh tokens doc.md             Show the token stream
    mdh ast -j doc.md             Show the node tree as JSON
"#
    );
}

/// Write to the configured output path (creating parent directories) or
/// to stdout.
fn write_output(content: &str, config: &Config) -> Result<(), String> {
    match &config.output {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| format!("failed to create '{}': {}", parent.display(), e))?;
                }
            }
            fs::write(path, content).map_err(|e| format!("failed to write '{}': {}", path, e))
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

// =============================================================================
// Html Command
// =============================================================================

fn cmd_html(input: &str, config: &Config) -> Result<(), String> {
    let html = mdhtml_core::to_html(input);
    write_output(&html, config)
}

// =============================================================================
// Tokens Command
// =============================================================================

#[derive(Serialize)]
struct JsonToken<'a> {
    kind: String,
    literal: &'a str,
}

fn cmd_tokens(input: &str, config: &Config) -> Result<(), String> {
    let tokens = Lexer::new(input).tokenize();

    if config.json {
        let json_tokens: Vec<JsonToken> = tokens
            .iter()
            .map(|t| JsonToken {
                kind: t.kind.to_string(),
                literal: t.literal,
            })
            .collect();
        let rendered = serde_json::to_string_pretty(&json_tokens)
            .map_err(|e| format!("failed to serialize tokens: {}", e))?;
        write_output(&format!("{}\n", rendered), config)
    } else {
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            out.push_str(&format!(
                "{}: {} {}\n",
                i,
                escape_special_chars(token.literal),
                token.kind
            ));
        }
        write_output(&out, config)
    }
}

fn escape_special_chars(s: &str) -> String {
    s.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

// =============================================================================
// Ast Command
// =============================================================================

fn cmd_ast(input: &str, config: &Config) -> Result<(), String> {
    let tokens = Lexer::new(input).tokenize();
    let document = Parser::new(tokens).parse();

    if config.json {
        let json_nodes: Vec<JsonNode> = document.nodes.iter().map(convert_node).collect();
        let rendered = serde_json::to_string_pretty(&json_nodes)
            .map_err(|e| format!("failed to serialize tree: {}", e))?;
        write_output(&format!("{}\n", rendered), config)
    } else {
        let mut out = String::new();
        for node in &document.nodes {
            print_node(node, 0, &mut out);
        }
        write_output(&out, config)
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum JsonNode<'a> {
    Header {
        level: u8,
        children: Vec<JsonNode<'a>>,
    },
    Paragraph {
        children: Vec<JsonNode<'a>>,
    },
    Bold {
        children: Vec<JsonNode<'a>>,
    },
    Italic {
        children: Vec<JsonNode<'a>>,
    },
    Text {
        content: &'a str,
    },
    WhiteSpace,
    NewLine,
    NoNode,
    Link {
        text: &'a str,
        url: &'a str,
    },
    Image {
        alt: &'a str,
        url: &'a str,
    },
    List {
        ordered: bool,
        items: Vec<JsonNode<'a>>,
    },
    ListItem {
        children: Vec<JsonNode<'a>>,
    },
    BlockQuote {
        children: Vec<JsonNode<'a>>,
    },
    InlineCode {
        content: &'a str,
    },
    CodeBlock {
        content: &'a str,
    },
    HorizontalRule,
}

fn convert_node<'a>(node: &'a Node) -> JsonNode<'a> {
    match node {
        Node::Header(h) => JsonNode::Header {
            level: h.level,
            children: h.children.iter().map(convert_node).collect(),
        },
        Node::Paragraph(p) => JsonNode::Paragraph {
            children: p.children.iter().map(convert_node).collect(),
        },
        Node::Bold(b) => JsonNode::Bold {
            children: b.children.iter().map(convert_node).collect(),
        },
        Node::Italic(i) => JsonNode::Italic {
            children: i.children.iter().map(convert_node).collect(),
        },
        Node::Text(t) => JsonNode::Text {
            content: &t.content,
        },
        Node::WhiteSpace => JsonNode::WhiteSpace,
        Node::NewLine => JsonNode::NewLine,
        Node::NoNode => JsonNode::NoNode,
        Node::Link(l) => JsonNode::Link {
            text: &l.text,
            url: &l.url,
        },
        Node::Image(i) => JsonNode::Image {
            alt: &i.alt,
            url: &i.url,
        },
        Node::List(l) => JsonNode::List {
            ordered: l.ordered,
            items: l.items.iter().map(convert_node).collect(),
        },
        Node::ListItem(item) => JsonNode::ListItem {
            children: item.children.iter().map(convert_node).collect(),
        },
        Node::BlockQuote(q) => JsonNode::BlockQuote {
            children: q.children.iter().map(convert_node).collect(),
        },
        Node::InlineCode(c) => JsonNode::InlineCode {
            content: &c.content,
        },
        Node::CodeBlock(c) => JsonNode::CodeBlock {
            content: &c.content,
        },
        Node::HorizontalRule => JsonNode::HorizontalRule,
    }
}

fn print_node(node: &Node, indent: usize, out: &mut String) {
    let prefix = "  ".repeat(indent);

    match node {
        Node::Header(h) => {
            out.push_str(&format!("{}Header (level {}):\n", prefix, h.level));
            for child in &h.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::Paragraph(p) => {
            out.push_str(&format!("{}Paragraph:\n", prefix));
            for child in &p.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::Bold(b) => {
            out.push_str(&format!("{}Bold:\n", prefix));
            for child in &b.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::Italic(i) => {
            out.push_str(&format!("{}Italic:\n", prefix));
            for child in &i.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::Text(t) => {
            out.push_str(&format!("{}Text: '{}'\n", prefix, t.content));
        }
        Node::WhiteSpace => {
            out.push_str(&format!("{}WhiteSpace\n", prefix));
        }
        Node::NewLine => {
            out.push_str(&format!("{}NewLine\n", prefix));
        }
        Node::NoNode => {
            out.push_str(&format!("{}NoNode\n", prefix));
        }
        Node::Link(l) => {
            out.push_str(&format!("{}Link: '{}' -> '{}'\n", prefix, l.text, l.url));
        }
        Node::Image(i) => {
            out.push_str(&format!("{}Image: '{}' -> '{}'\n", prefix, i.alt, i.url));
        }
        Node::List(l) => {
            let kind = if l.ordered { "ordered" } else { "unordered" };
            out.push_str(&format!("{}List ({}):\n", prefix, kind));
            for item in &l.items {
                print_node(item, indent + 1, out);
            }
        }
        Node::ListItem(item) => {
            out.push_str(&format!("{}ListItem:\n", prefix));
            for child in &item.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::BlockQuote(q) => {
            out.push_str(&format!("{}BlockQuote:\n", prefix));
            for child in &q.children {
                print_node(child, indent + 1, out);
            }
        }
        Node::InlineCode(c) => {
            out.push_str(&format!("{}InlineCode: '{}'\n", prefix, c.content));
        }
        Node::CodeBlock(c) => {
            let preview: String = c.content.chars().take(60).collect();
            let ellipsis = if c.content.len() > 60 { "..." } else { "" };
            out.push_str(&format!(
                "{}CodeBlock: {}{}\n",
                prefix,
                escape_special_chars(&preview),
                ellipsis
            ));
        }
        Node::HorizontalRule => {
            out.push_str(&format!("{}HorizontalRule\n", prefix));
        }
    }
}
