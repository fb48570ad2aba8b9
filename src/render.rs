//! Writes a [`Trie`] in one of four notations.
//!
//! Rendering walks the trie depth first. Chains of nodes through which every
//! line continues carry no structure, so they are folded into the token of
//! the unit being built. A unit ends at a node with several children, with
//! no children, or at which some line terminates. Its children then start
//! new units, in character order, or by descending count when frequencies
//! are shown and alphabetical order is not forced.
//!
//! Example
//! ```
//! use stree::config::{Config, Style};
//! use stree::render::render;
//! use stree::trie::Trie;
//!
//! let trie: Trie = ["foo", "bar", "baz"].into_iter().collect();
//!
//! let config = Config::new().with_prepend_frequency(true);
//! assert_eq!(render(&trie, &config), "2 ba\n1 bar\n1 baz\n1 foo\n");
//!
//! let config = config.with_repeat_prefix(false);
//! assert_eq!(render(&trie, &config), "2 ba\n1   r\n1   z\n1 foo\n");
//!
//! let config = Config::new().with_style(Style::Parens);
//! assert_eq!(render(&trie, &config), "((ba(r)(z))(foo))\n");
//!
//! let config = Config::new().with_style(Style::Braces);
//! assert_eq!(render(&trie, &config), "{ba{r,z},foo}\n");
//!
//! let config = Config::new().with_style(Style::Graph);
//! assert_eq!(render(&trie, &config), "digraph { ba->{r;z};foo}\n");
//! ```
//!
//! The root has no character of its own. When it does not fold into a
//! chain, its empty token is not written in any notation, but the
//! delimiters around its children are.

use std::cmp::Reverse;
use std::io::{self, Write};

use crate::config::{Config, Style};
use crate::trie::{Trie, TrieNode};

/// Render the trie as text.
///
/// Nothing is written for a trie into which no line was ingested.
pub fn render(trie: &Trie, config: &Config) -> String {
    match config.style() {
        Style::Lines => Renderer::new(config, Lines).render(trie),
        Style::Parens => Renderer::new(config, Parens).render(trie),
        Style::Braces => Renderer::new(config, Braces).render(trie),
        Style::Graph => Renderer::new(config, Graph).render(trie),
    }
}

/// Render the trie into `sink`.
pub fn write_to<W: Write>(mut sink: W, trie: &Trie, config: &Config) -> io::Result<()> {
    sink.write_all(render(trie, config).as_bytes())
}

/// A node at which folding stopped.
struct Unit<'a> {
    node: &'a TrieNode,
    /// Characters folded into this unit.
    token: &'a str,
    /// Everything rendered by the enclosing units.
    prefix: &'a str,
    is_root: bool,
}

impl Unit<'_> {
    fn has_label(&self) -> bool {
        !(self.is_root && self.token.is_empty())
    }
}

/// The delimiters of one notation. The walk itself is shared.
trait Notation {
    fn open_document(&self, _out: &mut String) {}

    fn close_document(&self, out: &mut String) {
        out.push('\n');
    }

    fn open_unit(&self, _out: &mut String) {}

    fn close_unit(&self, _out: &mut String) {}

    fn write_label(&self, out: &mut String, unit: &Unit<'_>, config: &Config) {
        decorate(out, unit.node.count(), unit.token, config, 0);
    }

    fn open_children(&self, _out: &mut String, _unit: &Unit<'_>) {}

    fn separate_children(&self, _out: &mut String) {}

    fn close_children(&self, _out: &mut String, _unit: &Unit<'_>) {}
}

/// Surround `body` with the frequencies the config asks for.
fn decorate(out: &mut String, count: usize, body: &str, config: &Config, width: usize) {
    if config.prepend_frequency() {
        out.push_str(&format!("{count:<width$}"));
        if !body.is_empty() {
            out.push(' ');
        }
    }
    out.push_str(body);
    if config.append_frequency() {
        if !body.is_empty() || config.prepend_frequency() {
            out.push(' ');
        }
        out.push_str(&count.to_string());
    }
}

struct Lines;

impl Notation for Lines {
    fn close_document(&self, _out: &mut String) {}

    fn write_label(&self, out: &mut String, unit: &Unit<'_>, config: &Config) {
        let body = if config.repeat_prefix() {
            format!("{}{}", unit.prefix, unit.token)
        } else {
            let indent = unit.prefix.chars().count();
            format!("{:indent$}{}", "", unit.token)
        };
        decorate(
            out,
            unit.node.count(),
            &body,
            config,
            config.frequency_width(),
        );
        out.push('\n');
    }
}

struct Parens;

impl Notation for Parens {
    fn open_unit(&self, out: &mut String) {
        out.push('(');
    }

    fn close_unit(&self, out: &mut String) {
        out.push(')');
    }
}

struct Braces;

impl Notation for Braces {
    fn open_children(&self, out: &mut String, unit: &Unit<'_>) {
        out.push('{');
        // The unit is a complete line too: offer an empty alternative
        if unit.node.is_terminal() {
            out.push(',');
        }
    }

    fn separate_children(&self, out: &mut String) {
        out.push(',');
    }

    fn close_children(&self, out: &mut String, _unit: &Unit<'_>) {
        out.push('}');
    }
}

struct Graph;

impl Notation for Graph {
    fn open_document(&self, out: &mut String) {
        out.push_str("digraph { ");
    }

    fn close_document(&self, out: &mut String) {
        out.push_str("}\n");
    }

    fn open_children(&self, out: &mut String, unit: &Unit<'_>) {
        if unit.has_label() {
            out.push_str("->{");
        }
    }

    fn separate_children(&self, out: &mut String) {
        out.push(';');
    }

    fn close_children(&self, out: &mut String, unit: &Unit<'_>) {
        if unit.has_label() {
            out.push('}');
        }
    }
}

struct Renderer<'c, N> {
    config: &'c Config,
    notation: N,
    out: String,
}

impl<'c, N: Notation> Renderer<'c, N> {
    fn new(config: &'c Config, notation: N) -> Self {
        Self {
            config,
            notation,
            out: String::new(),
        }
    }

    fn render(mut self, trie: &Trie) -> String {
        if trie.is_empty() {
            return self.out;
        }
        self.notation.open_document(&mut self.out);
        self.unit(trie.root(), String::new(), "", true);
        self.notation.close_document(&mut self.out);
        self.out
    }

    fn unit(&mut self, mut node: &TrieNode, mut token: String, prefix: &str, is_root: bool) {
        if node.count() == 0 {
            return;
        }
        while let Some((atom, child)) = node.folded_child() {
            token.push(atom);
            node = child;
        }

        let unit = Unit {
            node,
            token: &token,
            prefix,
            is_root,
        };
        self.notation.open_unit(&mut self.out);
        if unit.has_label() {
            self.notation.write_label(&mut self.out, &unit, self.config);
        }
        if !node.is_leaf() {
            self.notation.open_children(&mut self.out, &unit);
            let path = format!("{prefix}{token}");
            for (idx, (atom, child)) in self.ordered(node).into_iter().enumerate() {
                if idx > 0 {
                    self.notation.separate_children(&mut self.out);
                }
                self.unit(child, atom.to_string(), &path, false);
            }
            self.notation.close_children(&mut self.out, &unit);
        }
        self.notation.close_unit(&mut self.out);
    }

    /// Children in the order they are rendered. Equal counts keep character
    /// order since the sort is stable.
    fn ordered<'a>(&self, node: &'a TrieNode) -> Vec<(char, &'a TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> = node.children().collect();
        if self.config.sort_by_count() {
            children.sort_by_key(|(_, child)| Reverse(child.count()));
        }
        children
    }
}
