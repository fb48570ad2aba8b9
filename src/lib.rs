//! Builds a prefix trie from a list of strings and renders it in a
//! human readable structural notation.
//!
//! Every node of the [`crate::trie::Trie`] counts the strings which share
//! the prefix it represents. [`crate::render`] then folds unbranched runs of
//! characters into single tokens and writes the result as
//!  - indented lines, optionally replacing repeated prefixes with spaces
//!  - nested parentheses
//!  - a shell brace expansion
//!  - a graphviz digraph
//!
//! with optional frequency counts before and/or after each unit.
//!
//! Input is acquired through [`crate::builder`], and the options of a run
//! are resolved once into an immutable [`crate::config::Config`].
//!
//! Example:
//! ```
//! use stree::config::{Config, Style};
//! use stree::render::render;
//! use stree::trie::Trie;
//!
//! let trie: Trie = ["foo", "foolish"].into_iter().collect();
//! let config = Config::new().with_style(Style::Braces);
//! assert_eq!(render(&trie, &config), "foo{,lish}\n");
//! ```
//!
//! Modules:
//! * trie : [`crate::trie`]
//! * iterator : [`crate::iterator`]
//! * builder : [`crate::builder`]
//! * render : [`crate::render`]
//! * config : [`crate::config`]

#[cfg(feature = "serde")]
extern crate serde_crate;

pub mod builder;

pub mod config;

pub mod error;

pub mod iterator;

pub mod render;

pub mod trie;

pub use error::{Error, Result};
