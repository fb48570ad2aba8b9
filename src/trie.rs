//! Provides a counting prefix trie built from lines of text.
//!
//! Every node records how many ingested lines pass through the prefix it
//! represents, and owns an ordered map from the next character to the child
//! node. The root represents the empty prefix, so its count is the number of
//! lines ingested, including empty ones.
//!
//! Lines are split into `char`s. There is no grapheme or word segmentation:
//! each Unicode scalar value is one edge of the trie.
//!
//! Example 1
//! ```
//! use stree::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.ingest("foo");
//! trie.ingest("bar");
//! trie.ingest("baz");
//!
//! assert_eq!(trie.count(), 3);
//! assert_eq!(trie.get("ba".chars()).map(|n| n.count()), Some(2));
//! assert!(trie.contains_prefix("fo".chars()));
//! assert!(!trie.contains_prefix("fox".chars()));
//! ```
//!
//! Anything which yields string slices can be collected into a Trie, one
//! item per line.
//!
//! Example 2
//! ```
//! use stree::trie::Trie;
//!
//! let trie: Trie = "code\ncoder\ncoding".lines().collect();
//! let node = trie.get("cod".chars()).unwrap();
//! assert_eq!(node.count(), 3);
//! assert_eq!(node.children().count(), 2);
//! assert!(!node.is_terminal());
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// One prefix of the ingested lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct TrieNode {
    count: usize,
    children: BTreeMap<char, TrieNode>,
}

/// Counts every prefix of a multiset of lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Trie {
    root: TrieNode,
}

impl TrieNode {
    /// How many ingested lines share this prefix?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The children of this node in ascending character order.
    pub fn children(
        &self,
    ) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> + ExactSizeIterator {
        self.children.iter().map(|(c, n)| (*c, n))
    }

    /// The child reached through `atom`, if any line continued that way.
    pub fn child(&self, atom: char) -> Option<&TrieNode> {
        self.children.get(&atom)
    }

    /// Does no line continue past this prefix?
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// How many ingested lines end exactly at this prefix?
    pub fn terminal_count(&self) -> usize {
        let continuing: usize = self.children.values().map(|n| n.count).sum();
        self.count.saturating_sub(continuing)
    }

    /// Does at least one ingested line end exactly at this prefix?
    pub fn is_terminal(&self) -> bool {
        self.terminal_count() > 0
    }

    /// The only child, when every line through this node continues into it.
    ///
    /// Chains of such children carry no structure and are folded into a
    /// single token when rendering.
    pub fn folded_child(&self) -> Option<(char, &TrieNode)> {
        if self.children.len() != 1 {
            return None;
        }
        self.children
            .iter()
            .next()
            .filter(|(_, n)| n.count == self.count)
            .map(|(c, n)| (*c, n))
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn size(&self) -> usize {
        let mut pending = vec![self];
        let mut size = 0;
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(node.children.values());
        }
        size
    }
}

// A single long line is a chain as deep as the line is long, so children
// are released from a worklist instead of by recursion.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}

impl Trie {
    /// Create a new, empty Trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the Trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
    }

    /// Fold one line into the Trie.
    ///
    /// The root and every node along the line's path have their count
    /// incremented, creating missing nodes on the way. An empty line only
    /// counts at the root.
    pub fn ingest(&mut self, line: &str) {
        let mut node = &mut self.root;
        node.count += 1;
        for atom in line.chars() {
            node = node.children.entry(atom).or_default();
            node.count += 1;
        }
    }

    /// How many lines have been ingested?
    #[inline(always)]
    pub fn count(&self) -> usize {
        self.root.count
    }

    /// Has nothing been ingested yet?
    pub fn is_empty(&self) -> bool {
        self.root.count == 0
    }

    /// The node for the empty prefix.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Get the node which represents the supplied prefix.
    pub fn get<P: IntoIterator<Item = char>>(&self, prefix: P) -> Option<&TrieNode> {
        prefix
            .into_iter()
            .try_fold(&self.root, |node, atom| node.children.get(&atom))
    }

    /// Does any ingested line start with the supplied prefix?
    pub fn contains_prefix<P: IntoIterator<Item = char>>(&self, prefix: P) -> bool {
        self.get(prefix).is_some()
    }

    /// Number of nodes in the Trie, the root included.
    pub fn size(&self) -> usize {
        self.root.size()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, lines: I) {
        for line in lines {
            self.ingest(line.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(lines: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(lines);
        trie
    }
}
