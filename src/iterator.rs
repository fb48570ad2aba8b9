//! Provides Trie iterators.
//!
use crate::trie::{Trie, TrieNode};

/// Iterator Item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub count: usize,
}

/// Preorder iterator over the distinct lines stored in a Trie.
///
/// Lines are produced in ascending character order, each with the number of
/// times it was ingested.
#[derive(Debug)]
pub struct Iter<'a> {
    pending: Vec<(String, &'a TrieNode)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((mut key, node)) = self.pending.pop() {
            let count = node.terminal_count();
            if let (0, Some((atom, child))) = (count, node.folded_child()) {
                key.push(atom);
                self.pending.push((key, child));
                continue;
            }
            // Reversed, so that the smallest child is popped first
            for (atom, child) in node.children().rev() {
                let mut child_key = key.clone();
                child_key.push(atom);
                self.pending.push((child_key, child));
            }
            if count > 0 {
                return Some(Entry { key, count });
            }
        }
        None
    }
}

// Iterator
impl<'a> IntoIterator for &'a Trie {
    type Item = Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let pending = if self.is_empty() {
            vec![]
        } else {
            vec![(String::new(), self.root())]
        };
        Iter { pending }
    }
}

impl Trie {
    /// Create an iterator over the distinct lines in the Trie.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{distr::Alphanumeric, rng, Rng};

    #[test]
    fn it_iterates_over_empty_trie() {
        let trie = Trie::new();
        assert_eq!(None, trie.iter().next());
    }

    #[test]
    fn it_iterates_over_populated_trie() {
        let trie: Trie = ["abcdef", "abcdefg", "abd", "ez", "z", "ze", "abdd", "abd"]
            .into_iter()
            .collect();
        let entries: Vec<(String, usize)> = trie.iter().map(|e| (e.key, e.count)).collect();
        assert_eq!(
            vec![
                ("abcdef".to_string(), 1),
                ("abcdefg".to_string(), 1),
                ("abd".to_string(), 2),
                ("abdd".to_string(), 1),
                ("ez".to_string(), 1),
                ("z".to_string(), 1),
                ("ze".to_string(), 1),
            ],
            entries
        );
    }

    #[test]
    fn it_yields_the_empty_line() {
        let trie: Trie = ["", "a", ""].into_iter().collect();
        let keys = trie.iter().map(|e| format!("{}:{}", e.key, e.count)).join(",");
        assert_eq!(":2,a:1", keys);
    }

    #[test]
    fn it_iterates_over_a_very_long_line() {
        let line = "y".repeat(500_000);
        let trie: Trie = [line.as_str(), ""].into_iter().collect();
        let entries: Vec<Entry> = trie.iter().collect();
        assert_eq!(2, entries.len());
        assert_eq!("", entries[0].key);
        assert_eq!(line, entries[1].key);
    }

    #[test]
    fn it_conserves_counts() {
        static POPULATION_SIZE: usize = 1000;
        static SIZE: usize = 8;
        let mut trie = Trie::new();
        let mut searches: Vec<String> = vec![];
        for _i in 0..POPULATION_SIZE {
            let entry: String = rng()
                .sample_iter(&Alphanumeric)
                .take(rng().random_range(1..=SIZE))
                .map(char::from)
                .collect();
            trie.ingest(&entry);
            searches.push(entry);
        }
        let entries: Vec<Entry> = trie.iter().collect();
        assert_eq!(
            POPULATION_SIZE,
            entries.iter().map(|e| e.count).sum::<usize>()
        );
        let expected: Vec<(String, usize)> = searches
            .into_iter()
            .sorted()
            .dedup_with_count()
            .map(|(count, key)| (key, count))
            .collect();
        let found: Vec<(String, usize)> = entries.into_iter().map(|e| (e.key, e.count)).collect();
        assert_eq!(expected, found);
    }
}
