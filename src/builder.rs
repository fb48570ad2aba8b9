//! Reads lines from files or standard input into a [`Trie`].
//!
//! A line is a record terminated by `\n`; the terminator, and a `\r` before
//! it, are not part of the line. A final record without terminator is still
//! a line. Bytes which are not valid UTF-8 are replaced with U+FFFD, so no
//! input is ever rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::trie::Trie;

/// What [`ingest_sources`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines ingested across all sources.
    pub lines: usize,
    /// Sources read completely.
    pub sources: usize,
    /// Sources which could not be read.
    pub skipped: usize,
}

/// Ingest every line of `reader`, returning the number of lines read.
pub fn read_lines<R: BufRead>(mut reader: R, trie: &mut Trie) -> io::Result<usize> {
    let mut buf = Vec::new();
    let mut lines = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        trie.ingest(&String::from_utf8_lossy(&buf));
        lines += 1;
    }
    Ok(lines)
}

/// Ingest every line of the named file.
pub fn ingest_path(path: &Path, trie: &mut Trie) -> Result<usize> {
    let source = |source| Error::Source {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(source)?;
    read_lines(BufReader::new(file), trie).map_err(source)
}

/// Ingest all sources, in order, into one shared trie.
///
/// Without paths, standard input is read. A named source which cannot be
/// read is reported and skipped; the remaining sources are still ingested.
pub fn ingest_sources<P: AsRef<Path>>(paths: &[P], trie: &mut Trie) -> Result<Summary> {
    let mut summary = Summary::default();
    if paths.is_empty() {
        summary.lines = read_lines(io::stdin().lock(), trie)?;
        summary.sources = 1;
        debug!(lines = summary.lines, "read standard input");
        return Ok(summary);
    }
    for path in paths {
        let path = path.as_ref();
        match ingest_path(path, trie) {
            Ok(lines) => {
                debug!(path = %path.display(), lines, "read source");
                summary.lines += lines;
                summary.sources += 1;
            }
            Err(error) => {
                warn!(%error, "skipping input");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}
