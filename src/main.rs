use std::io::{self, BufWriter, Write};

use anyhow::Result;
use stree::builder::ingest_sources;
use stree::config::{parse_args, Invocation, USAGE};
use stree::render::write_to;
use stree::trie::Trie;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let (config, sources) = match parse_args(std::env::args_os().skip(1)) {
        Invocation::Help => {
            eprint!("{USAGE}");
            // Asking for help is not an error, but stree has always exited 1 here
            std::process::exit(1);
        }
        Invocation::Run { config, sources } => (config, sources),
    };
    debug!(?config, sources = sources.len(), "resolved invocation");

    let mut trie = Trie::new();
    let summary = ingest_sources(&sources, &mut trie)?;
    debug!(
        lines = summary.lines,
        skipped = summary.skipped,
        nodes = trie.size(),
        "built trie"
    );

    let mut out = BufWriter::new(io::stdout().lock());
    write_to(&mut out, &trie, &config)?;
    out.flush()?;
    Ok(())
}
