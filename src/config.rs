//! Rendering options and the command line flags which select them.
//!
//! Options are scanned from the front of the argument list. Scanning stops
//! at `--`, which is consumed, or at the first token which is not a known
//! flag. That token and everything after it name input files.
//!
//! ```
//! use stree::config::{parse_args, Invocation, Style};
//!
//! match parse_args(["-f", "-b", "words.txt"]) {
//!     Invocation::Run { config, sources } => {
//!         assert_eq!(config.style(), Style::Braces);
//!         assert!(config.sort_by_count());
//!         assert_eq!(sources.len(), 1);
//!     }
//!     Invocation::Help => unreachable!(),
//! }
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Text printed for `-h`.
pub const USAGE: &str = "\
NAME
  stree - build and display a prefix trie from a list of strings

SYNOPSIS
  stree [-a] [-s] [-p|-b|-g] [-f] [-F] [--] [file...]
  stree -h

DESCRIPTION
  stree reads strings, one per line, from the given files or from standard
  input, and writes the prefix trie they form to standard output. Runs of
  characters shared by all strings below them are kept on one line.

OPTIONS
  -a  Sort siblings alphabetically. This is the default unless -f or -F is
      given, in which case siblings are sorted by descending frequency.

  -s  Replace the repeated common prefix with spaces on each line:
          2 ba
          1   r
          1   z
      Only used by the line based output.

  -p  Show structure with parentheses: ((ba(r)(z))(foo))

  -b  Show structure as a shell brace expansion: {ba{r,z},foo}

  -g  Show structure as a graphviz digraph: digraph { ba->{r;z};foo}

  -f  Prepend the frequency to every unit of output. The frequency is
      followed by a single space and is not padded to a fixed column, so
      lines with frequencies of different widths do not align.

  -F  Append the frequency to every unit of output.

  -h  Print this help and exit.

  --  End of options.
";

/// How the structure of the trie is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Style {
    /// One line per unit.
    #[default]
    Lines,
    /// Units nested in parentheses.
    Parens,
    /// Shell brace expansion.
    Braces,
    /// Graphviz digraph.
    Graph,
}

/// Resolved rendering options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Config {
    force_alphabetical: bool,
    repeat_prefix: bool,
    prepend_frequency: bool,
    append_frequency: bool,
    style: Style,
    frequency_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            force_alphabetical: false,
            repeat_prefix: true,
            prepend_frequency: false,
            append_frequency: false,
            style: Style::default(),
            frequency_width: 0,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force_alphabetical(mut self, on: bool) -> Self {
        self.force_alphabetical = on;
        self
    }

    pub fn with_repeat_prefix(mut self, on: bool) -> Self {
        self.repeat_prefix = on;
        self
    }

    pub fn with_prepend_frequency(mut self, on: bool) -> Self {
        self.prepend_frequency = on;
        self
    }

    pub fn with_append_frequency(mut self, on: bool) -> Self {
        self.append_frequency = on;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Minimum width of a prepended frequency in line based output.
    ///
    /// Frequencies are left justified within the field.
    pub fn with_frequency_width(mut self, width: usize) -> Self {
        self.frequency_width = width;
        self
    }

    pub fn force_alphabetical(&self) -> bool {
        self.force_alphabetical
    }

    pub fn repeat_prefix(&self) -> bool {
        self.repeat_prefix
    }

    pub fn prepend_frequency(&self) -> bool {
        self.prepend_frequency
    }

    pub fn append_frequency(&self) -> bool {
        self.append_frequency
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn frequency_width(&self) -> usize {
        self.frequency_width
    }

    /// Is any frequency shown?
    pub fn shows_frequency(&self) -> bool {
        self.prepend_frequency || self.append_frequency
    }

    /// Are siblings ordered by descending count rather than by character?
    pub fn sort_by_count(&self) -> bool {
        self.shows_frequency() && !self.force_alphabetical
    }

    /// Apply one command line flag.
    pub fn apply(self, flag: Flag) -> Self {
        match flag {
            Flag::ForceAlphabetical => self.with_force_alphabetical(true),
            Flag::NoRepeatPrefix => self.with_repeat_prefix(false),
            Flag::Parens => self.with_style(Style::Parens),
            Flag::Braces => self.with_style(Style::Braces),
            Flag::Graph => self.with_style(Style::Graph),
            Flag::PrependFrequency => self.with_prepend_frequency(true),
            Flag::AppendFrequency => self.with_append_frequency(true),
            // Not an option; parse_args answers it before anything is read
            Flag::Help => self,
        }
    }
}

/// A recognised command line flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    ForceAlphabetical,
    NoRepeatPrefix,
    Parens,
    Braces,
    Graph,
    PrependFrequency,
    AppendFrequency,
    Help,
}

impl Flag {
    pub const ALL: [Flag; 8] = [
        Flag::ForceAlphabetical,
        Flag::NoRepeatPrefix,
        Flag::Parens,
        Flag::Braces,
        Flag::Graph,
        Flag::PrependFrequency,
        Flag::AppendFrequency,
        Flag::Help,
    ];

    /// The token which selects this flag.
    pub fn token(self) -> &'static str {
        match self {
            Flag::ForceAlphabetical => "-a",
            Flag::NoRepeatPrefix => "-s",
            Flag::Parens => "-p",
            Flag::Braces => "-b",
            Flag::Graph => "-g",
            Flag::PrependFrequency => "-f",
            Flag::AppendFrequency => "-F",
            Flag::Help => "-h",
        }
    }

    pub fn parse(token: &str) -> Option<Flag> {
        Self::ALL.into_iter().find(|flag| flag.token() == token)
    }
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Print [`USAGE`] and stop.
    Help,
    /// Build the trie from `sources` (standard input when empty) and render
    /// it with `config`.
    Run {
        config: Config,
        sources: Vec<PathBuf>,
    },
}

/// Resolve the arguments which follow the program name.
pub fn parse_args<I>(args: I) -> Invocation
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut config = Config::default();
    let mut args = args.into_iter().map(Into::<OsString>::into).peekable();
    while let Some(arg) = args.peek() {
        let token = arg.to_str();
        if token == Some("--") {
            args.next();
            break;
        }
        match token.and_then(Flag::parse) {
            Some(Flag::Help) => return Invocation::Help,
            Some(flag) => {
                config = config.apply(flag);
                args.next();
            }
            None => break,
        }
    }
    Invocation::Run {
        config,
        sources: args.map(PathBuf::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> (Config, Vec<PathBuf>) {
        match parse_args(args.iter().copied()) {
            Invocation::Run { config, sources } => (config, sources),
            Invocation::Help => panic!("unexpected help for {:?}", args),
        }
    }

    #[test]
    fn it_defaults_to_alphabetical_lines() {
        let (config, sources) = run(&[]);
        assert_eq!(Config::default(), config);
        assert_eq!(Style::Lines, config.style());
        assert!(config.repeat_prefix());
        assert!(!config.shows_frequency());
        assert!(!config.sort_by_count());
        assert!(sources.is_empty());
    }

    #[test]
    fn it_maps_every_token_to_its_flag() {
        for flag in Flag::ALL {
            assert_eq!(Some(flag), Flag::parse(flag.token()));
        }
        assert_eq!(None, Flag::parse("-x"));
        assert_eq!(None, Flag::parse("--"));
        assert_eq!(None, Flag::parse("-af"));
    }

    #[test]
    fn it_sorts_by_count_when_showing_frequencies() {
        let (config, _) = run(&["-f"]);
        assert!(config.prepend_frequency());
        assert!(config.sort_by_count());
        let (config, _) = run(&["-F"]);
        assert!(config.append_frequency());
        assert!(config.sort_by_count());
        let (config, _) = run(&["-F", "-a"]);
        assert!(config.force_alphabetical());
        assert!(!config.sort_by_count());
    }

    #[test]
    fn it_lets_the_last_style_win() {
        let (config, _) = run(&["-p", "-g"]);
        assert_eq!(Style::Graph, config.style());
        let (config, _) = run(&["-g", "-b"]);
        assert_eq!(Style::Braces, config.style());
    }

    #[test]
    fn it_stops_at_the_end_of_options_marker() {
        let (config, sources) = run(&["-s", "--", "-f", "words"]);
        assert!(!config.repeat_prefix());
        assert!(!config.prepend_frequency());
        assert_eq!(vec![PathBuf::from("-f"), PathBuf::from("words")], sources);
    }

    #[test]
    fn it_treats_an_unknown_token_as_a_source() {
        let (config, sources) = run(&["-f", "-x", "-a", "words"]);
        assert!(!config.force_alphabetical());
        assert_eq!(
            vec![
                PathBuf::from("-x"),
                PathBuf::from("-a"),
                PathBuf::from("words")
            ],
            sources
        );
    }

    #[test]
    fn it_stops_at_the_first_file() {
        let (config, sources) = run(&["a.txt", "-f", "b.txt"]);
        assert!(!config.prepend_frequency());
        assert_eq!(3, sources.len());
    }

    #[test]
    fn it_asks_for_help() {
        assert_eq!(Invocation::Help, parse_args(["-h"]));
        assert_eq!(Invocation::Help, parse_args(["-a", "-h", "file"]));
        assert_ne!(Invocation::Help, parse_args(["file", "-h"]));
    }

    #[test]
    fn it_describes_unpadded_frequencies() {
        let (config, _) = run(&["-f"]);
        assert_eq!(0, config.frequency_width());
        assert!(USAGE.contains("not padded to a fixed column"));
    }

    #[test]
    fn it_builds_a_config() {
        let config = Config::new()
            .with_style(Style::Parens)
            .with_append_frequency(true)
            .with_frequency_width(8);
        assert_eq!(Style::Parens, config.style());
        assert_eq!(8, config.frequency_width());
        assert!(config.sort_by_count());
    }
}
