use stree::config::{Config, Style};
use stree::render::render;
use stree::trie::Trie;

fn main() {
    // Words of a short text, one per line
    let text = "the quick brown fox jumps over the lazy dog then the fox \
                jumps over the dog and they both take a quick break";
    let trie: Trie = text.split_whitespace().collect();

    // Most frequent prefixes first, with the prefix replaced by spaces
    let config = Config::new()
        .with_prepend_frequency(true)
        .with_repeat_prefix(false)
        .with_frequency_width(4);
    print!("{}", render(&trie, &config));

    for style in [Style::Parens, Style::Braces, Style::Graph] {
        println!("{style:?}");
        print!("{}", render(&trie, &Config::new().with_style(style)));
    }

    for entry in trie.iter().filter(|e| e.count > 1) {
        println!("{} x{}", entry.key, entry.count);
    }
}
