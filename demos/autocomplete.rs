use prefix_tree::PrefixTree;
use std::io::{self, BufRead};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Usage: cargo run --example autocomplete -- <prefix>... < words.txt
fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut tree = PrefixTree::new();
    for line in io::stdin().lock().lines() {
        tree.extend(line?.split_whitespace());
    }
    info!(words = tree.len(), "dictionary loaded");

    for prefix in std::env::args().skip(1) {
        let completions = tree.complete(&prefix);
        println!("{}: {}", prefix, completions.join(" "));
    }
    Ok(())
}
