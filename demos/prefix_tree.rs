use itertools::Itertools;
use prefix_tree::PrefixTree;
use std::collections::BTreeSet;
use tracing_subscriber::EnvFilter;

fn create_prefix_tree(strings: &[&str]) {
    println!("strings: {:?}", strings);

    let mut tree = PrefixTree::new();
    println!("\ntree: {:?}", tree);
    println!("root: {:?}", tree.root());
    println!("strings: {:?}", tree.strings());

    println!("\nInserting strings:");
    for s in strings {
        tree.insert(s);
        println!("insert({:?}), size: {}", s, tree.len());
    }

    println!("\ntree: {:?}", tree);
    println!("root: {:?}", tree.root());

    println!("\nSearching for strings in tree:");
    for s in strings.iter().sorted().dedup() {
        println!("contains({:?}): {}", s, tree.contains(s));
    }

    // First half of each string, by chars
    let prefixes: BTreeSet<String> = strings
        .iter()
        .map(|s| s.chars().take(s.chars().count() / 2).collect())
        .collect();

    println!("\nSearching for strings not in tree:");
    for prefix in prefixes
        .iter()
        .filter(|p| !p.is_empty() && !strings.contains(&p.as_str()))
    {
        println!("contains({:?}): {}", prefix, tree.contains(prefix));
    }

    println!("\nCompleting prefixes in tree:");
    for prefix in &prefixes {
        println!("complete({:?}): {:?}", prefix, tree.complete(prefix));
    }

    println!("\nRetrieving all strings:");
    let retrieved = tree.strings();
    println!("strings: {:?}", retrieved);
    let matches = retrieved.iter().map(String::as_str).collect::<BTreeSet<&str>>()
        == strings.iter().copied().collect::<BTreeSet<&str>>();
    println!("matches? {}", matches);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Simple case of strings with partial overlaps
    create_prefix_tree(&["ABC", "ABD", "A", "XYZ"]);

    println!("\n{}\n", "=".repeat(80));

    // Tongue-twister with many similar words
    let seashells = "Shelly sells seashells by the sea shore"
        .split_whitespace()
        .collect::<Vec<&str>>();
    println!("Seashells tongue-twister:");
    create_prefix_tree(&seashells);
}
