//! Dictionary build and inspection commands.

use std::path::Path;
use std::process;
use std::sync::Arc;

use yomi_core::{ItaijiTable, KanwaDict};

pub fn load_itaiji(path: Option<&str>) -> Arc<ItaijiTable> {
    match path {
        Some(path) => Arc::new(ItaijiTable::load(Path::new(path))),
        None => Arc::new(ItaijiTable::new()),
    }
}

pub fn compile(lexicons: &[String], itaiji: Option<&str>, output: &str) {
    if lexicons.is_empty() {
        eprintln!("No lexicon files given");
        process::exit(1);
    }
    let dict = KanwaDict::new(load_itaiji(itaiji));
    for path in lexicons {
        dict.load_lexicon_path(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Failed to read lexicon {}: {}", path, e);
            process::exit(1);
        });
    }
    dict.save_to_path(Path::new(output)).unwrap_or_else(|e| {
        eprintln!("Failed to write dictionary {}: {}", output, e);
        process::exit(1);
    });
    eprintln!("Compiled {} lexicon(s) -> {}", lexicons.len(), output);
}

pub fn info(file: &str) {
    let dict = open(file);
    let keys = dict.backing_keys();
    let entries: u64 = keys.iter().map(|&(_, count)| u64::from(count)).sum();
    println!("{}: {} keys, {} entries", file, keys.len(), entries);
    if let (Some(&(first, _)), Some(&(last, _))) = (keys.first(), keys.last()) {
        println!("  key range: {} .. {}", first, last);
    }
}

pub fn lookup(file: &str, key: &str) {
    let mut chars = key.chars();
    let (Some(key), None) = (chars.next(), chars.next()) else {
        eprintln!("The lookup key must be a single character");
        process::exit(1);
    };
    let dict = open(file);
    // stored keys are variant-normalized, so fold the query the same way
    let key = dict.itaiji().get(key);
    let entries = dict.lookup(key).unwrap_or_else(|e| {
        eprintln!("Lookup failed: {}", e);
        process::exit(1);
    });
    if entries.is_empty() {
        println!("(no entries)");
        return;
    }
    for entry in &entries {
        match entry.okurigana() {
            Some(class) => println!(
                "{}{} -> {}- ({})",
                key,
                entry.suffix(),
                entry.reading(),
                class
            ),
            None => println!("{}{} -> {}", key, entry.suffix(), entry.reading()),
        }
    }
}

fn open(file: &str) -> KanwaDict {
    let dict = KanwaDict::default();
    dict.open_backing(Path::new(file)).unwrap_or_else(|e| {
        eprintln!("Failed to open dictionary {}: {}", file, e);
        process::exit(1);
    });
    dict
}
