use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process;
use std::sync::Arc;

use clap::{Parser, ValueEnum};

use yomi_cli::commands::dict_ops;
use yomi_core::{KanwaDict, RomajiSystem, Target, Transliterator};

#[derive(Parser)]
#[command(name = "yomi", about = "Kanji to kana/romaji transliteration filter")]
struct Cli {
    /// Conversion target for kanji runs
    #[arg(short = 'J', long = "kanji", value_enum)]
    kanji: Option<TargetArg>,
    /// Conversion target for hiragana runs
    #[arg(short = 'H', long = "hiragana", value_enum)]
    hiragana: Option<TargetArg>,
    /// Conversion target for katakana runs
    #[arg(short = 'K', long = "katakana", value_enum)]
    katakana: Option<TargetArg>,
    /// Romanization system used by the ascii target
    #[arg(short = 'r', long, value_enum, default_value = "hepburn")]
    romaji: SystemArg,
    /// Split the output into words instead of converting
    #[arg(short = 'w', long, conflicts_with_all = ["kanji", "hiragana", "katakana"])]
    wakachigaki: bool,
    /// List every reading of an ambiguous word, not only the best one
    #[arg(short = 'p', long)]
    heiki: bool,
    /// Keep the surface form and annotate it with its reading
    #[arg(short = 'f', long)]
    furigana: bool,
    /// Let a dictionary match continue across whitespace
    #[arg(short = 'c', long = "space-eat")]
    space_eat: bool,
    /// Capitalize the first letter of each romanized word
    #[arg(short = 'C', long)]
    capitalize: bool,
    /// Romanize in upper case
    #[arg(short = 'U', long)]
    upper: bool,
    /// Compiled dictionary file
    #[arg(short = 'd', long = "dict")]
    dict: Option<String>,
    /// Plain-text lexicon file, may be given more than once
    #[arg(short = 'l', long = "lexicon")]
    lexicons: Vec<String>,
    /// Extra variant character table
    #[arg(long)]
    itaiji: Option<String>,
    /// Text to convert; standard input is read line by line when absent
    text: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TargetArg {
    Ascii,
    Kanji,
    Hiragana,
    Katakana,
}

impl From<TargetArg> for Target {
    fn from(arg: TargetArg) -> Target {
        match arg {
            TargetArg::Ascii => Target::Ascii,
            TargetArg::Kanji => Target::Kanji,
            TargetArg::Hiragana => Target::Hiragana,
            TargetArg::Katakana => Target::Katakana,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SystemArg {
    Hepburn,
    Kunrei,
}

impl From<SystemArg> for RomajiSystem {
    fn from(arg: SystemArg) -> RomajiSystem {
        match arg {
            SystemArg::Hepburn => RomajiSystem::Hepburn,
            SystemArg::Kunrei => RomajiSystem::Kunrei,
        }
    }
}

fn main() {
    yomi_cli::init_tracing();
    let cli = Cli::parse();

    let itaiji = dict_ops::load_itaiji(cli.itaiji.as_deref());
    let dict = Arc::new(KanwaDict::new(itaiji.clone()));
    if let Some(path) = &cli.dict {
        dict.open_backing(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Failed to open dictionary {}: {}", path, e);
            process::exit(1);
        });
    }
    for path in &cli.lexicons {
        dict.load_lexicon_path(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Failed to read lexicon {}: {}", path, e);
            process::exit(1);
        });
    }

    let mut tl = Transliterator::new(dict, itaiji);
    if cli.wakachigaki {
        tl.set_wakachigaki_mode(true);
    } else {
        tl.set_kanji_target(cli.kanji.map(Into::into));
        tl.set_hiragana_target(cli.hiragana.map(Into::into))
            .unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });
        tl.set_katakana_target(cli.katakana.map(Into::into))
            .unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            });
    }
    tl.set_romaji_system(cli.romaji.into());
    tl.set_heiki_mode(cli.heiki);
    tl.set_furigana_mode(cli.furigana);
    tl.set_space_eat_mode(cli.space_eat);
    tl.set_capitalize_mode(cli.capitalize);
    tl.set_upper_case_mode(cli.upper);

    if cli.text.is_empty() {
        run_stdin(&tl);
    } else {
        let line = cli.text.join(" ");
        println!("{}", convert_line(&tl, &line));
    }
}

fn run_stdin(tl: &Transliterator) {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| {
            eprintln!("Failed to read input: {}", e);
            process::exit(1);
        });
        writeln!(out, "{}", convert_line(tl, &line)).unwrap_or_else(|e| {
            eprintln!("Failed to write: {}", e);
            process::exit(1);
        });
    }
}

fn convert_line(tl: &Transliterator, line: &str) -> String {
    tl.convert_string(line).unwrap_or_else(|e| {
        eprintln!("Conversion failed: {}", e);
        process::exit(1);
    })
}
