use clap::{Parser, Subcommand};

use yomi_cli::commands::dict_ops;

#[derive(Parser)]
#[command(name = "yomidict", about = "Kanwa dictionary build tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile plain-text lexicons into a binary dictionary
    Compile {
        /// Output file
        #[arg(short, long)]
        output: String,
        /// Extra variant character table applied while compiling
        #[arg(long)]
        itaiji: Option<String>,
        /// Lexicon files, loaded in order
        lexicons: Vec<String>,
    },
    /// Show a compiled dictionary's index summary
    Info {
        /// Dictionary file
        file: String,
    },
    /// List the entries stored under one key character
    Lookup {
        /// Dictionary file
        file: String,
        /// Key character
        key: String,
    },
}

fn main() {
    yomi_cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            output,
            itaiji,
            lexicons,
        } => dict_ops::compile(&lexicons, itaiji.as_deref(), &output),
        Command::Info { file } => dict_ops::info(&file),
        Command::Lookup { file, key } => dict_ops::lookup(&file, &key),
    }
}
