use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use keymirror::config::ColorMode;
use keymirror::TargetLanguage;

/// keymirror - mirror configuration keys into a generated class
#[derive(Parser, Debug)]
#[command(name = "keymirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the lookup chain
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that generates a class
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Target language
    #[arg(short, long, value_enum)]
    pub language: Option<TargetLanguage>,

    /// Name of the generated class
    #[arg(long)]
    pub class_name: Option<String>,

    /// Namespace (C#) or module doc (Rust)
    #[arg(long)]
    pub namespace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Watch a config file and regenerate the class when keys change
    Watch {
        /// Config document to watch (prompted if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Generated class file (prompted if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Polling interval in milliseconds
        #[arg(long)]
        interval_ms: Option<u64>,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Generate the class once and exit
    Generate {
        /// Config document to read (prompted if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Generated class file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// List the keys found in a config file
    Keys {
        /// Config document to read (prompted if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
