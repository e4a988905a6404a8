//! Subcommand handlers

pub mod generate;
pub mod keys;
pub mod pick;
pub mod watch;

use is_terminal::IsTerminal;

use keymirror::config::Config;

use crate::cli::GenerateArgs;
use crate::ui::OutputStyle;

/// Everything a command needs besides its own arguments
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub json: bool,
    pub config: Config,
    pub style: OutputStyle,
    /// Prompts are allowed (stdin is a terminal and output is not NDJSON)
    pub interactive: bool,
}

impl CommandContext {
    pub fn new(json: bool, config: Config, style: OutputStyle) -> Self {
        Self {
            interactive: !json && std::io::stdin().is_terminal(),
            json,
            config,
            style: if json { OutputStyle::plain() } else { style },
        }
    }
}

/// CLI flags take precedence over config and environment
pub fn apply_generate_args(config: &mut Config, args: &GenerateArgs) {
    if let Some(language) = args.language {
        config.generate.language = language;
    }
    if let Some(class_name) = &args.class_name {
        config.generate.class_name = class_name.clone();
    }
    if let Some(namespace) = &args.namespace {
        config.generate.namespace = Some(namespace.clone());
    }
}
