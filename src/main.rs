//! keymirror CLI - mirror configuration keys into a generated class
//!
//! Usage: keymirror <COMMAND>
//!
//! Commands:
//!   watch     Watch a config file and regenerate the class when keys change
//!   generate  Generate the class once and exit
//!   keys      List the keys found in a config file

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use keymirror::config::{Config, ConfigWarning};
use keymirror::KeymirrorError;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::CommandContext;
use ui::views::config::render_config_warnings;
use ui::OutputStyle;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) = load_config(&cli)?;
    let caps = ui::terminal::detect_capabilities();
    let color = cli.color.unwrap_or(config.output.color);
    let style = OutputStyle::resolve(color, config.output.unicode, caps);
    let warning_style = if cli.json { OutputStyle::plain() } else { style };
    eprint!("{}", render_config_warnings(&warnings, warning_style));
    let ctx = CommandContext::new(cli.json, config, style);

    let result = match cli.command {
        Commands::Watch {
            input,
            output,
            interval_ms,
            generate,
        } => commands::watch::cmd_watch(ctx, input, output, interval_ms, &generate),
        Commands::Generate {
            input,
            output,
            generate,
        } => commands::generate::cmd_generate(ctx, input, output, &generate),
        Commands::Keys { input } => commands::keys::cmd_keys(ctx, input),
    };
    exit_cleanly_on_cancel(result)
}

/// A cancelled file prompt is reported but is not a failure
fn exit_cleanly_on_cancel(result: Result<()>) -> Result<()> {
    match result {
        Err(e) if is_cancellation(&e) => {
            eprintln!("{}", e);
            Ok(())
        }
        other => other,
    }
}

fn is_cancellation(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<KeymirrorError>(),
        Some(KeymirrorError::SelectionCancelled { .. })
    )
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "keymirror=warn",
        1 => "keymirror=info",
        2 => "keymirror=debug",
        _ => "keymirror=trace",
    }
}

/// `--config` replaces the lookup chain; env overrides apply either way
fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let Some(path) = &cli.config else {
        let cwd = std::env::current_dir().ok();
        return Ok(Config::load_or_default_with_warnings(cwd.as_deref()));
    };

    let (config, warnings) = Config::load_with_warnings(path)?;
    Ok((config.with_env_overrides(), warnings))
}
