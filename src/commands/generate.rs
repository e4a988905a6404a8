use std::path::PathBuf;

use anyhow::{bail, Result};
use keymirror::infrastructure::{LocalFile, MemoryFile};
use keymirror::{MonitorEvent, Notification, TickOutcome};

use super::pick::{resolve_path, FileRole};
use super::watch::build_monitor;
use super::{apply_generate_args, CommandContext};
use crate::cli::GenerateArgs;
use crate::ui::views::generate::render_generated;

/// Run a single monitor cycle and report how it went
pub fn cmd_generate(
    ctx: CommandContext,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    generate: &GenerateArgs,
) -> Result<()> {
    let mut config = ctx.config.clone();
    apply_generate_args(&mut config, generate);

    let input = resolve_path(input, FileRole::Input, None, ctx.interactive)?;
    let language = config.generate.language;

    let mut events: Vec<Notification> = Vec::new();
    let outcome = match &output {
        Some(path) => {
            let mut monitor = build_monitor::<LocalFile>(&config);
            monitor.attach_source(LocalFile::new(&input));
            monitor.attach_sink(LocalFile::new(path));
            monitor.tick(&mut |n| events.push(n))
        }
        None => {
            // No output file: render into memory, then print the class
            let buffer = MemoryFile::new("<stdout>", "");
            let mut monitor = build_monitor::<MemoryFile>(&config);
            monitor.attach_source(LocalFile::new(&input));
            monitor.attach_sink(buffer.clone());
            let outcome = monitor.tick(&mut |n| events.push(n));
            if matches!(outcome, TickOutcome::Initialized { .. }) && !ctx.json {
                print!("{}", buffer.content());
            }
            outcome
        }
    };

    if ctx.json {
        for n in &events {
            println!("{}", n.to_json_for("generate"));
        }
    }

    let TickOutcome::Initialized { keys } = outcome else {
        let message = events
            .iter()
            .find_map(|n| match &n.event {
                MonitorEvent::Error { message, .. } => Some(message.clone()),
                _ => None,
            })
            .unwrap_or_else(|| "generation did not run".to_string());
        bail!(message);
    };

    if let (false, Some(path)) = (ctx.json, &output) {
        print!(
            "{}",
            render_generated(
                &path.display().to_string(),
                keys,
                language.display_name(),
                ctx.style
            )
        );
    }
    Ok(())
}
