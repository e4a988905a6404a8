use std::path::PathBuf;

use anyhow::Result;
use keymirror::config::Config;
use keymirror::domain::ports::OutputSink;
use keymirror::infrastructure::LocalFile;
use keymirror::{CodeGenerator, FileMonitor, KeyExtractor, MonitorEvent};

use super::pick::{resolve_path, FileRole};
use super::{apply_generate_args, CommandContext};
use crate::cli::GenerateArgs;
use crate::ui::views::watch::{render_notification, render_watch_header};

/// Default output file name for the configured class
pub fn suggested_output(config: &Config) -> String {
    format!(
        "{}.{}",
        config.generate.class_name,
        config.generate.language.file_extension()
    )
}

/// Build a monitor for a local input file from resolved configuration
pub fn build_monitor<K: OutputSink>(config: &Config) -> FileMonitor<LocalFile, K> {
    FileMonitor::new(
        config.monitor_options(),
        KeyExtractor::new().with_rules(config.extract_rules()),
        CodeGenerator::new(config.generator_options()),
    )
}

pub fn cmd_watch(
    ctx: CommandContext,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    interval_ms: Option<u64>,
    generate: &GenerateArgs,
) -> Result<()> {
    let mut config = ctx.config.clone();
    apply_generate_args(&mut config, generate);
    if let Some(ms) = interval_ms {
        config.watch.interval_ms = ms;
    }

    let input = resolve_path(input, FileRole::Input, None, ctx.interactive)?;
    let suggestion = suggested_output(&config);
    let output = resolve_path(output, FileRole::Output, Some(&suggestion), ctx.interactive)?;

    let mut monitor = build_monitor::<LocalFile>(&config);
    monitor.attach_source(LocalFile::new(&input));
    monitor.attach_sink(LocalFile::new(&output));

    // Set up Ctrl+C handler
    let stop = monitor.stop_handle();
    ctrlc::set_handler(move || stop.stop())?;

    if !ctx.json {
        print!(
            "{}",
            render_watch_header(
                &input.display().to_string(),
                &output.display().to_string(),
                config.generate.language.display_name(),
                ctx.style
            )
        );
    }

    monitor.run(|notification| {
        if ctx.json {
            println!("{}", notification.to_json());
            return;
        }
        let rendered = render_notification(&notification, ctx.style);
        match notification.event {
            MonitorEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
