use std::path::PathBuf;

use anyhow::Result;
use keymirror::domain::ports::WatchedSource;
use keymirror::infrastructure::LocalFile;
use keymirror::{Identifier, KeyExtractor};

use super::pick::{resolve_path, FileRole};
use super::CommandContext;
use crate::ui::views::keys::render_keys;

pub fn cmd_keys(ctx: CommandContext, input: Option<PathBuf>) -> Result<()> {
    let input = resolve_path(input, FileRole::Input, None, ctx.interactive)?;
    let source = LocalFile::new(&input);
    let name = source.describe();

    let content = source.read_content()?;
    let extractor = KeyExtractor::new().with_rules(ctx.config.extract_rules());
    let snapshot = extractor.try_extract(&content, &name)?;

    if ctx.json {
        let keys: Vec<serde_json::Value> = snapshot
            .entries()
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "key": entry.key(),
                    "value": entry.value(),
                    "identifier": Identifier::derive(entry.key()).as_str(),
                })
            })
            .collect();
        let out = serde_json::json!({
            "event": "keys",
            "command": "keys",
            "source": name,
            "keys": keys,
        });
        println!("{}", out);
        return Ok(());
    }

    print!("{}", render_keys(&name, &snapshot, ctx.style));
    Ok(())
}
