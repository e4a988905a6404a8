//! File selection for commands whose paths were not given as flags

use std::path::PathBuf;

use dialoguer::Input;
use keymirror::{KeymirrorError, KeymirrorResult};

/// A file the command needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Input,
    Output,
}

impl FileRole {
    fn label(&self) -> &'static str {
        match self {
            FileRole::Input => "input file",
            FileRole::Output => "output file",
        }
    }

    fn prompt(&self) -> &'static str {
        match self {
            FileRole::Input => "Config file to watch",
            FileRole::Output => "Class file to generate",
        }
    }
}

/// Use the flag value, or ask for a path when prompting is allowed
pub fn resolve_path(
    given: Option<PathBuf>,
    role: FileRole,
    suggestion: Option<&str>,
    interactive: bool,
) -> KeymirrorResult<PathBuf> {
    if let Some(path) = given {
        return Ok(path);
    }
    if !interactive {
        return Err(KeymirrorError::NotReady {
            missing: role.label(),
        });
    }

    let mut input = Input::<String>::new()
        .with_prompt(role.prompt())
        .allow_empty(true);
    if let Some(default) = suggestion {
        input = input.default(default.to_string());
    }

    let answer = input.interact_text().map_err(|_| cancelled(role))?;
    answer_to_path(&answer, role)
}

fn answer_to_path(answer: &str, role: FileRole) -> KeymirrorResult<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(cancelled(role));
    }
    Ok(PathBuf::from(trimmed))
}

fn cancelled(role: FileRole) -> KeymirrorError {
    KeymirrorError::SelectionCancelled {
        what: role.label().to_string(),
    }
}
