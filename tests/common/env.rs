//! Test environment for isolated keymirror runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

/// Result of running a keymirror CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory with its own config home
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_keymirror")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    /// Run keymirror from the environment root with stdin detached
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(self.root.path())
            .stdin(Stdio::null())
            .env("XDG_CONFIG_HOME", self.path(".xdg"))
            .env("HOME", self.path(".home"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("KEYMIRROR_INTERVAL_MS")
            .env_remove("KEYMIRROR_LANGUAGE")
            .env_remove("KEYMIRROR_CLASS_NAME")
            .env_remove("KEYMIRROR_COLOR");
        for (k, v) in env_vars {
            cmd.env(k, v);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Write `content` and pin the file's modification time to `tick` seconds
///
/// Filesystem timestamps can be coarse; pinning them keeps every edit
/// distinguishable by the monitor.
pub fn write_at(path: &Path, content: &str, tick: u64) {
    std::fs::write(path, content).unwrap();
    set_mtime(path, tick);
}

pub fn set_mtime(path: &Path, tick: u64) {
    let time: SystemTime = UNIX_EPOCH + Duration::from_secs(1_700_000_000 + tick);
    std::fs::File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}
