//! TestWorld pattern for declarative integration test setup.
//!
//! Every world owns a temp directory laid out like a checkout:
//! - `<root>/rounds/` is the default rounds directory (cwd is `<root>`)
//! - `<root>/config.toml` is passed via `--config` (absent unless written)

use anyhow::Result;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::SampleFiles;

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const ISOLATED_VARS: [&str; 4] = ["VIBEGIT_ROUNDS_DIR", "VIBEGIT_CONFIG", "PORT", "RUST_LOG"];

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use vibegit_testing::TestWorld;
///
/// let world = TestWorld::new().with_samples();
/// let result = world.run(&["rounds", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    rounds_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    samples: SampleFiles,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let rounds_dir = temp_dir.path().join("rounds");
        let config_path = temp_dir.path().join("config.toml");

        std::fs::create_dir_all(&rounds_dir).expect("Failed to create rounds dir");

        Self {
            temp_dir,
            rounds_dir,
            config_path,
            env_vars: HashMap::new(),
            samples: SampleFiles::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn rounds_dir(&self) -> &Path {
        &self.rounds_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Copy every bundled sample into the rounds directory.
    pub fn with_samples(self) -> Self {
        self.samples
            .copy_all_to(&self.rounds_dir)
            .expect("Failed to copy samples");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a round document into the rounds directory.
    pub fn write_round(&self, file_name: &str, doc: &Value) -> Result<PathBuf> {
        self.write_raw(file_name, &serde_json::to_string_pretty(doc)?)
    }

    /// Write arbitrary text (e.g. broken JSON) into the rounds directory.
    pub fn write_raw(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        let path = self.rounds_dir.join(file_name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());

        for key in ISOLATED_VARS {
            cmd.env_remove(key);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the `vibegit` binary inside this world.
    ///
    /// Requires the binary to be built, which cargo does for the CLI
    /// package's integration tests.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("vibegit")
            .map_err(|e| anyhow::anyhow!("Failed to find vibegit binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
