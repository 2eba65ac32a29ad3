// src/exec/command.rs

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::{info, warn};

/// An external build invocation: a shell command string plus the directory to
/// run it in.
///
/// Immutable once constructed, so the rebuild action carries no hidden state
/// and a command can be inspected or rebuilt in tests without running it.
#[derive(Debug, Clone)]
pub struct BuildCommand {
    command: String,
    cwd: PathBuf,
}

impl BuildCommand {
    pub fn new(command: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            cwd: cwd.into(),
        }
    }

    /// The shell command line this invocation runs.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The working directory the command runs in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Run the command to completion through the platform shell.
    ///
    /// Output is forwarded line by line (stdout at info, stderr at warn).
    /// Spawn failures and nonzero exit codes both come back as `Err`; the
    /// caller decides whether that is fatal.
    pub async fn execute(&self) -> Result<()> {
        info!(cmd = %self.command, cwd = ?self.cwd, "starting build");
        let started = Instant::now();

        // Build a shell command appropriate for the platform.
        let mut cmd = if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.command);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.command);
            c
        };

        cmd.current_dir(&self.cwd)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd
            .spawn()
            .with_context(|| format!("spawning build command '{}'", self.command))?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let stdout_task = tokio::spawn(async move {
            if let Some(stdout) = stdout {
                let mut lines = BufReader::new(stdout).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    info!("build: {line}");
                }
            }
        });

        let stderr_task = tokio::spawn(async move {
            if let Some(stderr) = stderr {
                let mut lines = BufReader::new(stderr).lines();
                while let Ok(Some(line)) = lines.next_line().await {
                    warn!("build: {line}");
                }
            }
        });

        let status = child
            .wait()
            .await
            .with_context(|| format!("waiting for build command '{}'", self.command))?;

        // Drain the output readers before reporting.
        let _ = stdout_task.await;
        let _ = stderr_task.await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        if status.success() {
            info!(elapsed_ms, "build complete");
            Ok(())
        } else {
            let code = status.code().unwrap_or(-1);
            Err(anyhow!(
                "build command '{}' exited with code {code} after {elapsed_ms}ms",
                self.command
            ))
        }
    }
}
