use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("command `{command}` failed with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<OsString>,
    pub env: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub dry_run: bool,
    /// Also write captured stdout here, and stderr next to it with an `.err` extension.
    pub stdout_file: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn run(&self, opts: &RunOptions) -> Result<(), ExecError> {
        info!(command = %self, "running");
        if opts.dry_run {
            info!("dry run, command not executed");
            return Ok(());
        }

        let output = self.output()?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if let Some(path) = &opts.stdout_file {
            std::fs::write(path, stdout.as_bytes())?;
            std::fs::write(stderr_path(path), stderr.as_bytes())?;
        }
        if !stdout.trim().is_empty() {
            info!(program = %self.program, "{}", stdout.trim_end());
        }
        if !stderr.trim().is_empty() {
            warn!(program = %self.program, "{}", stderr.trim_end());
        }

        if !output.status.success() {
            return Err(ExecError::Failed {
                command: self.to_string(),
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        Ok(())
    }

    /// Runs a read-only command, regardless of dry-run, and returns its trimmed stdout.
    pub fn query(&self) -> Result<String, ExecError> {
        info!(command = %self, "querying");
        let output = self.output()?;
        if !output.status.success() {
            return Err(ExecError::Failed {
                command: self.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn output(&self) -> Result<std::process::Output, ExecError> {
        Command::new(&self.program)
            .args(&self.args)
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .output()
            .map_err(|source| ExecError::Spawn {
                program: self.program.clone(),
                source,
            })
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in &self.env {
            write!(f, "{k}={v} ")?;
        }
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn stderr_path(stdout: &Path) -> PathBuf {
    stdout.with_extension("err")
}

#[cfg(test)]
#[path = "../../tests/src_inline/xfm/tool.rs"]
mod tests;
