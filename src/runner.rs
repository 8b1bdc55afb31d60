//! Process execution seam for external tools.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// One external command: program, argv, and the environment entries applied
/// on top of (or instead of) the inherited environment.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub envs: Vec<(String, OsString)>,
    pub clear_env: bool,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: Vec::new(),
            clear_env: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: &str, value: impl Into<OsString>) -> Self {
        self.envs.push((key.to_string(), value.into()));
        self
    }

    /// Replace the inherited environment entirely with `envs`.
    pub fn clear_env(mut self) -> Self {
        self.clear_env = true;
        self
    }
}

/// Captured result of one invocation.
#[derive(Debug, Clone)]
pub struct ExecOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ExecOutput {
    /// Stdout followed by stderr, trailing whitespace trimmed. This is the
    /// diagnostic text forwarded verbatim into outcome comments.
    pub fn combined(&self) -> String {
        let mut s = self.stdout.clone();
        s.push_str(&self.stderr);
        s.trim_end().to_string()
    }
}

/// Trait for running external commands (keytool, the discovery shell).
/// Blocks until the process exits; `Err` only when the process cannot be
/// spawned at all.
pub trait Runner: Send + Sync {
    fn run(&self, inv: &Invocation) -> Result<ExecOutput>;
}

/// Runner backed by `std::process::Command`.
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    fn run(&self, inv: &Invocation) -> Result<ExecOutput> {
        log::debug!("running {} {:?}", inv.program.display(), inv.args);
        let mut cmd = Command::new(&inv.program);
        cmd.args(&inv.args).stdin(Stdio::null());
        if inv.clear_env {
            cmd.env_clear();
        }
        for (k, v) in &inv.envs {
            cmd.env(k, v);
        }
        let out = cmd
            .output()
            .with_context(|| format!("spawn {}", inv.program.display()))?;
        Ok(ExecOutput {
            success: out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        })
    }
}
