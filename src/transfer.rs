//! Cross-namespace file transfer via the bridge executable.
//!
//! The bridge's `push` / `pull` subcommands are the only transfer mechanism;
//! they run as blocking child processes.  The trait seam lets the controller
//! be tested without spawning anything.

use std::io;
use std::process::{Command, Stdio};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("failed to run {program} {subcommand}: {source}")]
    Spawn {
        program: String,
        subcommand: &'static str,
        source: io::Error,
    },

    #[error("{subcommand} exited with {status}")]
    Failed {
        subcommand: &'static str,
        status: std::process::ExitStatus,
    },
}

pub type TransferResult = Result<(), TransferError>;

/// Transfer mechanism between the two namespaces.
pub trait Transfer {
    /// Copy a local file to the remote namespace.
    fn push(&mut self, src: &str, dst: &str) -> TransferResult;

    /// Copy a remote file to the local namespace.
    fn pull(&mut self, src: &str, dst: &str) -> TransferResult;
}

/// Runs `<bridge> push|pull <src> <dst>`, blocking until it exits.
/// Stdio is silenced so the child cannot scribble over the TUI.
pub struct BridgeTransfer {
    program: String,
}

impl BridgeTransfer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, subcommand: &'static str, src: &str, dst: &str) -> TransferResult {
        let status = Command::new(&self.program)
            .arg(subcommand)
            .arg(src)
            .arg(dst)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| TransferError::Spawn {
                program: self.program.clone(),
                subcommand,
                source,
            })?;
        if status.success() {
            Ok(())
        } else {
            Err(TransferError::Failed { subcommand, status })
        }
    }
}

impl Transfer for BridgeTransfer {
    fn push(&mut self, src: &str, dst: &str) -> TransferResult {
        self.run("push", src, dst)
    }

    fn pull(&mut self, src: &str, dst: &str) -> TransferResult {
        self.run("pull", src, dst)
    }
}
