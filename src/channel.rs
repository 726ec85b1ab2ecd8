//! Persistent bridge shell that lives for the entire application lifetime.
//!
//! The channel owns one `<bridge> shell` child process and speaks a
//! sentinel-framed request/response protocol over its stdin/stdout pipes:
//! write the command line, write `echo <sentinel>`, flush, then read lines
//! until the sentinel comes back.  Exactly one request is in flight at a
//! time; every call blocks until its sentinel (or a stream failure) is
//! observed.  The framing is expressed against a [`Transport`] so it can be
//! exercised without a subprocess.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Errors on the shell channel.  None of these tear the session down; the
/// caller decides what a failed round-trip means for its operation.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("failed to spawn bridge shell: {0}")]
    Spawn(#[source] io::Error),

    #[error("shell stream error: {0}")]
    Io(#[from] io::Error),

    #[error("shell stream closed before sentinel {0}")]
    ClosedBeforeSentinel(String),

    #[error("bridge shell handshake never completed")]
    Handshake,
}

/// Line-oriented transport under the sentinel framing.
pub trait Transport {
    /// Write one line (terminator appended) without flushing.
    fn send_line(&mut self, line: &str) -> io::Result<()>;

    /// Flush buffered writes to the peer.
    fn flush(&mut self) -> io::Result<()>;

    /// Read one line, blocking.  Trailing `\r`/`\n` are stripped.
    /// Returns `None` once the stream is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Transport over a child process's stdio pipes.
pub struct PipeTransport {
    writer: BufWriter<ChildStdin>,
    reader: BufReader<ChildStdout>,
}

impl PipeTransport {
    pub fn new(stdin: ChildStdin, stdout: ChildStdout) -> Self {
        Self {
            writer: BufWriter::new(stdin),
            reader: BufReader::new(stdout),
        }
    }
}

impl Transport for PipeTransport {
    fn send_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        let n = self.reader.read_line(&mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// A strictly synchronous command channel into the bridge's remote shell.
pub struct ShellChannel {
    transport: Box<dyn Transport>,
    child: Option<Child>,
}

impl ShellChannel {
    /// Spawn `<bridge> shell` and block until the remote side answers the
    /// `READY` handshake.  Failure here is fatal to startup.
    pub fn spawn(bridge: &str) -> Result<Self, ChannelError> {
        let mut child = Command::new(bridge)
            .arg("shell")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(ChannelError::Spawn)?;

        // Both pipes exist: we asked for them above.
        let stdin = child.stdin.take().ok_or(ChannelError::Handshake)?;
        let stdout = child.stdout.take().ok_or(ChannelError::Handshake)?;

        let mut channel = Self {
            transport: Box::new(PipeTransport::new(stdin, stdout)),
            child: Some(child),
        };
        channel.handshake()?;
        Ok(channel)
    }

    /// Build a channel over an existing transport (no subprocess, no
    /// handshake).  Used by tests and by any future non-pipe transport.
    pub fn from_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            child: None,
        }
    }

    /// Block until the remote shell echoes `READY`, discarding any banner
    /// lines the shell prints while initializing.
    fn handshake(&mut self) -> Result<(), ChannelError> {
        self.transport.send_line("echo READY")?;
        self.transport.flush()?;
        loop {
            match self.transport.read_line()? {
                None => return Err(ChannelError::Handshake),
                Some(line) if line.trim_end() == "READY" => return Ok(()),
                Some(_) => {}
            }
        }
    }

    /// Run one command and collect its complete output.
    ///
    /// Writes `command`, then `echo <sentinel>`, flushes, and reads lines
    /// until the sentinel appears.  The sentinel line is consumed and never
    /// included; empty lines are dropped.  Each call site supplies its own
    /// sentinel token so no command's real output can be mistaken for the
    /// frame end of another operation.
    pub fn run(&mut self, command: &str, sentinel: &str) -> Result<Vec<String>, ChannelError> {
        self.transport.send_line(command)?;
        self.transport.send_line(&format!("echo {}", sentinel))?;
        self.transport.flush()?;

        let mut lines = Vec::new();
        loop {
            match self.transport.read_line()? {
                None => return Err(ChannelError::ClosedBeforeSentinel(sentinel.to_string())),
                Some(line) => {
                    let line = line.trim_end();
                    if line == sentinel {
                        return Ok(lines);
                    }
                    if !line.is_empty() {
                        lines.push(line.to_string());
                    }
                }
            }
        }
    }

    /// Run a boolean probe: the command is built to print `keyword` before
    /// the sentinel when the predicate holds.  True iff the keyword line
    /// appeared in the frame.
    pub fn probe(
        &mut self,
        command: &str,
        keyword: &str,
        sentinel: &str,
    ) -> Result<bool, ChannelError> {
        let lines = self.run(command, sentinel)?;
        Ok(lines.iter().any(|l| l == keyword))
    }

    /// Ask the remote shell to exit, then make sure the child is gone:
    /// bounded wait, then kill.  Safe to call when no child exists.
    pub fn shutdown(&mut self) {
        let _ = self.transport.send_line("exit");
        let _ = self.transport.flush();

        let Some(mut child) = self.child.take() else {
            return;
        };
        let deadline = Instant::now() + Duration::from_millis(500);
        loop {
            match child.try_wait() {
                Ok(Some(_)) => return,
                Ok(None) if Instant::now() < deadline => {
                    std::thread::sleep(Duration::from_millis(25));
                }
                _ => break,
            }
        }
        let _ = child.kill();
        let _ = child.wait();
    }
}

impl Drop for ShellChannel {
    fn drop(&mut self) {
        self.shutdown();
    }
}
