//! Remote provider backed by the bridge shell channel.
//!
//! Every operation is one sentinel-framed round-trip.  Each operation has
//! its own sentinel token so a command's real output can never terminate
//! another call site's frame.

use super::{Namespace, PaneProvider, ProviderError, ProviderResult};
use crate::channel::ShellChannel;
use crate::remote_path;

const LS_SENTINEL: &str = "__LS_DONE__";
const ISDIR_SENTINEL: &str = "__ISDIR_DONE__";
const RM_SENTINEL: &str = "__RM_DONE__";
const RM_OK: &str = "__RM_OK__";
const RM_FAIL: &str = "__RM_FAIL__";

/// Provider for the bridge-reachable filesystem.
pub struct RemoteProvider {
    channel: ShellChannel,
}

impl RemoteProvider {
    pub fn new(channel: ShellChannel) -> Self {
        Self { channel }
    }
}

impl PaneProvider for RemoteProvider {
    fn namespace(&self) -> Namespace {
        Namespace::Remote
    }

    fn read_entries(&mut self, path: &str) -> ProviderResult<Vec<String>> {
        let command = format!("cd {} && ls -1", remote_path::quote_arg(path));
        Ok(self.channel.run(&command, LS_SENTINEL)?)
    }

    fn is_directory(&mut self, path: &str) -> bool {
        let command = format!(
            "[ -d {} ] && echo dir || echo nodir",
            remote_path::quote_arg(path)
        );
        // Channel failures fail closed: an unreachable path is not navigable.
        self.channel
            .probe(&command, "dir", ISDIR_SENTINEL)
            .unwrap_or(false)
    }

    fn delete_file(&mut self, path: &str) -> ProviderResult<()> {
        let quoted = remote_path::quote_arg(path);
        let command = format!(
            "[ -f {q} ] && rm {q} && echo {ok} || echo {fail}",
            q = quoted,
            ok = RM_OK,
            fail = RM_FAIL
        );
        let lines = self.channel.run(&command, RM_SENTINEL)?;
        if lines.iter().any(|l| l == RM_OK) {
            Ok(())
        } else {
            Err(ProviderError::RemoteCommand(format!("rm {}", path)))
        }
    }

    fn is_root(&self, path: &str) -> bool {
        remote_path::is_root(path)
    }

    fn parent_path(&self, path: &str) -> Option<String> {
        Some(remote_path::join(path, ".."))
    }

    fn join_path(&self, base: &str, name: &str) -> String {
        remote_path::join(base, name)
    }

    fn disconnect(&mut self) {
        self.channel.shutdown();
    }
}
