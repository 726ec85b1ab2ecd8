//! Dual-pane controller.
//!
//! Owns the two panes, the active-side marker and the transfer mechanism,
//! and implements the navigation / delete / copy transitions.  All user
//! interaction goes through the [`Prompt`] callback contract, so the whole
//! state machine tests without any rendering attached.

use crate::pane::Pane;
use crate::providers::{EMPTY_ENTRY, ERROR_ENTRY, Namespace, PARENT_ENTRY, is_synthetic};
use crate::transfer::Transfer;

/// Which pane is which
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// User-facing prompts, implemented by the rendering collaborator.
pub trait Prompt {
    /// Ask a yes/no question.
    fn confirm(&mut self, title: &str, message: &str) -> bool;

    /// Report a non-fatal error.
    fn error(&mut self, message: &str);
}

/// Manages the two panes and their interaction
pub struct Commander {
    pub left_pane: Pane,
    pub right_pane: Pane,
    pub active_side: Side,
    transfer: Box<dyn Transfer>,
}

impl Commander {
    pub fn new(left_pane: Pane, right_pane: Pane, transfer: Box<dyn Transfer>) -> Self {
        Self {
            left_pane,
            right_pane,
            active_side: Side::Left,
            transfer,
        }
    }

    pub fn active_pane(&self) -> &Pane {
        match self.active_side {
            Side::Left => &self.left_pane,
            Side::Right => &self.right_pane,
        }
    }

    pub fn active_pane_mut(&mut self) -> &mut Pane {
        match self.active_side {
            Side::Left => &mut self.left_pane,
            Side::Right => &mut self.right_pane,
        }
    }

    pub fn inactive_pane(&self) -> &Pane {
        match self.active_side {
            Side::Left => &self.right_pane,
            Side::Right => &self.left_pane,
        }
    }

    pub fn inactive_pane_mut(&mut self) -> &mut Pane {
        match self.active_side {
            Side::Left => &mut self.right_pane,
            Side::Right => &mut self.left_pane,
        }
    }

    /// Flip the active pane.  No I/O.
    pub fn toggle_pane(&mut self) {
        self.active_side = match self.active_side {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
    }

    /// Re-read both panes' listings.
    pub fn refresh_panes(&mut self) {
        self.left_pane.refresh();
        self.right_pane.refresh();
    }

    /// Enter the selected item: `".."` goes to the parent, a directory
    /// entry is joined onto the current path and entered after an
    /// `is_directory` guard (skipped only for the trusted pseudo-path
    /// target).  `"(empty)"` and `"(error)"` are inert.
    pub fn navigate(&mut self) {
        let pane = self.active_pane_mut();
        let Some(item) = pane.selected_item().map(str::to_string) else {
            return;
        };
        if item == EMPTY_ENTRY || item == ERROR_ENTRY {
            return;
        }

        let target = if item == PARENT_ENTRY {
            match pane.provider.parent_path(&pane.path) {
                Some(parent) => parent,
                None => return, // already at the top, stay
            }
        } else {
            pane.provider.join_path(&pane.path, &item)
        };

        if pane.provider.skip_directory_probe(&target) || pane.provider.is_directory(&target) {
            pane.enter(target);
        }
    }

    /// Delete the selected item after confirmation.  Synthetic entries are
    /// refused before any I/O; failures are reported without touching pane
    /// state.
    pub fn delete(&mut self, prompt: &mut dyn Prompt) {
        let pane = self.active_pane();
        let Some(item) = pane.selected_item().map(str::to_string) else {
            return;
        };
        if is_synthetic(&item) {
            return;
        }
        let path = pane.provider.join_path(&pane.path, &item);

        let confirmed = prompt.confirm(
            "Delete",
            &format!("Are you sure you want to delete:\n{}?", item),
        );
        if !confirmed {
            return;
        }

        match self.active_pane_mut().provider.delete_file(&path) {
            Ok(()) => self.active_pane_mut().refresh(),
            Err(e) => prompt.error(&format!("Failed to delete {}: {}", item, e)),
        }
    }

    /// Copy the selected item into the other pane's directory, keeping the
    /// leaf name.  Only cross-namespace copy exists: local source pushes,
    /// remote source pulls.  The destination pane is refreshed whether or
    /// not the transfer succeeded; a failure is reported but never fatal.
    pub fn copy(&mut self, prompt: &mut dyn Prompt) {
        let Some(item) = self.active_pane().selected_item().map(str::to_string) else {
            return;
        };
        if is_synthetic(&item) {
            return;
        }

        let src_ns = self.active_pane().provider.namespace();
        let dst_ns = self.inactive_pane().provider.namespace();
        if src_ns == dst_ns {
            // Same-namespace transfer is unsupported by design.
            return;
        }

        let src = self.active_pane();
        let dst = self.inactive_pane();
        let src_path = src.provider.join_path(&src.path, &item);
        let dst_path = dst.provider.join_path(&dst.path, &item);

        let result = match src_ns {
            Namespace::Local => self.transfer.push(&src_path, &dst_path),
            Namespace::Remote => self.transfer.pull(&src_path, &dst_path),
        };
        if let Err(e) = result {
            prompt.error(&format!("Failed to copy {}: {}", item, e));
        }

        self.inactive_pane_mut().refresh();
    }

    /// Release both panes' backends (tells the remote shell to exit).
    pub fn shutdown(&mut self) {
        self.left_pane.provider.disconnect();
        self.right_pane.provider.disconnect();
    }
}
