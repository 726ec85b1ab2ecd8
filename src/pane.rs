//! Pane data structures and cursor logic

use crate::providers::PaneProvider;

/// A single browsing pane: one namespace provider, the current path, the
/// cached item listing and the cursor over it.
pub struct Pane {
    /// Filesystem provider (local or remote)
    pub provider: Box<dyn PaneProvider>,
    /// Current path, in the provider's namespace
    pub path: String,
    /// Cached display items (includes synthetic entries)
    pub items: Vec<String>,
    /// Cursor position (index into items)
    pub cursor: usize,
    /// Scroll offset for display
    pub scroll_offset: usize,
    /// Rows available for the item listing, updated during rendering
    pub visible_height: usize,
}

impl Pane {
    /// Create a pane and load its initial listing.
    pub fn new(provider: Box<dyn PaneProvider>, path: impl Into<String>) -> Self {
        let mut pane = Self {
            provider,
            path: path.into(),
            items: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // updated on first render
        };
        pane.refresh();
        pane
    }

    /// Re-list the current path, keeping the cursor in bounds.
    pub fn refresh(&mut self) {
        self.items = self.provider.list(&self.path);
        if self.cursor >= self.items.len() {
            self.cursor = self.items.len().saturating_sub(1);
        }
        self.adjust_scroll();
    }

    /// Enter a new path: fresh listing, cursor to the top.
    pub fn enter(&mut self, path: String) {
        self.path = path;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.items = self.provider.list(&self.path);
    }

    /// The item under the cursor.
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.cursor).map(String::as_str)
    }

    /// Keep the cursor inside the visible window.
    fn adjust_scroll(&mut self) {
        let visible = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor - visible + 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    pub fn page_up(&mut self) {
        let page = self.visible_height.max(1);
        self.cursor = self.cursor.saturating_sub(page);
        self.adjust_scroll();
    }

    pub fn page_down(&mut self) {
        let page = self.visible_height.max(1);
        self.cursor = (self.cursor + page).min(self.items.len().saturating_sub(1));
        self.adjust_scroll();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    pub fn move_end(&mut self) {
        self.cursor = self.items.len().saturating_sub(1);
        self.adjust_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{Namespace, PaneProvider, ProviderResult};

    struct Fixed(Vec<String>);

    impl PaneProvider for Fixed {
        fn namespace(&self) -> Namespace {
            Namespace::Local
        }

        fn read_entries(&mut self, _path: &str) -> ProviderResult<Vec<String>> {
            Ok(self.0.clone())
        }

        fn is_directory(&mut self, _path: &str) -> bool {
            true
        }

        fn delete_file(&mut self, _path: &str) -> ProviderResult<()> {
            Ok(())
        }

        fn is_root(&self, _path: &str) -> bool {
            true
        }

        fn parent_path(&self, _path: &str) -> Option<String> {
            None
        }

        fn join_path(&self, base: &str, name: &str) -> String {
            format!("{}/{}", base, name)
        }
    }

    fn pane_with(names: &[&str]) -> Pane {
        Pane::new(
            Box::new(Fixed(names.iter().map(|s| s.to_string()).collect())),
            "/",
        )
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.move_up();
        assert_eq!(pane.cursor, 0);
        pane.move_end();
        assert_eq!(pane.cursor, 2);
        pane.move_down();
        assert_eq!(pane.cursor, 2);
        pane.move_home();
        assert_eq!(pane.cursor, 0);
    }

    #[test]
    fn paging_clamps_to_listing() {
        let mut pane = pane_with(&["a", "b", "c", "d", "e"]);
        pane.visible_height = 2;
        pane.page_down();
        assert_eq!(pane.cursor, 2);
        pane.page_down();
        pane.page_down();
        assert_eq!(pane.cursor, 4);
        assert!(pane.scroll_offset <= pane.cursor);
        pane.page_up();
        pane.page_up();
        pane.page_up();
        assert_eq!(pane.cursor, 0);
        assert_eq!(pane.scroll_offset, 0);
    }

    #[test]
    fn refresh_clamps_cursor_after_shrink() {
        let mut pane = pane_with(&["a", "b", "c"]);
        pane.move_end();
        pane.provider = Box::new(Fixed(vec!["only".into()]));
        pane.refresh();
        assert_eq!(pane.cursor, 0);
        assert_eq!(pane.selected_item(), Some("only"));
    }
}
