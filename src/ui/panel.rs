//! Pane widget for displaying item listings

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, StatefulWidget, Widget},
};

use super::Theme;
use crate::pane::Pane;
use crate::providers::{Namespace, is_synthetic};

/// Widget for rendering one browsing pane
pub struct PaneWidget<'a> {
    is_active: bool,
    theme: &'a Theme,
}

impl<'a> PaneWidget<'a> {
    pub fn new(is_active: bool, theme: &'a Theme) -> Self {
        Self { is_active, theme }
    }

    /// Title shown on the top border: namespace tag plus current path.
    fn format_title(pane: &Pane) -> String {
        let tag = match pane.provider.namespace() {
            Namespace::Remote => "device",
            Namespace::Local => "local",
        };
        format!(" {}: {} ", tag, pane.path)
    }
}

impl StatefulWidget for PaneWidget<'_> {
    type State = Pane;

    fn render(self, area: Rect, buf: &mut Buffer, pane: &mut Pane) {
        let border_color = if self.is_active {
            self.theme.pane_border_active
        } else {
            self.theme.pane_border_inactive
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.pane_background))
            .title(Self::format_title(pane))
            .title_style(
                Style::default()
                    .fg(self.theme.pane_title)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Tell the pane how many rows it has, then clamp the window.
        pane.visible_height = inner.height as usize;
        if pane.cursor < pane.scroll_offset {
            pane.scroll_offset = pane.cursor;
        } else if pane.cursor >= pane.scroll_offset + pane.visible_height {
            pane.scroll_offset = pane.cursor - pane.visible_height + 1;
        }

        let width = inner.width as usize;
        for (row, item) in pane
            .items
            .iter()
            .skip(pane.scroll_offset)
            .take(pane.visible_height)
            .enumerate()
        {
            let index = pane.scroll_offset + row;
            let style = if self.is_active && index == pane.cursor {
                Style::default()
                    .bg(self.theme.cursor_bg)
                    .fg(self.theme.cursor_fg)
            } else if is_synthetic(item) && item != ".." {
                Style::default()
                    .bg(self.theme.pane_background)
                    .fg(self.theme.item_synthetic)
            } else {
                Style::default()
                    .bg(self.theme.pane_background)
                    .fg(self.theme.item_normal)
            };

            // Pad to the full width so the cursor bar spans the pane.
            // Counted in chars; byte length overshoots on non-ASCII names.
            let mut text = format!(" {}", item);
            let text_chars = text.chars().count();
            if text_chars < width {
                text.push_str(&" ".repeat(width - text_chars));
            }
            buf.set_stringn(inner.x, inner.y + row as u16, &text, width, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pane::Pane;
    use crate::providers::{PaneProvider, ProviderResult};

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

    #[test]
    fn cursor_bar_spans_full_width_for_non_ascii_names() {
        let theme = Theme::default();
        let mut pane = Pane::new(
            Box::new(Fixed(vec!["резервный файл.txt".to_string()])),
            "/",
        );
        let area = Rect { x: 0, y: 0, width: 30, height: 5 };
        let mut buf = Buffer::empty(area);
        PaneWidget::new(true, &theme).render(area, &mut buf, &mut pane);

        // Every cell of the selected row, padding included, carries the
        // cursor background.
        let inner_right = area.width - 2;
        for x in 1..=inner_right {
            assert_eq!(
                buf[(x, 1)].style().bg,
                Some(theme.cursor_bg),
                "cell {} not highlighted",
                x
            );
        }
    }
}
