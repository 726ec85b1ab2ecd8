//! Function key bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use super::Theme;

/// One-line bar naming the available actions.
pub struct KeyBar<'a> {
    theme: &'a Theme,
}

impl<'a> KeyBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    const KEYS: &'static [(&'static str, &'static str)] = &[
        ("Tab", "Switch"),
        ("Enter", "Open"),
        ("F5", "Copy"),
        ("F8", "Delete"),
        ("^R", "Refresh"),
        ("Esc", "Quit"),
    ];
}

impl Widget for KeyBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let bar_style = Style::default()
            .bg(self.theme.status_bg)
            .fg(self.theme.status_fg);
        let key_style = Style::default()
            .bg(self.theme.key_label_bg)
            .fg(self.theme.key_label_fg);

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_char(' ').set_style(bar_style);
        }

        let mut x = area.x;
        for (key, label) in Self::KEYS {
            let key_text = format!(" {} ", key);
            let label_text = format!("{} ", label);
            if x + (key_text.len() + label_text.len()) as u16 > area.x + area.width {
                break;
            }
            buf.set_string(x, area.y, &key_text, key_style);
            x += key_text.len() as u16;
            buf.set_string(x, area.y, &label_text, bar_style);
            x += label_text.len() as u16;
        }
    }
}
