//! Modal dialog widgets: delete confirmation and error messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use super::Theme;

/// Calculate a centered dialog area.  Returns None if the screen is too
/// small to show it.
fn center_rect(area: Rect, width: u16, height: u16) -> Option<Rect> {
    if area.width < width.min(20) || area.height < height {
        return None;
    }
    let dialog_width = width.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Some(Rect {
        x,
        y,
        width: dialog_width,
        height,
    })
}

/// Split a message into display lines of at most `width` characters,
/// breaking on whitespace where possible.  Widths count chars, not bytes;
/// messages carry arbitrary file names.
fn wrap_message(message: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for raw in message.lines() {
        if raw.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_chars = 0;
        for word in raw.split_whitespace() {
            let word_chars = word.chars().count();
            if current.is_empty() {
                current = word.to_string();
                current_chars = word_chars;
            } else if current_chars + 1 + word_chars <= width {
                current.push(' ');
                current.push_str(word);
                current_chars += 1 + word_chars;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
                current_chars = word_chars;
            }
            // A single overlong word is hard-split on char boundaries.
            while current_chars > width {
                let split_at = current
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(current.len());
                let rest = current.split_off(split_at);
                lines.push(std::mem::take(&mut current));
                current = rest;
                current_chars -= width;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn fill_background(area: Rect, buf: &mut Buffer, style: Style) {
    for row in area.y..area.y + area.height {
        for col in area.x..area.x + area.width {
            buf[(col, row)].set_char(' ').set_style(style);
        }
    }
}

fn draw_border(area: Rect, buf: &mut Buffer, style: Style) {
    buf[(area.x, area.y)].set_char('┌').set_style(style);
    buf[(area.x + area.width - 1, area.y)].set_char('┐').set_style(style);
    buf[(area.x, area.y + area.height - 1)].set_char('└').set_style(style);
    buf[(area.x + area.width - 1, area.y + area.height - 1)].set_char('┘').set_style(style);
    for col in area.x + 1..area.x + area.width - 1 {
        buf[(col, area.y)].set_char('─').set_style(style);
        buf[(col, area.y + area.height - 1)].set_char('─').set_style(style);
    }
    for row in area.y + 1..area.y + area.height - 1 {
        buf[(area.x, row)].set_char('│').set_style(style);
        buf[(area.x + area.width - 1, row)].set_char('│').set_style(style);
    }
}

fn draw_title(area: Rect, buf: &mut Buffer, title: &str, style: Style) {
    let text = format!(" {} ", title);
    let x = area.x + (area.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, area.y, &text, style);
}

const DIALOG_WIDTH: u16 = 46;
const TEXT_WIDTH: usize = DIALOG_WIDTH as usize - 6;

/// Yes/No confirmation dialog
pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
    yes_focused: bool,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str, yes_focused: bool, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            yes_focused,
            theme,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = wrap_message(self.message, TEXT_WIDTH);
        let height = lines.len() as u16 + 4; // border + text + gap + buttons
        let Some(dialog) = center_rect(area, DIALOG_WIDTH, height) else {
            return;
        };

        let bg = Style::default().bg(self.theme.dialog_bg);
        fill_background(dialog, buf, bg);
        draw_border(dialog, buf, bg.fg(self.theme.dialog_border));
        draw_title(
            dialog,
            buf,
            self.title,
            bg.fg(self.theme.dialog_title).add_modifier(Modifier::BOLD),
        );

        let text_style = bg.fg(self.theme.dialog_text);
        for (i, line) in lines.iter().enumerate() {
            let x = dialog.x + (dialog.width.saturating_sub(line.chars().count() as u16)) / 2;
            buf.set_string(x, dialog.y + 1 + i as u16, line, text_style);
        }

        let focused = Style::default()
            .bg(self.theme.dialog_button_focused_bg)
            .fg(self.theme.dialog_button_focused_fg)
            .add_modifier(Modifier::BOLD);
        let unfocused = bg.fg(self.theme.dialog_button_unfocused);

        let buttons = [("[ Yes ]", self.yes_focused), ("[ No ]", !self.yes_focused)];
        let total: u16 = buttons.iter().map(|(t, _)| t.len() as u16).sum::<u16>() + 4;
        let mut x = dialog.x + (dialog.width.saturating_sub(total)) / 2;
        let y = dialog.y + dialog.height - 2;
        for (text, is_focused) in buttons {
            let style = if is_focused { focused } else { unfocused };
            buf.set_string(x, y, text, style);
            x += text.len() as u16 + 4;
        }
    }
}

/// Single-button message dialog (used for errors)
pub struct MessageDialog<'a> {
    title: &'a str,
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> MessageDialog<'a> {
    pub fn new(title: &'a str, message: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            message,
            theme,
        }
    }
}

impl Widget for MessageDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = wrap_message(self.message, TEXT_WIDTH);
        let height = lines.len() as u16 + 4;
        let Some(dialog) = center_rect(area, DIALOG_WIDTH, height) else {
            return;
        };

        let bg = Style::default().bg(self.theme.dialog_bg);
        fill_background(dialog, buf, bg);
        draw_border(dialog, buf, bg.fg(self.theme.dialog_error_border));
        draw_title(
            dialog,
            buf,
            self.title,
            bg.fg(self.theme.dialog_title).add_modifier(Modifier::BOLD),
        );

        let text_style = bg.fg(self.theme.dialog_text);
        for (i, line) in lines.iter().enumerate() {
            let x = dialog.x + (dialog.width.saturating_sub(line.chars().count() as u16)) / 2;
            buf.set_string(x, dialog.y + 1 + i as u16, line, text_style);
        }

        let button = "[ OK ]";
        let style = Style::default()
            .bg(self.theme.dialog_button_focused_bg)
            .fg(self.theme.dialog_button_focused_fg)
            .add_modifier(Modifier::BOLD);
        let x = dialog.x + (dialog.width.saturating_sub(button.len() as u16)) / 2;
        buf.set_string(x, dialog.y + dialog.height - 2, button, style);
    }
}
