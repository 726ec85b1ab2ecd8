//! Color palette for the UI

use ratatui::style::Color;

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Panes
    pub pane_border_active: Color,
    pub pane_border_inactive: Color,
    pub pane_title: Color,
    pub pane_background: Color,

    // Item list
    pub item_normal: Color,
    pub item_synthetic: Color,
    pub cursor_bg: Color,
    pub cursor_fg: Color,

    // Status / key bar
    pub status_bg: Color,
    pub status_fg: Color,
    pub key_label_bg: Color,
    pub key_label_fg: Color,

    // Dialogs
    pub dialog_bg: Color,
    pub dialog_border: Color,
    pub dialog_error_border: Color,
    pub dialog_title: Color,
    pub dialog_text: Color,
    pub dialog_button_focused_bg: Color,
    pub dialog_button_focused_fg: Color,
    pub dialog_button_unfocused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Classic blue-panel commander look.
        Self {
            pane_border_active: Color::White,
            pane_border_inactive: Color::Gray,
            pane_title: Color::Yellow,
            pane_background: Color::Rgb(0, 0, 128),

            item_normal: Color::Rgb(192, 192, 192),
            item_synthetic: Color::DarkGray,
            cursor_bg: Color::Cyan,
            cursor_fg: Color::Black,

            status_bg: Color::Cyan,
            status_fg: Color::Black,
            key_label_bg: Color::Black,
            key_label_fg: Color::White,

            dialog_bg: Color::Rgb(0, 0, 128),
            dialog_border: Color::White,
            dialog_error_border: Color::Red,
            dialog_title: Color::Yellow,
            dialog_text: Color::White,
            dialog_button_focused_bg: Color::Cyan,
            dialog_button_focused_fg: Color::Black,
            dialog_button_unfocused: Color::Gray,
        }
    }
}
