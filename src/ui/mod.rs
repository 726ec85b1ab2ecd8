pub mod dialog;
pub mod panel;
pub mod status;
pub mod theme;

pub use dialog::{ConfirmDialog, MessageDialog};
pub use panel::PaneWidget;
pub use status::KeyBar;
pub use theme::Theme;
