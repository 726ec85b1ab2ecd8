//! Keyboard dispatch for the main event loop

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::commander::{Commander, Prompt};

/// What the caller should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Quit,
}

/// Handle a key event.  Blocking prompts (confirmation, errors) go
/// through `prompt`.
pub fn handle_key(commander: &mut Commander, prompt: &mut dyn Prompt, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::F(10) => return Action::Quit,
        KeyCode::Char('q') if key.modifiers.is_empty() => return Action::Quit,

        KeyCode::Tab => commander.toggle_pane(),

        KeyCode::Up => commander.active_pane_mut().move_up(),
        KeyCode::Down => commander.active_pane_mut().move_down(),
        KeyCode::PageUp => commander.active_pane_mut().page_up(),
        KeyCode::PageDown => commander.active_pane_mut().page_down(),
        KeyCode::Home => commander.active_pane_mut().move_home(),
        KeyCode::End => commander.active_pane_mut().move_end(),

        KeyCode::Enter => commander.navigate(),
        KeyCode::F(5) => commander.copy(prompt),
        KeyCode::F(8) | KeyCode::Delete => commander.delete(prompt),

        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            commander.refresh_panes();
        }

        _ => {}
    }
    Action::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commander::Side;
    use crate::pane::Pane;
    use crate::providers::{Namespace, PaneProvider, ProviderResult};
    use crate::transfer::{Transfer, TransferResult};
    use crossterm::event::KeyEventKind;

    struct Flat {
        entries: Vec<String>,
    }

    impl PaneProvider for Flat {
        fn namespace(&self) -> Namespace {
            Namespace::Local
        }

        fn read_entries(&mut self, _path: &str) -> ProviderResult<Vec<String>> {
            Ok(self.entries.clone())
        }

        fn is_directory(&mut self, _path: &str) -> bool {
            false
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

    struct NoTransfer;

    impl Transfer for NoTransfer {
        fn push(&mut self, _src: &str, _dst: &str) -> TransferResult {
            Ok(())
        }

        fn pull(&mut self, _src: &str, _dst: &str) -> TransferResult {
            Ok(())
        }
    }

    struct SilentPrompt;

    impl Prompt for SilentPrompt {
        fn confirm(&mut self, _title: &str, _message: &str) -> bool {
            false
        }

        fn error(&mut self, _message: &str) {}
    }

    fn fixture_commander() -> Commander {
        let entries = vec!["a.txt".to_string(), "b.txt".to_string()];
        let left = Pane::new(Box::new(Flat { entries: entries.clone() }), "/");
        let right = Pane::new(Box::new(Flat { entries }), "/");
        Commander::new(left, right, Box::new(NoTransfer))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn escape_quits() {
        let mut commander = fixture_commander();
        let mut prompt = SilentPrompt;
        assert_eq!(
            handle_key(&mut commander, &mut prompt, press(KeyCode::Esc)),
            Action::Quit
        );
    }

    #[test]
    fn tab_switches_active_pane() {
        let mut commander = fixture_commander();
        let mut prompt = SilentPrompt;
        assert_eq!(commander.active_side, Side::Left);
        handle_key(&mut commander, &mut prompt, press(KeyCode::Tab));
        assert_eq!(commander.active_side, Side::Right);
    }

    #[test]
    fn arrows_move_the_cursor() {
        let mut commander = fixture_commander();
        let mut prompt = SilentPrompt;
        let start = commander.active_pane().cursor;
        handle_key(&mut commander, &mut prompt, press(KeyCode::Down));
        assert_eq!(commander.active_pane().cursor, start + 1);
        handle_key(&mut commander, &mut prompt, press(KeyCode::Up));
        assert_eq!(commander.active_pane().cursor, start);
    }

    #[test]
    fn plain_r_does_not_quit_or_refresh() {
        let mut commander = fixture_commander();
        let mut prompt = SilentPrompt;
        let action = handle_key(&mut commander, &mut prompt, press(KeyCode::Char('r')));
        assert_eq!(action, Action::Continue);
    }

    #[test]
    fn ctrl_r_continues_after_refresh() {
        let mut commander = fixture_commander();
        let mut prompt = SilentPrompt;
        assert_eq!(
            handle_key(&mut commander, &mut prompt, ctrl('r')),
            Action::Continue
        );
    }
}
