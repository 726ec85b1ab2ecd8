//! gangway - a dual-pane commander for browsing a device over a bridge
//! tool (`adb` by default) next to the local filesystem.

use std::env;
use std::io::{self, stdout};
use std::panic;
use std::process::ExitCode;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

mod channel;
mod commander;
mod errors;
mod input;
mod pane;
mod providers;
mod remote_path;
mod transfer;
mod ui;

use channel::ShellChannel;
use commander::{Commander, Prompt, Side};
use errors::AppResult;
use input::Action;
use pane::Pane;
use providers::{LocalProvider, RemoteProvider};
use transfer::BridgeTransfer;
use ui::{ConfirmDialog, KeyBar, MessageDialog, PaneWidget, Theme};

const DEFAULT_BRIDGE: &str = "adb";
const DEFAULT_REMOTE_PATH: &str = "/sdcard";

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Spawn the bridge shell and complete the startup handshake.
fn connect(bridge: &str) -> AppResult<ShellChannel> {
    Ok(ShellChannel::spawn(bridge)?)
}

/// Set up panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Initialize the terminal for TUI mode
fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore terminal to normal mode
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Modal prompt runner.  Draws a dialog over a cleared frame and blocks
/// on keyboard input until the user answers.
struct TermPrompt<'a> {
    terminal: &'a mut Term,
    theme: &'a Theme,
}

impl<'a> TermPrompt<'a> {
    fn new(terminal: &'a mut Term, theme: &'a Theme) -> Self {
        Self { terminal, theme }
    }
}

impl Prompt for TermPrompt<'_> {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        let mut yes_focused = false;
        loop {
            let draw = self.terminal.draw(|frame| {
                let dialog = ConfirmDialog::new(title, message, yes_focused, self.theme);
                frame.render_widget(dialog, frame.area());
            });
            if draw.is_err() {
                return false;
            }

            let Ok(Event::Key(key)) = event::read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                event::KeyCode::Left | event::KeyCode::Right | event::KeyCode::Tab => {
                    yes_focused = !yes_focused;
                }
                event::KeyCode::Enter => return yes_focused,
                event::KeyCode::Char('y') | event::KeyCode::Char('Y') => return true,
                event::KeyCode::Char('n') | event::KeyCode::Char('N') | event::KeyCode::Esc => {
                    return false;
                }
                _ => {}
            }
        }
    }

    fn error(&mut self, message: &str) {
        loop {
            let draw = self.terminal.draw(|frame| {
                let dialog = MessageDialog::new("Error", message, self.theme);
                frame.render_widget(dialog, frame.area());
            });
            if draw.is_err() {
                return;
            }

            let Ok(Event::Key(key)) = event::read() else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                event::KeyCode::Enter | event::KeyCode::Esc | event::KeyCode::Char(' ') => return,
                _ => {}
            }
        }
    }
}

/// Main event loop
fn run(terminal: &mut Term, commander: &mut Commander, theme: &Theme) -> AppResult<()> {
    loop {
        terminal.draw(|frame| {
            let size = frame.area();
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(1)])
                .split(size);
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);

            let left_active = commander.active_side == Side::Left;
            frame.render_stateful_widget(
                PaneWidget::new(left_active, theme),
                panes[0],
                &mut commander.left_pane,
            );
            frame.render_stateful_widget(
                PaneWidget::new(!left_active, theme),
                panes[1],
                &mut commander.right_pane,
            );
            frame.render_widget(KeyBar::new(theme), rows[1]);
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let mut prompt = TermPrompt::new(terminal, theme);
        if input::handle_key(commander, &mut prompt, key) == Action::Quit {
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    let bridge = env::var("GW_BRIDGE").unwrap_or_else(|_| DEFAULT_BRIDGE.to_string());
    let remote_start = env::args().nth(1).unwrap_or_else(|| DEFAULT_REMOTE_PATH.to_string());

    // Connect before touching the terminal so failures print normally.
    let channel = match connect(&bridge) {
        Ok(channel) => channel,
        Err(err) => {
            eprintln!("gw: cannot start `{} shell`: {}", bridge, err);
            return ExitCode::FAILURE;
        }
    };

    let left = Pane::new(
        Box::new(RemoteProvider::new(channel)),
        remote_path::normalize(&remote_start),
    );
    let right = Pane::new(Box::new(LocalProvider::new()), LocalProvider::home_path());
    let mut commander = Commander::new(left, right, Box::new(BridgeTransfer::new(bridge)));
    let theme = Theme::default();

    setup_panic_hook();
    let mut terminal = match setup_terminal() {
        Ok(terminal) => terminal,
        Err(err) => {
            eprintln!("gw: failed to initialize terminal: {}", err);
            commander.shutdown();
            return ExitCode::FAILURE;
        }
    };

    let result = run(&mut terminal, &mut commander, &theme);

    let _ = restore_terminal();
    commander.shutdown();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("gw: {}", err);
            ExitCode::FAILURE
        }
    }
}
