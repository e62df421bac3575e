use crate::config::hotkeys::get_action_for_event;
use crate::config::HotkeyAction;
use crate::state::State;
use anyhow::Result;
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    event,
    event::{
        Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 30;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                let event = match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => Event::Input(key),
                        Ok(CrosstermEvent::Mouse(mouse)) => Event::Mouse(mouse),
                        Ok(_) => Event::Tick,
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => Event::Tick,
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                };
                if tx_clone.send(event).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event> {
        Ok(self.rx.recv()?)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply a terminal event to the state. Returns false if exit was requested.
///
pub fn handle(event: Event, state: &mut State, now: Instant) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state, now),
        Event::Mouse(mouse) => {
            if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                state.click(mouse.column, mouse.row, now);
            }
            true
        }
        Event::Tick => true,
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State, now: Instant) -> bool {
    if event.kind == KeyEventKind::Release {
        return true;
    }
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let Some(action) = get_action_for_event(&event, state.get_hotkeys()) else {
        return true;
    };
    debug!("Processing {:?} for key event '{:?}'...", action, event);

    match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::Spin => state.spin_all(now),
        HotkeyAction::SpinSelected => {
            if let Err(e) = state.spin_selected(now) {
                state.report(e);
            }
        }
        HotkeyAction::AddRow => match state.add_row() {
            Ok(name) => state.set_status(format!("Added {}", name)),
            Err(e) => state.report(e),
        },
        HotkeyAction::RemoveRow => match state.remove_selected_row() {
            Ok(name) => state.set_status(format!("Removed {}", name)),
            Err(e) => state.report(e),
        },
        HotkeyAction::SelectNext => state.select_next(),
        HotkeyAction::SelectPrev => state.select_prev(),
        HotkeyAction::CopyIdea => {
            let idea = state.idea_text();
            match copy_to_clipboard(&idea) {
                Ok(_) => {
                    info!("Copied idea to clipboard: {}", idea);
                    state.set_status("Copied to clipboard".to_string());
                }
                Err(e) => {
                    warn!("Failed to copy to clipboard: {}", e);
                    state.set_status("Clipboard unavailable".to_string());
                }
            }
        }
        HotkeyAction::ToggleLog => state.toggle_log(),
        HotkeyAction::CycleTheme => {
            let name = state.cycle_theme().to_string();
            state.set_status(format!("Theme: {}", name));
        }
    }
    true
}

fn copy_to_clipboard(text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx: ClipboardContext = ClipboardProvider::new()?;
    ctx.set_contents(text.to_string())?;
    Ok(())
}
