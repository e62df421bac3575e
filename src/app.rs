use crate::config::Config;
use crate::events::clock;
use crate::events::terminal::{self as terminal_events, Handler as TerminalEventHandler};
use crate::logger::LogBuffer;
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{watch, Mutex};

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration, showing
    /// entries captured in `log`. Returns the result of the application
    /// execution.
    ///
    pub async fn start(config: Config, log: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let catalog = config.catalog()?;
        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', falling back to default",
                config.theme_name
            );
            Theme::default()
        });
        let state = State::new(
            catalog,
            config.spin.clone(),
            theme,
            config.hotkeys.clone(),
            log,
            StdRng::from_entropy(),
        );
        let app = App {
            state: Arc::new(Mutex::new(state)),
        };

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let clock = clock::start(Arc::clone(&app.state), shutdown_rx);

        let result = app.start_ui().await;

        // Clock may already be gone if it panicked; nothing to do then.
        let _ = shutdown_tx.send(true);
        if let Err(e) = clock.await {
            error!("Animation clock failed: {}", e);
        }

        info!("Exiting application...");
        result
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop. The terminal is restored even when the loop fails.
    ///
    async fn start_ui(&self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let result = self.run(Terminal::new(CrosstermBackend::new(stdout))?).await;

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        result
    }

    /// Draw, wait for the next terminal event, apply it, repeat until exit is
    /// requested.
    ///
    async fn run(&self, mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        terminal.hide_cursor()?;
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            {
                let mut state = self.state.lock().await;
                terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            }
            let event = terminal_event_handler.next()?;
            let mut state = self.state.lock().await;
            if !terminal_events::handle(event, &mut state, Instant::now()) {
                debug!("Received application exit request.");
                break;
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }
}
