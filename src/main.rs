mod app;
mod config;
mod logging;
mod pomodoro;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::config::{DurationStore, JsonFileStore};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    logging::init()?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let store = JsonFileStore::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &store).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    info!("clean shutdown");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &JsonFileStore,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(store.load());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = crossterm::event::EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // The 1 Hz countdown ticker only exists while the timer runs. It is
    // spawned when the machine becomes active and aborted when it pauses,
    // before the next event is read, so no tick fires after a pause has
    // been handled.
    let mut ticker: Option<JoinHandle<()>> = None;

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::SaveDurations => {
                    // Non-fatal: the in-memory config stays authoritative.
                    if let Err(e) = store.save(state.pomodoro.durations()) {
                        warn!(error = %e, "failed to persist durations");
                    }
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        match (state.pomodoro.is_active(), ticker.as_ref()) {
            (true, None) => ticker = Some(spawn_ticker(event_tx.clone())),
            (false, Some(_)) => {
                if let Some(handle) = ticker.take() {
                    handle.abort();
                }
            }
            _ => {}
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    if let Some(handle) = ticker.take() {
        handle.abort();
    }

    Ok(())
}

fn spawn_ticker(tx: mpsc::UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        // interval_at: the first tick fires one full second after start,
        // not immediately.
        let period = Duration::from_secs(1);
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    })
}
