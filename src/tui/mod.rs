//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event flow
//!
//! Each loop iteration draws the frame, drains pending terminal events,
//! then drains completed run results from the background channel. Run
//! requests are spawned onto the tokio runtime and report back through an
//! `mpsc::Sender<Action>`, so the interface stays responsive while a task
//! runs on the agent.
//!
//! A raised alert is blocking: while `app.alert` is set, every event is
//! routed to the alert and only a dismissal gets through.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::runner::{HttpTaskRunner, TaskRunner};
use crate::tui::component::EventHandler;
use crate::tui::components::{Alert, InputBox, InputEvent, OutputListState};
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub output_list: OutputListState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            output_list: OutputListState::new(),
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Bracketed paste lets a pasted task name arrive as one event
        // instead of a burst of keystrokes.
        execute!(stdout(), EnableBracketedPaste)?;
        info!("Terminal modes enabled (bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let runner: Arc<dyn TaskRunner> = Arc::new(HttpTaskRunner::new(config.base_url.clone()));
    let mut app = App::new(runner, config.base_url);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background run requests
    let (tx, rx) = mpsc::channel();

    'main: loop {
        terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;

        // Process first event + drain ALL pending events before next draw
        for event in poll_event()
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just triggers the next draw
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits, alert or not
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    break 'main;
                }
                continue;
            }

            // A raised alert sees every event first and swallows them all
            // except its dismissal.
            if app.alert.is_some() {
                if Alert::dismisses(&event) {
                    update(&mut app, Action::DismissAlert);
                }
                continue;
            }

            // Scroll keys go to the output list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.output_list.handle_event(&event);
                continue;
            }

            // Esc quits once the input box is empty
            if matches!(event, TuiEvent::Quit) {
                if tui.input_box.is_empty()
                    && update(&mut app, Action::Quit) == Effect::Quit
                {
                    break 'main;
                }
                continue;
            }

            // InputBox handles everything else
            if let Some(input_event) = tui.input_box.handle_event(&event) {
                match input_event {
                    InputEvent::Submit(task_name) => {
                        // Overlapping submissions are deliberately allowed;
                        // see core::action::update.
                        let effect = update(&mut app, Action::Submit(task_name));
                        if let Effect::SpawnRun(task_name) = effect {
                            spawn_run(app.runner.clone(), task_name, tx.clone());
                        }
                    }
                    InputEvent::ContentChanged => {}
                }
            }
        }

        // Handle background task actions (run results)
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => break 'main,
                Effect::SpawnRun(task_name) => {
                    spawn_run(app.runner.clone(), task_name, tx.clone());
                }
                Effect::None => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Fire the run request on the tokio runtime and translate the outcome
/// into the action the reducer expects. Task-level failures and transport
/// failures surface through different alerts, so they map to different
/// actions.
fn spawn_run(runner: Arc<dyn TaskRunner>, task_name: String, tx: mpsc::Sender<Action>) {
    info!("Spawning run-task request: task_name={:?}", task_name);
    tokio::spawn(async move {
        let action = match runner.run_task(&task_name).await {
            Ok(entries) => Action::RunCompleted(entries),
            Err(e) if e.is_task_failure() => Action::RunFailed(e.to_string()),
            Err(e) => Action::TransportFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send run result: receiver dropped");
        }
    });
}
