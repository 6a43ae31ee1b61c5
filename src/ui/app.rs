//! Main TUI application state and logic

use super::backend::{KeyboardPacer, TerminalRenderer};
use crate::algorithms::Algorithm;
use crate::input::parse_values;
use crate::playback::constants::DELAY_STEP_MS;
use crate::playback::errors::Result;
use crate::playback::{Controller, PlaybackError, PlaybackSession, RunOutcome};
use crate::step::Value;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// How long the idle loop blocks waiting for input before looping
const IDLE_POLL: Duration = Duration::from_millis(250);

/// The main application state
pub struct App<B: Backend> {
    /// Drives sorts into the terminal
    pub controller: Controller<TerminalRenderer<B>, KeyboardPacer>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<B: Backend> App<B> {
    /// Create a new app showing `values` with `algorithm` preselected
    pub fn new(
        terminal: Terminal<B>,
        values: Vec<Value>,
        algorithm: Algorithm,
        session: Arc<PlaybackSession>,
    ) -> Self {
        let renderer = TerminalRenderer::new(terminal, session.clone());
        let pacer = KeyboardPacer::new(session.clone());
        let mut controller = Controller::with_session(values, renderer, pacer, session);
        let view = &mut controller.renderer_mut().view;
        view.algorithm = algorithm;
        view.message = String::from("Ready!");

        App {
            controller,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        self.controller.redraw()?;

        while !self.should_quit {
            // Use poll with timeout so resizes are picked up promptly
            if !event::poll(IDLE_POLL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    self.handle_key_event(key)?;
                }
                Event::Resize(..) => self.controller.redraw()?,
                _ => {}
            }
        }

        Ok(())
    }

    fn algorithm(&self) -> Algorithm {
        self.controller.renderer().view.algorithm
    }

    fn set_message(&mut self, message: impl Into<String>, is_error: bool) {
        let view = &mut self.controller.renderer_mut().view;
        view.message = message.into();
        view.is_error = is_error;
    }

    /// Handle keyboard events while no sort is running
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if self.controller.renderer().view.input.is_some() {
            return self.handle_input_key(key);
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right | KeyCode::Tab => {
                let next = self.algorithm().next();
                self.select(next)?;
            }
            KeyCode::Left | KeyCode::BackTab => {
                let prev = self.algorithm().prev();
                self.select(prev)?;
            }
            KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char(' ') => {
                self.start_sort()?;
            }
            KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => {
                self.controller.renderer_mut().view.steps = 0;
                self.set_message("Reset", false);
                self.controller.request_reset()?;
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
                let delay = self.controller.session().delay_ms();
                self.controller
                    .set_delay(delay.saturating_add(DELAY_STEP_MS))?;
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
                let delay = self.controller.session().delay_ms();
                self.controller
                    .set_delay(delay.saturating_sub(DELAY_STEP_MS))?;
            }
            KeyCode::Char('i') | KeyCode::Char('I') => {
                self.controller.renderer_mut().view.input = Some(String::new());
                self.set_message("Enter values", false);
                self.controller.redraw()?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle keys typed into the value input line
    fn handle_input_key(&mut self, key: KeyEvent) -> Result<()> {
        let view = &mut self.controller.renderer_mut().view;
        let Some(text) = view.input.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                view.input = None;
                self.set_message("Input cancelled", false);
            }
            KeyCode::Enter => {
                let parsed = parse_values(text);
                match parsed {
                    Ok(values) => {
                        view.input = None;
                        view.steps = 0;
                        let count = values.len();
                        self.set_message(format!("Loaded {} values", count), false);
                        return self.controller.reset_to(values);
                    }
                    Err(e) => self.set_message(e.to_string(), true),
                }
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Char(c) => {
                text.push(c);
            }
            _ => {}
        }
        self.controller.redraw()
    }

    fn select(&mut self, algorithm: Algorithm) -> Result<()> {
        self.controller.renderer_mut().view.algorithm = algorithm;
        self.set_message(format!("Selected {}", algorithm), false);
        self.controller.redraw()
    }

    /// Play the selected algorithm to completion or reset
    fn start_sort(&mut self) -> Result<()> {
        let algorithm = self.algorithm();
        self.controller.renderer_mut().view.steps = 0;
        self.set_message("Playing...", false);

        match self.controller.start(algorithm) {
            Ok(report) => {
                let stats = self.controller.stats();
                let message = match report.outcome {
                    RunOutcome::Completed => format!(
                        "Sorted in {} steps ({} comparisons, {} writes)",
                        report.steps,
                        stats.comparisons(),
                        stats.writes()
                    ),
                    RunOutcome::Cancelled => format!("Reset after {} steps", report.steps),
                };
                self.set_message(message, false);
                if report.quit {
                    info!("quit requested during sort");
                    self.should_quit = true;
                }
            }
            Err(PlaybackError::ConcurrentStart) => {
                self.set_message("A sort is already running", true);
            }
            Err(e) => return Err(e),
        }

        self.controller.redraw()
    }
}
