//! Terminal implementations of the playback render surface and pacer

use crate::algorithms::Algorithm;
use crate::playback::constants::DELAY_STEP_MS;
use crate::playback::errors::Result;
use crate::playback::{Control, Pacer, PlaybackSession, Renderer};
use crate::step::{Value, VisualState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::panes::{render_chart_pane, render_input_pane, render_status_bar, StatusRenderData};

/// Application state shown around the chart
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub algorithm: Algorithm,
    /// Steps rendered in the current or last run
    pub steps: usize,
    pub message: String,
    pub is_error: bool,
    /// Text typed so far while in input mode
    pub input: Option<String>,
}

/// Draws every frame the controller renders into a ratatui terminal
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    session: Arc<PlaybackSession>,
    pub view: ViewState,
    values: Vec<Value>,
    states: Vec<VisualState>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, session: Arc<PlaybackSession>) -> Self {
        TerminalRenderer {
            terminal,
            session,
            view: ViewState::default(),
            values: Vec::new(),
            states: Vec::new(),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Redraw the whole screen from the stored frame and view
    pub fn draw(&mut self) -> Result<()> {
        let TerminalRenderer {
            terminal,
            session,
            view,
            values,
            states,
        } = self;

        let status = StatusRenderData {
            algorithm: view.algorithm,
            delay_ms: session.delay_ms(),
            step: view.steps,
            message: &view.message,
            is_error: view.is_error,
            is_playing: session.is_active(),
            is_input: view.input.is_some(),
        };

        terminal.draw(|frame| {
            render_screen(frame, values, states, view.input.as_deref(), &status)
        })?;
        Ok(())
    }
}

fn render_screen(
    frame: &mut Frame,
    values: &[Value],
    states: &[VisualState],
    input: Option<&str>,
    status: &StatusRenderData,
) {
    let input_height = if input.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_chart_pane(frame, chunks[0], values, states, status.algorithm.name());
    if let Some(text) = input {
        render_input_pane(frame, chunks[1], text);
    }
    render_status_bar(frame, chunks[2], status);
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(
        &mut self,
        values: &[Value],
        states: &[VisualState],
        animation: Option<Duration>,
    ) -> Result<()> {
        // Step frames always carry a highlight; the closing frame is plain
        let is_step = animation.is_none()
            && self.session.is_active()
            && states.iter().any(|s| *s != VisualState::Default);
        if is_step {
            self.view.steps += 1;
        }

        self.values.clear();
        self.values.extend_from_slice(values);
        self.states.clear();
        self.states.extend_from_slice(states);
        self.draw()
    }
}

/// Waits between steps while polling the keyboard for run controls
pub struct KeyboardPacer {
    session: Arc<PlaybackSession>,
}

impl KeyboardPacer {
    pub fn new(session: Arc<PlaybackSession>) -> Self {
        KeyboardPacer { session }
    }
}

/// Map a key press during a run to a control. `delay_ms` is the delay the
/// speed keys adjust from.
pub fn run_control(key: KeyEvent, delay_ms: u64) -> Option<Control> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Control::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Control::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Backspace => Some(Control::Reset),
        // '+' slows playback down, matching a delay slider
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            Some(Control::SetDelay(delay_ms.saturating_add(DELAY_STEP_MS)))
        }
        KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Down => {
            Some(Control::SetDelay(delay_ms.saturating_sub(DELAY_STEP_MS)))
        }
        _ => None,
    }
}

impl Pacer for KeyboardPacer {
    fn wait(&mut self, delay: Duration) -> Result<Vec<Control>> {
        let deadline = Instant::now() + delay;
        let mut delay_ms = self.session.delay_ms();
        let mut controls = Vec::new();

        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            if !event::poll(deadline - now)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let Some(control) = run_control(key, delay_ms) else {
                continue;
            };

            controls.push(control);
            match control {
                Control::SetDelay(ms) => delay_ms = ms,
                Control::Reset | Control::Quit => break,
            }
        }

        Ok(controls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::Controller;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_run_controls() {
        assert_eq!(run_control(press(KeyCode::Char('r')), 100), Some(Control::Reset));
        assert_eq!(run_control(press(KeyCode::Char('q')), 100), Some(Control::Quit));
        assert_eq!(
            run_control(press(KeyCode::Char('+')), 100),
            Some(Control::SetDelay(100 + DELAY_STEP_MS))
        );
        assert_eq!(
            run_control(press(KeyCode::Char('-')), 10),
            Some(Control::SetDelay(0))
        );
        assert_eq!(
            run_control(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), 100),
            Some(Control::Quit)
        );
        // Starting or editing input is unavailable mid-run
        assert_eq!(run_control(press(KeyCode::Enter), 100), None);
        assert_eq!(run_control(press(KeyCode::Char('i')), 100), None);
    }

    struct NoWait;

    impl Pacer for NoWait {
        fn wait(&mut self, _delay: Duration) -> Result<Vec<Control>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_renderer_counts_steps_and_draws_status() {
        let session = Arc::new(PlaybackSession::default());
        let terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let renderer = TerminalRenderer::new(terminal, session.clone());
        let mut controller = Controller::with_session(vec![5, 3, 8, 1], renderer, NoWait, session);

        controller.renderer_mut().view.algorithm = Algorithm::Bubble;
        controller.start(Algorithm::Bubble).unwrap();
        assert_eq!(controller.renderer().view.steps, 10);

        let buffer = controller.renderer_mut().terminal_mut().backend().buffer().clone();
        let screen: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(screen.contains("Bubble Sort"));
        assert!(screen.contains("Step 10"));
    }
}
