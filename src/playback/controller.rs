//! Playback controller: drains one algorithm run at operator cadence

use super::constants::{MAX_DELAY_MS, MIN_DELAY_MS};
use super::errors::{PlaybackError, Result};
use super::session::PlaybackSession;
use crate::algorithms::Algorithm;
use crate::step::{Frame, StepStats, Value, VisualState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Render surface for normalized frames.
///
/// `states` always has one entry per value. `animation` is set when the
/// render was triggered by a speed change rather than by a step.
pub trait Renderer {
    fn render(
        &mut self,
        values: &[Value],
        states: &[VisualState],
        animation: Option<Duration>,
    ) -> Result<()>;
}

/// Suspension point between two steps.
///
/// `wait` blocks for roughly `delay` and reports the operator controls that
/// arrived meanwhile. It may return early once a reset or quit arrives.
pub trait Pacer {
    fn wait(&mut self, delay: Duration) -> Result<Vec<Control>>;
}

/// Operator input collected while a run is being drained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Reset,
    SetDelay(u64),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run was drained to exhaustion; the buffer holds the sorted values
    Completed,
    /// A reset stopped the run; the buffer was restored to the original values
    Cancelled,
}

/// Summary of one finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub steps: usize,
    pub outcome: RunOutcome,
    /// The operator asked to quit during the run
    pub quit: bool,
}

/// Owns the value buffer and drives algorithm runs into a [`Renderer`]
pub struct Controller<R: Renderer, P: Pacer> {
    session: Arc<PlaybackSession>,
    original: Vec<Value>,
    buffer: Vec<Value>,
    frame: Frame,
    renderer: R,
    pacer: P,
    stats: StepStats,
}

impl<R: Renderer, P: Pacer> Controller<R, P> {
    pub fn new(values: Vec<Value>, renderer: R, pacer: P) -> Self {
        Self::with_session(values, renderer, pacer, Arc::new(PlaybackSession::default()))
    }

    pub fn with_session(
        values: Vec<Value>,
        renderer: R,
        pacer: P,
        session: Arc<PlaybackSession>,
    ) -> Self {
        Controller {
            session,
            frame: Frame::plain(&values),
            buffer: values.clone(),
            original: values,
            renderer,
            pacer,
            stats: StepStats::new(),
        }
    }

    /// Drain one run of `algorithm` over the current buffer.
    ///
    /// Refused with [`PlaybackError::ConcurrentStart`] while another run is
    /// active on the same session.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<RunReport> {
        if !self.session.try_activate() {
            warn!(algorithm = %algorithm, "start rejected, a sort is already running");
            return Err(PlaybackError::ConcurrentStart);
        }

        info!(algorithm = %algorithm, len = self.buffer.len(), "starting sort");
        self.stats.clear();

        let drained = self.drain(algorithm);

        // A failed render or wait can leave a merge or swap half applied
        if let Err(e) = &drained {
            warn!(algorithm = %algorithm, error = %e, "sort aborted, restoring original values");
        }
        let outcome = if drained.is_err() || self.session.reset_requested() {
            self.buffer = self.original.clone();
            RunOutcome::Cancelled
        } else {
            RunOutcome::Completed
        };
        let finished = self.render_plain();
        self.session.deactivate();

        let (steps, quit) = drained?;
        finished?;

        info!(
            algorithm = %algorithm,
            steps,
            comparisons = self.stats.comparisons(),
            writes = self.stats.writes(),
            outcome = ?outcome,
            "sort finished"
        );

        Ok(RunReport {
            algorithm,
            steps,
            outcome,
            quit,
        })
    }

    /// Pull, render and wait until the run is exhausted or a reset lands.
    ///
    /// Returns the number of steps rendered and whether a quit arrived.
    fn drain(&mut self, algorithm: Algorithm) -> Result<(usize, bool)> {
        let Controller {
            session,
            buffer,
            frame,
            renderer,
            pacer,
            stats,
            ..
        } = self;

        let mut steps = 0;
        let mut quit = false;
        for event in algorithm.run(buffer) {
            steps += 1;
            stats.record(&event);

            let next = event.into_frame();
            renderer.render(&next.values, &next.states, None)?;
            *frame = next;
            trace!(step = steps, "rendered step");

            for control in pacer.wait(session.delay())? {
                match control {
                    Control::Reset => session.flag_reset(),
                    Control::SetDelay(ms) => apply_delay(session, renderer, frame, ms)?,
                    Control::Quit => {
                        quit = true;
                        session.flag_reset();
                    }
                }
            }

            if session.reset_requested() {
                debug!(step = steps, "reset observed, stopping run");
                break;
            }
        }

        Ok((steps, quit))
    }

    /// Restore the original values, or flag the active run to do so.
    ///
    /// While a run is active this only sets the reset flag; the drain loop
    /// restores the buffer at its next step boundary.
    pub fn request_reset(&mut self) -> Result<()> {
        if self.session.request_reset() {
            debug!("reset flagged for active run");
            return Ok(());
        }
        self.buffer = self.original.clone();
        self.render_plain()
    }

    /// Change the inter-step delay and re-render the current frame
    pub fn set_delay(&mut self, delay_ms: u64) -> Result<()> {
        apply_delay(&self.session, &mut self.renderer, &self.frame, delay_ms)
    }

    /// Replace the original values and show them unhighlighted
    pub fn reset_to(&mut self, values: Vec<Value>) -> Result<()> {
        if self.session.is_active() {
            warn!("input rejected, a sort is already running");
            return Err(PlaybackError::ConcurrentStart);
        }
        info!(len = values.len(), "loaded new values");
        self.original = values;
        self.buffer = self.original.clone();
        self.stats.clear();
        self.render_plain()
    }

    /// Render the last frame again
    pub fn redraw(&mut self) -> Result<()> {
        self.renderer
            .render(&self.frame.values, &self.frame.states, None)
    }

    fn render_plain(&mut self) -> Result<()> {
        self.frame = Frame::plain(&self.buffer);
        self.redraw()
    }

    /// Current buffer contents
    pub fn values(&self) -> &[Value] {
        &self.buffer
    }

    /// Values restored on reset
    pub fn original(&self) -> &[Value] {
        &self.original
    }

    /// States of the last rendered frame
    pub fn states(&self) -> &[VisualState] {
        &self.frame.states
    }

    pub fn session(&self) -> &Arc<PlaybackSession> {
        &self.session
    }

    /// Counters for the most recent run
    pub fn stats(&self) -> &StepStats {
        &self.stats
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn pacer_mut(&mut self) -> &mut P {
        &mut self.pacer
    }
}

/// Clamp and store a new delay, then re-render `frame` with it as the
/// animation duration
fn apply_delay<R: Renderer>(
    session: &PlaybackSession,
    renderer: &mut R,
    frame: &Frame,
    delay_ms: u64,
) -> Result<()> {
    let delay_ms = delay_ms.clamp(MIN_DELAY_MS, MAX_DELAY_MS);
    session.set_delay_ms(delay_ms);
    debug!(delay_ms, "delay changed");
    renderer.render(
        &frame.values,
        &frame.states,
        Some(Duration::from_millis(delay_ms)),
    )
}
