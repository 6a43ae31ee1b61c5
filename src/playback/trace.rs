//! Headless playback: frames printed as text lines

use super::controller::{Control, Pacer, Renderer};
use super::errors::Result;
use crate::step::{Value, VisualState};
use std::io::Write;
use std::thread;
use std::time::Duration;

/// Single-character tag for each state
pub fn state_glyph(state: VisualState) -> char {
    match state {
        VisualState::Default => '.',
        VisualState::Compare => 'c',
        VisualState::Swap => 's',
        VisualState::Pivot => 'p',
        VisualState::Range => '-',
        VisualState::Placed => 'm',
    }
}

/// Writes one line per rendered frame:
///
/// ```text
/// 0003  [3 5 8 1]  .c..
/// ```
pub struct TraceRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TraceRenderer<W> {
    pub fn new(out: W) -> Self {
        TraceRenderer { out, frames: 0 }
    }

    /// Number of frames written so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TraceRenderer<W> {
    fn render(
        &mut self,
        values: &[Value],
        states: &[VisualState],
        animation: Option<Duration>,
    ) -> Result<()> {
        let values = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let states: String = states.iter().copied().map(state_glyph).collect();

        match animation {
            Some(delay) => writeln!(
                self.out,
                "{:04}  [{}]  {}  (delay {}ms)",
                self.frames,
                values,
                states,
                delay.as_millis()
            )?,
            None => writeln!(self.out, "{:04}  [{}]  {}", self.frames, values, states)?,
        }
        self.frames += 1;
        Ok(())
    }
}

/// Sleeps through each delay; controls only arrive through the session
#[derive(Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn wait(&mut self, delay: Duration) -> Result<Vec<Control>> {
        thread::sleep(delay);
        Ok(Vec::new())
    }
}
