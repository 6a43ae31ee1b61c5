//! # Introduction
//!
//! sortty animates comparison sorts in the terminal. Each algorithm is
//! instrumented to expose its internal operations (comparisons, swaps,
//! merges, partitions) as a lazy sequence of step events, which a playback
//! controller replays at an operator-controlled pace.
//!
//! ## Pipeline
//!
//! ```text
//! Values → Algorithm run → StepEvents → Controller → Renderer
//!                                           ↑
//!                                      Pacer (delay, reset, quit)
//! ```
//!
//! 1. [`input`]: parses a typed list like `5, 3, 8, 1` into values.
//! 2. [`algorithms`]: selection, bubble, insertion, merge and quick sort as
//!    resumable iterators that mutate the buffer in step with their events.
//! 3. [`step`]: the [`step::StepEvent`] shapes, normalization into
//!    per-bar states, and per-run counters.
//! 4. [`playback`]: the [`playback::Controller`] drain loop with reset,
//!    speed control and a headless trace renderer.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod input;
pub mod playback;
pub mod step;
pub mod ui;
