//! Playback of algorithm runs
//!
//! This module turns a lazy [`AlgorithmRun`] into a timed animation:
//! - [`controller`]: the drain loop, reset and speed handling
//! - [`session`]: shared active/reset/delay flags
//! - [`trace`]: a text renderer and sleeping pacer for headless use
//! - [`errors`]: playback error types
//! - [`constants`]: default values and delay bounds
//!
//! # Drain loop
//!
//! The controller pulls one event, renders it, then waits on its [`Pacer`]
//! for the current delay. The delay is read fresh for every wait. After
//! waking it checks the session's reset flag, so cancellation always lands
//! on a step boundary and never in the middle of an algorithmic step.
//!
//! [`AlgorithmRun`]: crate::algorithms::AlgorithmRun

pub mod constants;
pub mod controller;
pub mod errors;
pub mod session;
pub mod trace;

pub use controller::{Control, Controller, Pacer, Renderer, RunOutcome, RunReport};
pub use errors::PlaybackError;
pub use session::PlaybackSession;
pub use trace::{SleepPacer, TraceRenderer};
