//! Playback error types
//!
//! Most anomalies in the playback core degrade to a safe default instead of
//! failing: unknown algorithm keys fall back to quick sort and empty buffers
//! simply produce no steps. What remains is a rejected concurrent start and
//! I/O failures from the render surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlaybackError {
    /// A run is already being drained on this session
    #[error("a sort is already running")]
    ConcurrentStart,

    /// The render surface or pacer failed
    #[error("render failed: {0}")]
    Render(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
