//! Shared playback control state

use super::constants::DEFAULT_DELAY_MS;
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::Duration;

const IDLE: u8 = 0;
const ACTIVE: u8 = 1;
/// Active, with a reset pending at the next step boundary
const RESETTING: u8 = 2;

/// Active/reset/delay flags governing how a run is drained.
///
/// Shared through an `Arc` so an operator handle can request a reset while
/// the controller is inside its drain loop. Only the controller marks the
/// session active or idle and changes the delay; the reset request is the one
/// transition outside code may make mid-run.
///
/// Activity and the reset request live in one atomic, so a request can only
/// succeed against a run that is still active.
#[derive(Debug)]
pub struct PlaybackSession {
    state: AtomicU8,
    delay_ms: AtomicU64,
}

impl PlaybackSession {
    pub fn new(delay_ms: u64) -> Self {
        PlaybackSession {
            state: AtomicU8::new(IDLE),
            delay_ms: AtomicU64::new(delay_ms),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state.load(Ordering::Acquire) != IDLE
    }

    pub fn reset_requested(&self) -> bool {
        self.state.load(Ordering::Acquire) == RESETTING
    }

    /// Current inter-step delay
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms())
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.load(Ordering::Acquire)
    }

    /// Flag the active run for early termination.
    ///
    /// Returns whether a run was active to observe it. When idle nothing is
    /// recorded; the controller performs idle resets itself.
    pub fn request_reset(&self) -> bool {
        match self
            .state
            .compare_exchange(ACTIVE, RESETTING, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => true,
            Err(current) => current == RESETTING,
        }
    }

    /// Transition idle -> active.
    ///
    /// Fails when a run is already active.
    pub(crate) fn try_activate(&self) -> bool {
        self.state
            .compare_exchange(IDLE, ACTIVE, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Return to idle, dropping any pending reset
    pub(crate) fn deactivate(&self) {
        self.state.store(IDLE, Ordering::Release);
    }

    pub(crate) fn flag_reset(&self) {
        self.request_reset();
    }

    pub(crate) fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::Release);
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}
