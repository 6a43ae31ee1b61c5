// Playback defaults

use crate::step::Value;

/// Values shown before the operator submits a list of their own
pub const DEFAULT_VALUES: [Value; 30] = [
    20, 6, 1, 18, 17, 8, 7, 28, 3, 19, 4, 9, 16, 29, 27, 26, 25, 24, 5, 23, 15, 10, 14, 21, 2,
    22, 13, 30, 11, 12,
];

/// Inter-step delay at startup
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Lower bound for the inter-step delay; playback never spins without waiting
pub const MIN_DELAY_MS: u64 = 5;

/// Upper bound for the inter-step delay
pub const MAX_DELAY_MS: u64 = 2000;

/// Increment applied by the speed keys
pub const DELAY_STEP_MS: u64 = 25;
