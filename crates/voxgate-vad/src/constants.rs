//! Audio processing constants for the VAD pipeline

/// Standard sample rate for all VAD processing (Hz)
pub const SAMPLE_RATE_HZ: u32 = 16_000;

/// Default analysis hop in milliseconds
/// At 16kHz, 16ms = 256-sample hops
pub const DEFAULT_HOP_SIZE_MS: u32 = 16;

/// Default sustained silence required before a speech segment ends (ms)
pub const DEFAULT_SILENCE_DURATION_MS: u32 = 500;

/// Default speech probability threshold
pub const DEFAULT_THRESHOLD: f32 = 0.5;
