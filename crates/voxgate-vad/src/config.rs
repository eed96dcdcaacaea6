use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_HOP_SIZE_MS, DEFAULT_SILENCE_DURATION_MS, DEFAULT_THRESHOLD, SAMPLE_RATE_HZ,
};
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VadConfig {
    /// Speech probability threshold in [0, 1]
    pub threshold: f32,

    /// Analysis hop duration in milliseconds
    pub hop_size_ms: u32,

    /// Sustained silence required before a speech segment ends (ms)
    pub silence_duration_ms: u32,

    pub sample_rate_hz: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            hop_size_ms: DEFAULT_HOP_SIZE_MS,
            silence_duration_ms: DEFAULT_SILENCE_DURATION_MS,
            sample_rate_hz: SAMPLE_RATE_HZ,
        }
    }
}

impl VadConfig {
    /// Checks every construction invariant; components call this before
    /// capturing any derived value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hop_size_ms == 0 {
            return Err(ConfigError::ZeroHopSize);
        }
        if self.sample_rate_hz == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.threshold,
            });
        }
        if self.hop_size_samples() == 0 {
            return Err(ConfigError::EmptyHop {
                hop_size_ms: self.hop_size_ms,
                sample_rate_hz: self.sample_rate_hz,
            });
        }
        Ok(())
    }

    /// Samples per analysis hop (`hop_size_ms * sample_rate / 1000`).
    pub fn hop_size_samples(&self) -> usize {
        (self.hop_size_ms as u64 * self.sample_rate_hz as u64 / 1000) as usize
    }

    /// Consecutive silence hops needed to end a speech segment.
    pub fn silence_duration_frames(&self) -> u32 {
        self.silence_duration_ms.div_ceil(self.hop_size_ms)
    }

    pub fn clean_speech() -> Self {
        Self {
            threshold: 0.4,
            silence_duration_ms: 400,
            ..Default::default()
        }
    }

    pub fn noisy_environment() -> Self {
        Self {
            threshold: 0.6,
            silence_duration_ms: 700,
            ..Default::default()
        }
    }
}
