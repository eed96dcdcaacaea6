use crate::config::VadConfig;
use crate::error::ConfigError;
use crate::types::{FrameScore, VadState};

/// Hysteresis over raw per-frame scores.
///
/// Speech onset is immediate; speech end requires `silence_duration_ms` of
/// consecutive silence so brief dips in signal energy do not flap the state.
pub struct DecisionSmoother {
    state: VadState,

    consecutive_silence_ms: u32,

    hop_size_ms: u32,

    silence_duration_ms: u32,
}

impl DecisionSmoother {
    pub fn new(config: &VadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: VadState::Silence,
            consecutive_silence_ms: 0,
            hop_size_ms: config.hop_size_ms,
            silence_duration_ms: config.silence_duration_ms,
        })
    }

    /// Incorporates one frame score and returns the externally-visible state
    /// after this frame.
    pub fn update(&mut self, score: FrameScore) -> VadState {
        if score.is_speech {
            self.consecutive_silence_ms = 0;
            if self.state == VadState::Silence {
                self.state = VadState::Speech;
            }
        } else {
            self.consecutive_silence_ms = self
                .consecutive_silence_ms
                .saturating_add(self.hop_size_ms);
            if self.state == VadState::Speech
                && self.consecutive_silence_ms >= self.silence_duration_ms
            {
                self.state = VadState::Silence;
            }
        }

        self.state
    }

    pub fn current_state(&self) -> VadState {
        self.state
    }

    pub fn consecutive_silence_ms(&self) -> u32 {
        self.consecutive_silence_ms
    }

    pub fn reset(&mut self) {
        self.state = VadState::Silence;
        self.consecutive_silence_ms = 0;
    }
}
