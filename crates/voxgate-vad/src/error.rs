use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("hop_size_ms must be positive")]
    ZeroHopSize,

    #[error("sample_rate_hz must be positive")]
    ZeroSampleRate,

    #[error("threshold must be within [0.0, 1.0], got {value}")]
    ThresholdOutOfRange { value: f32 },

    #[error("hop of {hop_size_ms} ms at {sample_rate_hz} Hz yields no samples")]
    EmptyHop { hop_size_ms: u32, sample_rate_hz: u32 },
}

/// Failure reported by an injected frame scorer.
///
/// Carries the scorer's own error unmodified; callers that need the
/// original type can take it back with [`ScorerError::into_inner`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ScorerError(Box<dyn std::error::Error + Send + Sync>);

impl ScorerError {
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(source.into())
    }

    pub fn into_inner(self) -> Box<dyn std::error::Error + Send + Sync> {
        self.0
    }
}
