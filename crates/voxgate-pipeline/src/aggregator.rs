use thiserror::Error;

use voxgate_audio::{AudioFrame, FrameBuffer, FramingError};
use voxgate_vad::{
    ConfigError, DecisionSmoother, FrameScore, FrameScorer, ScorerError, VadConfig, VadEvent,
    VadMetrics, VadState,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid VAD configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Framing(#[from] FramingError),

    #[error(transparent)]
    Scoring(#[from] ScorerError),
}

/// Everything known about one processed frame.
#[derive(Debug, Clone)]
pub struct FrameDecision {
    pub frame: AudioFrame,

    pub score: FrameScore,

    /// Smoothed state after this frame.
    pub state: VadState,

    /// Transition observed on this frame, if any.
    pub event: Option<VadEvent>,
}

/// Composes byte framing, an injected scorer, and decision smoothing into a
/// single streaming surface: bytes in, per-frame decisions out.
///
/// One aggregator owns the state of exactly one stream. A scoring failure
/// corrupts the stream; callers either drop the aggregator or `reset` it
/// before feeding a fresh stream.
pub struct Aggregator<S> {
    buffer: FrameBuffer,
    smoother: DecisionSmoother,
    scorer: S,
    config: VadConfig,
    metrics: VadMetrics,
    speech_start_ms: u64,
}

impl<S: FrameScorer> Aggregator<S> {
    pub fn new(config: VadConfig, scorer: S) -> Result<Self, PipelineError> {
        let smoother = DecisionSmoother::new(&config)?;
        let buffer = FrameBuffer::new(config.hop_size_samples(), config.sample_rate_hz);

        Ok(Self {
            buffer,
            smoother,
            scorer,
            config,
            metrics: VadMetrics::default(),
            speech_start_ms: 0,
        })
    }

    /// Feeds a byte chunk of arbitrary length and returns one decision per
    /// complete frame it unlocked, in stream order.
    ///
    /// Scorer errors surface unmodified and are fatal to the stream; a
    /// rejected (unaligned) chunk leaves the aggregator untouched.
    pub fn process(&mut self, bytes: &[u8]) -> Result<Vec<FrameDecision>, PipelineError> {
        let frames: Vec<AudioFrame> = self.buffer.push(bytes)?.collect();

        let mut decisions = Vec::with_capacity(frames.len());
        for frame in frames {
            decisions.push(self.score_frame(frame)?);
        }
        Ok(decisions)
    }

    fn score_frame(&mut self, frame: AudioFrame) -> Result<FrameDecision, PipelineError> {
        let score = self.scorer.score(&frame.samples)?;

        let previous = self.smoother.current_state();
        let state = self.smoother.update(score);
        let hop_ms = self.config.hop_size_ms as u64;

        let event = match (previous, state) {
            (VadState::Silence, VadState::Speech) => {
                self.speech_start_ms = frame.timestamp_ms;
                Some(VadEvent::SpeechStart {
                    timestamp_ms: frame.timestamp_ms,
                    probability: score.probability,
                })
            }
            (VadState::Speech, VadState::Silence) => {
                let end_ms = frame.timestamp_ms + hop_ms;
                Some(VadEvent::SpeechEnd {
                    timestamp_ms: end_ms,
                    duration_ms: end_ms - self.speech_start_ms,
                    probability: score.probability,
                })
            }
            _ => None,
        };

        self.update_metrics(&score, state, event.as_ref());

        Ok(FrameDecision {
            frame,
            score,
            state,
            event,
        })
    }

    fn update_metrics(&mut self, score: &FrameScore, state: VadState, event: Option<&VadEvent>) {
        self.metrics.frames_processed += 1;
        self.metrics.last_probability = score.probability;

        let hop_ms = self.config.hop_size_ms as u64;
        match state {
            VadState::Speech => self.metrics.total_speech_ms += hop_ms,
            VadState::Silence => self.metrics.total_silence_ms += hop_ms,
        }

        if let Some(VadEvent::SpeechStart { .. }) = event {
            self.metrics.speech_segments += 1;
        }
    }

    /// Discards all stream state for reuse on a fresh stream.
    pub fn reset(&mut self) {
        self.buffer.reset();
        self.smoother.reset();
        self.scorer.reset();
        self.metrics = VadMetrics::default();
        self.speech_start_ms = 0;
    }

    pub fn current_state(&self) -> VadState {
        self.smoother.current_state()
    }

    pub fn metrics(&self) -> &VadMetrics {
        &self.metrics
    }

    pub fn config(&self) -> &VadConfig {
        &self.config
    }
}
