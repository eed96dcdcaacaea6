use crate::error::ScorerError;
use crate::types::FrameScore;

/// Per-frame decision function injected into the pipeline.
///
/// This is the seam for the delegated VAD model call: implementations
/// receive exactly one hop of samples and report a speech score for it.
/// Errors are propagated to the caller unmodified and end the stream.
pub trait FrameScorer: Send {
    fn score(&mut self, frame: &[i16]) -> Result<FrameScore, ScorerError>;

    /// Clears any model state carried across frames. Stateless scorers can
    /// keep the default no-op.
    fn reset(&mut self) {}
}

impl<F> FrameScorer for F
where
    F: FnMut(&[i16]) -> Result<FrameScore, ScorerError> + Send,
{
    fn score(&mut self, frame: &[i16]) -> Result<FrameScore, ScorerError> {
        self(frame)
    }
}
