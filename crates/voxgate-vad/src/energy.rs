use crate::config::VadConfig;
use crate::error::{ConfigError, ScorerError};
use crate::scorer::FrameScorer;
use crate::types::FrameScore;

/// Everything at or below this level is treated as certain silence.
const SILENCE_FLOOR_DBFS: f32 = -60.0;

const RMS_EPSILON: f32 = 1e-10;

/// Energy-based reference scorer.
///
/// Maps frame RMS level in dBFS onto a [0, 1] probability against a fixed
/// silence floor. Far cruder than a model-based scorer, but lets the
/// pipeline run end to end without one.
pub struct EnergyScorer {
    threshold: f32,
}

impl EnergyScorer {
    pub fn new(config: &VadConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold,
        })
    }

    fn probability(&self, frame: &[i16]) -> f32 {
        let dbfs = frame_dbfs(frame);
        ((dbfs - SILENCE_FLOOR_DBFS) / -SILENCE_FLOOR_DBFS).clamp(0.0, 1.0)
    }
}

impl FrameScorer for EnergyScorer {
    fn score(&mut self, frame: &[i16]) -> Result<FrameScore, ScorerError> {
        let probability = self.probability(frame);
        Ok(FrameScore {
            probability,
            is_speech: probability >= self.threshold,
        })
    }
}

pub fn frame_rms(frame: &[i16]) -> f32 {
    if frame.is_empty() {
        return 0.0;
    }

    let sum_squares: i64 = frame
        .iter()
        .map(|&sample| {
            let s = sample as i64;
            s * s
        })
        .sum();

    let mean_square = sum_squares as f64 / frame.len() as f64;
    (mean_square.sqrt() / 32768.0) as f32
}

pub fn frame_dbfs(frame: &[i16]) -> f32 {
    let rms = frame_rms(frame);
    if rms <= RMS_EPSILON {
        return -100.0;
    }
    20.0 * rms.log10()
}
