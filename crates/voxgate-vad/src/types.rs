#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScore {
    /// Speech probability reported by the scorer, in [0, 1]
    pub probability: f32,

    pub is_speech: bool,
}

impl FrameScore {
    pub fn speech(probability: f32) -> Self {
        Self {
            probability,
            is_speech: true,
        }
    }

    pub fn silence(probability: f32) -> Self {
        Self {
            probability,
            is_speech: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VadState {
    Silence,
    Speech,
}

impl Default for VadState {
    fn default() -> Self {
        Self::Silence
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VadEvent {
    SpeechStart {
        timestamp_ms: u64,
        probability: f32,
    },
    SpeechEnd {
        timestamp_ms: u64,
        duration_ms: u64,
        probability: f32,
    },
}

#[derive(Debug, Clone, Default)]
pub struct VadMetrics {
    pub frames_processed: u64,

    pub speech_segments: u64,

    pub total_speech_ms: u64,

    pub total_silence_ms: u64,

    pub last_probability: f32,
}
