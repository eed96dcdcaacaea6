use tokio::sync::broadcast;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use voxgate_vad::{FrameScorer, VadConfig, VadEvent};

use super::aggregator::{Aggregator, PipelineError};

/// Raw PCM16 bytes as they arrive from a capture source.
#[derive(Debug, Clone)]
pub struct AudioChunk {
    pub data: Vec<u8>,
}

/// Task wrapper around one [`Aggregator`]: byte chunks in over a broadcast
/// channel, speech transition events out over an mpsc channel.
///
/// Parallel streams get parallel processors; each task exclusively owns its
/// aggregator state.
pub struct StreamProcessor<S> {
    aggregator: Aggregator<S>,
    audio_rx: broadcast::Receiver<AudioChunk>,
    event_tx: Sender<VadEvent>,
    frames_processed: u64,
    events_generated: u64,
}

impl<S: FrameScorer + 'static> StreamProcessor<S> {
    pub fn new(
        config: VadConfig,
        scorer: S,
        audio_rx: broadcast::Receiver<AudioChunk>,
        event_tx: Sender<VadEvent>,
    ) -> Result<Self, PipelineError> {
        let aggregator = Aggregator::new(config, scorer)?;

        Ok(Self {
            aggregator,
            audio_rx,
            event_tx,
            frames_processed: 0,
            events_generated: 0,
        })
    }

    pub async fn run(mut self) {
        info!("VAD stream processor started");

        // This loop exits when the sender side of the broadcast channel is
        // dropped, or when the stream is corrupted by a scoring failure.
        while let Ok(chunk) = self.audio_rx.recv().await {
            if !self.process_chunk(chunk).await {
                break;
            }
        }

        info!(
            "VAD stream processor shutting down. Frames processed: {}, Events generated: {}",
            self.frames_processed, self.events_generated
        );
    }

    /// Returns false when the task should stop.
    async fn process_chunk(&mut self, chunk: AudioChunk) -> bool {
        let decisions = match self.aggregator.process(&chunk.data) {
            Ok(decisions) => decisions,
            Err(e) => {
                error!("VAD processing error, abandoning stream: {}", e);
                return false;
            }
        };

        for decision in decisions {
            self.frames_processed += 1;

            if let Some(event) = decision.event {
                self.events_generated += 1;

                if let Err(e) = self.event_tx.send(event).await {
                    error!("Failed to send VAD event: {}", e);
                    return false;
                }
            }

            if self.frames_processed % 1000 == 0 {
                debug!(
                    "VAD stream processor: {} frames processed, {} events generated, current state: {:?}",
                    self.frames_processed,
                    self.events_generated,
                    self.aggregator.current_state()
                );
            }
        }

        true
    }

    pub fn spawn(
        config: VadConfig,
        scorer: S,
        audio_rx: broadcast::Receiver<AudioChunk>,
        event_tx: Sender<VadEvent>,
    ) -> Result<JoinHandle<()>, PipelineError> {
        let processor = StreamProcessor::new(config, scorer, audio_rx, event_tx)?;

        let handle = tokio::spawn(async move {
            processor.run().await;
        });

        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use voxgate_vad::{FrameScore, ScorerError, VadState};

    fn config() -> VadConfig {
        VadConfig {
            hop_size_ms: 10,
            silence_duration_ms: 30,
            ..Default::default()
        }
    }

    /// Flags a frame as speech when its first sample is non-zero.
    fn marker_scorer(frame: &[i16]) -> Result<FrameScore, ScorerError> {
        if frame[0] != 0 {
            Ok(FrameScore::speech(0.9))
        } else {
            Ok(FrameScore::silence(0.1))
        }
    }

    fn chunk_of(first_sample: i16, hop_samples: usize) -> AudioChunk {
        let mut samples = vec![0i16; hop_samples];
        samples[0] = first_sample;
        AudioChunk {
            data: samples.iter().flat_map(|s| s.to_le_bytes()).collect(),
        }
    }

    #[tokio::test]
    async fn bytes_in_events_out() {
        let cfg = config();
        let hop = cfg.hop_size_samples();
        let (audio_tx, audio_rx) = broadcast::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(16);

        let handle = StreamProcessor::spawn(cfg, marker_scorer, audio_rx, event_tx).unwrap();

        // Two speech frames, then enough silence to close the segment
        audio_tx.send(chunk_of(5000, hop)).unwrap();
        audio_tx.send(chunk_of(5000, hop)).unwrap();
        for _ in 0..3 {
            audio_tx.send(chunk_of(0, hop)).unwrap();
        }

        let start = event_rx.recv().await.unwrap();
        assert!(matches!(start, VadEvent::SpeechStart { timestamp_ms: 0, .. }));

        let end = event_rx.recv().await.unwrap();
        match end {
            VadEvent::SpeechEnd { duration_ms, .. } => assert_eq!(duration_ms, 50),
            other => panic!("expected SpeechEnd, got {other:?}"),
        }

        drop(audio_tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn scoring_failure_stops_the_task() {
        let cfg = config();
        let hop = cfg.hop_size_samples();
        let (audio_tx, audio_rx) = broadcast::channel(16);
        let (event_tx, _event_rx) = mpsc::channel(16);

        let failing = |_frame: &[i16]| -> Result<FrameScore, ScorerError> {
            Err(ScorerError::new("model crashed"))
        };
        let handle = StreamProcessor::spawn(cfg, failing, audio_rx, event_tx).unwrap();

        audio_tx.send(chunk_of(0, hop)).unwrap();

        // The task ends on its own even though the sender is still alive
        handle.await.unwrap();
    }
}
