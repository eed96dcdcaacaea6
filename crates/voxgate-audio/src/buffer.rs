use std::collections::VecDeque;

use crate::error::FramingError;
use crate::frame::AudioFrame;

/// Width of one little-endian PCM16 sample.
pub const BYTES_PER_SAMPLE: usize = 2;

/// Accumulates raw little-endian PCM16 bytes and slices off fixed-size
/// sample frames.
///
/// Input chunks may have any length; leftover bytes shorter than one frame
/// stay in the tail for the next `push`. A trailing partial frame at end of
/// stream is simply never yielded.
#[derive(Debug)]
pub struct FrameBuffer {
    tail: VecDeque<u8>,

    hop_size_samples: usize,

    sample_rate_hz: u32,

    samples_emitted: u64,
}

impl FrameBuffer {
    pub fn new(hop_size_samples: usize, sample_rate_hz: u32) -> Self {
        let cap = hop_size_samples * BYTES_PER_SAMPLE * 4;
        Self {
            tail: VecDeque::with_capacity(cap),
            hop_size_samples,
            sample_rate_hz,
            samples_emitted: 0,
        }
    }

    /// Appends `bytes` and returns an iterator draining every complete frame
    /// now available. Empty input is a no-op that yields nothing.
    ///
    /// Alignment is checked before any mutation, so a rejected push leaves
    /// the buffer exactly as it was.
    pub fn push(&mut self, bytes: &[u8]) -> Result<Frames<'_>, FramingError> {
        if bytes.len() % BYTES_PER_SAMPLE != 0 {
            return Err(FramingError::UnalignedInput { len: bytes.len() });
        }

        self.tail.extend(bytes.iter().copied());
        Ok(Frames { buffer: self })
    }

    /// Bytes currently held back waiting for a complete frame.
    pub fn pending_bytes(&self) -> usize {
        self.tail.len()
    }

    pub fn hop_size_samples(&self) -> usize {
        self.hop_size_samples
    }

    pub fn reset(&mut self) {
        self.tail.clear();
        self.samples_emitted = 0;
    }

    fn pop_frame(&mut self) -> Option<AudioFrame> {
        let frame_bytes = self.hop_size_samples * BYTES_PER_SAMPLE;
        if self.tail.len() < frame_bytes {
            return None;
        }

        let raw: Vec<u8> = self.tail.drain(..frame_bytes).collect();
        let samples: Vec<i16> = raw
            .chunks_exact(BYTES_PER_SAMPLE)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        let timestamp_ms =
            (self.samples_emitted as u128 * 1000 / self.sample_rate_hz as u128) as u64;
        self.samples_emitted += self.hop_size_samples as u64;

        Some(AudioFrame {
            samples,
            timestamp_ms,
        })
    }
}

/// Draining iterator over the complete frames available after a `push`.
#[derive(Debug)]
pub struct Frames<'a> {
    buffer: &'a mut FrameBuffer,
}

impl Iterator for Frames<'_> {
    type Item = AudioFrame;

    fn next(&mut self) -> Option<AudioFrame> {
        self.buffer.pop_frame()
    }
}
