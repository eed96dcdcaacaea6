pub mod aggregator;
pub mod processor;

pub use aggregator::{Aggregator, FrameDecision, PipelineError};
pub use processor::{AudioChunk, StreamProcessor};
