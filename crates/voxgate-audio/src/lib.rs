pub mod buffer;
pub mod error;
pub mod frame;

pub use buffer::{FrameBuffer, Frames, BYTES_PER_SAMPLE};
pub use error::FramingError;
pub use frame::AudioFrame;
