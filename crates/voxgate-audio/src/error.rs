use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    #[error("input of {len} bytes is not aligned to the 2-byte sample width")]
    UnalignedInput { len: usize },
}
