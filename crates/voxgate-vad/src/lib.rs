pub mod config;
pub mod constants;
pub mod energy;
pub mod error;
pub mod scorer;
pub mod smoother;
pub mod types;

// Core exports - grouped and sorted alphabetically
pub use config::VadConfig;
pub use constants::{DEFAULT_HOP_SIZE_MS, DEFAULT_SILENCE_DURATION_MS, DEFAULT_THRESHOLD, SAMPLE_RATE_HZ};
pub use energy::EnergyScorer;
pub use error::{ConfigError, ScorerError};
pub use scorer::FrameScorer;
pub use smoother::DecisionSmoother;
pub use types::{FrameScore, VadEvent, VadMetrics, VadState};
