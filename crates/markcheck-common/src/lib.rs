//! markcheck-common — Shared types, errors, input records and tuning config used across all markcheck crates.

pub mod config;
pub mod error;
pub mod finding;
pub mod input;
pub mod types;

// Re-export commonly used types
pub use config::{EngineConfig, Pillar1Config, Pillar2Config, Pillar3Config};
pub use error::{MarkcheckError, Result};
pub use finding::{Finding, SeverityCounts};
pub use input::{ApplicationInput, ClassInput};
pub use types::{ApplicationStage, Category, Pillar, Severity};
