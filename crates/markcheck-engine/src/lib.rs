//! markcheck-engine — Rule-based trademark application assessment.
//!
//! Pillar 1 (§1401) checks classification, Pillar 2 (§1402) checks the
//! identification wording per class, and Pillar 3 (§1403) consolidates both
//! into multi-class filing requirements. The [`pipeline`] module chains them.

pub mod classification;
pub mod identification;
pub mod model;
pub mod multiclass;
pub mod pipeline;
pub mod report;

mod text;

pub use classification::{assess_classification, ClassificationResult};
pub use identification::{analyze_identification, ClassContext, IdentificationAnalysis};
pub use model::{ClassEntry, FilingBasis, FilingDate, FilingType, TrademarkApplication};
pub use multiclass::{
    assess_multi_class, ClassStatus, ClassSummary, MultiClassContext, MultiClassResult,
};
pub use pipeline::{run_full_pipeline, CombinedSummary, PipelineResult};
