//! markcheck-ingestion — turn a filed trademark PDF into an [`ApplicationInput`].
//!
//! - `pdf_parser`: page-wise text extraction via lopdf
//! - `normalise`: banner/page-number stripping and line re-joining
//! - `extract`: field and class-block recognition
//!
//! [`ApplicationInput`]: markcheck_common::ApplicationInput

pub mod extract;
pub mod normalise;
pub mod pdf_parser;

pub use extract::{parse_application_text, ExtractedApplication};
pub use normalise::normalize_text;
pub use pdf_parser::{extract_pdf_text, parse_pdf};
