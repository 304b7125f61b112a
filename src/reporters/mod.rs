//! Output reporters for finished runs
//!
//! - `text` - console summary and record sample
//! - `json` - full analysis document on disk

pub mod json;
pub mod text;
