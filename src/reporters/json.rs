//! JSON reporter
//!
//! Assembles the full analysis document and writes it to disk for
//! machine consumption or further processing.

use std::fs::File;
use std::path::Path;

use chrono::Utc;

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::types::{AnalysisReport, ReportMetadata, SequenceStats, StepRecord};

/// Assemble the analysis document for a finished run
pub fn build_report(
    config: &GeneratorConfig,
    statistics: SequenceStats,
    sequence: Vec<StepRecord>,
) -> AnalysisReport {
    AnalysisReport {
        metadata: ReportMetadata {
            generated_at: Utc::now().to_rfc3339(),
            config: config.clone(),
            sequence_length: sequence.len(),
        },
        statistics,
        sequence,
    }
}

/// Render the report as JSON
pub fn render(report: &AnalysisReport, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Write the report to `path`, creating or truncating the file
pub fn write_report<P: AsRef<Path>>(report: &AnalysisReport, path: P, pretty: bool) -> Result<()> {
    let file = File::create(path)?;
    if pretty {
        serde_json::to_writer_pretty(file, report)?;
    } else {
        serde_json::to_writer(file, report)?;
    }
    Ok(())
}
