//! Console reporter
//!
//! Renders the human-readable summary block and the leading sample of
//! records echoed after a run.

use crate::error::Result;
use crate::types::{SequenceStats, StepRecord};

/// Render the console summary block
pub fn render_summary(stats: &SequenceStats) -> String {
    let mut out = String::new();
    out.push_str("Chaotic Sequence Analysis\n");
    out.push_str("========================\n");
    out.push_str(&format!("Generated {} transactions\n", stats.count));
    out.push_str(&format!("Value Range: {} - {}\n", stats.min, stats.max));
    out.push_str(&format!("Mean: {:.2}, Median: {}\n", stats.mean, stats.median));
    out.push_str(&format!(
        "Std Dev: {:.2}, Volatility: {:.2}\n",
        stats.stdev, stats.volatility
    ));
    out.push_str(&format!("Trend Strength: {:.2}\n", stats.trend_strength));
    out.push_str(&format!(
        "IQR: {} (Q1: {}, Q3: {})\n",
        stats.iqr, stats.q1, stats.q3
    ));
    out
}

/// Render the first `limit` records as pretty JSON, clamped to the
/// sequence length
pub fn render_sample(sequence: &[StepRecord], limit: usize) -> Result<String> {
    let shown = limit.min(sequence.len());
    let body = serde_json::to_string_pretty(&sequence[..shown])?;
    Ok(format!("First {} transactions:\n{}\n", shown, body))
}
