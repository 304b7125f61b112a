// src/engines/metrics/engine.rs
use crate::engines::metrics::{DescriptiveStats, TrendMetrics};
use crate::error::{ChaosimError, Result};
use crate::types::{SequenceStats, StepRecord};

/// Computes the full statistics block over a finished sequence.
///
/// Statistics always come from the raw `value` fields; enhanced values
/// are never consulted. Every call recomputes from scratch.
pub struct MetricsEngine;

impl MetricsEngine {
    pub fn new() -> Self {
        MetricsEngine
    }

    pub fn summarize(&self, sequence: &[StepRecord]) -> Result<SequenceStats> {
        if sequence.is_empty() {
            return Err(ChaosimError::EmptyInput);
        }

        let values: Vec<i64> = sequence.iter().map(|record| record.value).collect();

        // Descriptive block
        let descriptive = DescriptiveStats::calculate(&values);

        Ok(SequenceStats {
            count: descriptive.count,
            min: descriptive.min,
            max: descriptive.max,
            mean: descriptive.mean,
            median: descriptive.median,
            stdev: descriptive.stdev,
            variance: descriptive.variance,
            coefficient_of_variation: descriptive.coefficient_of_variation,
            q1: descriptive.q1,
            q3: descriptive.q3,
            iqr: descriptive.iqr,

            // Trend block
            trend_strength: TrendMetrics::trend_strength(&values),
            volatility: TrendMetrics::volatility(&values),
        })
    }
}
