use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;

/// Generative regime that produced a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    Initial,
    RandomWalk,
    TrendFollowing,
    MeanReversion,
    Multiplicative,
    AdditiveNoise,
}

impl Regime {
    /// Regime for steps beyond the seeding pair, picked by a uniform roll
    /// in [0, 1). The thresholds split the interval into equal quarters.
    pub fn from_roll(roll: f64) -> Regime {
        match roll {
            r if r < 0.25 => Regime::TrendFollowing,
            r if r < 0.50 => Regime::MeanReversion,
            r if r < 0.75 => Regime::Multiplicative,
            _ => Regime::AdditiveNoise,
        }
    }
}

/// One step of a generated sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: usize,
    pub value: i64,
    pub regime: Regime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhancement_delta: Option<i64>,
}

impl StepRecord {
    pub fn new(step: usize, value: i64, regime: Regime) -> Self {
        Self {
            step,
            value,
            regime,
            enhanced_value: None,
            enhancement_delta: None,
        }
    }
}

/// Summary statistics over the raw values of a finished sequence.
///
/// `stdev`, `variance` and `coefficient_of_variation` carry IEEE
/// sentinels instead of failing: a single-value sequence yields NaN for
/// all three, and a zero mean makes the coefficient non-finite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    pub count: usize,
    pub min: i64,
    pub max: i64,
    pub mean: f64,
    pub median: i64,
    pub stdev: f64,
    pub variance: f64,
    pub coefficient_of_variation: f64,
    pub q1: i64,
    pub q3: i64,
    pub iqr: i64,
    pub trend_strength: f64,
    pub volatility: f64,
}

/// Complete analysis document written by the JSON reporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub statistics: SequenceStats,
    pub sequence: Vec<StepRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: String,
    pub config: GeneratorConfig,
    pub sequence_length: usize,
}
