use crate::config::GeneratorConfig;
use crate::error::{ChaosimError, Result};
use crate::random::UniformProvider;
use crate::types::{Regime, StepRecord};

use super::enhancement::enhance_step;

/// Jump factors for the multiplicative regime
const MULTIPLICATIVE_FACTORS: [f64; 6] = [0.3, 0.7, 1.3, 1.7, 2.0, -0.5];

/// Regime-switching generator for chaotic transaction sequences.
///
/// The first two steps seed the recurrence: a uniform draw over the full
/// value range, then a random walk of up to 10 either way. Every later
/// step picks a regime by a uniform roll, derives a candidate from the
/// previous one or two values, perturbs it by a chaos factor scaled with
/// the configured volatility, and clamps into [min_value, max_value].
///
/// All float-to-integer conversions truncate toward zero, and integer
/// division truncates as well, so two runs fed identical provider draws
/// produce identical sequences.
pub struct SequenceGenerator<P: UniformProvider> {
    provider: P,
    config: GeneratorConfig,
}

impl<P: UniformProvider> SequenceGenerator<P> {
    pub fn new(provider: P, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a sequence of `n` steps.
    ///
    /// The recurrence looks back two steps, so n < 2 is rejected with the
    /// message matching the failure: zero steps and a single step are
    /// different caller mistakes.
    pub fn generate(&mut self, n: usize) -> Result<Vec<StepRecord>> {
        if n == 0 {
            return Err(ChaosimError::InvalidArgument(
                "the number of steps must be a positive integer".to_string(),
            ));
        }
        if n < 2 {
            return Err(ChaosimError::InvalidArgument(
                "sequence length must be at least 2 for proper chaotic behavior".to_string(),
            ));
        }

        let min = self.config.min_value;
        let max = self.config.max_value;
        let mut records = Vec::with_capacity(n);

        let first = min + self.provider.uniform_int(max - min + 1);
        records.push(StepRecord::new(0, first, Regime::Initial));

        let walk = self.provider.uniform_int(21) - 10;
        let second = clamp(first + walk, min, max);
        records.push(StepRecord::new(1, second, Regime::RandomWalk));

        // Incremental mean over everything generated so far; the mean
        // reversion regime pulls toward it.
        let mut running_mean = (first + second) as f64 / 2.0;

        for i in 2..n {
            let prev1 = records[i - 1].value;
            let prev2 = records[i - 2].value;

            // Fixed draw order per step: regime roll first, chaos factor
            // second, then whatever the regime itself consumes.
            let roll = self.provider.uniform_float();
            let chaos = self.provider.uniform_float() * 2.0 - 1.0;
            let regime = Regime::from_roll(roll);

            let mut candidate = match regime {
                Regime::TrendFollowing => {
                    let trend = prev1 - prev2;
                    prev1
                        + (trend as f64 * self.config.trend_strength) as i64
                        + (chaos * prev1 as f64 * 0.5) as i64
                }
                Regime::MeanReversion => {
                    let deviation = prev1 as f64 - running_mean;
                    prev1 - (deviation * self.config.mean_reversion) as i64
                        + (chaos * prev1 as f64 * 0.3) as i64
                }
                Regime::Multiplicative => {
                    let pick = self.provider.uniform_int(MULTIPLICATIVE_FACTORS.len() as i64);
                    let factor = MULTIPLICATIVE_FACTORS[pick as usize];
                    (prev1 as f64 * factor) as i64 + (chaos * 10.0) as i64
                }
                // A roll never maps to the two seeding regimes, so the
                // default arm is additive noise with two-step memory.
                _ => {
                    let noise = self.provider.uniform_int(21) - 10;
                    prev1 + (prev1 - prev2) / 2 + noise
                }
            };

            candidate += (chaos * candidate as f64 * self.config.volatility) as i64;
            let value = clamp(candidate, min, max);

            running_mean = (running_mean * i as f64 + value as f64) / (i as f64 + 1.0);
            records.push(StepRecord::new(i, value, regime));
        }

        Ok(records)
    }

    /// Generate `n` steps and run the enhancement pass over them with the
    /// same provider, continuing the same draw stream.
    pub fn generate_enhanced(&mut self, n: usize) -> Result<Vec<StepRecord>> {
        let mut records = self.generate(n)?;
        for record in &mut records {
            enhance_step(&mut self.provider, &self.config, record);
        }
        Ok(records)
    }
}

/// Saturate into [min, max], the lower bound winning first
pub(crate) fn clamp(value: i64, min: i64, max: i64) -> i64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}
