// src/engines/metrics/descriptive.rs

/// Order statistics and moments over the raw values
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
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
}

impl DescriptiveStats {
    /// Compute over a non-empty slice; the engine rejects empty input
    /// before calling here.
    pub fn calculate(values: &[i64]) -> DescriptiveStats {
        let count = values.len();

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let min = sorted[0];
        let max = sorted[count - 1];

        let sum: i64 = values.iter().sum();
        let mean = sum as f64 / count as f64;

        // Sample standard deviation. A single value divides zero by zero
        // and propagates NaN into stdev, variance and the coefficient.
        let squared_deviations: f64 = values
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum();
        let stdev = (squared_deviations / (count as f64 - 1.0)).sqrt();
        let variance = stdev * stdev;

        // Non-finite when the mean is zero
        let coefficient_of_variation = stdev / mean;

        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2
        } else {
            sorted[count / 2]
        };

        let q1 = quantile(values, 0.25);
        let q3 = quantile(values, 0.75);

        DescriptiveStats {
            count,
            min,
            max,
            mean,
            median,
            stdev,
            variance,
            coefficient_of_variation,
            q1,
            q3,
            iqr: q3 - q1,
        }
    }
}

/// Interpolated quantile of a non-empty slice, truncated to an integer.
///
/// The fractional rank q * (len - 1) is split into the bracketing order
/// statistics and a weight; the blend truncates toward zero like every
/// other float-to-integer conversion in the pipeline.
pub fn quantile(values: &[i64], q: f64) -> i64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos as usize;
    let upper = lower + 1;
    let weight = pos - lower as f64;

    if upper >= sorted.len() {
        return sorted[lower];
    }
    (sorted[lower] as f64 * (1.0 - weight) + sorted[upper] as f64 * weight) as i64
}
