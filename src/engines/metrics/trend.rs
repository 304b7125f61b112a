// src/engines/metrics/trend.rs

pub struct TrendMetrics;

impl TrendMetrics {
    /// Directional persistence in [0, 1]: |ups - downs| / (ups + downs)
    /// over adjacent pairs. Ties count toward neither side; sequences
    /// with no strict move at all score 0.
    pub fn trend_strength(values: &[i64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let mut ups = 0i64;
        let mut downs = 0i64;
        for pair in values.windows(2) {
            if pair[1] > pair[0] {
                ups += 1;
            } else if pair[1] < pair[0] {
                downs += 1;
            }
        }

        let total = ups + downs;
        if total == 0 {
            return 0.0;
        }
        (ups - downs).abs() as f64 / total as f64
    }

    /// Mean absolute change between adjacent values; 0 below two values
    pub fn volatility(values: &[i64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let total: f64 = values
            .windows(2)
            .map(|pair| (pair[1] as f64 - pair[0] as f64).abs())
            .sum();
        total / (values.len() - 1) as f64
    }
}
