use crate::config::GeneratorConfig;
use crate::random::UniformProvider;
use crate::types::StepRecord;

use super::sequence::clamp;

/// Second-pass amplifier over an already generated sequence.
///
/// Each record is rewritten from its own `value` and `step` alone; the
/// pass never looks at neighbours and never touches the base fields, it
/// only fills `enhanced_value` and `enhancement_delta`. Enhanced values
/// live in the widened range [min_value, 2 * max_value].
pub struct Enhancer<P: UniformProvider> {
    provider: P,
    config: GeneratorConfig,
}

impl<P: UniformProvider> Enhancer<P> {
    pub fn new(provider: P, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    /// Fill the enhancement fields on every record. Empty input passes
    /// through untouched.
    pub fn enhance(&mut self, mut sequence: Vec<StepRecord>) -> Vec<StepRecord> {
        for record in &mut sequence {
            enhance_step(&mut self.provider, &self.config, record);
        }
        sequence
    }
}

/// Apply the enhancement cascade to a single record.
///
/// The chance float is drawn before the cascade no matter which rule ends
/// up firing, keeping the per-record draw count independent of the value.
/// Only the first matching rule applies: divisibility by 11 outranks 7,
/// which outranks 5, then the step-periodic rule, then the rare spike.
/// The delta records the raw perturbation before clamping.
pub(crate) fn enhance_step<P: UniformProvider>(
    provider: &mut P,
    config: &GeneratorConfig,
    record: &mut StepRecord,
) {
    let value = record.value;
    let chance = provider.uniform_float();

    let candidate = if value % 11 == 0 {
        value * 3 + provider.uniform_int(41) - 20
    } else if value % 7 == 0 {
        value * 2 + provider.uniform_int(21) - 10
    } else if value % 5 == 0 {
        value / 2 + provider.uniform_int(11) - 5
    } else if record.step % 13 == 0 {
        value + provider.uniform_int(101) - 50
    } else if chance < 0.1 {
        value + provider.uniform_int(201) - 100
    } else {
        value + provider.uniform_int(21) - 10
    };

    record.enhancement_delta = Some(candidate - value);
    record.enhanced_value = Some(clamp(candidate, config.min_value, config.max_value * 2));
}
