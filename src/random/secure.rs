use rand::rngs::OsRng;
use rand::RngCore;
use std::time::{SystemTime, UNIX_EPOCH};

use super::provider::UniformProvider;

const MANTISSA_MASK: u64 = (1 << 53) - 1;
const MANTISSA_SCALE: f64 = (1u64 << 53) as f64;

/// Provider backed by operating-system entropy.
///
/// Words come from a three-stage fallback chain tried in order: the OS
/// source, one retry against the OS source, and finally clock-derived
/// bits. The last stage cannot fail, so a run never aborts for lack of
/// entropy; it only degrades, once, with a warning.
pub struct SecureProvider {
    degraded: bool,
}

impl SecureProvider {
    pub fn new() -> Self {
        Self { degraded: false }
    }

    fn next_word(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        for _ in 0..2 {
            if OsRng.try_fill_bytes(&mut buf).is_ok() {
                return u64::from_le_bytes(buf);
            }
        }
        if !self.degraded {
            self.degraded = true;
            log::warn!("OS entropy source unavailable; continuing with clock-derived bits");
        }
        clock_word()
    }
}

impl UniformProvider for SecureProvider {
    fn uniform_int(&mut self, n: i64) -> i64 {
        if n <= 0 {
            return 0;
        }
        let bound = n as u64;
        // Rejection sampling: accept only words below the largest
        // multiple of `bound`, so the modulo stays unbiased.
        let zone = u64::MAX - u64::MAX % bound;
        loop {
            let word = self.next_word();
            if word < zone {
                return (word % bound) as i64;
            }
        }
    }

    fn uniform_float(&mut self) -> f64 {
        (self.next_word() & MANTISSA_MASK) as f64 / MANTISSA_SCALE
    }
}

/// Last-resort entropy from the wall clock: epoch nanos folded into one
/// word. A clock before the epoch still yields usable bits.
fn clock_word() -> u64 {
    let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_nanos(),
        Err(e) => e.duration().as_nanos(),
    };
    (nanos as u64).rotate_left(17) ^ (nanos >> 64) as u64
}
