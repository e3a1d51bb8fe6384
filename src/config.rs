//! Checker configuration: attempt budget and the per-pass timeout schedule.

use std::time::Duration;

use crate::error::ValidatorError;

/// Default base timeout in seconds for the first pass
pub const DEFAULT_TIMEOUT_SECS: f64 = 0.2;

/// Amount the timeout grows on each retry pass, in seconds
pub const TIMEOUT_STEP_SECS: f64 = 0.2;

/// Default number of passes, including the first
pub const DEFAULT_ATTEMPTS: i64 = 5;

/// Default input file, one URL per line
pub const DEFAULT_INPUT: &str = "sample.txt";

/// Default output file for URLs still failing after all passes
pub const DEFAULT_OUTPUT: &str = "failed_urls.txt";

#[derive(Debug)]
pub struct CheckConfig {
    /// Timeout used on pass 1.
    pub base_timeout: Duration,
    /// Added to the timeout once per retry pass.
    pub timeout_step: Duration,
    /// Total number of passes allowed (>= 1).
    pub attempts: u32,
}

impl CheckConfig {
    /// Validate raw CLI values. Must run before any input is read or any probe is sent.
    pub fn new(attempts: i64, base_timeout_secs: f64) -> Result<Self, ValidatorError> {
        if attempts < 1 {
            return Err(ValidatorError::InvalidAttempts(attempts));
        }
        let attempts =
            u32::try_from(attempts).map_err(|_| ValidatorError::AttemptsOutOfRange(attempts))?;
        if !base_timeout_secs.is_finite() || base_timeout_secs < 0.0 {
            return Err(ValidatorError::InvalidTimeout(base_timeout_secs));
        }
        let base_timeout = Duration::try_from_secs_f64(base_timeout_secs)
            .map_err(|_| ValidatorError::InvalidTimeout(base_timeout_secs))?;
        let timeout_step = Duration::from_secs_f64(TIMEOUT_STEP_SECS);

        // The last pass must still have a representable timeout.
        timeout_step
            .checked_mul(attempts - 1)
            .and_then(|grown| base_timeout.checked_add(grown))
            .ok_or(ValidatorError::InvalidTimeout(base_timeout_secs))?;

        Ok(Self {
            base_timeout,
            timeout_step,
            attempts,
        })
    }

    /// Timeout for a 1-based pass number: `base + step * (pass - 1)`.
    pub fn timeout_for_pass(&self, pass: u32) -> Duration {
        self.base_timeout
            .saturating_add(self.timeout_step.saturating_mul(pass.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_attempts() {
        for attempts in [0, -1, -100] {
            match CheckConfig::new(attempts, DEFAULT_TIMEOUT_SECS) {
                Err(ValidatorError::InvalidAttempts(n)) => assert_eq!(n, attempts),
                other => panic!("expected InvalidAttempts, got {:?}", other),
            }
        }
    }

    #[test]
    fn rejects_bad_timeout() {
        assert!(matches!(
            CheckConfig::new(3, -0.5),
            Err(ValidatorError::InvalidTimeout(_))
        ));
        assert!(matches!(
            CheckConfig::new(3, f64::NAN),
            Err(ValidatorError::InvalidTimeout(_))
        ));
        assert!(matches!(
            CheckConfig::new(3, 1e20),
            Err(ValidatorError::InvalidTimeout(_))
        ));
        assert!(matches!(
            CheckConfig::new(3, f64::INFINITY),
            Err(ValidatorError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn rejects_timeout_that_overflows_on_last_pass() {
        // Roughly 1e6 s below Duration::MAX; u32::MAX passes add ~8.6e8 s.
        let near_max = (u64::MAX - 1_000_000) as f64;
        assert!(CheckConfig::new(1, near_max).is_ok());
        assert!(matches!(
            CheckConfig::new(i64::from(u32::MAX), near_max),
            Err(ValidatorError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn rejects_attempts_beyond_u32() {
        let too_many = i64::from(u32::MAX) + 1;
        match CheckConfig::new(too_many, DEFAULT_TIMEOUT_SECS) {
            Err(e @ ValidatorError::AttemptsOutOfRange(n)) => {
                assert_eq!(n, too_many);
                assert!(e.to_string().contains("at most"));
            }
            other => panic!("expected AttemptsOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn single_attempt_is_valid() {
        let cfg = CheckConfig::new(1, 1.0).unwrap();
        assert_eq!(cfg.attempts, 1);
        assert_eq!(cfg.base_timeout, Duration::from_secs(1));
    }

    #[test]
    fn timeout_grows_by_step_each_pass() {
        let cfg = CheckConfig::new(5, 0.2).unwrap();
        assert_eq!(cfg.timeout_for_pass(1), Duration::from_millis(200));
        assert_eq!(cfg.timeout_for_pass(2), Duration::from_millis(400));
        assert_eq!(cfg.timeout_for_pass(3), Duration::from_millis(600));
        assert_eq!(cfg.timeout_for_pass(5), Duration::from_millis(1000));
    }
}
