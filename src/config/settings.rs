//! Spin timing settings.

use super::ConfigError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shortest step or duration a spin accepts.
const MIN_INTERVAL: Duration = Duration::from_millis(1);
/// Longest value any timing field accepts.
const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Timing ranges used when a row is spun. Every value is in seconds.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinSettings {
    pub min_duration_secs: f64,
    pub max_duration_secs: f64,
    pub max_start_delay_secs: f64,
    pub min_step_secs: f64,
    pub max_step_secs: f64,
}

impl Default for SpinSettings {
    fn default() -> Self {
        SpinSettings {
            min_duration_secs: 1.0,
            max_duration_secs: 3.0,
            max_start_delay_secs: 1.0,
            min_step_secs: 0.075,
            max_step_secs: 0.12,
        }
    }
}

impl SpinSettings {
    /// Reject values that would make a spin meaningless or impossible to
    /// sample.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        interval("min_duration_secs", self.min_duration_secs, MIN_INTERVAL)?;
        interval("max_duration_secs", self.max_duration_secs, MIN_INTERVAL)?;
        interval("min_step_secs", self.min_step_secs, MIN_INTERVAL)?;
        interval("max_step_secs", self.max_step_secs, MIN_INTERVAL)?;
        interval("max_start_delay_secs", self.max_start_delay_secs, Duration::ZERO)?;
        ordered(
            "min_duration_secs",
            self.min_duration_secs,
            self.max_duration_secs,
        )?;
        ordered("min_step_secs", self.min_step_secs, self.max_step_secs)?;
        Ok(())
    }

    /// Sample how long a spin keeps advancing.
    ///
    pub fn sample_duration<R: Rng>(&self, rng: &mut R) -> Duration {
        sample(rng, self.min_duration_secs, self.max_duration_secs)
    }

    /// Sample how long a row waits before it starts spinning.
    ///
    pub fn sample_start_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        sample(rng, 0.0, self.max_start_delay_secs)
    }

    /// Sample the time between two advances of a row.
    ///
    pub fn sample_step<R: Rng>(&self, rng: &mut R) -> Duration {
        sample(rng, self.min_step_secs, self.max_step_secs)
    }
}

fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> Duration {
    Duration::from_secs_f64(rng.gen_range(low..=high))
}

/// Check that `value` seconds converts to a duration within `[min, MAX_INTERVAL]`.
fn interval(field: &'static str, value: f64, min: Duration) -> Result<(), ConfigError> {
    match Duration::try_from_secs_f64(value) {
        Ok(duration) if duration >= min && duration <= MAX_INTERVAL => Ok(()),
        _ => Err(ConfigError::InvalidSpinSetting {
            field,
            message: format!(
                "must be between {} and {} seconds, got {}",
                min.as_secs_f64(),
                MAX_INTERVAL.as_secs(),
                value
            ),
        }),
    }
}

fn ordered(field: &'static str, min: f64, max: f64) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpinSetting {
            field,
            message: format!("minimum {} is above maximum {}", min, max),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_settings_are_valid() {
        assert!(SpinSettings::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_step() {
        let settings = SpinSettings {
            min_step_secs: 0.0,
            ..SpinSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSpinSetting {
                field: "min_step_secs",
                ..
            }
        ));
    }

    #[test]
    fn rejects_inverted_duration_range() {
        let settings = SpinSettings {
            min_duration_secs: 4.0,
            max_duration_secs: 2.0,
            ..SpinSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_negative_delay() {
        let settings = SpinSettings {
            max_start_delay_secs: -0.5,
            ..SpinSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_step_that_rounds_to_nothing() {
        let settings = SpinSettings {
            min_step_secs: 1e-10,
            max_step_secs: 1e-10,
            ..SpinSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidSpinSetting {
                field: "min_step_secs",
                ..
            }
        ));
    }

    #[test]
    fn rejects_values_beyond_an_hour() {
        let settings = SpinSettings {
            min_duration_secs: 1e20,
            max_duration_secs: 1e20,
            ..SpinSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidSpinSetting {
                field: "min_duration_secs",
                ..
            })
        ));

        let settings = SpinSettings {
            max_start_delay_secs: 7200.0,
            ..SpinSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidSpinSetting {
                field: "max_start_delay_secs",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let settings = SpinSettings {
            max_step_secs: f64::INFINITY,
            ..SpinSettings::default()
        };
        assert!(settings.validate().is_err());
        let settings = SpinSettings {
            max_start_delay_secs: f64::NAN,
            ..SpinSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn samples_stay_within_configured_ranges() {
        let settings = SpinSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let duration = settings.sample_duration(&mut rng).as_secs_f64();
            assert!((1.0..=3.0 + 1e-9).contains(&duration));
            let delay = settings.sample_start_delay(&mut rng).as_secs_f64();
            assert!((0.0..=1.0 + 1e-9).contains(&delay));
            let step = settings.sample_step(&mut rng).as_secs_f64();
            assert!((0.075 - 1e-9..=0.12 + 1e-9).contains(&step));
        }
    }

    #[test]
    fn zero_delay_range_samples_zero() {
        let settings = SpinSettings {
            max_start_delay_secs: 0.0,
            ..SpinSettings::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(settings.sample_start_delay(&mut rng), Duration::ZERO);
    }
}
