//! Rostering rule parameters.

use chrono::Duration;

/// Limits applied when validating services and driver assignments.
///
/// The defaults are the company rules: a service runs at most 10 hours
/// depot to depot, and a driver gets at least 12 hours of rest between
/// two shifts on the same date.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    /// Maximum service length in minutes, depot departure to depot return.
    pub max_service_mins: i64,

    /// Minimum rest between the end of one shift and the start of the
    /// next, in minutes.
    pub min_rest_mins: i64,
}

impl Rules {
    /// Create rules with explicit limits.
    pub fn new(max_service_mins: i64, min_rest_mins: i64) -> Self {
        Self {
            max_service_mins,
            min_rest_mins,
        }
    }

    /// Returns the maximum service length as a Duration.
    pub fn max_service(&self) -> Duration {
        Duration::minutes(self.max_service_mins)
    }

    /// Returns the minimum rest as a Duration.
    pub fn min_rest(&self) -> Duration {
        Duration::minutes(self.min_rest_mins)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_service_mins: 600, // 10 hours
            min_rest_mins: 720,    // 12 hours
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = Rules::default();

        assert_eq!(rules.max_service_mins, 600);
        assert_eq!(rules.min_rest_mins, 720);
    }

    #[test]
    fn duration_methods() {
        let rules = Rules::default();

        assert_eq!(rules.max_service(), Duration::hours(10));
        assert_eq!(rules.min_rest(), Duration::hours(12));
    }

    #[test]
    fn custom_rules() {
        let rules = Rules::new(480, 660);

        assert_eq!(rules.max_service_mins, 480);
        assert_eq!(rules.min_rest_mins, 660);
    }
}
