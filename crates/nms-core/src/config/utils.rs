//! Configuration utility functions

use super::core::Config;

impl Config {
    /// Get the effective database connection string, considering a
    /// `DATABASE_URL` environment variable override.
    #[must_use]
    pub fn database_url(&self) -> String {
        std::env::var("DATABASE_URL").unwrap_or_else(|_| self.database.connection_string())
    }

    /// `true` when this configuration is for local development: not
    /// production and pointed at a local database host.
    #[must_use]
    pub fn is_development(&self) -> bool {
        !self.is_production()
            && (self.database.host == "localhost" || self.database.host == "127.0.0.1")
    }

    /// Build the [`crate::alarm::AlarmThresholds`] the poller/alarm engine
    /// should run with, from the configured thresholds.
    #[must_use]
    pub fn alarm_thresholds(&self) -> crate::alarm::AlarmThresholds {
        crate::alarm::AlarmThresholds {
            cpu_threshold: self.alarm.cpu_threshold,
            memory_threshold: self.alarm.memory_threshold,
            temperature_threshold: self.alarm.temperature_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_development() {
        let config = Config::default();
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn alarm_thresholds_carries_configured_values() {
        let mut config = Config::default();
        config.alarm.cpu_threshold = 90.0;
        let thresholds = config.alarm_thresholds();
        assert_eq!(thresholds.cpu_threshold, 90.0);
    }
}
