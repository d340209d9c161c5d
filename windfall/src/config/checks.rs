use super::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// A configuration value windfall cannot work with.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigIssue {
    #[error("Log level is invalid: {0}")]
    LogLevel(String),
    #[error("`{name}` must lie between 0 and 1, found {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },
    #[error("`tick_rate` must be positive, found {0}")]
    TickRate(f64),
    #[error("`gravity` must be a finite number, found {0}")]
    Gravity(f64),
}

impl Config {
    /// Run every check, returning what is wrong.
    #[must_use]
    pub fn check(&self, verbose: bool) -> Vec<ConfigIssue> {
        let mut issues: Vec<ConfigIssue> = self.check_log_level(verbose).into_iter().collect();
        issues.extend(self.check_physics(verbose));
        issues
    }

    #[must_use]
    pub fn check_log_level(&self, verbose: bool) -> Option<ConfigIssue> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => {
                if verbose {
                    println!("Log level is ok.");
                }
                None
            }
            Err(err) => Some(ConfigIssue::LogLevel(err.to_string())),
        }
    }

    #[must_use]
    pub fn check_physics(&self, verbose: bool) -> Vec<ConfigIssue> {
        if verbose {
            println!("Checking physics values.");
        }
        let mut issues = vec![];
        for (name, value) in [("friction", self.friction), ("bounce", self.bounce)] {
            if !(0.0..=1.0).contains(&value) {
                issues.push(ConfigIssue::OutOfUnitRange { name, value });
            }
        }
        if self.tick_rate.is_nan() || self.tick_rate <= 0.0 {
            issues.push(ConfigIssue::TickRate(self.tick_rate));
        }
        if !self.gravity.is_finite() {
            issues.push(ConfigIssue::Gravity(self.gravity));
        }
        if verbose && issues.is_empty() {
            println!("Physics values are ok.");
        }
        issues
    }
}
