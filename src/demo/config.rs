//! Settings for the interactive demo.

use crate::error::{GeometryError, Result};

/// Configuration for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Smallest value a random matrix cell may take
    pub min_value: i32,
    /// Largest value a random matrix cell may take
    pub max_value: i32,
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            min_value: 1,
            max_value: 9,
            seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a comma separated `key=value` parameter string on top of the
    /// defaults, e.g. `"min=0,max=99,seed=7,log=debug"`.
    ///
    /// Whitespace around entries is ignored and empty entries are skipped.
    /// Only the syntax is checked here; the range is checked by [`validate`]
    /// once every other source of settings has been applied.
    ///
    /// [`validate`]: DemoConfig::validate
    pub fn from_parameters(parameters: &str) -> Result<Self> {
        let mut config = Self::default();

        for entry in parameters.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                GeometryError::invalid(format!("Parameter '{entry}' is not of the form key=value"))
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "min" => config.min_value = parse_value(key, value)?,
                "max" => config.max_value = parse_value(key, value)?,
                "seed" => config.seed = Some(parse_value(key, value)?),
                "log" => config.log_filter = value.to_string(),
                _ => {
                    return Err(GeometryError::invalid(format!("Unknown parameter '{key}'")));
                }
            }
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_value > self.max_value {
            return Err(GeometryError::invalid(format!(
                "min ({}) must be <= max ({})",
                self.min_value, self.max_value
            )));
        }
        Ok(())
    }
}

fn parse_value<V: std::str::FromStr>(key: &str, value: &str) -> Result<V> {
    value
        .parse()
        .map_err(|_| GeometryError::invalid(format!("Invalid value '{value}' for parameter '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let config = DemoConfig::default();
        assert_eq!(config.min_value, 1);
        assert_eq!(config.max_value, 9);
        assert_eq!(config.seed, None);
        assert_eq!(config.log_filter, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_parameters() {
        let config = DemoConfig::from_parameters(" min=-5, max = 5 ,seed=42,log=debug").unwrap();
        assert_eq!(config.min_value, -5);
        assert_eq!(config.max_value, 5);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_empty_parameters_give_defaults() {
        assert_eq!(DemoConfig::from_parameters("").unwrap(), DemoConfig::default());
        assert_eq!(DemoConfig::from_parameters(",,").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parameter_errors() {
        assert!(DemoConfig::from_parameters("min").is_err());
        assert!(DemoConfig::from_parameters("min=abc").is_err());
        assert!(DemoConfig::from_parameters("seed=-1").is_err());
        assert!(DemoConfig::from_parameters("colour=red").is_err());
    }

    #[test]
    fn test_range_is_checked_by_validate_only() {
        let config = DemoConfig::from_parameters("min=10").unwrap();
        assert_eq!(config.min_value, 10);
        assert!(config.validate().is_err());

        let config = DemoConfig::from_parameters("min=10,max=2").unwrap();
        assert!(config.validate().is_err());
    }
}
