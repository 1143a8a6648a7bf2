use std::io;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use geomatrix::demo::{self, DemoConfig};

/// Circle, sphere and matrix calculations on the console.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Smallest random matrix value
    #[arg(long)]
    min: Option<i32>,

    /// Largest random matrix value
    #[arg(long)]
    max: Option<i32>,

    /// Seed for reproducible matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,

    /// Extra settings as key=value pairs, e.g. "min=0,max=99"
    #[arg(long, default_value = "")]
    params: String,
}

impl Cli {
    /// Flags take precedence over `--params`.
    fn into_config(self) -> anyhow::Result<DemoConfig> {
        let mut config = DemoConfig::from_parameters(&self.params)?;
        if let Some(min) = self.min {
            config.min_value = min;
        }
        if let Some(max) = self.max {
            config.max_value = max;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(level) = self.log_level {
            config.log_filter = level;
        }
        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(default_filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the demo output, so logs go to stderr.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;
    init_tracing(&config.log_filter);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    tracing::debug!(?config, "starting demo");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    demo::run(&config, stdin.lock(), &mut stdout, &mut rng).context("demo failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(args: &[&str]) -> anyhow::Result<DemoConfig> {
        let argv = std::iter::once("geomatrix").chain(args.iter().copied());
        Cli::try_parse_from(argv)?.into_config()
    }

    #[test]
    fn test_flags_override_params_before_validation() {
        let config = config_from(&["--params", "min=10", "--max", "20", "--seed", "1"]).unwrap();
        assert_eq!(config.min_value, 10);
        assert_eq!(config.max_value, 20);
        assert_eq!(config.seed, Some(1));

        let config = config_from(&["--params", "min=10,max=2", "--min", "0"]).unwrap();
        assert_eq!((config.min_value, config.max_value), (0, 2));
    }

    #[test]
    fn test_final_range_is_still_checked() {
        assert!(config_from(&["--params", "min=10"]).is_err());
        assert!(config_from(&["--params", "max=3", "--min", "4"]).is_err());
        assert!(config_from(&["--params", "bogus=1"]).is_err());
    }

    #[test]
    fn test_defaults_without_arguments() {
        assert_eq!(config_from(&[]).unwrap(), DemoConfig::default());
    }
}
