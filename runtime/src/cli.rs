//! CLI argument parsing for the Qawale runtime

use clap::Parser;
use std::time::Duration;

use crate::runtime::scheduler::{RunConfig, DEFAULT_ITERATIONS};

#[derive(Parser, Debug)]
#[command(name = "qawale")]
#[command(version)]
#[command(about = "Qawale - frequency based programming language", long_about = None)]
#[command(after_help = "Examples:\n  \
    qawale              # Run 10 iterations (default)\n  \
    qawale -n 20        # Run 20 iterations\n  \
    qawale -d 0.5       # Check frequency every 0.5 seconds\n  \
    qawale -n 0         # Run until END command is triggered")]
pub struct Cli {
    /// Number of iterations to run (0 = run until END)
    #[arg(short = 'n', long = "iterations", value_name = "N", default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: u64,

    /// Delay between frequency checks in seconds
    #[arg(
        short = 'd',
        long = "delay",
        value_name = "SECONDS",
        default_value = "1.0",
        value_parser = parse_delay
    )]
    pub delay: Duration,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            iterations: (self.iterations != 0).then_some(self.iterations),
            delay: self.delay,
        }
    }
}

fn parse_delay(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .parse()
        .map_err(|_| format!("`{}` is not a number of seconds", s))?;
    Duration::try_from_secs_f64(secs)
        .map_err(|_| format!("delay must be a finite, non-negative number of seconds, got {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["qawale"]);
        assert_eq!(cli.iterations, 10);
        assert_eq!(cli.delay, Duration::from_secs(1));
        assert_eq!(cli.run_config(), RunConfig::default());
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::parse_from(["qawale", "-n", "20", "-d", "0.5"]);
        assert_eq!(cli.run_config().iterations, Some(20));
        assert_eq!(cli.delay, Duration::from_millis(500));

        let cli = Cli::parse_from(["qawale", "--iterations", "3", "--delay", "0"]);
        assert_eq!(cli.run_config().iterations, Some(3));
        assert_eq!(cli.delay, Duration::ZERO);
    }

    #[test]
    fn zero_iterations_means_until_end() {
        let cli = Cli::parse_from(["qawale", "-n", "0"]);
        assert_eq!(cli.run_config().iterations, None);
    }

    #[test]
    fn rejects_bad_delays() {
        assert!(Cli::try_parse_from(["qawale", "-d", "-1"]).is_err());
        assert!(Cli::try_parse_from(["qawale", "-d", "abc"]).is_err());
        assert!(Cli::try_parse_from(["qawale", "-d", "inf"]).is_err());
        assert!(Cli::try_parse_from(["qawale", "-d", "NaN"]).is_err());
    }

    #[test]
    fn rejects_negative_iterations() {
        assert!(Cli::try_parse_from(["qawale", "-n", "-5"]).is_err());
    }
}
