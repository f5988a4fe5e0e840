use anyhow::Result;
use log::{debug, info};
use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::runtime::{
    clock::{FrequencySource, MonotonicClock},
    machine::{Machine, Step},
};

pub const DEFAULT_ITERATIONS: u64 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of samples to take; `None` runs until END fires.
    pub iterations: Option<u64>,
    /// Sleep between consecutive samples.
    pub delay: Duration,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            iterations: Some(DEFAULT_ITERATIONS),
            delay: DEFAULT_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub halted: bool,
    pub final_memory: i64,
}

pub fn run_program<S, W>(
    config: RunConfig,
    source: &mut S,
    machine: &mut Machine,
    out: &mut W,
) -> Result<RunSummary>
where
    S: FrequencySource,
    W: Write,
{
    info!(
        "Starting run: iterations={}, delay={:?}",
        config
            .iterations
            .map_or_else(|| "until END".to_string(), |n| n.to_string()),
        config.delay
    );

    let mut iteration: u64 = 0;
    let mut halted = false;

    while config.iterations.map_or(true, |n| iteration < n) {
        let freq = source.frequency()?;
        debug!("Iteration {}: sampled frequency {}", iteration, freq);
        let step = machine.process_frequency(freq, out)?;
        out.flush()?;
        iteration += 1;

        if step == Step::Halt {
            halted = true;
            break;
        }
        // No sleep after the final sample.
        if config.iterations.map_or(true, |n| iteration < n) {
            thread::sleep(config.delay);
        }
    }

    let summary = RunSummary {
        iterations: iteration,
        halted,
        final_memory: machine.memory(),
    };
    info!(
        "Run finished after {} iteration(s){}; memory = {}",
        summary.iterations,
        if halted { " (END)" } else { "" },
        summary.final_memory
    );
    Ok(summary)
}

/// Wrapper driving a fresh machine from the OS monotonic clock.
pub fn run_with_monotonic_clock<W: Write>(config: RunConfig, out: &mut W) -> Result<RunSummary> {
    let mut clock = MonotonicClock;
    let mut machine = Machine::new();
    run_program(config, &mut clock, &mut machine, out)
}
