pub mod cli;
pub mod commands;
pub mod runtime;

pub use commands::Instruction;
pub use runtime::clock::{FrequencySource, MonotonicClock, ScriptedClock};
pub use runtime::machine::{Machine, Step};
pub use runtime::scheduler::{run_program, run_with_monotonic_clock, RunConfig, RunSummary};
