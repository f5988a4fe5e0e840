use anyhow::Result;
use log::{debug, trace};
use std::io::Write;

use crate::commands::{Instruction, ADD_AMOUNT, SUBTRACT_AMOUNT};

/// Outcome of dispatching one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Halt,
}

/// The single-register machine driven by frequency samples.
#[derive(Debug, Default, Clone)]
pub struct Machine {
    memory: i64,
}

impl Machine {
    pub fn new() -> Self {
        Machine { memory: 0 }
    }

    pub fn memory(&self) -> i64 {
        self.memory
    }

    /// Process a frequency value and execute the corresponding instruction,
    /// writing its console line to `out`. Unknown frequencies are ignored.
    pub fn process_frequency<W: Write>(&mut self, freq: u32, out: &mut W) -> Result<Step> {
        match Instruction::from_frequency(freq) {
            Some(instr) => {
                debug!("Frequency {} -> {:?}", freq, instr);
                self.execute(instr, out)
            }
            None => {
                trace!("Ignoring unknown frequency {}", freq);
                Ok(Step::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, instr: Instruction, out: &mut W) -> Result<Step> {
        match instr {
            Instruction::Start => {
                writeln!(out, "Program started...")?;
            }
            Instruction::Print => {
                writeln!(out, "Memory: {}", self.memory)?;
            }
            Instruction::Add => {
                self.memory = self.memory.wrapping_add(ADD_AMOUNT);
                writeln!(out, "Added {}. New memory value: {}", ADD_AMOUNT, self.memory)?;
            }
            Instruction::Subtract => {
                self.memory = self.memory.wrapping_sub(SUBTRACT_AMOUNT);
                writeln!(
                    out,
                    "Subtracted {}. New memory value: {}",
                    SUBTRACT_AMOUNT, self.memory
                )?;
            }
            Instruction::End => {
                writeln!(out, "Program ended.")?;
                return Ok(Step::Halt);
            }
        }
        Ok(Step::Continue)
    }
}
