// Action mappings for sampled frequencies (milliseconds, modulo 1000).
pub const START_FREQ: u32 = 200;
pub const PRINT_FREQ: u32 = 400;
pub const ADD_FREQ: u32 = 600;
pub const SUBTRACT_FREQ: u32 = 800;
pub const END_FREQ: u32 = 1000;

/// Amount added to memory by `Add`.
pub const ADD_AMOUNT: i64 = 10;
/// Amount subtracted from memory by `Subtract`.
pub const SUBTRACT_AMOUNT: i64 = 5;

/// High-level instruction variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    Start,
    Print,
    Add,
    Subtract,
    End,
}

impl Instruction {
    pub const ALL: [Instruction; 5] = [
        Instruction::Start,
        Instruction::Print,
        Instruction::Add,
        Instruction::Subtract,
        Instruction::End,
    ];

    /// Map a sampled frequency to an instruction.
    /// Only the five exact constants are recognized; everything else is `None`.
    pub fn from_frequency(freq: u32) -> Option<Instruction> {
        match freq {
            START_FREQ => Some(Instruction::Start),
            PRINT_FREQ => Some(Instruction::Print),
            ADD_FREQ => Some(Instruction::Add),
            SUBTRACT_FREQ => Some(Instruction::Subtract),
            END_FREQ => Some(Instruction::End),
            _ => None,
        }
    }

    pub fn frequency(self) -> u32 {
        match self {
            Instruction::Start => START_FREQ,
            Instruction::Print => PRINT_FREQ,
            Instruction::Add => ADD_FREQ,
            Instruction::Subtract => SUBTRACT_FREQ,
            Instruction::End => END_FREQ,
        }
    }
}
