use thiserror::Error;

use crate::opcode::Opcode;

/// A fatal condition raised while executing a program.
///
/// Once a machine faults it halts; every later `step` reports the same fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Fault {
    #[error("unknown opcode {opcode} at {address:#05X}")]
    UnknownOpcode { opcode: Opcode, address: u16 },

    #[error("stack overflow at {address:#05X}: call nested deeper than {depth} levels")]
    StackOverflow { address: u16, depth: usize },

    #[error("stack underflow at {address:#05X}: return with an empty call stack")]
    StackUnderflow { address: u16 },

    #[error("memory access out of bounds: {len} byte(s) at {address:#06X}")]
    AddressOverrun { address: usize, len: usize },
}

/// A ROM that could not be loaded. Raised before any execution begins.
#[derive(Debug, Error)]
pub enum RomError {
    #[error("unable to read ROM")]
    Io(#[from] std::io::Error),

    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("ROM is empty")]
    Empty,
}
