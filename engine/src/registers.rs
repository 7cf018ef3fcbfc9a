use crate::constants::{FLAG_REGISTER, PROGRAM_START, REGISTER_COUNT, STACK_DEPTH};
use crate::error::Fault;

/// # Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the flag register written as a side effect of arithmetic, shifts and draws
/// - (i) a 16-bit memory address register
/// - (pc) a 16-bit program counter
/// - (sp) the number of return addresses currently on the stack
/// - (stack) 16 return addresses for nested subroutine calls
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Registers {
    pub v: [u8; REGISTER_COUNT],
    pub i: u16,
    pub pc: u16,
    pub sp: usize,
    pub stack: [u16; STACK_DEPTH],
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            sp: 0,
            stack: [0; STACK_DEPTH],
        }
    }

    pub fn vf(&self) -> u8 {
        self.v[FLAG_REGISTER]
    }

    pub fn set_vf(&mut self, flag: bool) {
        self.v[FLAG_REGISTER] = u8::from(flag);
    }

    /// Pushes a return address; `address` is the instruction doing the pushing.
    pub fn push(&mut self, return_address: u16, address: u16) -> Result<(), Fault> {
        if self.sp == STACK_DEPTH {
            return Err(Fault::StackOverflow {
                address,
                depth: self.sp,
            });
        }
        self.stack[self.sp] = return_address;
        self.sp += 1;
        Ok(())
    }

    /// Pops the most recent return address; `address` is the instruction doing the popping.
    pub fn pop(&mut self, address: u16) -> Result<u16, Fault> {
        if self.sp == 0 {
            return Err(Fault::StackUnderflow { address });
        }
        self.sp -= 1;
        Ok(self.stack[self.sp])
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
