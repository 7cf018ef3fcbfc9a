use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::error::{Fault, RomError};
use crate::instruction::Instruction;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::operations;
use crate::registers::Registers;
use crate::screen::FrameBuffer;
use crate::state::{Mode, State};

/// The outcome of a successful call to `Chip8::step`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// An instruction ran to completion.
    Executed(Instruction),
    /// The CPU is waiting on `Fx0A`; keep ticking timers and call `step` again.
    AwaitingKey,
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `config` of interpreter quirks
///  - an injected random number generator for `Cxkk`
///
/// Supplies interfaces for:
/// - loading roms
/// - pressing and releasing keys
/// - advancing the CPU
/// - advancing its timers
/// - inspecting its frame buffer and sound timer for presentation
pub struct Chip8 {
    state: State,
    config: Config,
    rng: Box<dyn RngCore>,
}

impl Chip8 {
    /// A machine drawing random numbers from an entropy seeded generator.
    pub fn new(config: Config) -> Self {
        Chip8::with_rng(config, Box::new(StdRng::from_entropy()))
    }

    /// A machine drawing random numbers from `rng`; seed it for reproducible runs.
    pub fn with_rng(config: Config, rng: Box<dyn RngCore>) -> Self {
        Chip8 {
            state: State::new(),
            config,
            rng,
        }
    }

    /// Resets the machine and loads `rom` at 0x200.
    ///
    /// On failure the machine is left as it was.
    pub fn initialize(&mut self, rom: &[u8]) -> Result<(), RomError> {
        let mut state = State::new();
        state.memory.load_program(rom)?;
        self.state = state;
        info!("loaded {} byte ROM", rom.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `reader` a reader that yields the entire ROM
    pub fn load_rom(&mut self, reader: &mut dyn std::io::Read) -> Result<(), RomError> {
        let mut rom = Vec::new();
        reader.read_to_end(&mut rom)?;
        self.initialize(&rom)
    }

    /// Advances the CPU by a single instruction
    /// - fails immediately if a previous instruction faulted
    /// - resolves a pending `Fx0A` if a key is held, otherwise does nothing
    /// - gets and executes the next opcode
    ///
    /// A fault halts the machine with the program counter on the failing instruction.
    pub fn step(&mut self) -> Result<Step, Fault> {
        match self.state.mode {
            Mode::Halted(ref fault) => Err(fault.clone()),
            Mode::AwaitingKey { register } => Ok(self.resume(register)),
            Mode::Running => {
                let address = self.state.registers.pc;
                self.cycle(address).map_err(|fault| {
                    self.state.registers.pc = address;
                    self.state.mode = Mode::Halted(fault.clone());
                    fault
                })
            }
        }
    }

    fn cycle(&mut self, address: u16) -> Result<Step, Fault> {
        let op = self.state.memory.fetch(address)?;
        let instruction =
            Instruction::decode(op).ok_or(Fault::UnknownOpcode { opcode: op, address })?;
        trace!("{:03X}  {}  {}", address, op, instruction);

        self.state.registers.pc = address.wrapping_add(0x2);
        operations::execute(
            instruction,
            &mut self.state,
            &self.config,
            self.rng.as_mut(),
            address,
        )?;

        if let Mode::AwaitingKey { register } = self.state.mode {
            debug!("awaiting key for V{:X}", register);
            return Ok(Step::AwaitingKey);
        }
        Ok(Step::Executed(instruction))
    }

    fn resume(&mut self, register: usize) -> Step {
        match self.state.keypad.pressed_key() {
            Some(key) => {
                debug!("received key {:X} for V{:X}", key, register);
                self.state.registers.v[register] = key;
                self.state.mode = Mode::Running;
                Step::Executed(Instruction::WaitKey { x: register })
            }
            None => Step::AwaitingKey,
        }
    }

    /// Decrements the delay and sound timers; call at 60Hz.
    pub fn tick(&mut self) {
        self.state.timers.tick();
    }

    /// Set the pressed status of a key
    ///
    /// # Arguments
    /// * `key` the logical key 0x0..=0xF
    /// * `pressed` whether the key is now held
    pub fn set_key_state(&mut self, key: u8, pressed: bool) {
        self.state.keypad.set(key, pressed);
    }

    /// The current contents of the display.
    pub fn frame(&self) -> &FrameBuffer {
        self.state.screen.frame()
    }

    /// Returns the FrameBuffer if it changed since it was last taken.
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.screen.frame())
        } else {
            None
        }
    }

    pub fn sound_timer(&self) -> u8 {
        self.state.timers.sound
    }

    /// Whether the host should be playing a tone.
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound_active()
    }

    pub fn delay_timer(&self) -> u8 {
        self.state.timers.delay
    }

    pub fn registers(&self) -> &Registers {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }

    pub fn keypad(&self) -> &Keypad {
        &self.state.keypad
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
