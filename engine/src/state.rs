use crate::error::Fault;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::registers::Registers;
use crate::screen::Screen;
use crate::timers::Timers;

/// What the CPU will do on its next cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Fetching and executing instructions.
    Running,
    /// Suspended by `Fx0A` until a key is held; the key is stored in `register`.
    AwaitingKey { register: usize },
    /// Stopped by a fatal fault; nothing more will execute.
    Halted(Fault),
}

/// A snapshot of the Chip-8 internal state
///
/// ## CPU
/// - registers, program counter, address register and call stack
///
/// ## Timers
/// - 2 8-bit timers (delay & sound), decremented at 60Hz by the host
///
/// ## Memory
/// - 4096 bytes of addressable memory
/// - 64x32 frame buffer
///     - stores the contents of the next frame to be drawn
///     - `draw_flag` is raised whenever it changes
///
/// ## Input
/// - the held status of keys 0..F
/// - emulation halts while awaiting a key to write to some register
#[derive(Clone)]
pub struct State {
    pub memory: Memory,
    pub registers: Registers,
    pub screen: Screen,
    pub timers: Timers,
    pub keypad: Keypad,
    pub mode: Mode,
    pub draw_flag: bool,
}

impl State {
    pub fn new() -> Self {
        State {
            memory: Memory::new(),
            registers: Registers::new(),
            screen: Screen::new(),
            timers: Timers::new(),
            keypad: Keypad::new(),
            mode: Mode::Running,
            draw_flag: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
