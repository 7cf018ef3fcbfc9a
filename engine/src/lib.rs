pub use chip8::{Chip8, Step};
pub use config::Config;
pub use error::{Fault, RomError};
pub use instruction::Instruction;
pub use opcode::Opcode;
pub use screen::{EdgePolicy, FrameBuffer};
pub use state::Mode;

mod chip8;
mod config;
pub mod constants;
mod error;
mod instruction;
pub mod keypad;
pub mod memory;
mod opcode;
mod operations;
pub mod registers;
pub mod screen;
mod state;
pub mod timers;
