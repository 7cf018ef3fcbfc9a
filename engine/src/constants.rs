/// Total addressable memory in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// ROMs are loaded into memory starting at this address and execution begins here.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between `PROGRAM_START` and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Number of general purpose registers (V0..VF).
pub const REGISTER_COUNT: usize = 16;

/// Index of the flag register VF.
pub const FLAG_REGISTER: usize = 0xF;

/// Maximum depth of nested subroutine calls.
pub const STACK_DEPTH: usize = 16;

/// Number of keys on the hexadecimal keypad.
pub const KEY_COUNT: usize = 16;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Sprites are always 8 pixels wide; one byte per row.
pub const SPRITE_WIDTH: usize = 8;

/// The delay and sound timers count down at 60Hz.
pub const TIMER_FREQUENCY: u32 = 60;

/// A COSMAC VIP ran roughly 500-1000 instructions per second; 700 suits most ROMs.
pub const DEFAULT_INSTRUCTIONS_PER_SECOND: u32 = 700;

/// The font sheet lives at the bottom of the reserved interpreter area.
pub const FONT_START: u16 = 0x000;

/// Each glyph in the font sheet is 5 bytes tall.
pub const GLYPH_SIZE: u16 = 5;

/// # Font Sheet
/// Glyphs for the hexadecimal digits 0..F, 4 pixels wide and 5 pixels tall.
///
/// Only the upper nibble of each byte is lit, e.g. 0:
/// ```text
/// 11110000  ****
/// 10010000  *  *
/// 10010000  *  *
/// 10010000  *  *
/// 11110000  ****
/// ```
pub const FONT_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
