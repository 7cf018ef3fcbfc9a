use crate::constants::{FONT_SHEET, FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Fault, RomError};
use crate::opcode::Opcode;

/// # Memory
/// 4096 bytes of flat, byte addressable memory.
///
/// - `0x000..0x050` holds the font sheet
/// - `0x050..0x200` is otherwise reserved for the interpreter and left zeroed
/// - `0x200..0x1000` holds the program
///
/// Every access is bounds checked; nothing wraps around the end of memory.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        bytes[font..font + FONT_SHEET.len()].copy_from_slice(&FONT_SHEET);
        Memory { bytes }
    }

    /// Copies a ROM verbatim into memory starting at `PROGRAM_START`.
    ///
    /// Memory is left untouched if the ROM is rejected.
    pub fn load_program(&mut self, rom: &[u8]) -> Result<(), RomError> {
        if rom.is_empty() {
            return Err(RomError::Empty);
        }
        if rom.len() > MAX_ROM_SIZE {
            return Err(RomError::TooLarge {
                size: rom.len(),
                max: MAX_ROM_SIZE,
            });
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Gets the opcode at `pc`.
    pub fn fetch(&self, pc: u16) -> Result<Opcode, Fault> {
        let word = self.read(pc as usize, 2)?;
        Ok(Opcode::from_bytes(word[0], word[1]))
    }

    /// Borrows `len` bytes starting at `address`.
    pub fn read(&self, address: usize, len: usize) -> Result<&[u8], Fault> {
        let range = Memory::range(address, len)?;
        Ok(&self.bytes[range])
    }

    /// Overwrites memory starting at `address` with `data`.
    pub fn write(&mut self, address: usize, data: &[u8]) -> Result<(), Fault> {
        let range = Memory::range(address, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }

    /// A single byte, or `None` past the end of memory.
    pub fn byte(&self, address: usize) -> Option<u8> {
        self.bytes.get(address).copied()
    }

    fn range(address: usize, len: usize) -> Result<std::ops::Range<usize>, Fault> {
        match address.checked_add(len) {
            Some(end) if end <= MEMORY_SIZE => Ok(address..end),
            _ => Err(Fault::AddressOverrun { address, len }),
        }
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
