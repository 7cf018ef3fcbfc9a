use std::fmt;

use crate::opcode::Opcode;

/// A decoded Chip-8 instruction with its operands extracted.
///
/// `x` and `y` are register indices, `kk` an immediate byte, `nnn` a 12-bit address.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` clear the screen
    Cls,
    /// `00EE` return from a subroutine
    Ret,
    /// `1nnn` PC = nnn
    Jump { nnn: u16 },
    /// `2nnn` STACK.push(PC); PC = nnn
    Call { nnn: u16 },
    /// `3xkk` skip if Vx == kk
    SkipEqByte { x: usize, kk: u8 },
    /// `4xkk` skip if Vx != kk
    SkipNeByte { x: usize, kk: u8 },
    /// `5xy0` skip if Vx == Vy
    SkipEqReg { x: usize, y: usize },
    /// `6xkk` Vx = kk
    LoadByte { x: usize, kk: u8 },
    /// `7xkk` Vx += kk
    AddByte { x: usize, kk: u8 },
    /// `8xy0` Vx = Vy
    Move { x: usize, y: usize },
    /// `8xy1` Vx |= Vy
    Or { x: usize, y: usize },
    /// `8xy2` Vx &= Vy
    And { x: usize, y: usize },
    /// `8xy3` Vx ^= Vy
    Xor { x: usize, y: usize },
    /// `8xy4` Vx += Vy; VF = carry
    AddReg { x: usize, y: usize },
    /// `8xy5` Vx -= Vy; VF = !borrow
    Sub { x: usize, y: usize },
    /// `8xy6` Vx >>= 1; VF = lsb
    ShiftRight { x: usize },
    /// `8xy7` Vx = Vy - Vx; VF = !borrow
    SubN { x: usize, y: usize },
    /// `8xyE` Vx <<= 1; VF = msb
    ShiftLeft { x: usize },
    /// `9xy0` skip if Vx != Vy
    SkipNeReg { x: usize, y: usize },
    /// `Annn` I = nnn
    LoadI { nnn: u16 },
    /// `Bnnn` PC = nnn + V0
    JumpV0 { nnn: u16 },
    /// `Cxkk` Vx = random & kk
    Random { x: usize, kk: u8 },
    /// `Dxyn` draw an n row sprite from I at (Vx, Vy)
    Draw { x: usize, y: usize, n: u8 },
    /// `Ex9E` skip if key Vx is held
    SkipPressed { x: usize },
    /// `ExA1` skip if key Vx is not held
    SkipNotPressed { x: usize },
    /// `Fx07` Vx = DT
    LoadDelay { x: usize },
    /// `Fx0A` wait for a key and store it in Vx
    WaitKey { x: usize },
    /// `Fx15` DT = Vx
    SetDelay { x: usize },
    /// `Fx18` ST = Vx
    SetSound { x: usize },
    /// `Fx1E` I += Vx
    AddI { x: usize },
    /// `Fx29` I = address of the glyph for Vx
    LoadGlyph { x: usize },
    /// `Fx33` mem[I..I+3] = bcd(Vx)
    StoreBcd { x: usize },
    /// `Fx55` mem[I..=I+x] = V0..=Vx
    StoreRegisters { x: usize },
    /// `Fx65` V0..=Vx = mem[I..=I+x]
    LoadRegisters { x: usize },
}

impl Instruction {
    /// Selects the correct Instruction for a given Opcode.
    ///
    /// Returns `None` when the opcode isn't part of the Chip-8 instruction set.
    pub fn decode(op: Opcode) -> Option<Instruction> {
        use Instruction::*;

        let x = op.x() as usize;
        let y = op.y() as usize;
        let instruction = match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Cls,
            (0x0, 0x0, 0xE, 0xE) => Ret,
            (0x1, ..) => Jump { nnn: op.nnn() },
            (0x2, ..) => Call { nnn: op.nnn() },
            (0x3, ..) => SkipEqByte { x, kk: op.kk() },
            (0x4, ..) => SkipNeByte { x, kk: op.kk() },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => LoadByte { x, kk: op.kk() },
            (0x7, ..) => AddByte { x, kk: op.kk() },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadI { nnn: op.nnn() },
            (0xB, ..) => JumpV0 { nnn: op.nnn() },
            (0xC, ..) => Random { x, kk: op.kk() },
            (0xD, ..) => Draw { x, y, n: op.n() },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => LoadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddI { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => StoreBcd { x },
            (0xF, _, 0x5, 0x5) => StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => LoadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }
}

/// Formats instructions in conventional Chip-8 assembly, e.g. `LD V1, 0x22`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Cls => write!(f, "CLS"),
            Ret => write!(f, "RET"),
            Jump { nnn } => write!(f, "JP {:#05X}", nnn),
            Call { nnn } => write!(f, "CALL {:#05X}", nnn),
            SkipEqByte { x, kk } => write!(f, "SE V{:X}, {:#04X}", x, kk),
            SkipNeByte { x, kk } => write!(f, "SNE V{:X}, {:#04X}", x, kk),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            LoadByte { x, kk } => write!(f, "LD V{:X}, {:#04X}", x, kk),
            AddByte { x, kk } => write!(f, "ADD V{:X}, {:#04X}", x, kk),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x } => write!(f, "SHR V{:X}", x),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x } => write!(f, "SHL V{:X}", x),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadI { nnn } => write!(f, "LD I, {:#05X}", nnn),
            JumpV0 { nnn } => write!(f, "JP V0, {:#05X}", nnn),
            Random { x, kk } => write!(f, "RND V{:X}, {:#04X}", x, kk),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipPressed { x } => write!(f, "SKP V{:X}", x),
            SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            LoadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddI { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            StoreBcd { x } => write!(f, "LD B, V{:X}", x),
            StoreRegisters { x } => write!(f, "LD [I], V{:X}", x),
            LoadRegisters { x } => write!(f, "LD V{:X}, [I]", x),
        }
    }
}
