use rand::{Rng, RngCore};

use crate::config::Config;
use crate::constants::{FONT_START, GLYPH_SIZE};
use crate::error::Fault;
use crate::instruction::Instruction;
use crate::state::{Mode, State};

/// Applies an instruction to the state.
///
/// The program counter has already been moved past the instruction, which lives at `address`.
/// Faults are raised before anything is mutated.
pub fn execute(
    instruction: Instruction,
    state: &mut State,
    config: &Config,
    rng: &mut dyn RngCore,
    address: u16,
) -> Result<(), Fault> {
    use Instruction::*;

    match instruction {
        Cls => clr(state),
        Ret => rts(state, address)?,
        Jump { nnn } => jump(state, nnn),
        Call { nnn } => call(state, nnn, address)?,
        SkipEqByte { x, kk } => ske(state, x, kk),
        SkipNeByte { x, kk } => skne(state, x, kk),
        SkipEqReg { x, y } => skre(state, x, y),
        LoadByte { x, kk } => load(state, x, kk),
        AddByte { x, kk } => add(state, x, kk),
        Move { x, y } => mv(state, x, y),
        Or { x, y } => or(state, x, y),
        And { x, y } => and(state, x, y),
        Xor { x, y } => xor(state, x, y),
        AddReg { x, y } => addr(state, x, y),
        Sub { x, y } => sub(state, x, y),
        ShiftRight { x } => shr(state, x),
        SubN { x, y } => subn(state, x, y),
        ShiftLeft { x } => shl(state, x),
        SkipNeReg { x, y } => skrne(state, x, y),
        LoadI { nnn } => loadi(state, nnn),
        JumpV0 { nnn } => jumpi(state, nnn),
        Random { x, kk } => rnd(state, x, kk, rng),
        Draw { x, y, n } => draw(state, x, y, n, config)?,
        SkipPressed { x } => skpr(state, x),
        SkipNotPressed { x } => skup(state, x),
        LoadDelay { x } => moved(state, x),
        WaitKey { x } => keyd(state, x),
        SetDelay { x } => loads(state, x),
        SetSound { x } => ld(state, x),
        AddI { x } => addi(state, x),
        LoadGlyph { x } => ldspr(state, x),
        StoreBcd { x } => bcd(state, x)?,
        StoreRegisters { x } => stor(state, x)?,
        LoadRegisters { x } => read(state, x)?,
    }
    Ok(())
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.registers.pc = state.registers.pc.wrapping_add(0x2);
    }
}

/// clear
fn clr(state: &mut State) {
    state.screen.clear();
    state.draw_flag = true;
}

/// PC = STACK.pop()
fn rts(state: &mut State, address: u16) -> Result<(), Fault> {
    state.registers.pc = state.registers.pop(address)?;
    Ok(())
}

/// PC = addr
fn jump(state: &mut State, nnn: u16) {
    state.registers.pc = nnn;
}

/// STACK.push(PC); PC = addr
fn call(state: &mut State, nnn: u16, address: u16) -> Result<(), Fault> {
    let return_address = state.registers.pc;
    state.registers.push(return_address, address)?;
    state.registers.pc = nnn;
    Ok(())
}

/// if Vx == kk then pc += 2
fn ske(state: &mut State, x: usize, kk: u8) {
    let condition = state.registers.v[x] == kk;
    skip_if(state, condition);
}

/// if Vx != kk then pc += 2
fn skne(state: &mut State, x: usize, kk: u8) {
    let condition = state.registers.v[x] != kk;
    skip_if(state, condition);
}

/// if Vx == Vy then pc += 2
fn skre(state: &mut State, x: usize, y: usize) {
    let condition = state.registers.v[x] == state.registers.v[y];
    skip_if(state, condition);
}

/// Vx = kk
fn load(state: &mut State, x: usize, kk: u8) {
    state.registers.v[x] = kk;
}

/// Vx += kk
/// Add kk to Vx; allow for overflow but implicitly drop it. VF is untouched.
fn add(state: &mut State, x: usize, kk: u8) {
    let v = &mut state.registers.v;
    v[x] = v[x].wrapping_add(kk);
}

/// Vx = Vy
fn mv(state: &mut State, x: usize, y: usize) {
    let v = &mut state.registers.v;
    v[x] = v[y];
}

/// Vx |= Vy
fn or(state: &mut State, x: usize, y: usize) {
    let v = &mut state.registers.v;
    v[x] |= v[y];
}

/// Vx &= Vy
fn and(state: &mut State, x: usize, y: usize) {
    let v = &mut state.registers.v;
    v[x] &= v[y];
}

/// Vx ^= Vy
fn xor(state: &mut State, x: usize, y: usize) {
    let v = &mut state.registers.v;
    v[x] ^= v[y];
}

// The ALU operations below write VF before Vx, so when x is F the result wins over the flag.

/// Vx += Vy; VF = overflow
fn addr(state: &mut State, x: usize, y: usize) {
    let registers = &mut state.registers;
    let (res, over) = registers.v[x].overflowing_add(registers.v[y]);
    registers.set_vf(over);
    registers.v[x] = res;
}

/// Vx -= Vy; VF = !underflow
fn sub(state: &mut State, x: usize, y: usize) {
    let registers = &mut state.registers;
    let (vx, vy) = (registers.v[x], registers.v[y]);
    registers.set_vf(vx >= vy);
    registers.v[x] = vx.wrapping_sub(vy);
}

/// Vx >>= 1; VF = lsb
fn shr(state: &mut State, x: usize) {
    let registers = &mut state.registers;
    let vx = registers.v[x];
    registers.set_vf(vx & 0x1 == 0x1);
    registers.v[x] = vx >> 1;
}

/// Vx = Vy - Vx; VF = !underflow
fn subn(state: &mut State, x: usize, y: usize) {
    let registers = &mut state.registers;
    let (vx, vy) = (registers.v[x], registers.v[y]);
    registers.set_vf(vy >= vx);
    registers.v[x] = vy.wrapping_sub(vx);
}

/// Vx <<= 1; VF = msb
fn shl(state: &mut State, x: usize) {
    let registers = &mut state.registers;
    let vx = registers.v[x];
    registers.set_vf(vx & 0x80 == 0x80);
    registers.v[x] = vx << 1;
}

/// if Vx != Vy then pc +=2
fn skrne(state: &mut State, x: usize, y: usize) {
    let condition = state.registers.v[x] != state.registers.v[y];
    skip_if(state, condition);
}

/// I = addr
fn loadi(state: &mut State, nnn: u16) {
    state.registers.i = nnn;
}

/// PC = V0 + addr
fn jumpi(state: &mut State, nnn: u16) {
    state.registers.pc = nnn + u16::from(state.registers.v[0x0]);
}

/// Vx = rand_byte & kk
fn rnd(state: &mut State, x: usize, kk: u8, rng: &mut dyn RngCore) {
    let rand_byte: u8 = rng.gen();
    state.registers.v[x] = rand_byte & kk;
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory I..I+n at position Vx, Vy on the FrameBuffer.
/// Sets VF if any pixels were erased
fn draw(state: &mut State, x: usize, y: usize, n: u8, config: &Config) -> Result<(), Fault> {
    let (vx, vy) = (state.registers.v[x], state.registers.v[y]);
    let sprite = state.memory.read(state.registers.i as usize, n as usize)?;
    let collision = state.screen.draw_sprite(vx, vy, sprite, config.edges);
    state.registers.set_vf(collision);
    state.draw_flag = true;
    Ok(())
}

/// if pressed_key == Vx then pc += 2
fn skpr(state: &mut State, x: usize) {
    let condition = state.keypad.pressed_key() == Some(state.registers.v[x]);
    skip_if(state, condition);
}

/// if pressed_key != Vx then pc += 2
fn skup(state: &mut State, x: usize) {
    let condition = state.keypad.pressed_key() != Some(state.registers.v[x]);
    skip_if(state, condition);
}

/// Vx = DT
fn moved(state: &mut State, x: usize) {
    state.registers.v[x] = state.timers.delay;
}

/// await keypress for Vx
fn keyd(state: &mut State, x: usize) {
    state.mode = Mode::AwaitingKey { register: x };
}

/// DT = Vx
fn loads(state: &mut State, x: usize) {
    state.timers.delay = state.registers.v[x];
}

/// ST = Vx
fn ld(state: &mut State, x: usize) {
    state.timers.sound = state.registers.v[x];
}

/// I += Vx
fn addi(state: &mut State, x: usize) {
    let registers = &mut state.registers;
    registers.i = registers.i.wrapping_add(u16::from(registers.v[x]));
}

/// I = Vx * 5
/// Set I to the memory address of the font glyph for Vx
fn ldspr(state: &mut State, x: usize) {
    state.registers.i = FONT_START + u16::from(state.registers.v[x]) * GLYPH_SIZE;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address I
fn bcd(state: &mut State, x: usize) -> Result<(), Fault> {
    let vx = state.registers.v[x];
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    state.memory.write(state.registers.i as usize, &digits)
}

/// mem[I..=I+x] = V0..=Vx
fn stor(state: &mut State, x: usize) -> Result<(), Fault> {
    let registers = &state.registers;
    state
        .memory
        .write(registers.i as usize, &registers.v[0x0..=x])
}

/// V0..=Vx = mem[I..=I+x]
fn read(state: &mut State, x: usize) -> Result<(), Fault> {
    let bytes = state.memory.read(state.registers.i as usize, x + 1)?;
    state.registers.v[0x0..=x].copy_from_slice(bytes);
    Ok(())
}

#[cfg(test)]
mod test_operations {
    use rand::rngs::mock::StepRng;

    use super::*;
    use crate::opcode::Opcode;

    /// Executes a single opcode as if it had been fetched from 0x200.
    fn run(state: &mut State, word: u16) -> Result<(), Fault> {
        let instruction = Instruction::decode(Opcode(word)).unwrap();
        let mut rng = StepRng::new(0xAB, 0);
        state.registers.pc = state.registers.pc.wrapping_add(0x2);
        execute(instruction, state, &Config::default(), &mut rng, 0x200)
    }

    fn state() -> State {
        State::new()
    }

    #[test]
    fn test_00e0_cls() {
        let mut state = state();
        state.screen.draw_sprite(0, 0, &[0x80], Default::default());
        run(&mut state, 0x00E0).unwrap();
        assert_eq!(state.screen.pixel(0, 0), 0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_00ee_ret() {
        let mut state = state();
        state.registers.push(0x0ABC, 0x0AB8).unwrap();
        run(&mut state, 0x00EE).unwrap();
        assert_eq!(state.registers.sp, 0x0);
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_00ee_ret_underflows() {
        let mut state = state();
        assert_eq!(
            run(&mut state, 0x00EE),
            Err(Fault::StackUnderflow { address: 0x200 })
        );
    }

    #[test]
    fn test_1nnn_jp() {
        let mut state = state();
        run(&mut state, 0x1ABC).unwrap();
        assert_eq!(state.registers.pc, 0x0ABC);
    }

    #[test]
    fn test_2nnn_call() {
        let mut state = state();
        run(&mut state, 0x2123).unwrap();
        assert_eq!(state.registers.sp, 0x1);
        assert_eq!(state.registers.stack[0], 0x0202);
        assert_eq!(state.registers.pc, 0x0123);
    }

    #[test]
    fn test_3xkk_se_skips() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        run(&mut state, 0x3111).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_3xkk_se_doesntskip() {
        let mut state = state();
        run(&mut state, 0x3111).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_4xkk_sne_skips() {
        let mut state = state();
        run(&mut state, 0x4111).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_4xkk_sne_doesntskip() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        run(&mut state, 0x4111).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_5xy0_se_skips() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x11;
        run(&mut state, 0x5120).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_5xy0_se_doesntskip() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        run(&mut state, 0x5120).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_6xkk_ld() {
        let mut state = state();
        run(&mut state, 0x6122).unwrap();
        assert_eq!(state.registers.v[0x1], 0x22);
    }

    #[test]
    fn test_7xkk_add_wraps_and_leaves_vf() {
        let mut state = state();
        state.registers.v[0x1] = 0xF0;
        state.registers.v[0xF] = 0x5;
        run(&mut state, 0x7122).unwrap();
        assert_eq!(state.registers.v[0x1], 0x12);
        assert_eq!(state.registers.vf(), 0x5);
    }

    #[test]
    fn test_8xy0_ld() {
        let mut state = state();
        state.registers.v[0x2] = 0x1;
        run(&mut state, 0x8120).unwrap();
        assert_eq!(state.registers.v[0x1], 0x1);
    }

    #[test]
    fn test_8xy1_or() {
        let mut state = state();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        run(&mut state, 0x8121).unwrap();
        assert_eq!(state.registers.v[0x1], 0x7);
    }

    #[test]
    fn test_8xy2_and() {
        let mut state = state();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        run(&mut state, 0x8122).unwrap();
        assert_eq!(state.registers.v[0x1], 0x2);
    }

    #[test]
    fn test_8xy3_xor() {
        let mut state = state();
        state.registers.v[0x1] = 0x6;
        state.registers.v[0x2] = 0x3;
        run(&mut state, 0x8123).unwrap();
        assert_eq!(state.registers.v[0x1], 0x5);
    }

    #[test]
    fn test_8xy4_add_nocarry() {
        let mut state = state();
        state.registers.v[0x1] = 0x01;
        state.registers.v[0x2] = 0x01;
        run(&mut state, 0x8124).unwrap();
        assert_eq!(state.registers.v[0x1], 0x02);
        assert_eq!(state.registers.vf(), 0x0);
    }

    #[test]
    fn test_8xy4_add_carry() {
        let mut state = state();
        state.registers.v[0x1] = 0xFF;
        state.registers.v[0x2] = 0x01;
        run(&mut state, 0x8124).unwrap();
        assert_eq!(state.registers.v[0x1], 0x00);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_noborrow() {
        let mut state = state();
        state.registers.v[0x1] = 0x0A;
        state.registers.v[0x2] = 0x05;
        run(&mut state, 0x8125).unwrap();
        assert_eq!(state.registers.v[0x1], 0x05);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xy5_sub_borrow() {
        let mut state = state();
        state.registers.v[0x1] = 0x05;
        state.registers.v[0x2] = 0x0A;
        run(&mut state, 0x8125).unwrap();
        assert_eq!(state.registers.v[0x1], 0xFB);
        assert_eq!(state.registers.vf(), 0x0);
    }

    #[test]
    fn test_8xy5_sub_equal_is_noborrow() {
        let mut state = state();
        state.registers.v[0x1] = 0x33;
        state.registers.v[0x2] = 0x33;
        run(&mut state, 0x8125).unwrap();
        assert_eq!(state.registers.v[0x1], 0x00);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_lsb() {
        let mut state = state();
        state.registers.v[0x1] = 0x5;
        run(&mut state, 0x8106).unwrap();
        assert_eq!(state.registers.v[0x1], 0x2);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xy6_shr_nolsb() {
        let mut state = state();
        state.registers.v[0x1] = 0x4;
        state.registers.v[0xF] = 0x1;
        run(&mut state, 0x8106).unwrap();
        assert_eq!(state.registers.v[0x1], 0x2);
        assert_eq!(state.registers.vf(), 0x0);
    }

    #[test]
    fn test_8xy6_shr_ignores_vy() {
        let mut state = state();
        state.registers.v[0x1] = 0x8;
        state.registers.v[0x2] = 0xFF;
        run(&mut state, 0x8126).unwrap();
        assert_eq!(state.registers.v[0x1], 0x4);
    }

    #[test]
    fn test_8xy7_subn_noborrow() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x33;
        run(&mut state, 0x8127).unwrap();
        assert_eq!(state.registers.v[0x1], 0x22);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xy7_subn_borrow() {
        let mut state = state();
        state.registers.v[0x1] = 0x12;
        state.registers.v[0x2] = 0x11;
        run(&mut state, 0x8127).unwrap();
        assert_eq!(state.registers.v[0x1], 0xFF);
        assert_eq!(state.registers.vf(), 0x0);
    }

    #[test]
    fn test_8xye_shl_msb() {
        let mut state = state();
        state.registers.v[0x1] = 0xFF;
        run(&mut state, 0x810E).unwrap();
        // 0xFF * 2 = 0x01FE
        assert_eq!(state.registers.v[0x1], 0xFE);
        assert_eq!(state.registers.vf(), 0x1);
    }

    #[test]
    fn test_8xye_shl_nomsb() {
        let mut state = state();
        state.registers.v[0x1] = 0x4;
        run(&mut state, 0x810E).unwrap();
        assert_eq!(state.registers.v[0x1], 0x8);
        assert_eq!(state.registers.vf(), 0x0);
    }

    #[test]
    fn test_8xy5_into_vf_keeps_result() {
        let mut state = state();
        state.registers.v[0xF] = 0x0A;
        state.registers.v[0x2] = 0x05;
        run(&mut state, 0x8F25).unwrap();
        assert_eq!(state.registers.vf(), 0x05);
    }

    #[test]
    fn test_9xy0_sne_skips() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        run(&mut state, 0x9120).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_9xy0_sne_doesntskip() {
        let mut state = state();
        state.registers.v[0x1] = 0x11;
        state.registers.v[0x2] = 0x11;
        run(&mut state, 0x9120).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_annn_ld() {
        let mut state = state();
        run(&mut state, 0xAABC).unwrap();
        assert_eq!(state.registers.i, 0xABC);
    }

    #[test]
    fn test_bnnn_jp() {
        let mut state = state();
        state.registers.v[0x0] = 0x2;
        run(&mut state, 0xBABC).unwrap();
        assert_eq!(state.registers.pc, 0xABE);
    }

    #[test]
    fn test_cxkk_rnd_masks() {
        let mut state = state();
        // the mock generator always yields 0xAB
        run(&mut state, 0xC10F).unwrap();
        assert_eq!(state.registers.v[0x1], 0x0B);
    }

    #[test]
    fn test_dxyn_drw_draws() {
        let mut state = state();
        state.registers.v[0x0] = 0x1;
        // Draw the 0x0 glyph with a 1x 1y offset
        run(&mut state, 0xD005).unwrap();
        let frame = state.screen.frame();
        assert_eq!(frame[1][1..5], [1, 1, 1, 1]);
        assert_eq!(frame[2][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[3][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[4][1..5], [1, 0, 0, 1]);
        assert_eq!(frame[5][1..5], [1, 1, 1, 1]);
        assert_eq!(state.registers.vf(), 0x0);
        assert!(state.draw_flag);
    }

    #[test]
    fn test_dxyn_drw_collides() {
        let mut state = state();
        state.screen.draw_sprite(0, 0, &[0x80], Default::default());
        run(&mut state, 0xD001).unwrap();
        assert_eq!(state.registers.vf(), 0x1)
    }

    #[test]
    fn test_dxyn_drw_clears_stale_flag() {
        let mut state = state();
        state.registers.v[0xF] = 0x1;
        run(&mut state, 0xD011).unwrap();
        assert_eq!(state.registers.vf(), 0x0)
    }

    #[test]
    fn test_dxyn_drw_overruns_memory() {
        let mut state = state();
        state.registers.i = 0xFFE;
        assert_eq!(
            run(&mut state, 0xD005),
            Err(Fault::AddressOverrun {
                address: 0xFFE,
                len: 5
            })
        );
        assert!(!state.draw_flag);
    }

    #[test]
    fn test_ex9e_skp_skips() {
        let mut state = state();
        state.keypad.set(0xE, true);
        state.registers.v[0x1] = 0xE;
        run(&mut state, 0xE19E).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_ex9e_skp_doesntskip() {
        let mut state = state();
        run(&mut state, 0xE19E).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_ex9e_skp_only_sees_lowest_key() {
        let mut state = state();
        state.keypad.set(0x3, true);
        state.keypad.set(0x9, true);
        state.registers.v[0x5] = 0x9;
        run(&mut state, 0xE59E).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
        state.registers.v[0x5] = 0x3;
        run(&mut state, 0xE59E).unwrap();
        assert_eq!(state.registers.pc, 0x0206);
    }

    #[test]
    fn test_exa1_sknp_skips() {
        let mut state = state();
        run(&mut state, 0xE1A1).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_exa1_sknp_doesntskip() {
        let mut state = state();
        state.keypad.set(0xE, true);
        state.registers.v[0x1] = 0xE;
        run(&mut state, 0xE1A1).unwrap();
        assert_eq!(state.registers.pc, 0x0202);
    }

    #[test]
    fn test_exa1_sknp_only_sees_lowest_key() {
        let mut state = state();
        state.keypad.set(0x3, true);
        state.keypad.set(0x9, true);
        state.registers.v[0x5] = 0x9;
        run(&mut state, 0xE5A1).unwrap();
        assert_eq!(state.registers.pc, 0x0204);
    }

    #[test]
    fn test_fx07_ld() {
        let mut state = state();
        state.timers.delay = 0xF;
        run(&mut state, 0xF107).unwrap();
        assert_eq!(state.registers.v[0x1], 0xF);
    }

    #[test]
    fn test_fx0a_ld_awaits_key() {
        let mut state = state();
        run(&mut state, 0xF10A).unwrap();
        assert_eq!(state.mode, Mode::AwaitingKey { register: 0x1 });
    }

    #[test]
    fn test_fx15_ld() {
        let mut state = state();
        state.registers.v[0x1] = 0xF;
        run(&mut state, 0xF115).unwrap();
        assert_eq!(state.timers.delay, 0xF);
    }

    #[test]
    fn test_fx18_ld() {
        let mut state = state();
        state.registers.v[0x1] = 0xF;
        run(&mut state, 0xF118).unwrap();
        assert_eq!(state.timers.sound, 0xF);
    }

    #[test]
    fn test_fx1e_add() {
        let mut state = state();
        state.registers.i = 0x1;
        state.registers.v[0x1] = 0x1;
        run(&mut state, 0xF11E).unwrap();
        assert_eq!(state.registers.i, 0x2);
    }

    #[test]
    fn test_fx29_ld() {
        let mut state = state();
        state.registers.v[0x1] = 0x2;
        run(&mut state, 0xF129).unwrap();
        assert_eq!(state.registers.i, 0xA);
    }

    #[test]
    fn test_fx33_ld() {
        let mut state = state();
        // 0x7B -> 123
        state.registers.v[0x1] = 0x7B;
        state.registers.i = 0x300;
        run(&mut state, 0xF133).unwrap();
        assert_eq!(state.memory.read(0x300, 3).unwrap(), [0x1, 0x2, 0x3]);
    }

    #[test]
    fn test_fx33_ld_extremes() {
        let mut state = state();
        state.registers.i = 0x300;
        state.registers.v[0x1] = 255;
        run(&mut state, 0xF133).unwrap();
        assert_eq!(state.memory.read(0x300, 3).unwrap(), [2, 5, 5]);
        state.registers.v[0x1] = 7;
        run(&mut state, 0xF133).unwrap();
        assert_eq!(state.memory.read(0x300, 3).unwrap(), [0, 0, 7]);
    }

    #[test]
    fn test_fx55_ld_is_inclusive() {
        let mut state = state();
        state.registers.i = 0x300;
        state.registers.v[0x0..0x6].copy_from_slice(&[0x1, 0x2, 0x3, 0x4, 0x5, 0x6]);
        run(&mut state, 0xF455).unwrap();
        assert_eq!(
            state.memory.read(0x300, 6).unwrap(),
            [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]
        );
        assert_eq!(state.registers.i, 0x300);
    }

    #[test]
    fn test_fx65_ld_is_inclusive() {
        let mut state = state();
        state.registers.i = 0x300;
        state
            .memory
            .write(0x300, &[0x1, 0x2, 0x3, 0x4, 0x5, 0x6])
            .unwrap();
        run(&mut state, 0xF465).unwrap();
        assert_eq!(state.registers.v[0x0..0x6], [0x1, 0x2, 0x3, 0x4, 0x5, 0x0]);
    }

    #[test]
    fn test_fx55_ld_overruns_memory() {
        let mut state = state();
        state.registers.i = 0xFFD;
        assert!(run(&mut state, 0xF455).is_err());
        assert_eq!(state.memory.read(0xFFD, 3).unwrap(), [0, 0, 0]);
    }

    #[test]
    fn test_fx65_ld_overruns_memory() {
        let mut state = state();
        state.registers.i = 0xFFD;
        state.registers.v[0x0..0x4].copy_from_slice(&[0x9, 0x8, 0x7, 0x6]);
        assert_eq!(
            run(&mut state, 0xF365),
            Err(Fault::AddressOverrun {
                address: 0xFFD,
                len: 4
            })
        );
        assert_eq!(state.registers.v[0x0..0x4], [0x9, 0x8, 0x7, 0x6]);
    }

    #[test]
    fn test_fx33_ld_overruns_memory() {
        let mut state = state();
        state.registers.i = 0xFFE;
        state.registers.v[0x1] = 0x7B;
        assert_eq!(
            run(&mut state, 0xF133),
            Err(Fault::AddressOverrun {
                address: 0xFFE,
                len: 3
            })
        );
        assert_eq!(state.memory.read(0xFFE, 2).unwrap(), [0, 0]);
    }

    #[test]
    fn test_fx1e_add_wraps_i() {
        let mut state = state();
        state.registers.i = 0xFFFF;
        state.registers.v[0x1] = 0x2;
        run(&mut state, 0xF11E).unwrap();
        assert_eq!(state.registers.i, 0x1);

        state.registers.i = 0xFFF0;
        run(&mut state, 0xF11E).unwrap();
        assert_eq!(state.registers.i, 0xFFF2);
        assert_eq!(
            run(&mut state, 0xF065),
            Err(Fault::AddressOverrun {
                address: 0xFFF2,
                len: 1
            })
        );
    }
}
