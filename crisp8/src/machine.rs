use core::convert::Infallible;
use core::fmt;

use crate::context::Context;
use crate::cpu::{Cpu, PROGRAM_START};
use crate::frame::{Frame, FrameView, HEIGHT, WIDTH};
use crate::keypad::{host_key, logical_key, Keyboard};
use crate::opcode::{ArithmeticOp, KeyOp, MiscOp, OpCode, ZeroOp};
use crate::quirks::Quirks;
use crate::timer::TimerState;

pub const MEMORY_SIZE: usize = 4096;
const ADDR_MASK: u16 = 0x0FFF;
/// Largest program that fits between `PROGRAM_START` and the end of memory
pub const MAX_PROGRAM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;
pub const FONT_START: u16 = 0x50;
/// Executed instructions per timer decrement
pub const TIMER_DIVISOR: u8 = 9;

#[rustfmt::skip]
pub const FONT: [u8; 80] = [
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

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Program does not fit in memory above `PROGRAM_START`
    TooLarge { len: usize },
}

impl LoadError {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadError::TooLarge { .. } => "Program too large",
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::TooLarge { len } => write!(
                f,
                "program of {} bytes exceeds the {} bytes available",
                len, MAX_PROGRAM_SIZE
            ),
        }
    }
}

/// Progress of the blocking `FX0A` instruction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum KeyWait {
    Idle,
    /// Key seen down, instruction completes once it goes up
    AwaitingRelease(u8),
    /// Key went up, next `FX0A` execution stores it
    Released(u8),
}

pub struct Crisp8<C: Context + Sized> {
    ctx: C,
    memory: [u8; MEMORY_SIZE],
    cpu: Cpu,
    frame: Frame,
    quirks: Quirks,
    key_wait: KeyWait,
    tick: u8,
    play_sound: bool,
}

impl<C: Context + Sized> Crisp8<C> {
    /// Blank machine, halted until a program is loaded
    pub fn new(ctx: C) -> Self {
        let mut cpu = Cpu::default();
        cpu.halted = true;
        Self {
            ctx,
            memory: [0; MEMORY_SIZE],
            cpu,
            frame: Frame::new(),
            quirks: Quirks::default(),
            key_wait: KeyWait::Idle,
            tick: 0,
            play_sound: false,
        }
    }

    /// Wipe memory, frame and processor state, leaving the machine halted
    ///
    /// Quirks are kept.
    pub fn clear(&mut self) {
        self.memory = [0; MEMORY_SIZE];
        self.frame.clear();
        self.cpu = Cpu::reset();
        self.cpu.halted = true;
        self.key_wait = KeyWait::Idle;
        self.tick = 0;
        self.refresh_sound();
    }

    /// Load program to memory from 0x200 (_start address) along with the font set
    ///
    /// The machine is cleared before the program is validated, so a rejected
    /// program still leaves a blank, halted machine behind.
    pub fn load(&mut self, prog: &[u8]) -> Result<(), LoadError> {
        self.clear();

        if prog.len() > MAX_PROGRAM_SIZE {
            log::warn!("rejecting program of {} bytes", prog.len());
            return Err(LoadError::TooLarge { len: prog.len() });
        }

        let font = FONT_START as usize;
        self.memory[font..font + FONT.len()].copy_from_slice(&FONT);
        let start = PROGRAM_START as usize;
        self.memory[start..start + prog.len()].copy_from_slice(prog);

        self.cpu = Cpu::reset();
        log::debug!("loaded program of {} bytes", prog.len());
        Ok(())
    }

    /// Run a single logical tick
    ///
    /// Refreshes key state from `keyboard`, then executes one instruction unless
    /// the machine is halted. Returns `WouldBlock` when halted or while `FX0A`
    /// is still waiting for a key to be pressed and released.
    pub fn tick(&mut self, keyboard: &Keyboard) -> nb::Result<(), Infallible> {
        self.update_keys(keyboard);

        if self.cpu.halted {
            return Err(nb::Error::WouldBlock);
        }

        let pc = self.cpu.registers.pc;
        let opcode = OpCode::from(self.fetch());
        log::trace!("{:#05x}: {}", pc, opcode);
        let result = self.execute(opcode);
        self.tick_timers();
        result
    }

    pub fn frame(&self) -> FrameView<'_> {
        self.frame.view()
    }

    pub fn should_play_sound(&self) -> bool {
        self.play_sound
    }

    pub fn quirks(&self) -> Quirks {
        self.quirks
    }

    pub fn set_quirks(&mut self, quirks: Quirks) {
        self.quirks = quirks;
    }

    pub fn is_halted(&self) -> bool {
        self.cpu.halted
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn memory(&self) -> &[u8] {
        &self.memory
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    fn update_keys(&mut self, keyboard: &Keyboard) {
        let alternate = self.quirks.alternate_keypad;
        match self.key_wait {
            KeyWait::AwaitingRelease(key) => {
                if keyboard.held_key().is_none() {
                    self.key_wait = KeyWait::Released(key);
                }
            }
            _ => self.cpu.key = keyboard.held_key().map(|k| logical_key(k, alternate)),
        }

        self.cpu
            .keys
            .iter_mut()
            .enumerate()
            .for_each(|(logical, held)| *held = keyboard.is_held(host_key(logical as u8, alternate)));
    }

    fn fetch(&mut self) -> u16 {
        let pc = self.cpu.registers.pc & ADDR_MASK;
        let raw = u16::from_be_bytes([self.read(pc), self.read(pc + 1)]);
        self.cpu.registers.pc = (pc + 2) & ADDR_MASK;
        raw
    }

    fn tick_timers(&mut self) {
        self.tick += 1;
        if self.tick < TIMER_DIVISOR {
            return;
        }
        self.tick = 0;

        self.cpu.registers.delay.decrement();
        if self.cpu.registers.sound.decrement() == TimerState::Finished {
            log::trace!("sound timer finished");
        }
        self.refresh_sound();
    }

    fn refresh_sound(&mut self) {
        let playing = self.cpu.registers.sound.is_active();
        if playing == self.play_sound {
            return;
        }
        self.play_sound = playing;
        if playing {
            self.ctx.sound_on();
        } else {
            self.ctx.sound_off();
        }
    }

    #[inline]
    fn read(&self, addr: u16) -> u8 {
        self.memory[(addr & ADDR_MASK) as usize]
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        self.memory[(addr & ADDR_MASK) as usize] = value;
    }

    #[inline]
    fn pc_increment(&mut self) {
        self.cpu.registers.pc = (self.cpu.registers.pc + 2) & ADDR_MASK;
    }

    #[inline]
    fn pc_rewind(&mut self) {
        self.cpu.registers.pc = self.cpu.registers.pc.wrapping_sub(2) & ADDR_MASK;
    }
}

// OpCodes impls
impl<C: Context + Sized> Crisp8<C> {
    #[rustfmt::skip]
    fn execute(&mut self, opcode: OpCode) -> nb::Result<(), Infallible> {
        match opcode {
            OpCode::Zero { op }                      => self.exec_zero(op),
            OpCode::System { nnn }                   => self.exec_ml_subroutine_at(nnn),
            OpCode::Jump { nnn }                     => self.jump_to(nnn),
            OpCode::Call { nnn }                     => self.exec_subroutine_at(nnn),
            OpCode::SkipEqNn { x, nn }               => self.skip_if_vx_eq_nn(x, nn),
            OpCode::SkipNeNn { x, nn }               => self.skip_if_vx_ne_nn(x, nn),
            OpCode::SkipEqVy { x, y }                => self.skip_if_vx_eq_vy(x, y),
            OpCode::AssignNn { x, nn }               => self.assign_vx_nn(x, nn),
            OpCode::AddNn { x, nn }                  => self.assign_add_vx_nn(x, nn),
            OpCode::Arithmetic { op, x, y }          => self.exec_arithmetic(op, x, y),
            OpCode::SkipNeVy { x, y }                => self.skip_if_vx_ne_vy(x, y),
            OpCode::AssignIndex { nnn }              => self.assign_i_nnn(nnn),
            OpCode::JumpOffset { x, nnn }            => self.jump_to_nnn_add_offset(x, nnn),
            OpCode::Random { x, nn }                 => self.assign_vx_random_and_nn(x, nn),
            OpCode::Draw { x, y, n }                 => self.draw_n_at_vx_vy(x, y, n),
            OpCode::Key { op, x }                    => self.exec_key(op, x),
            OpCode::Misc { op, x }                   => return self.exec_misc(op, x),
        }
        Ok(())
    }

    fn exec_zero(&mut self, op: ZeroOp) {
        match op {
            ZeroOp::Nop => {}
            ZeroOp::Clear => self.clear_screen(),
            ZeroOp::Return => self.subroutine_return(),
            ZeroOp::Unknown(code) => log::warn!("[ZERO] Unknown instruction {:#04x}", code),
        }
    }

    #[rustfmt::skip]
    fn exec_arithmetic(&mut self, op: ArithmeticOp, x: u8, y: u8) {
        match op {
            ArithmeticOp::Assign     => self.assign_vx_vy(x, y),
            ArithmeticOp::Or         => self.assign_or_vx_vy(x, y),
            ArithmeticOp::And        => self.assign_and_vx_vy(x, y),
            ArithmeticOp::Xor        => self.assign_xor_vx_vy(x, y),
            ArithmeticOp::Add        => self.assign_add_vx_vy(x, y),
            ArithmeticOp::Sub        => self.assign_sub_vx_vy(x, y),
            ArithmeticOp::ShiftRight => self.assign_vx_shifted_r(x, y),
            ArithmeticOp::SubFrom    => self.assign_vx_vy_sub_vx(x, y),
            ArithmeticOp::ShiftLeft  => self.assign_vx_shifted_l(x, y),
            ArithmeticOp::Unknown(code) => log::warn!("[ARITHMETIC] Unknown instruction {:#04x}", code),
        }
    }

    fn exec_key(&mut self, op: KeyOp, x: u8) {
        match op {
            KeyOp::Pressed => self.skip_if_vx_in_keys(x),
            KeyOp::NotPressed => self.skip_if_vx_not_in_keys(x),
            KeyOp::Unknown(code) => log::warn!("[KEY] Unknown instruction {:#04x}", code),
        }
    }

    #[rustfmt::skip]
    fn exec_misc(&mut self, op: MiscOp, x: u8) -> nb::Result<(), Infallible> {
        match op {
            MiscOp::GetDelay   => self.assign_vx_delay_t(x),
            MiscOp::WaitKey    => return self.assign_vx_wait_for_key(x),
            MiscOp::SetDelay   => self.assign_delay_t_vx(x),
            MiscOp::SetSound   => self.assign_sound_t_vx(x),
            MiscOp::AddToIndex => self.assign_add_i_vx(x),
            MiscOp::FontSprite => self.assign_i_addr_of_sprite_vx(x),
            MiscOp::Bcd        => self.assign_mem_at_i_bcd_of_vx(x),
            MiscOp::Save       => self.assign_mem_at_i_v0_to_vx(x),
            MiscOp::Restore    => self.assign_v0_to_vx_mem_at_i(x),
            MiscOp::Unknown(code) => log::warn!("[MISC] Unknown instruction {:#04x}", code),
        }
        Ok(())
    }

    /// Execute machine language subroutine at address NNN
    /// 0NNN
    fn exec_ml_subroutine_at(&mut self, nnn: u16) {
        log::trace!("ignoring machine routine at {:#05x}", nnn);
    }

    /// Clear the screen
    /// 00E0
    fn clear_screen(&mut self) {
        self.frame.clear();
    }

    /// Return from a subroutine, an empty stack returns to 0x000
    /// 00EE
    fn subroutine_return(&mut self) {
        self.cpu.registers.pc = self.cpu.stack.pop();
    }

    /// Jump to address NNN
    /// 1NNN
    fn jump_to(&mut self, nnn: u16) {
        self.cpu.registers.pc = nnn;
    }

    /// Execute subroutine starting at address NNN, the return address is dropped
    /// when the stack is full
    /// 2NNN
    fn exec_subroutine_at(&mut self, nnn: u16) {
        self.cpu.stack.push(self.cpu.registers.pc);
        self.cpu.registers.pc = nnn;
    }

    /// Skip the following instruction if the value of register VX equals NN
    /// 3XNN
    fn skip_if_vx_eq_nn(&mut self, x: u8, nn: u8) {
        if self.cpu.registers.get(x) == nn {
            self.pc_increment();
        }
    }

    /// Skip the following instruction if the value of register VX is not equal to NN
    /// 4XNN
    fn skip_if_vx_ne_nn(&mut self, x: u8, nn: u8) {
        if self.cpu.registers.get(x) != nn {
            self.pc_increment();
        }
    }

    /// Skip the following instruction if the value of register VX is equal to the value of register VY
    /// 5XY0
    fn skip_if_vx_eq_vy(&mut self, x: u8, y: u8) {
        if self.cpu.registers.get(x) == self.cpu.registers.get(y) {
            self.pc_increment();
        }
    }

    /// Store number NN in register VX
    /// 6XNN
    fn assign_vx_nn(&mut self, x: u8, nn: u8) {
        self.cpu.registers.set(x, nn);
    }

    /// Add the value NN to register VX, VF is left alone
    /// 7XNN
    fn assign_add_vx_nn(&mut self, x: u8, nn: u8) {
        let value = self.cpu.registers.get(x).wrapping_add(nn);
        self.cpu.registers.set(x, value);
    }

    /// 8XY0
    fn assign_vx_vy(&mut self, x: u8, y: u8) {
        let value = self.cpu.registers.get(y);
        self.cpu.registers.set(x, value);
    }

    /// 8XY1
    fn assign_or_vx_vy(&mut self, x: u8, y: u8) {
        let value = self.cpu.registers.get(x) | self.cpu.registers.get(y);
        self.cpu.registers.set(x, value);
    }

    /// 8XY2
    fn assign_and_vx_vy(&mut self, x: u8, y: u8) {
        let value = self.cpu.registers.get(x) & self.cpu.registers.get(y);
        self.cpu.registers.set(x, value);
    }

    /// 8XY3
    fn assign_xor_vx_vy(&mut self, x: u8, y: u8) {
        let value = self.cpu.registers.get(x) ^ self.cpu.registers.get(y);
        self.cpu.registers.set(x, value);
    }

    /// Add the value of register VY to register VX, Set VF to 01 if a carry occurs, Set VF to 00 if a carry does not occur
    /// 8XY4
    fn assign_add_vx_vy(&mut self, x: u8, y: u8) {
        let (value, carry) = self.cpu.registers.get(x).overflowing_add(self.cpu.registers.get(y));
        self.cpu.registers.set(x, value);
        self.cpu.registers.set_flag(carry);
    }

    /// Subtract the value of register VY from register VX, Set VF to 00 if a borrow occurs, Set VF to 01 if a borrow does not occur
    /// 8XY5
    fn assign_sub_vx_vy(&mut self, x: u8, y: u8) {
        let (value, borrow) = self.cpu.registers.get(x).overflowing_sub(self.cpu.registers.get(y));
        self.cpu.registers.set(x, value);
        self.cpu.registers.set_flag(!borrow);
    }

    /// Shift the source register right one bit into VX, VF gets the bit shifted out
    /// 8XY6
    fn assign_vx_shifted_r(&mut self, x: u8, y: u8) {
        let src = self.shift_source(x, y);
        self.cpu.registers.set(x, src >> 1);
        self.cpu.registers.set_flag(src & 0x01 != 0);
    }

    /// Set register VX to the value of VY minus VX, Set VF to 00 if a borrow occurs, Set VF to 01 if a borrow does not occur
    /// 8XY7
    fn assign_vx_vy_sub_vx(&mut self, x: u8, y: u8) {
        let (value, borrow) = self.cpu.registers.get(y).overflowing_sub(self.cpu.registers.get(x));
        self.cpu.registers.set(x, value);
        self.cpu.registers.set_flag(!borrow);
    }

    /// Shift the source register left one bit into VX, VF gets the bit shifted out
    /// 8XYE
    fn assign_vx_shifted_l(&mut self, x: u8, y: u8) {
        let src = self.shift_source(x, y);
        self.cpu.registers.set(x, src << 1);
        self.cpu.registers.set_flag(src & 0x80 != 0);
    }

    fn shift_source(&self, x: u8, y: u8) -> u8 {
        if self.quirks.shift_source_vy {
            self.cpu.registers.get(y)
        } else {
            self.cpu.registers.get(x)
        }
    }

    /// Skip the following instruction if the value of register VX is not equal to the value of register VY
    /// 9XY0
    fn skip_if_vx_ne_vy(&mut self, x: u8, y: u8) {
        if self.cpu.registers.get(x) != self.cpu.registers.get(y) {
            self.pc_increment();
        }
    }

    /// Store memory address NNN in register I
    /// ANNN
    fn assign_i_nnn(&mut self, nnn: u16) {
        self.cpu.registers.i = nnn;
    }

    /// Jump to address NNN + V0, or NNN + VX with `jump_offset_vx`
    /// BNNN
    fn jump_to_nnn_add_offset(&mut self, x: u8, nnn: u16) {
        let offset = if self.quirks.jump_offset_vx {
            self.cpu.registers.get(x)
        } else {
            self.cpu.registers.get(0)
        };
        self.cpu.registers.pc = (nnn + offset as u16) & ADDR_MASK;
    }

    /// Set VX to a random number with a mask of NN
    /// CXNN
    fn assign_vx_random_and_nn(&mut self, x: u8, nn: u8) {
        let value = self.ctx.gen_random() & nn;
        self.cpu.registers.set(x, value);
    }

    /// Draw a sprite at position VX, VY with N bytes of sprite data starting at the address stored in I,
    /// Set VF to 01 if any set pixels are changed to unset, and 00 otherwise
    /// DXYN
    fn draw_n_at_vx_vy(&mut self, x: u8, y: u8, n: u8) {
        let x0 = self.cpu.registers.get(x) as usize % WIDTH;
        let y0 = self.cpu.registers.get(y) as usize % HEIGHT;
        let clipping = self.quirks.clipping;
        let i = self.cpu.registers.i;
        self.cpu.registers.set_flag(false);

        let mut collision = false;
        for row in 0..n as usize {
            let sprite = self.read(i.wrapping_add(row as u16));
            for col in 0..8usize {
                let (mut px, mut py) = (x0 + col, y0 + row);
                if clipping {
                    if px >= WIDTH || py >= HEIGHT {
                        break;
                    }
                } else {
                    px %= WIDTH;
                    py %= HEIGHT;
                }
                if sprite & (0x80 >> col) == 0 {
                    continue;
                }
                match self.frame.xor_bit(px, py, true) {
                    Ok(was_set) => collision |= was_set,
                    Err(e) => debug_assert!(false, "{} at ({}, {})", e, px, py),
                }
            }
        }
        self.cpu.registers.set_flag(collision);
    }

    /// Skip the following instruction if the key corresponding to the hex value currently stored in register VX is pressed
    /// EX9E
    fn skip_if_vx_in_keys(&mut self, x: u8) {
        if self.cpu.keys[(self.cpu.registers.get(x) & 0xF) as usize] {
            self.pc_increment();
        }
    }

    /// Skip the following instruction if the key corresponding to the hex value currently stored in register VX is not pressed
    /// EXA1
    fn skip_if_vx_not_in_keys(&mut self, x: u8) {
        if !self.cpu.keys[(self.cpu.registers.get(x) & 0xF) as usize] {
            self.pc_increment();
        }
    }

    /// Store the current value of the delay timer in register VX
    /// FX07
    fn assign_vx_delay_t(&mut self, x: u8) {
        let value = self.cpu.registers.delay.load();
        self.cpu.registers.set(x, value);
    }

    /// Wait for a key to be pressed and released, then store it in register VX
    ///
    /// Execution doesn't block: the instruction rewinds pc so it is fetched again
    /// on the next tick until the wait completes.
    /// FX0A
    fn assign_vx_wait_for_key(&mut self, x: u8) -> nb::Result<(), Infallible> {
        match (self.key_wait, self.cpu.key) {
            (KeyWait::Released(key), _) => {
                self.cpu.registers.set(x, key);
                self.key_wait = KeyWait::Idle;
                return Ok(());
            }
            (KeyWait::Idle, Some(key)) => self.key_wait = KeyWait::AwaitingRelease(key),
            _ => {}
        }
        self.pc_rewind();
        Err(nb::Error::WouldBlock)
    }

    /// Set the delay timer to the value of register VX
    /// FX15
    fn assign_delay_t_vx(&mut self, x: u8) {
        let value = self.cpu.registers.get(x);
        self.cpu.registers.delay.store(value);
    }

    /// Set the sound timer to the value of register VX
    /// FX18
    fn assign_sound_t_vx(&mut self, x: u8) {
        let value = self.cpu.registers.get(x);
        self.cpu.registers.sound.store(value);
        self.refresh_sound();
    }

    /// Add the value stored in register VX to register I, VF is set when I leaves the address space
    /// FX1E
    fn assign_add_i_vx(&mut self, x: u8) {
        let i = self.cpu.registers.i.wrapping_add(self.cpu.registers.get(x) as u16);
        self.cpu.registers.i = i;
        if i > ADDR_MASK {
            // Spacefight 2091! depends on this
            self.cpu.registers.set_flag(true);
        }
    }

    /// Set I to the memory address of the sprite data corresponding to the hexadecimal digit stored in register VX
    /// FX29
    fn assign_i_addr_of_sprite_vx(&mut self, x: u8) {
        let digit = (self.cpu.registers.get(x) & 0xF) as u16;
        self.cpu.registers.i = FONT_START + digit * 5;
    }

    /// Store the binary-coded decimal equivalent of the value stored in register VX at addresses I, I+1, and I+2
    /// FX33
    fn assign_mem_at_i_bcd_of_vx(&mut self, x: u8) {
        let value = self.cpu.registers.get(x);
        let i = self.cpu.registers.i;
        self.write(i, value / 100);
        self.write(i.wrapping_add(1), (value % 100) / 10);
        self.write(i.wrapping_add(2), value % 10);
    }

    /// Store the values of registers V0 to VX inclusive in memory starting at address I
    /// FX55
    fn assign_mem_at_i_v0_to_vx(&mut self, x: u8) {
        let i = self.cpu.registers.i;
        for idx in 0..=x {
            let value = self.cpu.registers.get(idx);
            self.write(i.wrapping_add(idx as u16), value);
        }
        self.advance_index(x);
    }

    /// Fill registers V0 to VX inclusive with the values stored in memory starting at address I
    /// FX65
    fn assign_v0_to_vx_mem_at_i(&mut self, x: u8) {
        let i = self.cpu.registers.i;
        for idx in 0..=x {
            let value = self.read(i.wrapping_add(idx as u16));
            self.cpu.registers.set(idx, value);
        }
        self.advance_index(x);
    }

    fn advance_index(&mut self, x: u8) {
        if self.quirks.index_increment {
            self.cpu.registers.i = self.cpu.registers.i.wrapping_add(x as u16 + 1);
        }
    }
}
