use heapless::{consts::U16, Vec};

use crate::timer::Timer;

/// Address the program is loaded at and execution starts from
pub const PROGRAM_START: u16 = 0x200;
/// Index of the flag register
pub const VF: usize = 0xF;

/// Return address stack with a depth of 16
///
/// Overflow and underflow are silently clamped: pushing onto a full stack
/// drops the address, popping an empty stack yields `0`.
#[derive(Debug, Clone)]
pub struct Stack(Vec<u16, U16>);

impl Stack {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, addr: u16) {
        if self.0.push(addr).is_err() {
            log::trace!("stack full, dropping return address {:#05x}", addr);
        }
    }

    pub fn pop(&mut self) -> u16 {
        self.0.pop().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Registers {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub delay: Timer,
    pub sound: Timer,
}

impl Registers {
    #[inline]
    pub fn get(&self, idx: u8) -> u8 {
        self.v[(idx & 0xF) as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, value: u8) {
        self.v[(idx & 0xF) as usize] = value;
    }

    #[inline]
    pub fn set_flag(&mut self, flag: bool) {
        self.v[VF] = flag as u8;
    }
}

/// Processor state, passive apart from the stack operations
#[derive(Debug, Default, Clone)]
pub struct Cpu {
    /// Logical keys currently held, refreshed every tick
    pub keys: [bool; 16],
    /// Logical key observed for `FX0A`
    pub key: Option<u8>,
    pub halted: bool,
    pub stack: Stack,
    pub registers: Registers,
}

impl Cpu {
    /// Clean state ready to run a freshly loaded program
    pub fn reset() -> Self {
        let mut cpu = Self::default();
        cpu.registers.pc = PROGRAM_START;
        cpu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_clamps_overflow_and_underflow() {
        let mut stack = Stack::new();
        assert_eq!(stack.pop(), 0);

        for addr in 0..17u16 {
            stack.push(0x200 + addr * 2);
        }
        assert_eq!(stack.len(), 16);
        assert_eq!(stack.pop(), 0x200 + 15 * 2);

        while !stack.is_empty() {
            stack.pop();
        }
        assert_eq!(stack.pop(), 0);
    }

    #[test]
    fn reset_points_at_program() {
        let cpu = Cpu::reset();
        assert_eq!(cpu.registers.pc, PROGRAM_START);
        assert!(!cpu.halted);
        assert_eq!(cpu.key, None);
        assert!(cpu.stack.is_empty());
    }

    #[test]
    fn register_index_is_masked() {
        let mut regs = Registers::default();
        regs.set(0x1F, 0xAB);
        assert_eq!(regs.get(0xF), 0xAB);
        regs.set_flag(false);
        assert_eq!(regs.v[VF], 0);
    }
}
