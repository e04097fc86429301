use core::fmt;

/// Sub-type of the `0x0...` instruction group, carried by the low byte
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ZeroOp {
    /// 0000, ignored
    Nop,
    /// 00E0, clear the screen
    Clear,
    /// 00EE, return from a subroutine
    Return,
    /// Any other 00NN
    Unknown(u8),
}

/// Sub-type of the `0x8XY.` instruction group, carried by the low nibble
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ArithmeticOp {
    /// 8XY0, VX = VY
    Assign,
    /// 8XY1, VX |= VY
    Or,
    /// 8XY2, VX &= VY
    And,
    /// 8XY3, VX ^= VY
    Xor,
    /// 8XY4, VX += VY, VF = carry
    Add,
    /// 8XY5, VX -= VY, VF = no borrow
    Sub,
    /// 8XY6, shift right, VF = bit shifted out
    ShiftRight,
    /// 8XY7, VX = VY - VX, VF = no borrow
    SubFrom,
    /// 8XYE, shift left, VF = bit shifted out
    ShiftLeft,
    Unknown(u8),
}

/// Sub-type of the `0xEX..` instruction group, carried by the low byte
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum KeyOp {
    /// EX9E, skip if key VX is held
    Pressed,
    /// EXA1, skip if key VX is not held
    NotPressed,
    Unknown(u8),
}

/// Sub-type of the `0xFX..` instruction group, carried by the low byte
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MiscOp {
    /// FX07
    GetDelay,
    /// FX0A
    WaitKey,
    /// FX15
    SetDelay,
    /// FX18
    SetSound,
    /// FX1E
    AddToIndex,
    /// FX29
    FontSprite,
    /// FX33
    Bcd,
    /// FX55
    Save,
    /// FX65
    Restore,
    Unknown(u8),
}

/// A decoded CHIP-8 instruction, keyed by the top nibble of the raw word
///
/// Based on [chip8 mastering](http://mattmik.com/files/chip8/mastering/chip8.html)
///
/// Decoding is total: every 16-bit word maps to exactly one `OpCode`. Sub-types that
/// have no known behaviour are kept as `Unknown` data and turn into no-ops at execution.
///
/// Examples:
/// ```
/// use crisp8::opcode::{OpCode, ArithmeticOp};
///
/// assert_eq!(OpCode::from(0x1ABC), OpCode::Jump { nnn: 0x0ABC });
/// assert_eq!(
///     OpCode::from(0x8AB4),
///     OpCode::Arithmetic { op: ArithmeticOp::Add, x: 0xA, y: 0xB },
/// );
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpCode {
    /// 00E0 / 00EE / 0000 and unknown 00NN
    Zero { op: ZeroOp },
    /// 0NNN with N != 0 in the second nibble, machine code routine (ignored)
    System { nnn: u16 },
    /// 1NNN
    Jump { nnn: u16 },
    /// 2NNN
    Call { nnn: u16 },
    /// 3XNN
    SkipEqNn { x: u8, nn: u8 },
    /// 4XNN
    SkipNeNn { x: u8, nn: u8 },
    /// 5XY0
    SkipEqVy { x: u8, y: u8 },
    /// 6XNN
    AssignNn { x: u8, nn: u8 },
    /// 7XNN
    AddNn { x: u8, nn: u8 },
    /// 8XYN
    Arithmetic { op: ArithmeticOp, x: u8, y: u8 },
    /// 9XY0
    SkipNeVy { x: u8, y: u8 },
    /// ANNN
    AssignIndex { nnn: u16 },
    /// BNNN, `x` is the high nibble of `nnn`
    JumpOffset { x: u8, nnn: u16 },
    /// CXNN
    Random { x: u8, nn: u8 },
    /// DXYN
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E / EXA1
    Key { op: KeyOp, x: u8 },
    /// FXNN
    Misc { op: MiscOp, x: u8 },
}

impl OpCode {
    fn read_first(raw: u16) -> u8 {
        (raw >> 12 & 0x000Fu16) as u8
    }

    fn read_last(raw: u16) -> u8 {
        (raw & 0x000Fu16) as u8
    }

    fn read_x(raw: u16) -> u8 {
        (raw >> 8 & 0x000Fu16) as u8
    }

    fn read_y(raw: u16) -> u8 {
        (raw >> 4 & 0x000Fu16) as u8
    }

    fn read_nn(raw: u16) -> u8 {
        (raw & 0x00FFu16) as u8
    }

    fn read_nnn(raw: u16) -> u16 {
        raw & 0x0FFFu16
    }

    pub fn decode(raw: u16) -> Self {
        let x = Self::read_x(raw);
        let y = Self::read_y(raw);
        let nn = Self::read_nn(raw);
        let nnn = Self::read_nnn(raw);
        match Self::read_first(raw) {
            0x0 if x == 0 => OpCode::Zero {
                op: match nn {
                    0x00 => ZeroOp::Nop,
                    0xE0 => ZeroOp::Clear,
                    0xEE => ZeroOp::Return,
                    other => ZeroOp::Unknown(other),
                },
            },
            0x0 => OpCode::System { nnn },
            0x1 => OpCode::Jump { nnn },
            0x2 => OpCode::Call { nnn },
            0x3 => OpCode::SkipEqNn { x, nn },
            0x4 => OpCode::SkipNeNn { x, nn },
            0x5 => OpCode::SkipEqVy { x, y },
            0x6 => OpCode::AssignNn { x, nn },
            0x7 => OpCode::AddNn { x, nn },
            0x8 => OpCode::Arithmetic {
                op: match Self::read_last(raw) {
                    0x0 => ArithmeticOp::Assign,
                    0x1 => ArithmeticOp::Or,
                    0x2 => ArithmeticOp::And,
                    0x3 => ArithmeticOp::Xor,
                    0x4 => ArithmeticOp::Add,
                    0x5 => ArithmeticOp::Sub,
                    0x6 => ArithmeticOp::ShiftRight,
                    0x7 => ArithmeticOp::SubFrom,
                    0xE => ArithmeticOp::ShiftLeft,
                    other => ArithmeticOp::Unknown(other),
                },
                x,
                y,
            },
            0x9 => OpCode::SkipNeVy { x, y },
            0xA => OpCode::AssignIndex { nnn },
            0xB => OpCode::JumpOffset { x, nnn },
            0xC => OpCode::Random { x, nn },
            0xD => OpCode::Draw {
                x,
                y,
                n: Self::read_last(raw),
            },
            0xE => OpCode::Key {
                op: match nn {
                    0x9E => KeyOp::Pressed,
                    0xA1 => KeyOp::NotPressed,
                    other => KeyOp::Unknown(other),
                },
                x,
            },
            _ => OpCode::Misc {
                op: match nn {
                    0x07 => MiscOp::GetDelay,
                    0x0A => MiscOp::WaitKey,
                    0x15 => MiscOp::SetDelay,
                    0x18 => MiscOp::SetSound,
                    0x1E => MiscOp::AddToIndex,
                    0x29 => MiscOp::FontSprite,
                    0x33 => MiscOp::Bcd,
                    0x55 => MiscOp::Save,
                    0x65 => MiscOp::Restore,
                    other => MiscOp::Unknown(other),
                },
                x,
            },
        }
    }
}

impl From<u16> for OpCode {
    fn from(raw: u16) -> Self {
        Self::decode(raw)
    }
}

/// Mnemonic form, as used in execution traces
impl fmt::Display for OpCode {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ArithmeticOp as A;
        match *self {
            OpCode::Zero { op: ZeroOp::Nop }        => write!(f, "NOP"),
            OpCode::Zero { op: ZeroOp::Clear }      => write!(f, "CLS"),
            OpCode::Zero { op: ZeroOp::Return }     => write!(f, "RET"),
            OpCode::Zero { op: ZeroOp::Unknown(b) } => write!(f, "??? 0x00{:02X}", b),
            OpCode::System { nnn }                  => write!(f, "SYS 0x{:03X}", nnn),
            OpCode::Jump { nnn }                    => write!(f, "JP 0x{:03X}", nnn),
            OpCode::Call { nnn }                    => write!(f, "CALL 0x{:03X}", nnn),
            OpCode::SkipEqNn { x, nn }              => write!(f, "SE V{:X}, 0x{:02X}", x, nn),
            OpCode::SkipNeNn { x, nn }              => write!(f, "SNE V{:X}, 0x{:02X}", x, nn),
            OpCode::SkipEqVy { x, y }               => write!(f, "SE V{:X}, V{:X}", x, y),
            OpCode::AssignNn { x, nn }              => write!(f, "LD V{:X}, 0x{:02X}", x, nn),
            OpCode::AddNn { x, nn }                 => write!(f, "ADD V{:X}, 0x{:02X}", x, nn),
            OpCode::Arithmetic { op, x, y } => match op {
                A::Assign     => write!(f, "LD V{:X}, V{:X}", x, y),
                A::Or         => write!(f, "OR V{:X}, V{:X}", x, y),
                A::And        => write!(f, "AND V{:X}, V{:X}", x, y),
                A::Xor        => write!(f, "XOR V{:X}, V{:X}", x, y),
                A::Add        => write!(f, "ADD V{:X}, V{:X}", x, y),
                A::Sub        => write!(f, "SUB V{:X}, V{:X}", x, y),
                A::ShiftRight => write!(f, "SHR V{:X}, V{:X}", x, y),
                A::SubFrom    => write!(f, "SUBN V{:X}, V{:X}", x, y),
                A::ShiftLeft  => write!(f, "SHL V{:X}, V{:X}", x, y),
                A::Unknown(n) => write!(f, "??? 0x8{:X}{:X}{:X}", x, y, n),
            },
            OpCode::SkipNeVy { x, y }               => write!(f, "SNE V{:X}, V{:X}", x, y),
            OpCode::AssignIndex { nnn }             => write!(f, "LD I, 0x{:03X}", nnn),
            OpCode::JumpOffset { x, nnn }           => write!(f, "JP V0/V{:X}, 0x{:03X}", x, nnn),
            OpCode::Random { x, nn }                => write!(f, "RND V{:X}, 0x{:02X}", x, nn),
            OpCode::Draw { x, y, n }                => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            OpCode::Key { op: KeyOp::Pressed, x }   => write!(f, "SKP V{:X}", x),
            OpCode::Key { op: KeyOp::NotPressed, x } => write!(f, "SKNP V{:X}", x),
            OpCode::Key { op: KeyOp::Unknown(b), x } => write!(f, "??? 0xE{:X}{:02X}", x, b),
            OpCode::Misc { op, x } => match op {
                MiscOp::GetDelay   => write!(f, "LD V{:X}, DT", x),
                MiscOp::WaitKey    => write!(f, "LD V{:X}, K", x),
                MiscOp::SetDelay   => write!(f, "LD DT, V{:X}", x),
                MiscOp::SetSound   => write!(f, "LD ST, V{:X}", x),
                MiscOp::AddToIndex => write!(f, "ADD I, V{:X}", x),
                MiscOp::FontSprite => write!(f, "LD F, V{:X}", x),
                MiscOp::Bcd        => write!(f, "LD B, V{:X}", x),
                MiscOp::Save       => write!(f, "LD [I], V{:X}", x),
                MiscOp::Restore    => write!(f, "LD V{:X}, [I]", x),
                MiscOp::Unknown(b) => write!(f, "??? 0xF{:X}{:02X}", x, b),
            },
        }
    }
}

/// Decode a raw big-endian instruction word
pub fn decode(raw: u16) -> OpCode {
    OpCode::decode(raw)
}
