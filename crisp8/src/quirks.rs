//! Compatibility switches for instructions whose behaviour diverged between
//! historical CHIP-8 platforms.
//!
//! Settings belong to the machine rather than to a program, so they survive
//! reloading a ROM.

/// The five behavioural toggles
///
/// `Default` matches the most common modern interpretation with clipping on.
///
/// Examples:
/// ```
/// use crisp8::Quirks;
///
/// let quirks = Quirks { shift_source_vy: true, ..Quirks::default() };
/// assert!(quirks.clipping);
/// assert!(!quirks.index_increment);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Quirks {
    /// 8XY6/8XYE shift VY into VX, taking the flag bit from VY
    pub shift_source_vy: bool,
    /// BNNN jumps to NNN + VX, where X is the high nibble of NNN, instead of NNN + V0
    pub jump_offset_vx: bool,
    /// FX55/FX65 leave I pointing past the last transferred register
    pub index_increment: bool,
    /// DXYN drops pixels beyond the screen edge instead of wrapping them around
    pub clipping: bool,
    /// Use the alternate host keyboard layout
    pub alternate_keypad: bool,
}

impl Default for Quirks {
    fn default() -> Self {
        Self {
            shift_source_vy: false,
            jump_offset_vx: false,
            index_increment: false,
            clipping: true,
            alternate_keypad: false,
        }
    }
}
