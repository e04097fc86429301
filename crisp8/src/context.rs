//! Context for accessing functionalities of platform that `Crisp8` is
//! emulated on.
//!
//! The machine keeps its own frame and sound flag for hosts that poll; the
//! context covers what the machine cannot provide by itself.

/// Trait aggregating platform functionalities
pub trait Context {
    /// Turn sound on
    ///
    /// Called by `tick` when the sound flag goes up
    fn sound_on(&mut self);
    /// Turn sound off
    ///
    /// Called by `tick` when the sound flag goes down
    fn sound_off(&mut self);
    /// Generate random 8-bit number
    ///
    /// Called by `tick` whenever requested by executing program
    fn gen_random(&mut self) -> u8;
}
