//! CHIP-8 interpreter core
//!
//! The machine is driven one instruction at a time through [`Crisp8::tick`];
//! the host owns pacing, input collection and presentation. Randomness and
//! sound output are reached through the [`Context`] trait.
#![no_std]
#[cfg(feature = "std")]
extern crate std;

pub mod builder;
pub mod context;
pub mod cpu;
pub mod frame;
pub mod keypad;
pub mod machine;
pub mod opcode;
pub mod quirks;
pub mod timer;
pub mod utils;

pub use builder::Builder;
pub use context::Context;
pub use frame::{Frame, FrameView};
pub use keypad::{HostKey, Keyboard};
pub use machine::{Crisp8, LoadError};
pub use opcode::OpCode;
pub use quirks::Quirks;

#[cfg(feature = "embedded-graphics")]
pub use embedded_graphics;
