//! Desktop host for the `crisp8` interpreter: ROM files, pacing and the
//! command line.
pub mod cli;
pub mod context;
pub mod pacer;
pub mod rom;

pub use context::HostContext;
pub use pacer::Pacer;
pub use rom::{load_path, RomError};
