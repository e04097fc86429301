use std::fs;
use std::io;
use std::path::Path;

use crisp8::{Context, Crisp8, LoadError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RomError {
    #[error("cannot read rom: {0}")]
    Io(#[from] io::Error),
    #[error("cannot load rom: {0}")]
    Load(#[from] LoadError),
}

/// Read a ROM file and load it, returns the program size
///
/// Like [`Crisp8::load`], the machine is cleared even when the file can't be
/// read.
pub fn load_path<C, P>(chip: &mut Crisp8<C>, path: P) -> Result<usize, RomError>
where
    C: Context,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let prog = match fs::read(path) {
        Ok(prog) => prog,
        Err(e) => {
            chip.clear();
            log::error!("failed reading {}: {}", path.display(), e);
            return Err(e.into());
        }
    };
    chip.load(&prog)?;
    log::info!("loaded {} ({} bytes)", path.display(), prog.len());
    Ok(prog.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::HostContext;
    use std::error::Error as _;
    use std::path::PathBuf;

    fn temp_rom(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("chip8-{}-{}.ch8", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn dirty_machine() -> Crisp8<HostContext> {
        let mut chip = Crisp8::new(HostContext::with_seed(0));
        chip.load(&[0x12, 0x00]).unwrap();
        chip
    }

    #[test]
    fn loads_file() {
        let path = temp_rom("ok", &[0x00, 0xE0, 0x12, 0x02]);
        let mut chip = Crisp8::new(HostContext::with_seed(0));
        assert_eq!(load_path(&mut chip, &path).unwrap(), 4);
        assert!(!chip.is_halted());
        assert_eq!(&chip.memory()[0x200..0x204], &[0x00, 0xE0, 0x12, 0x02]);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_clears_machine() {
        let mut chip = dirty_machine();
        let path = std::env::temp_dir().join("chip8-definitely-missing.ch8");
        let err = load_path(&mut chip, &path).unwrap_err();
        assert!(matches!(err, RomError::Io(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cannot read rom: "));
        assert!(chip.is_halted());
        assert!(chip.memory().iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_file() {
        let path = temp_rom("big", &[0xAA; 3585]);
        let mut chip = dirty_machine();
        let err = load_path(&mut chip, &path).unwrap_err();
        assert!(matches!(err, RomError::Load(LoadError::TooLarge { len: 3585 })));
        assert_eq!(
            err.to_string(),
            "cannot load rom: program of 3585 bytes exceeds the 3584 bytes available"
        );
        assert!(err.source().is_some());
        assert!(chip.is_halted());
        fs::remove_file(path).unwrap();
    }
}
