//! Loads a flat Apple II system ROM image from disk. The image format is
//! just raw bytes -- no header, no bank layout -- so this is a thin wrapper
//! around a file read, but it keeps the crate's only `std::io`-touching
//! surface out of the CPU core.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::constants::ROM_SIZE;

#[derive(Debug, thiserror::Error)]
pub enum RomError {
    #[error("failed to read ROM image: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads up to `ROM_SIZE` bytes from `path`. Short files are accepted: the
/// caller gets back exactly as many bytes as were read, and `Bus::load_rom`
/// zero-pads the remainder. A missing file is tolerated the same way --
/// this mirrors `reinette-II.c`, where a failed `fopen` just skips the
/// `fread` and boots with a zeroed ROM array -- so a missing ROM yields an
/// empty image here, not an error. Only genuine I/O failures (permission
/// denied, path is a directory, etc.) surface as `RomError::Io`.
pub fn load_rom_image(path: &Path) -> Result<Vec<u8>, RomError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::warn!(
                "ROM image not found at {}, booting with a zeroed ROM",
                path.display()
            );
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    let mut bytes = Vec::with_capacity(ROM_SIZE);
    file.take(ROM_SIZE as u64).read_to_end(&mut bytes)?;
    log::debug!("loaded {} ROM bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    struct ScratchFile {
        path: std::path::PathBuf,
    }

    impl ScratchFile {
        fn create(bytes: &[u8]) -> Self {
            let n = COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = std::env::temp_dir();
            path.push(format!("apple2-6502-test-{}-{}.rom", std::process::id(), n));
            let mut file = File::create(&path).unwrap();
            file.write_all(bytes).unwrap();
            ScratchFile { path }
        }
    }

    impl Drop for ScratchFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    #[test]
    fn loads_short_file_without_error() {
        let scratch = ScratchFile::create(&[0xAA, 0xBB, 0xCC]);
        let bytes = load_rom_image(&scratch.path).unwrap();
        assert_eq!(bytes, vec![0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn truncates_images_longer_than_rom_size() {
        let scratch = ScratchFile::create(&[0x42; ROM_SIZE + 100]);
        let bytes = load_rom_image(&scratch.path).unwrap();
        assert_eq!(bytes.len(), ROM_SIZE);
    }

    #[test]
    fn missing_file_boots_with_an_empty_image() {
        let bytes = load_rom_image(Path::new("/nonexistent/does-not-exist.rom")).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn path_that_is_a_directory_is_an_error() {
        let result = load_rom_image(&std::env::temp_dir());
        assert!(result.is_err());
    }
}
