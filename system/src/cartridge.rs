//! Cartridge and boot ROM loading.
//!
//! Cartridges are raw byte images mapped from address 0x0000. Bank
//! switching hardware is not modeled, so anything beyond the 64 KiB
//! address space is dropped with a warning. The boot ROM is the 256-byte
//! DMG initialization program overlaid on 0x0000-0x00FF until the CPU
//! leaves it.

use std::path::Path;

/// The boot ROM is exactly one page.
pub const BOOT_ROM_SIZE: usize = 256;

/// Largest cartridge image honored without bank switching.
pub const MAX_CARTRIDGE_SIZE: usize = 0x10000;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading ROM images.
#[derive(Debug)]
pub enum RomLoadError {
    /// Underlying I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),

    /// Boot ROM image is not exactly 256 bytes.
    BootRomSize { actual: usize },
}

impl std::fmt::Display for RomLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::BootRomSize { actual } => {
                write!(f, "boot ROM must be {BOOT_ROM_SIZE} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for RomLoadError {}

impl From<std::io::Error> for RomLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Cartridge
// ---------------------------------------------------------------------------

/// A raw cartridge image.
pub struct Cartridge {
    rom: Vec<u8>,
}

impl Cartridge {
    /// Take ownership of a raw image, truncating oversized ones.
    pub fn from_bytes(mut rom: Vec<u8>) -> Self {
        if rom.len() > MAX_CARTRIDGE_SIZE {
            log::warn!(
                "cartridge is {} bytes; truncating to {} (no MBC support)",
                rom.len(),
                MAX_CARTRIDGE_SIZE
            );
            rom.truncate(MAX_CARTRIDGE_SIZE);
        }
        Self { rom }
    }

    pub fn from_file(path: &Path) -> Result<Self, RomLoadError> {
        Ok(Self::from_bytes(std::fs::read(path)?))
    }

    /// Byte at `addr`, 0xFF past the end of the image (open bus).
    pub fn read(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub fn len(&self) -> usize {
        self.rom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rom.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Boot ROM
// ---------------------------------------------------------------------------

/// The 256-byte DMG boot program.
pub struct BootRom {
    data: [u8; BOOT_ROM_SIZE],
}

impl BootRom {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RomLoadError> {
        if bytes.len() != BOOT_ROM_SIZE {
            return Err(RomLoadError::BootRomSize {
                actual: bytes.len(),
            });
        }
        let mut data = [0; BOOT_ROM_SIZE];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    pub fn from_file(path: &Path) -> Result<Self, RomLoadError> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    pub fn data(&self) -> &[u8; BOOT_ROM_SIZE] {
        &self.data
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Cartridge -----------------------------------------------------------

    #[test]
    fn cartridge_reads_back_image() {
        let cart = Cartridge::from_bytes(vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(cart.read(0x0000), 0xDE);
        assert_eq!(cart.read(0x0003), 0xEF);
    }

    #[test]
    fn cartridge_open_bus_past_end() {
        let cart = Cartridge::from_bytes(vec![0x00; 0x100]);
        assert_eq!(cart.read(0x0100), 0xFF);
        assert_eq!(cart.read(0x7FFF), 0xFF);
    }

    #[test]
    fn oversized_cartridge_is_truncated() {
        let mut image = vec![0x11; MAX_CARTRIDGE_SIZE];
        image.extend_from_slice(&[0x22; 0x4000]);
        let cart = Cartridge::from_bytes(image);
        assert_eq!(cart.len(), MAX_CARTRIDGE_SIZE);
        assert_eq!(cart.read(0xFFFF), 0x11);
    }

    #[test]
    fn empty_cartridge_is_accepted() {
        // Missing data reads as open bus rather than failing the load
        let cart = Cartridge::from_bytes(Vec::new());
        assert!(cart.is_empty());
        assert_eq!(cart.read(0x0000), 0xFF);
    }

    // -- BootRom -------------------------------------------------------------

    #[test]
    fn boot_rom_accepts_exact_size() {
        let boot = BootRom::from_bytes(&[0xAB; BOOT_ROM_SIZE]).unwrap();
        assert_eq!(boot.data()[0], 0xAB);
        assert_eq!(boot.data()[255], 0xAB);
    }

    #[test]
    fn boot_rom_rejects_short_image() {
        let result = BootRom::from_bytes(&[0x00; 255]);
        assert!(matches!(
            result,
            Err(RomLoadError::BootRomSize { actual: 255 })
        ));
    }

    #[test]
    fn boot_rom_rejects_long_image() {
        let result = BootRom::from_bytes(&[0x00; 257]);
        assert!(matches!(
            result,
            Err(RomLoadError::BootRomSize { actual: 257 })
        ));
    }
}
