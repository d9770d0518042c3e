//! ROM path resolution: loads a cartridge image from a loose file or a
//! ZIP archive containing one.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use lumen_system::RomLoadError;

const ROM_EXTENSIONS: &[&str] = &[".gb", ".gbc", ".bin", ".rom"];

/// Load the cartridge bytes from `path`. A `.zip` archive is searched for
/// its first ROM entry; anything else is read as a raw image.
pub fn load_rom_bytes(path: &Path) -> Result<Vec<u8>, RomLoadError> {
    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
    {
        load_from_zip(path)
    } else {
        Ok(std::fs::read(path)?)
    }
}

fn load_from_zip(path: &Path) -> Result<Vec<u8>, RomLoadError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(zip_err)?;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(zip_err)?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_ascii_lowercase();
        if ROM_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            return Ok(data);
        }
    }

    Err(RomLoadError::Io(std::io::Error::other(
        "no ROM image found in archive",
    )))
}

fn zip_err(e: zip::result::ZipError) -> RomLoadError {
    RomLoadError::Io(std::io::Error::other(e))
}
