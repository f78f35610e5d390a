use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    error::Error,
    header::{
        CHR_ROM_BANK_SIZE, FIXTURE_HEADER, HeaderSummary, NES_HEADER_LEN, PRG_ROM_BANK_SIZE,
    },
};

/// PRG ROM bytes following the header (two 16 KiB banks).
pub const PRG_ROM_LEN: usize = 2 * PRG_ROM_BANK_SIZE;

/// CHR ROM bytes following the PRG ROM (one 8 KiB bank).
pub const CHR_ROM_LEN: usize = CHR_ROM_BANK_SIZE;

/// Total size of the generated image.
pub const FIXTURE_LEN: usize = NES_HEADER_LEN + PRG_ROM_LEN + CHR_ROM_LEN;

/// Where [`generate`] writes, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "MMC5Dev/Tests/MMC5DevTests/test.nes";

/// `0x00..=0xFF` repeated until `len` bytes have been produced.
fn ramp(len: usize) -> impl Iterator<Item = u8> {
    (0..len).map(|i| (i % 256) as u8)
}

/// Builds the complete image in memory: header, then PRG ROM, then CHR ROM.
///
/// Each ROM region is filled with its own ramp starting at zero.
pub fn build() -> Vec<u8> {
    let mut rom = Vec::with_capacity(FIXTURE_LEN);
    rom.extend_from_slice(&FIXTURE_HEADER);
    rom.extend(ramp(PRG_ROM_LEN));
    rom.extend(ramp(CHR_ROM_LEN));
    debug_assert_eq!(rom.len(), FIXTURE_LEN);
    rom
}

/// Writes the fixture to [`DEFAULT_OUTPUT_PATH`] and returns that path.
pub fn generate() -> Result<PathBuf, Error> {
    let path = PathBuf::from(DEFAULT_OUTPUT_PATH);
    generate_to(&path)?;
    Ok(path)
}

/// Writes the fixture to `path`, creating or truncating the file.
///
/// The parent directory must already exist. A failed write may leave a
/// truncated file behind; nothing is cleaned up or retried.
pub fn generate_to(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let rom = build();
    debug!(path = %path.display(), len = rom.len(), "writing iNES fixture");

    write_all(path, &rom).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    let summary = HeaderSummary::fixture();
    info!(
        path = %path.display(),
        mapper = summary.mapper,
        mirroring = ?summary.mirroring,
        prg_rom = summary.prg_rom_size,
        chr_rom = summary.chr_rom_size,
        "wrote iNES fixture"
    );
    Ok(())
}

fn write_all(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    // The handle is closed when `file` drops, including on the error path.
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}
