#![allow(dead_code)]

use std::{fs, path::PathBuf};

use anyhow::{Result, ensure};
use nesium_fixture::{CHR_ROM_LEN, FIXTURE_LEN, PRG_ROM_LEN};

pub const HEADER: [u8; 16] = [
    0x4E, 0x45, 0x53, 0x1A, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Per-test scratch directory under the system temp dir, recreated empty.
pub fn scratch_dir(name: &str) -> Result<PathBuf> {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = std::env::temp_dir().join(format!("nesium-fixture-{}-{name}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir)?;
    }
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Checks every byte of a fixture image: length, header, and both ramps.
pub fn check_fixture_bytes(rom: &[u8]) -> Result<()> {
    ensure!(
        rom.len() == FIXTURE_LEN,
        "expected {FIXTURE_LEN} bytes, got {}",
        rom.len()
    );
    ensure!(rom[..16] == HEADER, "header mismatch: {:02X?}", &rom[..16]);

    let prg = &rom[16..16 + PRG_ROM_LEN];
    let chr = &rom[16 + PRG_ROM_LEN..];
    ensure!(chr.len() == CHR_ROM_LEN, "CHR region is {} bytes", chr.len());

    for (region, bytes) in [("PRG", prg), ("CHR", chr)] {
        for (i, &byte) in bytes.iter().enumerate() {
            ensure!(
                byte == (i % 256) as u8,
                "{region} byte {i} is {byte:#04X}, expected {:#04X}",
                i % 256
            );
        }
    }
    Ok(())
}
