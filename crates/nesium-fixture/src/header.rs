//! The fixed iNES header written at the front of the fixture image.
//!
//! The first 16 bytes of every `.nes` file are the *iNES header*: a magic
//! signature, the PRG/CHR bank counts, and two flag bytes that encode
//! mirroring and the mapper number. The fixture always uses the same header,
//! so it lives here as a literal [`FIXTURE_HEADER`] rather than being assembled
//! from parts. [`HeaderSummary`] decodes it into readable fields for logging.

use bitflags::bitflags;

/// Signature at offset 0: "NES" followed by the MS-DOS end-of-file marker.
pub const NES_MAGIC: &[u8; 4] = b"NES\x1A";

/// Size of the fixed iNES header in bytes.
pub const NES_HEADER_LEN: usize = 16;

/// Unit used by header byte 4.
pub const PRG_ROM_BANK_SIZE: usize = 16 * 1024;

/// Unit used by header byte 5.
pub const CHR_ROM_BANK_SIZE: usize = 8 * 1024;

/// Header of the fixture: NROM, 32 KiB PRG, 8 KiB CHR, vertical mirroring.
pub const FIXTURE_HEADER: [u8; NES_HEADER_LEN] = [
    0x4E, 0x45, 0x53, 0x1A, // magic
    0x02, // 2 * 16 KiB PRG ROM
    0x01, // 1 * 8 KiB CHR ROM
    0x01, // flags 6: vertical mirroring, no battery, no trainer, mapper low 0
    0x00, // flags 7: mapper high 0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // reserved
];

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags6: u8 {
        const MIRRORING        = 0b0000_0001;
        const BATTERY          = 0b0000_0010;
        const TRAINER          = 0b0000_0100;
        const FOUR_SCREEN      = 0b0000_1000;
        const MAPPER_LOW_MASK  = 0b1111_0000;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Flags7: u8 {
        const MAPPER_HIGH_MASK = 0b1111_0000;
    }
}

/// Layout mirroring type for the PPU nametables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirroring {
    /// Two horizontal nametables that mirror vertically.
    Horizontal,
    /// Two vertical nametables that mirror horizontally.
    Vertical,
    /// Cartridge supplies its own four nametables.
    FourScreen,
}

/// Decoded view of [`FIXTURE_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderSummary {
    /// Mapper ID (0 == NROM).
    pub mapper: u8,
    pub mirroring: Mirroring,
    pub battery_backed_ram: bool,
    pub trainer_present: bool,
    /// Amount of PRG ROM in bytes.
    pub prg_rom_size: usize,
    /// Amount of CHR ROM in bytes.
    pub chr_rom_size: usize,
}

impl HeaderSummary {
    /// Summarise the fixture header.
    pub fn fixture() -> Self {
        let flags6 = Flags6::from_bits_truncate(FIXTURE_HEADER[6]);
        let flags7 = Flags7::from_bits_truncate(FIXTURE_HEADER[7]);

        Self {
            mapper: combine_mapper(flags6, flags7),
            mirroring: resolve_mirroring(flags6),
            battery_backed_ram: flags6.contains(Flags6::BATTERY),
            trainer_present: flags6.contains(Flags6::TRAINER),
            prg_rom_size: FIXTURE_HEADER[4] as usize * PRG_ROM_BANK_SIZE,
            chr_rom_size: FIXTURE_HEADER[5] as usize * CHR_ROM_BANK_SIZE,
        }
    }
}

fn resolve_mirroring(flags6: Flags6) -> Mirroring {
    if flags6.contains(Flags6::FOUR_SCREEN) {
        Mirroring::FourScreen
    } else if flags6.contains(Flags6::MIRRORING) {
        Mirroring::Vertical
    } else {
        Mirroring::Horizontal
    }
}

fn combine_mapper(flags6: Flags6, flags7: Flags7) -> u8 {
    let lower = (flags6 & Flags6::MAPPER_LOW_MASK).bits() >> 4;
    let upper = (flags7 & Flags7::MAPPER_HIGH_MASK).bits();
    upper | lower
}
