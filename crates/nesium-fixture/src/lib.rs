//! Generator for a minimal iNES cartridge image.
//!
//! The image is a byte-exact test fixture for ROM loaders: the 16-byte
//! [`header::FIXTURE_HEADER`], 32 KiB of PRG ROM and 8 KiB of CHR ROM, with
//! both ROM regions filled by a repeating `0x00..=0xFF` ramp.
//!
//! - [`build`] returns the image as bytes.
//! - [`generate_to`] writes it to a path of your choosing.
//! - [`generate`] writes it to [`DEFAULT_OUTPUT_PATH`].

pub mod error;
pub mod fixture;
pub mod header;

pub use error::Error;
pub use fixture::{
    CHR_ROM_LEN, DEFAULT_OUTPUT_PATH, FIXTURE_LEN, PRG_ROM_LEN, build, generate, generate_to,
};
