//! tagrecord
//!
//! # What this crate is
//! A typed view over the ID3v2 tag of an MP3 stream: read it into a
//! [`TagRecord`], change fields through plain getters/setters, write it back.
//!
//! The byte-level work is done by other crates:
//! - `id3` parses and serializes tag frames
//! - `image` decodes and re-encodes cover art
//!
//! This crate decides which frame feeds which field and how values are
//! coerced (e.g. `TRCK = "7/14"` becomes track 7 of 14).
//!
//! # Example
//! ```no_run
//! use std::fs::File;
//!
//! let mut record = tagrecord::parse(File::open("song.mp3")?)?;
//! record.set_artist("Someone Else");
//! record.save(File::create("retagged.mp3")?)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Ownership model
//! A record owns the stream it was parsed from. `save` reads the audio
//! payload back out of it, so a record can be written to any sink without
//! the caller keeping the original around.

mod config;
mod error;
pub mod tags;
mod types;

pub use config::{CoverArtFormat, WriteConfig};
pub use error::{Result, TagError};
pub use tags::{TextField, Truncate, parse};
pub use types::{NumberPair, TagRecord};

/// Re-exported so callers can pick a tag revision without depending on `id3`.
pub use id3::Version;
