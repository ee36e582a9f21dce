//! tags/mod.rs
//!
//! ID3 tag read/write.
//! Public API:
//! - [`parse`] reads a stream into a [`TagRecord`](crate::TagRecord).
//! - [`TagRecord::save`](crate::TagRecord::save) writes it back out.
//! - [`TextField`] lists the text fields and their frames.

mod art;
pub(crate) mod fields;
mod read;
mod util;
mod write;

pub use fields::TextField;
pub use read::parse;
pub use write::Truncate;
