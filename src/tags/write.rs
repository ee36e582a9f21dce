//! Write a `TagRecord` back out as an ID3-tagged stream.
//!
//! Output layout: freshly encoded tag, then the source's audio payload
//! (everything after the source's own tag) copied byte for byte.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use id3::{Tag, TagLike};
use tracing::trace;

use super::art::encode_cover_art;
use super::fields::{BPM_FRAME, DISC_FRAME, TRACK_FRAME, TextField, YEAR_FRAME};
use super::util::format_number_pair;
use crate::error::{Result, TagError};
use crate::types::{NumberPair, TagRecord};

/// Streams that can be cut short after being overwritten.
pub trait Truncate {
    fn truncate(&mut self, len: u64) -> io::Result<()>;
}

impl Truncate for File {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }
}

impl Truncate for Cursor<Vec<u8>> {
    fn truncate(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len).map_err(io::Error::other)?;
        self.get_mut().truncate(len);
        Ok(())
    }
}

// Helper: set a plain text frame, or leave it out when empty
fn set_text_opt(tag: &mut Tag, id: &str, value: &str) {
    if !value.is_empty() {
        tag.set_text(id, value);
    }
}

// Helper: zero means unset
fn set_number(tag: &mut Tag, id: &str, value: u32) {
    if value != 0 {
        tag.set_text(id, value.to_string());
    }
}

// Helper: write TPOS/TRCK as "n" or "n/total"
fn set_number_pair(tag: &mut Tag, id: &str, pair: NumberPair) {
    if let Some(text) = format_number_pair(pair) {
        tag.set_text(id, text);
    }
}

impl<R> TagRecord<R> {
    /// Assemble the tag that `save` writes.
    pub(crate) fn build_tag(&self) -> Result<Tag> {
        let mut tag = self.passthrough.clone();

        for field in TextField::ALL {
            set_text_opt(&mut tag, field.frame_id(), self.text(field));
        }
        set_number(&mut tag, YEAR_FRAME, self.year);
        set_number(&mut tag, BPM_FRAME, self.bpm);
        set_number_pair(&mut tag, DISC_FRAME, self.disc);
        set_number_pair(&mut tag, TRACK_FRAME, self.track);

        if let Some(image) = &self.cover_art {
            let _ = tag.add_frame(encode_cover_art(image, &self.config)?);
        }

        Ok(tag)
    }
}

impl<R: Read + Seek> TagRecord<R> {
    /// Write the record, followed by the source's audio payload, to
    /// `destination`.
    ///
    /// Nothing is rolled back on failure: `destination` may hold a partial
    /// stream afterwards.
    pub fn save<W: Write>(&mut self, mut destination: W) -> Result<()> {
        let tag = self.build_tag()?;

        self.source.seek(SeekFrom::Start(0))?;
        let had_tag = match Tag::skip(&mut self.source) {
            Ok(skipped) => skipped,
            Err(id3::Error {
                kind: id3::ErrorKind::NoTag,
                ..
            }) => false,
            Err(err) => return Err(TagError::from_write(err)),
        };
        if !had_tag {
            self.source.seek(SeekFrom::Start(0))?;
        }

        tag.write_to(&mut destination, self.config.version)
            .map_err(TagError::from_write)?;
        let payload = io::copy(&mut self.source, &mut destination)?;
        destination.flush()?;

        trace!(
            frames = tag.frames().count(),
            payload_bytes = payload,
            replaced_tag = had_tag,
            "saved ID3 tag"
        );
        Ok(())
    }
}

impl<R: Read + Write + Seek + Truncate> TagRecord<R> {
    /// Rewrite the source stream itself.
    ///
    /// The new stream is rendered in memory first, since the new tag may be
    /// larger than the old one. The source is left rewound to its start.
    pub fn save_in_place(&mut self) -> Result<()> {
        let mut rendered = Vec::new();
        self.save(&mut rendered)?;

        self.source.seek(SeekFrom::Start(0))?;
        self.source.write_all(&rendered)?;
        self.source.flush()?;
        self.source.truncate(rendered.len() as u64)?;
        self.source.seek(SeekFrom::Start(0))?;

        trace!(bytes = rendered.len(), "rewrote source in place");
        Ok(())
    }
}
