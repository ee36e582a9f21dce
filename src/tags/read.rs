//! tags/read.rs
//! Read an ID3 tag from a stream and convert it into a `TagRecord`.
//!
//! - Text frames are copied verbatim; an empty frame counts as missing.
//! - TPOS / TRCK are split into number + total. A malformed number fails the
//!   whole parse, not just that field.
//! - Cover art is best-effort: an unreadable picture is dropped silently.

use std::io::{Read, Seek, SeekFrom};

use id3::frame::Content;
use id3::{Tag, TagLike};
use tracing::{debug, trace};

use super::art::read_cover_art;
use super::fields::{BPM_FRAME, DISC_FRAME, TRACK_FRAME, TextField, YEAR_FRAME, is_modeled_frame};
use super::util::{parse_number_pair, parse_plain_u32};
use crate::error::{Result, TagError};
use crate::types::TagRecord;

/// Parse the ID3 tag at the start of `source`.
///
/// Shorthand for [`TagRecord::parse`].
pub fn parse<R: Read + Seek>(source: R) -> Result<TagRecord<R>> {
    TagRecord::parse(source)
}

impl<R: Read + Seek> TagRecord<R> {
    /// Parse the ID3 tag at the start of `source`.
    ///
    /// The stream is rewound first, matching where `save` looks for the old
    /// tag. A stream without any tag gives an empty record. The record keeps
    /// `source` for later saves.
    pub fn parse(mut source: R) -> Result<Self> {
        source
            .seek(SeekFrom::Start(0))
            .map_err(|io| TagError::Parse(id3::Error::from(io)))?;
        let tag = match Tag::read_from2(&mut source) {
            Ok(tag) => tag,
            Err(id3::Error {
                kind: id3::ErrorKind::NoTag,
                ..
            }) => {
                debug!("no ID3 tag found, starting from an empty record");
                Tag::new()
            }
            Err(err) => return Err(TagError::Parse(err)),
        };

        let mut record = TagRecord::new(source);
        fill_from_tag(&mut record, &tag)?;
        Ok(record)
    }
}

fn fill_from_tag<R>(record: &mut TagRecord<R>, tag: &Tag) -> Result<()> {
    for field in TextField::ALL {
        if let Some(value) = text_frame(tag, field.frame_id()) {
            record.set_text(field, value);
        }
    }

    record.year = plain_number(tag, YEAR_FRAME);
    record.bpm = plain_number(tag, BPM_FRAME);

    if let Some(raw) = text_frame(tag, DISC_FRAME) {
        record.disc = parse_number_pair(DISC_FRAME, raw)?;
    }
    if let Some(raw) = text_frame(tag, TRACK_FRAME) {
        record.track = parse_number_pair(TRACK_FRAME, raw)?;
    }

    record.cover_art = read_cover_art(tag);
    record.passthrough = passthrough_frames(tag);

    trace!(
        frames = tag.frames().count(),
        passthrough = record.passthrough.frames().count(),
        cover_art = record.cover_art.is_some(),
        "mapped ID3 tag"
    );
    Ok(())
}

/// Get the text of a specific text frame, treating "" as missing.
fn text_frame<'a>(tag: &'a Tag, id: &str) -> Option<&'a str> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Year / BPM: anything that isn't a plain integer reads as unset.
fn plain_number(tag: &Tag, id: &'static str) -> u32 {
    let Some(raw) = text_frame(tag, id) else {
        return 0;
    };
    parse_plain_u32(raw).unwrap_or_else(|| {
        debug!(frame = id, value = raw, "ignoring non-numeric frame");
        0
    })
}

/// Year / BPM text that doesn't read as a plain number. The record can't
/// hold it, so it rides along with the passthrough frames.
fn is_unparsed_number(tag: &Tag, id: &str) -> bool {
    matches!(id, YEAR_FRAME | BPM_FRAME)
        && text_frame(tag, id).is_some_and(|raw| parse_plain_u32(raw).is_none())
}

/// Copy of `tag` minus everything the record models itself.
fn passthrough_frames(tag: &Tag) -> Tag {
    let mut out = Tag::with_version(tag.version());
    for frame in tag
        .frames()
        .filter(|f| !is_modeled_frame(f.id()) || is_unparsed_number(tag, f.id()))
    {
        out.add_frame(frame.clone());
    }
    out
}
