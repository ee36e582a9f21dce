//! Shared fixtures and stream doubles for the integration tests.
#![allow(dead_code)]

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};

use id3::{Tag, TagLike, Version};
use image::{DynamicImage, Rgb, RgbImage};

/// Stand-in for MPEG audio frames; only its bytes matter.
pub const AUDIO_PAYLOAD: &[u8] = &[
    0xFF, 0xFB, 0x90, 0x64, 0x00, 0x0F, 0xF0, 0x00, 0x00, 0x69, 0x00, 0x00, 0x00, 0x08, 0x00,
    0x00, 0x0D, 0x20, 0x00, 0x00, 0x01, 0x00, 0x00, 0x01, 0xA4, 0x00, 0x00, 0x00, 0x20, 0x00,
    0x00, 0x34, 0x80, 0x00, 0x00, 0x04, 0x4C, 0x41, 0x4D, 0x45, 0x33, 0x2E, 0x31, 0x30, 0x30,
];

/// A tagged stream: `tag` followed by [`AUDIO_PAYLOAD`].
pub fn tagged_stream(tag: &Tag) -> Vec<u8> {
    let mut out = Vec::new();
    tag.write_to(&mut out, Version::Id3v23).unwrap();
    out.extend_from_slice(AUDIO_PAYLOAD);
    out
}

/// A populated tag, similar to what a ripper writes.
pub fn sample_tag() -> Tag {
    let mut tag = Tag::new();
    tag.set_text("TPE1", "Original Artist");
    tag.set_text("TALB", "Original Album");
    tag.set_text("TIT2", "Original Title");
    tag.set_text("TCON", "Synthpop");
    tag.set_text("TYER", "1999");
    tag.set_text("TPOS", "1/1");
    tag.set_text("TRCK", "3/12");
    tag
}

pub fn sample_stream() -> Cursor<Vec<u8>> {
    Cursor::new(tagged_stream(&sample_tag()))
}

/// Small image with distinct pixels so any re-encoding loss shows up.
pub fn cover_image() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(16, 9, |x, y| {
        Rgb([(x * 15) as u8, (y * 28) as u8, ((x + y) * 7) as u8])
    }))
}

/// Read side double: serves `data` but can fail seeks or reads on demand.
#[derive(Debug)]
pub struct FlakySource {
    inner: Cursor<Vec<u8>>,
    /// Seeks that succeed before every later seek fails.
    pub seeks_allowed: Option<usize>,
    pub fail_reads: bool,
    seeks: usize,
}

impl FlakySource {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(data),
            seeks_allowed: None,
            fail_reads: false,
            seeks: 0,
        }
    }

    pub fn failing_seeks_after(mut self, allowed: usize) -> Self {
        self.seeks_allowed = Some(allowed);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }
}

impl Read for FlakySource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_reads {
            return Err(io::Error::other("bad read"));
        }
        self.inner.read(buf)
    }
}

impl Seek for FlakySource {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if let Some(allowed) = self.seeks_allowed {
            if self.seeks >= allowed {
                return Err(io::Error::other("bad seek"));
            }
        }
        self.seeks += 1;
        self.inner.seek(pos)
    }
}

/// Write side double: accepts `accepted` write calls, then fails.
#[derive(Debug, Default)]
pub struct FlakySink {
    pub written: Vec<u8>,
    pub accepted: usize,
    pub calls: usize,
}

impl FlakySink {
    pub fn accepting(accepted: usize) -> Self {
        Self {
            accepted,
            ..Self::default()
        }
    }
}

impl Write for FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        if self.calls > self.accepted {
            return Err(io::Error::other("bad write"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes report success without taking any bytes.
pub struct ZeroSink;

impl Write for ZeroSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Ok(0)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
