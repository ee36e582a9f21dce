use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TagError {
    /// The tag reader could not make sense of the source.
    #[error("failed to parse ID3 tag: {0}")]
    Parse(#[source] id3::Error),

    /// A disc or track number frame did not start with a number.
    #[error("frame {frame} holds a malformed number: {value:?}")]
    NumericField {
        frame: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Seeking, reading or writing one of the streams failed while saving.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("failed to write ID3 tag: {0}")]
    Write(#[source] id3::Error),

    #[error("failed to encode cover art: {0}")]
    CoverArt(#[source] image::ImageError),
}

impl TagError {
    /// True for every kind produced by the save path.
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::Stream(_) | Self::Write(_) | Self::CoverArt(_))
    }

    /// Sort an error coming back from the tag writer: I/O problems belong to
    /// the streams, everything else to the tag itself.
    pub(crate) fn from_write(err: id3::Error) -> Self {
        match err {
            id3::Error {
                kind: id3::ErrorKind::Io(io),
                ..
            } => Self::Stream(io),
            other => Self::Write(other),
        }
    }
}

pub type Result<T, E = TagError> = std::result::Result<T, E>;
