//! Options that only matter on the write path.
//!
//! Reading never needs configuration: the tag reader sniffs the ID3 version
//! and the image decoder sniffs the picture format.

use id3::Version;
use image::ImageFormat;

/// Interchange format used when embedding cover art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoverArtFormat {
    /// Lossless, so a cover survives any number of saves pixel-for-pixel.
    #[default]
    Png,
    Jpeg,
}

impl CoverArtFormat {
    pub(crate) fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// ID3v2 revision written on save.
    ///
    /// Defaults to 2.3: every frame we map (`TYER` and `TDAT` included) is
    /// native to that revision.
    pub version: Version,
    pub cover_format: CoverArtFormat,
    /// Description stored in the APIC frame.
    pub picture_description: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            version: Version::Id3v23,
            cover_format: CoverArtFormat::default(),
            picture_description: String::new(),
        }
    }
}

impl WriteConfig {
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_cover_format(mut self, format: CoverArtFormat) -> Self {
        self.cover_format = format;
        self
    }

    pub fn with_picture_description(mut self, description: impl Into<String>) -> Self {
        self.picture_description = description.into();
        self
    }
}
