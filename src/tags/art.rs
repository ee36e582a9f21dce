//! Cover art: APIC payload <-> decoded image.

use std::io::Cursor;

use id3::Tag;
use id3::frame::{Picture, PictureType};
use image::DynamicImage;
use tracing::debug;

use crate::config::{CoverArtFormat, WriteConfig};
use crate::error::{Result, TagError};

/// Decode the first embedded picture, if any.
///
/// A picture the decoder can't read is treated the same as no picture.
pub(crate) fn read_cover_art(tag: &Tag) -> Option<DynamicImage> {
    let picture = tag.pictures().next()?;

    match image::load_from_memory(&picture.data) {
        Ok(image) => Some(image),
        Err(err) => {
            debug!(
                mime = %picture.mime_type,
                bytes = picture.data.len(),
                "ignoring undecodable cover art: {err}"
            );
            None
        }
    }
}

/// Encode `image` into an APIC front-cover frame.
pub(crate) fn encode_cover_art(image: &DynamicImage, config: &WriteConfig) -> Result<Picture> {
    let format = config.cover_format;
    let mut data = Cursor::new(Vec::new());

    let encoded = match format {
        // JPEG has no alpha channel.
        CoverArtFormat::Jpeg => {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_to(&mut data, format.image_format())
        }
        CoverArtFormat::Png => image.write_to(&mut data, format.image_format()),
    };
    encoded.map_err(TagError::CoverArt)?;

    Ok(Picture {
        mime_type: format.mime_type().to_string(),
        picture_type: PictureType::CoverFront,
        description: config.picture_description.clone(),
        data: data.into_inner(),
    })
}
