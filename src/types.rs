//! Core data types.
//!
//! `TagRecord` is a "bag of fields" for ONE audio stream plus the stream
//! itself. Parsing lives in `tags::read`, saving in `tags::write`; this file
//! only holds state and the accessors over it.
//!
//! Unset values use the zero value of their type (empty string, `0`), not
//! `Option`: a field that is empty or zero is simply not written on save.

use id3::{Tag, TagLike};
use image::DynamicImage;

use crate::config::WriteConfig;
use crate::tags::fields::{BPM_FRAME, TextField, YEAR_FRAME};

/// A number that may come with a total, like track 7 of 14.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberPair {
    pub number: u32,
    pub total: u32,
}

macro_rules! text_accessors {
    ($($name:ident => $field:ident;)+) => {
        paste::paste! {
            $(
                #[doc = concat!("Current `", stringify!($field), "` text, empty when unset.")]
                pub fn $name(&self) -> &str {
                    self.text(TextField::$field)
                }

                #[doc = concat!("Overwrite `", stringify!($field), "`.")]
                pub fn [<set_ $name>](&mut self, value: impl Into<String>) {
                    self.set_text(TextField::$field, value)
                }
            )+
        }
    }
}

/// Metadata of one audio stream.
///
/// `R` is the stream the record was parsed from. The record owns it so a
/// later `save` can copy the audio payload out of it.
#[derive(Debug)]
pub struct TagRecord<R> {
    pub(crate) text: [String; TextField::COUNT],
    pub(crate) year: u32,
    pub(crate) bpm: u32,
    pub(crate) disc: NumberPair,
    pub(crate) track: NumberPair,
    pub(crate) cover_art: Option<DynamicImage>,

    /// Frames of the parsed tag we don't model (comments, lyrics, TXXX...).
    pub(crate) passthrough: Tag,

    pub(crate) config: WriteConfig,
    pub(crate) source: R,
}

impl<R> TagRecord<R> {
    /// An empty record over `source`. Saving it tags an untagged stream.
    pub fn new(source: R) -> Self {
        Self {
            text: Default::default(),
            year: 0,
            bpm: 0,
            disc: NumberPair::default(),
            track: NumberPair::default(),
            cover_art: None,
            passthrough: Tag::new(),
            config: WriteConfig::default(),
            source,
        }
    }

    pub fn with_config(mut self, config: WriteConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &WriteConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: WriteConfig) {
        self.config = config;
    }

    pub fn text(&self, field: TextField) -> &str {
        &self.text[field.index()]
    }

    pub fn set_text(&mut self, field: TextField, value: impl Into<String>) {
        self.text[field.index()] = value.into();
    }

    text_accessors! {
        artist => Artist;
        album => Album;
        album_artist => AlbumArtist;
        title => Title;
        subtitle => Subtitle;
        genre => Genre;
        composer => Composer;
        lyricist => Lyricist;
        publisher => Publisher;
        encoder => Encoder;
        copyright => Copyright;
        language => Language;
        isrc => Isrc;
        date => Date;
        length => Length;
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    /// Also drops a non-numeric year carried over from the parsed tag.
    pub fn set_year(&mut self, year: u32) {
        self.year = year;
        let _ = self.passthrough.remove(YEAR_FRAME);
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn set_bpm(&mut self, bpm: u32) {
        self.bpm = bpm;
        let _ = self.passthrough.remove(BPM_FRAME);
    }

    pub fn disc(&self) -> NumberPair {
        self.disc
    }

    pub fn disc_number(&self) -> u32 {
        self.disc.number
    }

    pub fn set_disc_number(&mut self, number: u32) {
        self.disc.number = number;
    }

    pub fn disc_total(&self) -> u32 {
        self.disc.total
    }

    pub fn set_disc_total(&mut self, total: u32) {
        self.disc.total = total;
    }

    pub fn track(&self) -> NumberPair {
        self.track
    }

    pub fn track_number(&self) -> u32 {
        self.track.number
    }

    pub fn set_track_number(&mut self, number: u32) {
        self.track.number = number;
    }

    pub fn track_total(&self) -> u32 {
        self.track.total
    }

    pub fn set_track_total(&mut self, total: u32) {
        self.track.total = total;
    }

    pub fn cover_art(&self) -> Option<&DynamicImage> {
        self.cover_art.as_ref()
    }

    /// Replace the cover. It is re-encoded on save, see [`WriteConfig`].
    pub fn set_cover_art(&mut self, image: DynamicImage) {
        self.cover_art = Some(image);
    }

    pub fn remove_cover_art(&mut self) -> Option<DynamicImage> {
        self.cover_art.take()
    }

    /// Reset every modeled field and drop the cover.
    ///
    /// The source stream stays attached, and so do frames outside the
    /// modeled set. A non-numeric year/BPM kept from the parsed tag is
    /// dropped with the rest.
    pub fn clear_all_tags(&mut self) {
        for value in &mut self.text {
            value.clear();
        }
        self.set_year(0);
        self.set_bpm(0);
        self.disc = NumberPair::default();
        self.track = NumberPair::default();
        self.cover_art = None;
    }

    /// True when no modeled field is set and there is no cover.
    pub fn is_empty(&self) -> bool {
        self.text.iter().all(String::is_empty)
            && self.year == 0
            && self.bpm == 0
            && self.disc == NumberPair::default()
            && self.track == NumberPair::default()
            && self.cover_art.is_none()
    }

    pub fn source_mut(&mut self) -> &mut R {
        &mut self.source
    }

    /// Swap in a different source; the next save copies audio out of it.
    pub fn replace_source(&mut self, source: R) -> R {
        std::mem::replace(&mut self.source, source)
    }

    pub fn into_source(self) -> R {
        self.source
    }
}
