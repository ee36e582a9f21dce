//! tags/fields.rs
//!
//! The closed set of fields a `TagRecord` models, and the ID3 frame each one
//! lives in. This table is the only place frame identifiers are spelled out.

/// Frame holding the release year.
pub(crate) const YEAR_FRAME: &str = "TYER";
/// Frame holding beats per minute.
pub(crate) const BPM_FRAME: &str = "TBPM";
/// "Part of a set", stored as "N" or "N/M".
pub(crate) const DISC_FRAME: &str = "TPOS";
/// Track number, stored as "N" or "N/M".
pub(crate) const TRACK_FRAME: &str = "TRCK";
/// Attached picture.
pub(crate) const PICTURE_FRAME: &str = "APIC";

/// Plain text fields, one text frame each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Artist,
    Album,
    AlbumArtist,
    Title,
    Subtitle,
    Genre,
    Composer,
    Lyricist,
    Publisher,
    Encoder,
    Copyright,
    Language,
    Isrc,
    Date,
    Length,
}

impl TextField {
    pub const COUNT: usize = 15;

    pub const ALL: [TextField; Self::COUNT] = [
        TextField::Artist,
        TextField::Album,
        TextField::AlbumArtist,
        TextField::Title,
        TextField::Subtitle,
        TextField::Genre,
        TextField::Composer,
        TextField::Lyricist,
        TextField::Publisher,
        TextField::Encoder,
        TextField::Copyright,
        TextField::Language,
        TextField::Isrc,
        TextField::Date,
        TextField::Length,
    ];

    /// The 4-character ID3v2.3/2.4 frame identifier.
    pub const fn frame_id(self) -> &'static str {
        match self {
            TextField::Artist => "TPE1",
            TextField::Album => "TALB",
            TextField::AlbumArtist => "TPE2",
            TextField::Title => "TIT2",
            TextField::Subtitle => "TIT3",
            TextField::Genre => "TCON",
            TextField::Composer => "TCOM",
            TextField::Lyricist => "TEXT",
            TextField::Publisher => "TPUB",
            TextField::Encoder => "TENC",
            TextField::Copyright => "TCOP",
            TextField::Language => "TLAN",
            TextField::Isrc => "TSRC",
            TextField::Date => "TDAT",
            TextField::Length => "TLEN",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// True if `id` is a frame the record models directly (and therefore must
/// not be carried through untouched).
pub(crate) fn is_modeled_frame(id: &str) -> bool {
    matches!(
        id,
        YEAR_FRAME | BPM_FRAME | DISC_FRAME | TRACK_FRAME | PICTURE_FRAME
    ) || TextField::ALL.iter().any(|f| f.frame_id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_lists_every_field_in_index_order() {
        for (i, field) in TextField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn frame_ids_are_unique_four_char_text_frames() {
        let ids: HashSet<_> = TextField::ALL.iter().map(|f| f.frame_id()).collect();
        assert_eq!(ids.len(), TextField::COUNT);
        for id in ids {
            assert_eq!(id.len(), 4);
            assert!(id.starts_with('T'), "{id}");
        }
    }

    #[test]
    fn modeled_frames() {
        assert!(is_modeled_frame("TPE1"));
        assert!(is_modeled_frame("TRCK"));
        assert!(is_modeled_frame("APIC"));
        assert!(!is_modeled_frame("COMM"));
        assert!(!is_modeled_frame("TXXX"));
    }
}
