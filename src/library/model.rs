use std::path::Path;

use serde::Serialize;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_ALBUM: &str = "Unknown Album";

/// One playable entry of the catalog, as sent to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    /// File name including extension; unique within one build.
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Whole seconds.
    pub duration: u64,
    /// Public path the static file server resolves, e.g. `/music/song.mp3`.
    pub filepath: String,
}

/// Tags read from one file. `None` means the file does not carry the field;
/// `Some("")` is a present but empty value and is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration_secs: Option<u64>,
}

/// File name with its last extension removed (`a.b.mp3` -> `a.b`).
pub fn strip_extension(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}

pub fn public_path(prefix: &str, file_name: &str) -> String {
    format!("/{}/{}", prefix.trim_matches('/'), file_name)
}

impl Track {
    /// Merge extracted tags with name-derived defaults, field by field.
    pub fn from_tags(file_name: &str, prefix: &str, tags: TrackTags) -> Self {
        Self {
            id: file_name.to_string(),
            title: tags
                .title
                .unwrap_or_else(|| strip_extension(file_name).to_string()),
            artist: tags.artist.unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
            album: tags.album.unwrap_or_else(|| UNKNOWN_ALBUM.to_string()),
            duration: tags.duration_secs.unwrap_or(0),
            filepath: public_path(prefix, file_name),
        }
    }

    /// Record for a file whose tags could not be read at all.
    pub fn fallback(file_name: &str, prefix: &str) -> Self {
        Self::from_tags(file_name, prefix, TrackTags::default())
    }
}
