use std::path::Path;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::Accessor;

use super::error::ExtractError;
use super::model::TrackTags;

/// Reads embedded tags from a single audio file.
///
/// Implementations are called from blocking worker threads, once per file and
/// possibly for many files at the same time.
pub trait MetadataSource: Send + Sync + 'static {
    fn extract(&self, path: &Path) -> Result<TrackTags, ExtractError>;
}

/// [`MetadataSource`] backed by `lofty`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftySource;

impl MetadataSource for LoftySource {
    fn extract(&self, path: &Path) -> Result<TrackTags, ExtractError> {
        // Detects the format from the content, then the extension.
        let tagged = lofty::read_from_path(path)?;

        let mut tags = TrackTags {
            // Floors to whole seconds.
            duration_secs: Some(tagged.properties().duration().as_secs()),
            ..TrackTags::default()
        };

        if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
            tags.title = tag.title().map(|v| v.into_owned());
            tags.artist = tag.artist().map(|v| v.into_owned());
            tags.album = tag.album().map(|v| v.into_owned());
        } else {
            log::debug!("No tags found in {}", path.display());
        }

        Ok(tags)
    }
}
