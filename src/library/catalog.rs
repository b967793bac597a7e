use std::path::Path;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{self, JoinSet};
use tokio::time;

use crate::config::LibrarySettings;

use super::error::{CatalogError, ExtractError};
use super::model::{Track, TrackTags};
use super::scan::list_audio_files;
use super::tags::{LoftySource, MetadataSource};

/// Turns the contents of a music directory into an ordered track list.
///
/// Holds no per-build state: every [`build`](Self::build) re-lists the
/// directory and re-reads every file.
#[derive(Clone)]
pub struct CatalogBuilder {
    settings: LibrarySettings,
    source: Arc<dyn MetadataSource>,
}

impl std::fmt::Debug for CatalogBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogBuilder")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl CatalogBuilder {
    pub fn new(settings: LibrarySettings) -> Self {
        Self::with_source(settings, LoftySource)
    }

    pub fn with_source(settings: LibrarySettings, source: impl MetadataSource) -> Self {
        Self {
            settings,
            source: Arc::new(source),
        }
    }

    pub fn settings(&self) -> &LibrarySettings {
        &self.settings
    }

    /// Build the catalog of the configured music directory.
    pub async fn build(&self) -> Result<Vec<Track>, CatalogError> {
        self.build_from(&self.settings.music_dir).await
    }

    /// Build the catalog of `dir`.
    ///
    /// The listing happens once, before any tags are read. Tags are then read
    /// on blocking workers, at most `max_concurrent_extractions` files at a
    /// time. Each file gets its own deadline, counted from when it starts. A
    /// file whose tags cannot be read (error, panic or timeout) still yields a
    /// track built from its name alone. The result has one track per listed
    /// file, in listing order.
    pub async fn build_from(&self, dir: &Path) -> Result<Vec<Track>, CatalogError> {
        let names = {
            let dir = dir.to_path_buf();
            let settings = self.settings.clone();
            task::spawn_blocking(move || list_audio_files(&dir, &settings)).await??
        };
        log::debug!("Listed {} audio files in {}", names.len(), dir.display());

        let timeout = self.settings.extract_timeout();
        let limit = Arc::new(Semaphore::new(self.settings.max_concurrent_extractions.max(1)));
        let mut extractions = JoinSet::new();
        for (idx, name) in names.iter().enumerate() {
            let source = Arc::clone(&self.source);
            let limit = Arc::clone(&limit);
            let path = dir.join(name);
            extractions.spawn(async move {
                let result = match limit.acquire_owned().await {
                    // The deadline starts once the file holds a slot.
                    Ok(_permit) => match time::timeout(
                        timeout,
                        task::spawn_blocking(move || source.extract(&path)),
                    )
                    .await
                    {
                        Ok(Ok(result)) => result,
                        Ok(Err(join_err)) => Err(ExtractError::Task(join_err.to_string())),
                        Err(_elapsed) => Err(ExtractError::Timeout(timeout)),
                    },
                    Err(closed) => Err(ExtractError::Task(closed.to_string())),
                };
                (idx, result)
            });
        }

        let mut results: Vec<Option<Result<TrackTags, ExtractError>>> =
            std::iter::repeat_with(|| None).take(names.len()).collect();
        while let Some(joined) = extractions.join_next().await {
            match joined {
                Ok((idx, result)) => results[idx] = Some(result),
                Err(join_err) => log::warn!("Extraction task failed: {join_err}"),
            }
        }

        let prefix = self.settings.prefix_segment();
        let mut tracks = Vec::with_capacity(names.len());
        let mut fallbacks = 0usize;
        for (name, result) in names.iter().zip(results) {
            let result = result
                .unwrap_or_else(|| Err(ExtractError::Task("extraction task was lost".to_string())));
            let track = match result {
                Ok(tags) => Track::from_tags(name, prefix, tags),
                Err(err) => {
                    log::warn!("Error parsing metadata for {name}: {err}");
                    fallbacks += 1;
                    Track::fallback(name, prefix)
                }
            };
            tracks.push(track);
        }

        log::info!(
            "Built catalog of {} tracks from {} ({fallbacks} without readable metadata)",
            tracks.len(),
            dir.display(),
        );
        Ok(tracks)
    }
}
