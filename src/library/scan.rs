use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::error::CatalogError;

/// Case-sensitive suffix match against the configured extensions.
fn is_audio_file(file_name: &str, settings: &LibrarySettings) -> bool {
    settings
        .extensions
        .iter()
        .any(|ext| file_name.len() > ext.len() && file_name.ends_with(ext.as_str()))
}

/// List the audio file names directly inside `dir`.
///
/// Names come back in directory enumeration order; nothing is sorted.
/// Subdirectories and non-matching files are skipped. Entries that cannot be
/// resolved, such as dangling symlinks, are kept when their name matches. A
/// missing or unreadable `dir` fails the whole listing.
pub fn list_audio_files(
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<Vec<String>, CatalogError> {
    let meta = fs::metadata(dir).map_err(|err| CatalogError::from_io(dir, err))?;
    if !meta.is_dir() {
        return Err(CatalogError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(settings.follow_links);

    let mut names = Vec::new();
    for entry in walker {
        let name = match entry {
            Ok(entry) if entry.file_type().is_file() => entry.file_name().to_owned(),
            Ok(_) => continue,
            Err(err) if err.depth() == 0 => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                return Err(CatalogError::from_io(dir, source));
            }
            // Still listed by name (e.g. a dangling symlink); reading its tags fails later.
            Err(err) => match err.path().and_then(Path::file_name) {
                Some(name) => {
                    log::debug!("Unresolvable entry in {}: {err}", dir.display());
                    name.to_owned()
                }
                None => {
                    log::warn!("Skipping unreadable entry in {}: {err}", dir.display());
                    continue;
                }
            },
        };

        let Some(name) = name.to_str() else {
            log::warn!("Skipping non UTF-8 file name {name:?} in {}", dir.display());
            continue;
        };
        if is_audio_file(name, settings) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}
