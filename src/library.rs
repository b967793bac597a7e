//! Track catalog: directory listing, tag reading and the builder that joins
//! them into the list served to the player.

mod catalog;
mod error;
mod model;
mod scan;
mod tags;

pub use catalog::CatalogBuilder;
pub use error::{CatalogError, ExtractError};
pub use model::{Track, TrackTags, UNKNOWN_ALBUM, UNKNOWN_ARTIST};
pub use scan::list_audio_files;
pub use tags::{LoftySource, MetadataSource};
