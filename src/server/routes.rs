use std::convert::Infallible;
use std::error::Error as _;
use std::sync::Arc;

use serde::Serialize;
use warp::{
    Filter, Rejection, Reply,
    filters::BoxedFilter,
    http::StatusCode,
    reject::{InvalidHeader, MethodNotAllowed},
    reply::Response,
};

use crate::library::CatalogBuilder;

/// Message returned to the player when the catalog cannot be built.
pub const MUSIC_DIR_ERROR: &str = "Failed to read music directory";

/// JSON error object: `{ "error": "<message>" }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_reply(code: StatusCode, message: impl Into<String>) -> Response {
    let body = warp::reply::json(&ErrorBody {
        error: message.into(),
    });
    warp::reply::with_status(body, code).into_response()
}

/// All routes: the catalog API plus, if enabled, the music files themselves.
pub fn create_filters(builder: CatalogBuilder) -> BoxedFilter<(Response,)> {
    let library = builder.settings().clone();
    let builder = Arc::new(builder);

    // GET /api/tracks
    let tracks = warp::get()
        .and(warp::path!("api" / "tracks"))
        .and(warp::any().map(move || Arc::clone(&builder)))
        .and_then(list_tracks)
        .boxed();

    if !library.serve_files {
        return tracks;
    }

    // GET /<prefix>/<file>
    let files = warp::get()
        .and(warp::path(library.prefix_segment().to_string()))
        .and(warp::fs::dir(library.music_dir.clone()))
        .map(|file: warp::fs::File| file.into_response());

    tracks.or(files).unify().boxed()
}

async fn list_tracks(builder: Arc<CatalogBuilder>) -> Result<Response, Infallible> {
    match builder.build().await {
        Ok(tracks) => Ok(warp::reply::json(&tracks).into_response()),
        Err(err) => {
            log::error!("Error reading music directory: {err}");
            Ok(error_reply(StatusCode::INTERNAL_SERVER_ERROR, MUSIC_DIR_ERROR))
        }
    }
}

#[allow(clippy::unused_async)] // async needed for warp filter
pub async fn handle_rejection(reject: Rejection) -> Result<Response, Infallible> {
    let (code, message) = if reject.is_not_found() {
        (StatusCode::NOT_FOUND, status_code_to_string(StatusCode::NOT_FOUND))
    } else if let Some(err) = reject.find::<InvalidHeader>() {
        let message = err
            .source()
            .map_or_else(|| err.to_string(), ToString::to_string);
        (StatusCode::BAD_REQUEST, message)
    } else if let Some(err) = reject.find::<MethodNotAllowed>() {
        // Least priority: most rejections carry a MethodNotAllowed element.
        (StatusCode::METHOD_NOT_ALLOWED, err.to_string())
    } else {
        log::error!("Unhandled rejection {reject:?}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            status_code_to_string(StatusCode::INTERNAL_SERVER_ERROR),
        )
    };

    Ok(error_reply(code, message))
}

fn status_code_to_string(code: StatusCode) -> String {
    code.canonical_reason()
        .unwrap_or_else(|| code.as_str())
        .to_string()
}
