use crate::cli::Command;
use crate::source::Source;
use app_state::GalleryConfig;
use chrono::{DateTime, Utc};
use color_eyre::eyre::{Result, eyre};
use common_services::AccessError;
use common_services::access::{children, resolve_one, smart_album_photos, top_level};
use common_services::presenter::{PhotoResponse, present, present_all, present_photo};
use common_services::search::split_terms;
use common_types::{Photo, ViewerContext};
use serde_json::Value;
use tracing::instrument;

/// Runs one command and returns the JSON a client would receive.
#[instrument(skip(source, config, now))]
pub async fn run_command(
    command: &Command,
    source: &Source,
    viewer: &ViewerContext,
    config: &GalleryConfig,
    now: DateTime<Utc>,
) -> Result<Value> {
    let value = match command {
        Command::Albums { parent: None } => {
            let albums = source
                .albums(viewer, config)
                .await
                .inspect_err(AccessError::log)?;
            let resolved = top_level(albums, viewer, config);
            serde_json::to_value(present_all(&resolved, viewer, config)?)?
        }
        Command::Albums {
            parent: Some(parent_id),
        } => {
            let albums = source
                .children(parent_id, viewer, config)
                .await
                .inspect_err(AccessError::log)?;
            let resolved = children(parent_id, albums, viewer, config);
            serde_json::to_value(present_all(&resolved, viewer, config)?)?
        }
        Command::Album { id } => {
            let resolved = source
                .album(id, viewer, config)
                .await
                .inspect_err(AccessError::log)?
                .and_then(|album| resolve_one(album, viewer, config))
                .ok_or_else(|| eyre!("Album {id} not found"))?;
            serde_json::to_value(present(&resolved, viewer, config)?)?
        }
        Command::Search { query } => {
            let terms = split_terms(query);
            let photos = source
                .search(&terms, viewer, config)
                .await
                .inspect_err(AccessError::log)?;
            serde_json::to_value(present_sorted(photos.iter()))?
        }
        Command::Smart { kind } => {
            let albums = source
                .albums(viewer, config)
                .await
                .inspect_err(AccessError::log)?;
            let photos = source
                .search(&[], viewer, config)
                .await
                .inspect_err(AccessError::log)?;
            let found = smart_album_photos(*kind, &photos, &albums, viewer, config, now);
            serde_json::to_value(present_sorted(found.into_iter()))?
        }
    };
    Ok(value)
}

/// Search results carry no order of their own, so output is sorted by id.
fn present_sorted<'a>(photos: impl Iterator<Item = &'a Photo>) -> Vec<PhotoResponse> {
    let mut presented: Vec<PhotoResponse> = photos.map(present_photo).collect();
    presented.sort_by(|a, b| a.id.cmp(&b.id));
    presented
}
