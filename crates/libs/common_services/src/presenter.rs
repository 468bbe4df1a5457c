//! External representation of resolved albums and visible photos.

use crate::access::{EffectiveAttributes, ResolvedAlbum};
use app_state::{ConfigurationError, GalleryConfig};
use chrono::{DateTime, NaiveDateTime, Utc};
use common_types::{AlbumKind, Photo, ViewerContext};
use serde::Serialize;
use utoipa::ToSchema;

/// An album as returned to clients. Never carries a password or the album kind column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    pub id: String,
    pub title: String,
    /// Only for logged-in viewers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    pub is_public: bool,
    pub viewable: bool,
    pub requires_link: bool,
    pub has_password: bool,
    pub locked: bool,
    #[serde(flatten)]
    pub effective: EffectiveAttributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_tags: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub id: String,
    pub album_id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub location: Option<String>,
    pub model: Option<String>,
    pub taken_at: Option<NaiveDateTime>,
    pub is_public: bool,
    pub starred: bool,
}

/// Maps a resolved album to its response.
///
/// The owner name is the configured single library name in single library
/// mode, which has to be set.
pub fn present(
    resolved: &ResolvedAlbum,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Result<AlbumResponse, ConfigurationError> {
    let album = &resolved.album;
    let owner_name = if !viewer.is_logged_in() {
        None
    } else if config.single_library {
        Some(config.single_library_owner()?.to_owned())
    } else {
        Some(album.owner_name.clone())
    };
    let (parent_id, cover_id, show_tags) = match &album.kind {
        AlbumKind::Plain {
            parent_id,
            cover_id,
        } => (parent_id.clone(), cover_id.clone(), None),
        AlbumKind::Tag { show_tags } => (None, None, Some(show_tags.clone())),
    };

    Ok(AlbumResponse {
        id: album.id.clone(),
        title: album.title.clone(),
        owner_name,
        is_public: album.is_public,
        viewable: album.viewable,
        requires_link: album.requires_link,
        has_password: album.has_password,
        locked: resolved.locked,
        effective: resolved.effective,
        parent_id,
        cover_id,
        show_tags,
        created_at: album.created_at,
    })
}

pub fn present_all(
    resolved: &[ResolvedAlbum],
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Result<Vec<AlbumResponse>, ConfigurationError> {
    resolved
        .iter()
        .map(|album| present(album, viewer, config))
        .collect()
}

#[must_use]
pub fn present_photo(photo: &Photo) -> PhotoResponse {
    PhotoResponse {
        id: photo.id.clone(),
        album_id: photo.album_id.clone(),
        title: photo.title.clone(),
        description: photo.description.clone(),
        tags: photo.tags.clone(),
        location: photo.location.clone(),
        model: photo.model.clone(),
        taken_at: photo.taken_at,
        is_public: photo.is_public,
        starred: photo.starred,
    }
}
