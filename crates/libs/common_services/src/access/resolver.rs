use crate::visibility::album_visibility_filter;
use app_state::{AlbumSort, AlbumSortColumn, GalleryConfig, SortDirection};
use common_types::{Album, ViewerContext};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;
use utoipa::ToSchema;

/// Album attributes that depend on global config for non-public albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveAttributes {
    pub full_photo: bool,
    pub downloadable: bool,
    pub share_button_visible: bool,
}

impl EffectiveAttributes {
    /// Public albums use their own overrides, everything else the global values.
    #[must_use]
    pub const fn compute(album: &Album, config: &GalleryConfig) -> Self {
        if album.is_public {
            Self {
                full_photo: album.full_photo_override,
                downloadable: album.downloadable_override,
                share_button_visible: album.share_button_visible_override,
            }
        } else {
            Self {
                full_photo: config.full_photo,
                downloadable: config.downloadable,
                share_button_visible: config.share_button_visible,
            }
        }
    }
}

/// A visible album together with everything derived for this viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAlbum {
    pub album: Album,
    pub effective: EffectiveAttributes,
    /// Password protected and not yet unlocked by this viewer.
    pub locked: bool,
}

impl ResolvedAlbum {
    fn new(album: Album, viewer: &ViewerContext, config: &GalleryConfig) -> Self {
        let effective = EffectiveAttributes::compute(&album, config);
        let locked = album.has_password
            && !viewer.is_admin()
            && !album.is_owned_by(viewer.user_id())
            && !viewer.has_unlocked(&album.id);
        Self {
            album,
            effective,
            locked,
        }
    }
}

/// Keeps the albums the viewer may see, in input order, and resolves their
/// effective attributes.
#[must_use]
pub fn resolve(
    albums: impl IntoIterator<Item = Album>,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Vec<ResolvedAlbum> {
    let filter = album_visibility_filter(viewer, config);
    let resolved: Vec<ResolvedAlbum> = albums
        .into_iter()
        .filter(|album| filter.matches(album))
        .map(|album| ResolvedAlbum::new(album, viewer, config))
        .collect();
    debug!(
        "Resolved {} visible albums for {} viewer",
        resolved.len(),
        viewer.role()
    );
    resolved
}

#[must_use]
pub fn resolve_one(
    album: Album,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Option<ResolvedAlbum> {
    album_visibility_filter(viewer, config)
        .matches(&album)
        .then(|| ResolvedAlbum::new(album, viewer, config))
}

/// Root level of the album tree: visible albums without parent, and all
/// visible tag albums, in the configured order.
#[must_use]
pub fn top_level(
    albums: impl IntoIterator<Item = Album>,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Vec<ResolvedAlbum> {
    let mut resolved = resolve(
        albums.into_iter().filter(|album| album.parent_id().is_none()),
        viewer,
        config,
    );
    sort_albums(&mut resolved, config.album_sort);
    resolved
}

/// Visible direct children of `parent_id`, in the configured order.
///
/// Each child is judged on its own flags, so a visible child of a hidden
/// parent is still returned.
#[must_use]
pub fn children(
    parent_id: &str,
    albums: impl IntoIterator<Item = Album>,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> Vec<ResolvedAlbum> {
    let mut resolved = resolve(
        albums
            .into_iter()
            .filter(|album| album.parent_id() == Some(parent_id)),
        viewer,
        config,
    );
    sort_albums(&mut resolved, config.album_sort);
    resolved
}

/// Ties are broken by ascending id, whatever the direction.
pub fn sort_albums(albums: &mut [ResolvedAlbum], sort: AlbumSort) {
    albums.sort_by(|a, b| {
        let (a, b) = (&a.album, &b.album);
        let primary = match sort.column {
            AlbumSortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            AlbumSortColumn::Title => a.title.cmp(&b.title),
            AlbumSortColumn::Id => Ordering::Equal,
        };
        let primary = match sort.direction {
            SortDirection::Asc => primary,
            SortDirection::Desc => primary.reverse(),
        };
        let by_id = match (sort.column, sort.direction) {
            (AlbumSortColumn::Id, SortDirection::Desc) => b.id.cmp(&a.id),
            _ => a.id.cmp(&b.id),
        };
        primary.then(by_id)
    });
}
