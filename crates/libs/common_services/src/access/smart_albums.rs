use crate::visibility::{photo_visibility, visible_album_ids};
use app_state::GalleryConfig;
use chrono::{DateTime, Duration, Utc};
use common_types::{Album, Photo, ViewerContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;
use utoipa::ToSchema;

/// Virtual albums computed over the photos a viewer may see.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SmartAlbumKind {
    Unsorted,
    Starred,
    Public,
    Recent,
}

impl SmartAlbumKind {
    pub const ALL: [Self; 4] = [Self::Unsorted, Self::Starred, Self::Public, Self::Recent];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unsorted => "unsorted",
            Self::Starred => "starred",
            Self::Public => "public",
            Self::Recent => "recent",
        }
    }

    fn contains(self, photo: &Photo, recent_since: DateTime<Utc>) -> bool {
        match self {
            Self::Unsorted => photo.is_unsorted(),
            Self::Starred => photo.starred,
            Self::Public => photo.is_public,
            Self::Recent => photo.created_at >= recent_since,
        }
    }
}

impl Display for SmartAlbumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SmartAlbumKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown smart album: {s}"))
    }
}

/// Photos of a smart album, in input order.
///
/// Only photos the viewer may see are considered. `now` anchors the
/// [`SmartAlbumKind::Recent`] window of `recent_age_days`.
#[must_use]
pub fn smart_album_photos<'a>(
    kind: SmartAlbumKind,
    photos: &'a [Photo],
    albums: &[Album],
    viewer: &ViewerContext,
    config: &GalleryConfig,
    now: DateTime<Utc>,
) -> Vec<&'a Photo> {
    let visibility = photo_visibility(viewer, config);
    let visible_ids = visible_album_ids(albums, viewer, config);
    // A window reaching past the earliest representable time includes every photo.
    let recent_since = Duration::try_days(i64::from(config.recent_age_days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);

    let result: Vec<&Photo> = photos
        .iter()
        .filter(|photo| visibility.matches(photo, &visible_ids))
        .filter(|photo| kind.contains(photo, recent_since))
        .collect();
    debug!("Smart album {} has {} photos", kind, result.len());
    result
}
