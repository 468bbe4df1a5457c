use crate::{ConfigStore, ConfigurationError, keys};
use std::str::FromStr;

/// Column albums are listed by when the caller does not ask for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlbumSortColumn {
    #[default]
    CreatedAt,
    Title,
    Id,
}

impl AlbumSortColumn {
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::CreatedAt => "created_at",
            Self::Title => "title",
            Self::Id => "id",
        }
    }
}

impl FromStr for AlbumSortColumn {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "created_at" => Ok(Self::CreatedAt),
            "title" => Ok(Self::Title),
            "id" => Ok(Self::Id),
            _ => Err(ConfigurationError::InvalidValue {
                key: keys::SORTING_ALBUMS_COL.to_owned(),
                value: s.to_owned(),
                expected: "one of created_at, title, id",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            _ => Err(ConfigurationError::InvalidValue {
                key: keys::SORTING_ALBUMS_ORDER.to_owned(),
                value: s.to_owned(),
                expected: "ASC or DESC",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlbumSort {
    pub column: AlbumSortColumn,
    pub direction: SortDirection,
}

/// Immutable snapshot of the gallery settings.
///
/// Taken once per request or operation and passed explicitly to every
/// visibility computation, so a computation never sees two different values
/// for the same setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Every logged-in user shares one library of all non-hidden albums.
    pub single_library: bool,
    /// Display name shown as owner of every album in single library mode.
    pub single_library_owner: Option<String>,
    pub public_photos_hidden: bool,
    pub full_photo: bool,
    pub downloadable: bool,
    pub share_button_visible: bool,
    pub album_sort: AlbumSort,
    pub recent_age_days: u32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            single_library: false,
            single_library_owner: None,
            public_photos_hidden: true,
            full_photo: true,
            downloadable: false,
            share_button_visible: false,
            album_sort: AlbumSort::default(),
            recent_age_days: 1,
        }
    }
}

impl GalleryConfig {
    pub fn from_store(store: &ConfigStore) -> Result<Self, ConfigurationError> {
        let recent_age_days = store.get_int(keys::RECENT_AGE_DAYS)?;
        let recent_age_days =
            u32::try_from(recent_age_days).map_err(|_| ConfigurationError::InvalidValue {
                key: keys::RECENT_AGE_DAYS.to_owned(),
                value: recent_age_days.to_string(),
                expected: "a non-negative number of days",
            })?;

        Ok(Self {
            single_library: store.get_bool(keys::SINGLE_LIBRARY)?,
            single_library_owner: store.get_optional_string(keys::SINGLE_LIBRARY_OWNER)?,
            public_photos_hidden: store.get_bool(keys::PUBLIC_PHOTOS_HIDDEN)?,
            full_photo: store.get_bool(keys::FULL_PHOTO)?,
            downloadable: store.get_bool(keys::DOWNLOADABLE)?,
            share_button_visible: store.get_bool(keys::SHARE_BUTTON_VISIBLE)?,
            album_sort: AlbumSort {
                column: store.get_string(keys::SORTING_ALBUMS_COL)?.parse()?,
                direction: store.get_string(keys::SORTING_ALBUMS_ORDER)?.parse()?,
            },
            recent_age_days,
        })
    }

    /// The single library display name, required whenever it is shown.
    pub fn single_library_owner(&self) -> Result<&str, ConfigurationError> {
        self.single_library_owner
            .as_deref()
            .ok_or_else(|| ConfigurationError::MissingKey(keys::SINGLE_LIBRARY_OWNER.to_owned()))
    }
}
