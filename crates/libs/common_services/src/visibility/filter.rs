use common_types::{Album, Photo};
use std::collections::HashSet;

/// A composable predicate over albums.
///
/// Evaluated in memory with [`AlbumFilter::matches`], or pushed down into a
/// query with [`AlbumFilter::push_sql`] so rows that fail it are never loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlbumFilter {
    All,
    /// Not hidden.
    Viewable,
    /// Public and not hidden.
    PubliclyViewable,
    OwnedBy(i32),
    SharedWith(i32),
    /// At least one of the filters holds. Empty means nothing matches.
    Any(Vec<AlbumFilter>),
}

impl AlbumFilter {
    #[must_use]
    pub fn matches(&self, album: &Album) -> bool {
        match self {
            Self::All => true,
            Self::Viewable => album.viewable,
            Self::PubliclyViewable => album.is_publicly_viewable(),
            Self::OwnedBy(user_id) => album.owner_id == *user_id,
            Self::SharedWith(user_id) => album.shared_with.contains(user_id),
            Self::Any(filters) => filters.iter().any(|f| f.matches(album)),
        }
    }

    /// Ids of the albums in `albums` that pass the filter.
    #[must_use]
    pub fn matching_ids<'a>(&self, albums: &'a [Album]) -> HashSet<&'a str> {
        albums
            .iter()
            .filter(|album| self.matches(album))
            .map(|album| album.id.as_str())
            .collect()
    }
}

/// Photos that are visible regardless of which album they are in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFilter {
    Nothing,
    /// Every photo without an album.
    Unsorted,
    /// Photos without an album uploaded by this user.
    UnsortedOwnedBy(i32),
    /// Photos flagged public, wherever they are.
    Public,
}

impl PhotoFilter {
    #[must_use]
    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            Self::Nothing => false,
            Self::Unsorted => photo.is_unsorted(),
            Self::UnsortedOwnedBy(user_id) => photo.is_unsorted() && photo.owner_id == *user_id,
            Self::Public => photo.is_public,
        }
    }
}

/// Photo visibility: membership of a visible album OR the extra photo filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoVisibility {
    pub albums: AlbumFilter,
    pub unsorted_or_public: PhotoFilter,
}

impl PhotoVisibility {
    /// `visible_album_ids` must be the ids that pass `self.albums`.
    /// A photo whose album is not among them only passes through the photo filter.
    #[must_use]
    pub fn matches(&self, photo: &Photo, visible_album_ids: &HashSet<&str>) -> bool {
        let in_visible_album = photo
            .album_id
            .as_deref()
            .is_some_and(|album_id| visible_album_ids.contains(album_id));
        in_visible_album || self.unsorted_or_public.matches(photo)
    }
}
