//! Who may see which album or photo.
//!
//! Rules, first match wins:
//! 1. Admins see everything.
//! 2. Logged-in users see every non-hidden album in single library mode.
//!    Otherwise they see albums they own, albums shared with them, and public
//!    non-hidden albums.
//! 3. Anonymous viewers see public non-hidden albums.
//!
//! Password protection and `requires_link` are not part of visibility. They
//! gate a separate unlock step on albums that are already visible.

use super::{AlbumFilter, PhotoFilter, PhotoVisibility};
use app_state::GalleryConfig;
use common_types::{Album, Photo, ViewerContext, ViewerRole};
use std::collections::HashSet;

/// The album predicate for this viewer, in a form that can be pushed down.
#[must_use]
pub fn album_visibility_filter(viewer: &ViewerContext, config: &GalleryConfig) -> AlbumFilter {
    match (viewer.role(), viewer.user_id()) {
        (ViewerRole::Admin, _) => AlbumFilter::All,
        (ViewerRole::User, Some(_)) if config.single_library => AlbumFilter::Viewable,
        (ViewerRole::User, Some(user_id)) => AlbumFilter::Any(vec![
            AlbumFilter::OwnedBy(user_id),
            AlbumFilter::SharedWith(user_id),
            AlbumFilter::PubliclyViewable,
        ]),
        // Without an id nothing can be owned or shared, so only public albums remain.
        (ViewerRole::User, None) | (ViewerRole::Anonymous, _) => AlbumFilter::PubliclyViewable,
    }
}

#[must_use]
pub fn is_album_visible(album: &Album, viewer: &ViewerContext, config: &GalleryConfig) -> bool {
    album_visibility_filter(viewer, config).matches(album)
}

/// Ids of the albums in `albums` this viewer may see.
#[must_use]
pub fn visible_album_ids<'a>(
    albums: &'a [Album],
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> HashSet<&'a str> {
    album_visibility_filter(viewer, config).matching_ids(albums)
}

/// Photos this viewer may see outside of album visibility.
///
/// Admins get every unsorted photo, uploaders their own unsorted photos, and
/// everybody else public photos unless those are hidden by configuration.
#[must_use]
pub fn unsorted_or_public_filter(viewer: &ViewerContext, config: &GalleryConfig) -> PhotoFilter {
    if viewer.is_admin() {
        return PhotoFilter::Unsorted;
    }
    if viewer.can_upload() {
        return viewer
            .user_id()
            .map_or(PhotoFilter::Nothing, PhotoFilter::UnsortedOwnedBy);
    }
    if config.public_photos_hidden {
        PhotoFilter::Nothing
    } else {
        PhotoFilter::Public
    }
}

#[must_use]
pub fn photo_visibility(viewer: &ViewerContext, config: &GalleryConfig) -> PhotoVisibility {
    PhotoVisibility {
        albums: album_visibility_filter(viewer, config),
        unsorted_or_public: unsorted_or_public_filter(viewer, config),
    }
}

/// `visible_album_ids` is the output of [`visible_album_ids`] for the same
/// viewer and config.
#[must_use]
pub fn is_photo_visible(
    photo: &Photo,
    visible_album_ids: &HashSet<&str>,
    viewer: &ViewerContext,
    config: &GalleryConfig,
) -> bool {
    photo_visibility(viewer, config).matches(photo, visible_album_ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn album(owner_id: i32, is_public: bool, viewable: bool, shared_with: &[i32]) -> Album {
        Album::builder()
            .id("1")
            .title("Album")
            .owner_id(owner_id)
            .is_public(is_public)
            .viewable(viewable)
            .shared_with(shared_with.iter().copied().collect::<BTreeSet<_>>())
            .build()
    }

    /// Every combination of the flags that matter, owned by 5 and optionally shared with 7.
    fn all_albums() -> Vec<Album> {
        let mut albums = vec![];
        for is_public in [false, true] {
            for viewable in [false, true] {
                for shared_with in [&[][..], &[7][..]] {
                    albums.push(album(5, is_public, viewable, shared_with));
                }
            }
        }
        albums
    }

    fn single_library() -> GalleryConfig {
        GalleryConfig {
            single_library: true,
            ..GalleryConfig::default()
        }
    }

    #[test]
    fn test_filter_per_role() {
        let multi = GalleryConfig::default();
        let single = GalleryConfig {
            single_library: true,
            ..GalleryConfig::default()
        };
        let user = ViewerContext::user(7, false);

        assert_eq!(
            album_visibility_filter(&user, &multi),
            AlbumFilter::Any(vec![
                AlbumFilter::OwnedBy(7),
                AlbumFilter::SharedWith(7),
                AlbumFilter::PubliclyViewable,
            ])
        );
        assert_eq!(album_visibility_filter(&user, &single), AlbumFilter::Viewable);
        assert_eq!(
            album_visibility_filter(&ViewerContext::anonymous(), &single),
            AlbumFilter::PubliclyViewable
        );
        assert_eq!(
            album_visibility_filter(&ViewerContext::admin(1), &multi),
            AlbumFilter::All
        );
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = ViewerContext::admin(1);
        for config in [GalleryConfig::default(), single_library()] {
            for album in all_albums() {
                assert!(is_album_visible(&album, &admin, &config));
            }
        }
    }

    #[test]
    fn test_anonymous_sees_public_viewable_only() {
        let anonymous = ViewerContext::anonymous();
        for config in [GalleryConfig::default(), single_library()] {
            for album in all_albums() {
                assert_eq!(
                    is_album_visible(&album, &anonymous, &config),
                    album.is_public && album.viewable
                );
            }
        }
    }

    #[test]
    fn test_single_library_ignores_ownership() {
        let config = single_library();
        for user in [ViewerContext::user(5, true), ViewerContext::user(7, false), ViewerContext::user(8, false)] {
            for album in all_albums() {
                assert_eq!(is_album_visible(&album, &user, &config), album.viewable);
            }
        }
    }

    #[test]
    fn test_multi_library_rules() {
        let config = GalleryConfig::default();
        for user_id in [5, 7, 8] {
            let user = ViewerContext::user(user_id, false);
            for album in all_albums() {
                let expected = album.owner_id == user_id
                    || album.shared_with.contains(&user_id)
                    || (album.is_public && album.viewable);
                assert_eq!(is_album_visible(&album, &user, &config), expected);
            }
        }
    }

    #[test]
    fn test_sharing_scenario() {
        let config = GalleryConfig::default();
        let viewer = ViewerContext::user(7, false);

        assert!(!is_album_visible(&album(5, false, true, &[]), &viewer, &config));
        assert!(is_album_visible(&album(5, false, true, &[7]), &viewer, &config));
    }

    #[test]
    fn test_password_does_not_affect_visibility() {
        let mut locked = album(5, true, true, &[]);
        locked.has_password = true;
        locked.requires_link = true;

        assert!(is_album_visible(&locked, &ViewerContext::anonymous(), &GalleryConfig::default()));
    }

    #[test]
    fn test_unsorted_or_public() {
        let hidden = GalleryConfig::default();
        let shown = GalleryConfig {
            public_photos_hidden: false,
            ..GalleryConfig::default()
        };

        assert_eq!(unsorted_or_public_filter(&ViewerContext::admin(1), &hidden), PhotoFilter::Unsorted);
        assert_eq!(
            unsorted_or_public_filter(&ViewerContext::user(3, true), &shown),
            PhotoFilter::UnsortedOwnedBy(3)
        );
        assert_eq!(unsorted_or_public_filter(&ViewerContext::user(4, false), &shown), PhotoFilter::Public);
        assert_eq!(unsorted_or_public_filter(&ViewerContext::user(4, false), &hidden), PhotoFilter::Nothing);
        assert_eq!(unsorted_or_public_filter(&ViewerContext::anonymous(), &shown), PhotoFilter::Public);
    }

    #[test]
    fn test_unsorted_photo_scenario() {
        let config = GalleryConfig::default();
        let photo = Photo::builder().id("9").owner_id(3).build();
        let no_albums = HashSet::new();

        assert!(is_photo_visible(&photo, &no_albums, &ViewerContext::user(3, true), &config));
        assert!(!is_photo_visible(&photo, &no_albums, &ViewerContext::user(4, false), &config));
    }

    #[test]
    fn test_photo_follows_album() {
        let config = GalleryConfig::default();
        let albums = vec![album(5, false, true, &[7])];
        let photo = Photo::builder().id("p1").owner_id(5).album_id("1").build();

        let shared = ViewerContext::user(7, false);
        let stranger = ViewerContext::user(8, false);

        assert!(is_photo_visible(&photo, &visible_album_ids(&albums, &shared, &config), &shared, &config));
        assert!(!is_photo_visible(&photo, &visible_album_ids(&albums, &stranger, &config), &stranger, &config));
    }
}
