use super::photo_matches_all_terms;
use crate::visibility::{photo_visibility, visible_album_ids};
use app_state::GalleryConfig;
use common_types::{Album, Photo, ViewerContext};
use std::collections::HashSet;
use tracing::debug;

/// Free-text photo search over collections supplied by the persistence layer.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    albums: &'a [Album],
    photos: &'a [Photo],
}

impl<'a> SearchEngine<'a> {
    #[must_use]
    pub const fn new(albums: &'a [Album], photos: &'a [Photo]) -> Self {
        Self { albums, photos }
    }

    /// Photos the viewer may see that match every term.
    ///
    /// Candidates are the photos in visible albums plus the unsorted-or-public
    /// photos. No terms means no term filtering. The result is unordered.
    #[must_use]
    pub fn search<S: AsRef<str>>(
        &self,
        terms: &[S],
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> HashSet<&'a Photo> {
        let visibility = photo_visibility(viewer, config);
        let visible_ids = visible_album_ids(self.albums, viewer, config);

        let found: HashSet<&Photo> = self
            .photos
            .iter()
            .filter(|photo| visibility.matches(photo, &visible_ids))
            .filter(|photo| photo_matches_all_terms(photo, terms))
            .collect();
        debug!(
            "Search with {} terms found {} photos for {} viewer",
            terms.len(),
            found.len(),
            viewer.role()
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Album>, Vec<Photo>) {
        let albums = vec![
            Album::builder().id("public").title("Public").owner_id(1).is_public(true).build(),
            Album::builder().id("private").title("Private").owner_id(1).build(),
            Album::builder()
                .id("hidden")
                .title("Hidden")
                .owner_id(1)
                .is_public(true)
                .viewable(false)
                .build(),
        ];
        let photos = vec![
            Photo::builder()
                .id("public-sunset")
                .owner_id(1)
                .album_id("public")
                .title("Sunset at the beach")
                .build(),
            Photo::builder()
                .id("public-dog")
                .owner_id(1)
                .album_id("public")
                .title("Dog")
                .tags(vec!["sunset".to_owned()])
                .build(),
            Photo::builder()
                .id("public-cat")
                .owner_id(1)
                .album_id("public")
                .title("Cat")
                .build(),
            Photo::builder()
                .id("private-sunset")
                .owner_id(1)
                .album_id("private")
                .title("SUNSET")
                .build(),
            Photo::builder()
                .id("hidden-sunset")
                .owner_id(1)
                .album_id("hidden")
                .title("sunset")
                .build(),
            Photo::builder()
                .id("unsorted-sunset")
                .owner_id(3)
                .title("sunset")
                .build(),
            Photo::builder()
                .id("public-in-private")
                .owner_id(1)
                .album_id("private")
                .is_public(true)
                .location("Sunset Boulevard")
                .build(),
        ];
        (albums, photos)
    }

    fn ids(found: &HashSet<&Photo>) -> HashSet<String> {
        found.iter().map(|p| p.id.clone()).collect()
    }

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn test_empty_terms_return_all_visible() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);

        let found = engine.search::<&str>(&[], &ViewerContext::anonymous(), &GalleryConfig::default());

        assert_eq!(ids(&found), set(&["public-sunset", "public-dog", "public-cat"]));
    }

    #[test]
    fn test_term_filters_visible_photos() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);

        let found = engine.search(&["sunset"], &ViewerContext::anonymous(), &GalleryConfig::default());

        assert_eq!(ids(&found), set(&["public-sunset", "public-dog"]));
    }

    #[test]
    fn test_public_photos_shown() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);
        let config = GalleryConfig {
            public_photos_hidden: false,
            ..GalleryConfig::default()
        };

        let found = engine.search(&["sunset"], &ViewerContext::anonymous(), &config);

        assert_eq!(
            ids(&found),
            set(&["public-sunset", "public-dog", "public-in-private"])
        );
    }

    #[test]
    fn test_uploader_finds_own_unsorted() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);

        let found = engine.search(&["sunset"], &ViewerContext::user(3, true), &GalleryConfig::default());

        assert_eq!(
            ids(&found),
            set(&["public-sunset", "public-dog", "unsorted-sunset"])
        );
    }

    #[test]
    fn test_admin_finds_everything() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);

        let found = engine.search(&["sunset"], &ViewerContext::admin(9), &GalleryConfig::default());

        assert_eq!(
            ids(&found),
            set(&[
                "public-sunset",
                "public-dog",
                "private-sunset",
                "hidden-sunset",
                "unsorted-sunset",
                "public-in-private",
            ])
        );
    }

    #[test]
    fn test_all_terms_must_match() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);

        let found = engine.search(
            &["sunset", "beach"],
            &ViewerContext::anonymous(),
            &GalleryConfig::default(),
        );

        assert_eq!(ids(&found), set(&["public-sunset"]));
    }

    #[test]
    fn test_single_library_user() {
        let (albums, photos) = fixture();
        let engine = SearchEngine::new(&albums, &photos);
        let config = GalleryConfig {
            single_library: true,
            ..GalleryConfig::default()
        };

        let found = engine.search(&["sunset"], &ViewerContext::user(5, false), &config);

        assert_eq!(
            ids(&found),
            set(&["public-sunset", "public-dog", "private-sunset", "public-in-private"])
        );
    }
}
