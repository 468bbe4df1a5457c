use app_state::GalleryConfig;
use color_eyre::eyre::{Context, Result};
use common_services::AccessError;
use common_services::database::{AlbumStore, PhotoStore};
use common_services::search::SearchEngine;
use common_types::{Album, Photo, ViewerContext};
use serde::Deserialize;
use sqlx::{Pool, Postgres};
use std::fs;
use std::path::Path;
use tracing::info;

/// Albums and photos read from a JSON file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Catalog {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Cannot read fixture {}", path.display()))?;
        let catalog: Self = serde_json::from_str(&text)
            .wrap_err_with(|| format!("Invalid fixture {}", path.display()))?;
        info!(
            "Loaded {} albums and {} photos from {}",
            catalog.albums.len(),
            catalog.photos.len(),
            path.display()
        );
        Ok(catalog)
    }
}

/// Where albums and photos come from.
///
/// The database variant already filters in SQL. Callers resolve the
/// returned albums again either way, which keeps both paths on the same
/// rules.
pub enum Source {
    Fixture(Catalog),
    Database(Pool<Postgres>),
}

impl Source {
    pub async fn albums(
        &self,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Album>, AccessError> {
        match self {
            Self::Fixture(catalog) => Ok(catalog.albums.clone()),
            Self::Database(pool) => Ok(AlbumStore::list_visible(pool, viewer, config).await?),
        }
    }

    pub async fn children(
        &self,
        parent_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Album>, AccessError> {
        match self {
            Self::Fixture(catalog) => Ok(catalog.albums.clone()),
            Self::Database(pool) => {
                Ok(AlbumStore::list_visible_children(pool, parent_id, viewer, config).await?)
            }
        }
    }

    pub async fn album(
        &self,
        album_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Option<Album>, AccessError> {
        match self {
            Self::Fixture(catalog) => Ok(catalog
                .albums
                .iter()
                .find(|album| album.id == album_id)
                .cloned()),
            Self::Database(pool) => {
                Ok(AlbumStore::find_visible_by_id(pool, album_id, viewer, config).await?)
            }
        }
    }

    /// Visible photos matching every term.
    pub async fn search(
        &self,
        terms: &[String],
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Photo>, AccessError> {
        match self {
            Self::Fixture(catalog) => Ok(SearchEngine::new(&catalog.albums, &catalog.photos)
                .search(terms, viewer, config)
                .into_iter()
                .cloned()
                .collect()),
            Self::Database(pool) => Ok(PhotoStore::search(pool, terms, viewer, config).await?),
        }
    }
}
