use super::{DbError, PhotoRow};
use crate::visibility::photo_visibility;
use app_state::GalleryConfig;
use common_types::{Photo, ViewerContext};
use sqlx::{Executor, Postgres, QueryBuilder};
use tracing::{debug, instrument};

const SELECT_PHOTOS: &str = r"
    SELECT
        p.id,
        p.album_id,
        p.owner_id,
        p.is_public,
        p.starred,
        p.title,
        p.description,
        p.tags,
        p.location,
        p.model,
        p.taken_at,
        p.created_at
    FROM photo p
    WHERE ";

/// Textual forms of the searchable photo fields, matching `Photo::tags_text`
/// and `Photo::taken_at_text`.
const SEARCH_COLUMNS: [&str; 6] = [
    "p.title",
    "p.description",
    "array_to_string(p.tags, ',')",
    "p.location",
    "p.model",
    "to_char(p.taken_at, 'YYYY-MM-DD HH24:MI:SS')",
];

pub struct PhotoStore;

impl PhotoStore {
    /// Query for the visible photos matching every term.
    ///
    /// Terms are expected to be sanitized by the caller; they are bound as
    /// `ILIKE '%term%'` patterns.
    #[must_use]
    pub fn search_query<S: AsRef<str>>(
        terms: &[S],
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_PHOTOS);
        photo_visibility(viewer, config).push_sql(&mut qb, "p");
        for term in terms {
            let pattern = format!("%{}%", term.as_ref());
            qb.push(" AND (");
            for (i, column) in SEARCH_COLUMNS.iter().enumerate() {
                if i > 0 {
                    qb.push(" OR ");
                }
                qb.push(format!("{column} ILIKE ")).push_bind(pattern.clone());
            }
            qb.push(")");
        }
        qb
    }

    /// Retrieves the visible photos matching every term. No terms returns all visible photos.
    #[instrument(skip(executor, terms, config))]
    pub async fn search<S: AsRef<str>>(
        executor: impl Executor<'_, Database = Postgres>,
        terms: &[S],
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Photo>, DbError> {
        let rows = Self::search_query(terms, viewer, config)
            .build_query_as::<PhotoRow>()
            .fetch_all(executor)
            .await?;
        debug!("Search with {} terms found {} photos", terms.len(), rows.len());
        Ok(rows.into_iter().map(Photo::from).collect())
    }

    /// Retrieves every photo the viewer may see.
    pub async fn list_visible(
        executor: impl Executor<'_, Database = Postgres>,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Photo>, DbError> {
        Self::search::<&str>(executor, &[], viewer, config).await
    }
}
