use super::{AlbumRow, DbError};
use crate::visibility::album_visibility_filter;
use app_state::{AlbumSort, AlbumSortColumn, GalleryConfig};
use common_types::{Album, ViewerContext};
use sqlx::{Executor, Postgres, QueryBuilder};
use tracing::{debug, instrument};

const SELECT_ALBUMS: &str = r"
    SELECT
        a.id,
        a.title,
        a.owner_id,
        u.name AS owner_name,
        a.is_public,
        a.viewable,
        a.requires_link,
        (a.password IS NOT NULL) AS has_password,
        a.full_photo,
        a.downloadable,
        a.share_button_visible,
        COALESCE(
            (SELECT array_agg(s.user_id) FROM album_shared_user s WHERE s.album_id = a.id),
            '{}'
        ) AS shared_with,
        a.created_at,
        a.album_kind,
        a.parent_id,
        a.cover_id,
        a.show_tags
    FROM album a
    JOIN app_user u ON u.id = a.owner_id
    WHERE ";

pub struct AlbumStore;

impl AlbumStore {
    /// Query for all albums the viewer may see, in the configured order.
    #[must_use]
    pub fn visible_albums_query(
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_ALBUMS);
        album_visibility_filter(viewer, config).push_sql(&mut qb, "a");
        push_album_order(&mut qb, config.album_sort);
        qb
    }

    /// Query for the visible direct children of `parent_id`.
    #[must_use]
    pub fn visible_children_query(
        parent_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_ALBUMS);
        qb.push("a.parent_id = ").push_bind(parent_id.to_owned());
        qb.push(" AND ");
        album_visibility_filter(viewer, config).push_sql(&mut qb, "a");
        push_album_order(&mut qb, config.album_sort);
        qb
    }

    /// Query for one album, which only returns a row if the viewer may see it.
    #[must_use]
    pub fn visible_album_query(
        album_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SELECT_ALBUMS);
        qb.push("a.id = ").push_bind(album_id.to_owned());
        qb.push(" AND ");
        album_visibility_filter(viewer, config).push_sql(&mut qb, "a");
        qb
    }

    /// Retrieves all albums the viewer may see.
    #[instrument(skip(executor, config))]
    pub async fn list_visible(
        executor: impl Executor<'_, Database = Postgres>,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Album>, DbError> {
        let rows = Self::visible_albums_query(viewer, config)
            .build_query_as::<AlbumRow>()
            .fetch_all(executor)
            .await?;
        debug!("Loaded {} visible albums", rows.len());
        rows.into_iter().map(Album::try_from).collect()
    }

    /// Retrieves the visible direct children of an album.
    #[instrument(skip(executor, config))]
    pub async fn list_visible_children(
        executor: impl Executor<'_, Database = Postgres>,
        parent_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Vec<Album>, DbError> {
        let rows = Self::visible_children_query(parent_id, viewer, config)
            .build_query_as::<AlbumRow>()
            .fetch_all(executor)
            .await?;
        rows.into_iter().map(Album::try_from).collect()
    }

    /// Retrieves a single album by its ID, `None` if it does not exist or is not visible.
    #[instrument(skip(executor, config))]
    pub async fn find_visible_by_id(
        executor: impl Executor<'_, Database = Postgres>,
        album_id: &str,
        viewer: &ViewerContext,
        config: &GalleryConfig,
    ) -> Result<Option<Album>, DbError> {
        let row = Self::visible_album_query(album_id, viewer, config)
            .build_query_as::<AlbumRow>()
            .fetch_optional(executor)
            .await?;
        row.map(Album::try_from).transpose()
    }
}

/// The sort column comes from a closed enum, so it is safe to inline.
/// Ties are broken by ascending id.
fn push_album_order(qb: &mut QueryBuilder<'_, Postgres>, sort: AlbumSort) {
    let direction = sort.direction.as_sql();
    match sort.column {
        AlbumSortColumn::Id => qb.push(format!(" ORDER BY a.id {direction}")),
        column => qb.push(format!(
            " ORDER BY a.{} {direction}, a.id ASC",
            column.as_sql()
        )),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::SortDirection;

    fn where_clause<'q>(qb: &'q QueryBuilder<'_, Postgres>) -> &'q str {
        let sql = qb.sql();
        sql.rsplit_once("WHERE ").map_or(sql, |(_, clause)| clause)
    }

    #[test]
    fn test_anonymous_query() {
        let qb = AlbumStore::visible_albums_query(&ViewerContext::anonymous(), &GalleryConfig::default());

        assert_eq!(
            where_clause(&qb),
            "(a.is_public AND a.viewable) ORDER BY a.created_at ASC, a.id ASC"
        );
    }

    #[test]
    fn test_admin_query() {
        let config = GalleryConfig {
            album_sort: AlbumSort {
                column: AlbumSortColumn::Title,
                direction: SortDirection::Desc,
            },
            ..GalleryConfig::default()
        };
        let qb = AlbumStore::visible_albums_query(&ViewerContext::admin(1), &config);

        assert_eq!(where_clause(&qb), "TRUE ORDER BY a.title DESC, a.id ASC");
    }

    #[test]
    fn test_id_sort_direction() {
        let config = GalleryConfig {
            album_sort: AlbumSort {
                column: AlbumSortColumn::Id,
                direction: SortDirection::Desc,
            },
            ..GalleryConfig::default()
        };
        let qb = AlbumStore::visible_albums_query(&ViewerContext::admin(1), &config);

        assert_eq!(where_clause(&qb), "TRUE ORDER BY a.id DESC");
    }

    #[test]
    fn test_single_library_query() {
        let config = GalleryConfig {
            single_library: true,
            ..GalleryConfig::default()
        };
        let qb = AlbumStore::visible_albums_query(&ViewerContext::user(3, false), &config);

        assert_eq!(where_clause(&qb), "a.viewable ORDER BY a.created_at ASC, a.id ASC");
    }

    #[test]
    fn test_children_query() {
        let qb = AlbumStore::visible_children_query(
            "root",
            &ViewerContext::user(3, false),
            &GalleryConfig::default(),
        );
        let sql = qb.sql();

        assert!(sql.contains("a.parent_id = $1 AND (a.owner_id = $2 OR EXISTS"));
        assert!(sql.contains("asu.user_id = $3)"));
    }

    #[test]
    fn test_single_album_query() {
        let qb = AlbumStore::visible_album_query(
            "a1",
            &ViewerContext::anonymous(),
            &GalleryConfig::default(),
        );

        assert!(qb.sql().ends_with("a.id = $1 AND (a.is_public AND a.viewable)"));
    }
}
