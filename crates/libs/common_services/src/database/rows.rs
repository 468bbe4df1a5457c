use super::DbError;
use chrono::{DateTime, NaiveDateTime, Utc};
use common_types::{Album, AlbumKind, Photo};
use sqlx::FromRow;
use std::collections::BTreeSet;

/// An `album` row joined with its owner name and share list.
#[derive(Debug, Clone, FromRow)]
pub struct AlbumRow {
    pub id: String,
    pub title: String,
    pub owner_id: i32,
    pub owner_name: String,
    pub is_public: bool,
    pub viewable: bool,
    pub requires_link: bool,
    pub has_password: bool,
    pub full_photo: bool,
    pub downloadable: bool,
    pub share_button_visible: bool,
    pub shared_with: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub album_kind: String,
    pub parent_id: Option<String>,
    pub cover_id: Option<String>,
    pub show_tags: Option<Vec<String>>,
}

impl TryFrom<AlbumRow> for Album {
    type Error = DbError;

    fn try_from(row: AlbumRow) -> Result<Self, Self::Error> {
        let kind = match row.album_kind.as_str() {
            "plain" => AlbumKind::Plain {
                parent_id: row.parent_id,
                cover_id: row.cover_id,
            },
            "tag" => AlbumKind::Tag {
                show_tags: row.show_tags.unwrap_or_default(),
            },
            other => {
                return Err(DbError::InvalidRow(format!(
                    "album {} has unknown kind {other}",
                    row.id
                )));
            }
        };

        Ok(Self {
            id: row.id,
            title: row.title,
            owner_id: row.owner_id,
            owner_name: row.owner_name,
            is_public: row.is_public,
            viewable: row.viewable,
            requires_link: row.requires_link,
            has_password: row.has_password,
            full_photo_override: row.full_photo,
            downloadable_override: row.downloadable,
            share_button_visible_override: row.share_button_visible,
            shared_with: row.shared_with.into_iter().collect::<BTreeSet<_>>(),
            created_at: row.created_at,
            kind,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct PhotoRow {
    pub id: String,
    pub album_id: Option<String>,
    pub owner_id: i32,
    pub is_public: bool,
    pub starred: bool,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub location: Option<String>,
    pub model: Option<String>,
    pub taken_at: Option<NaiveDateTime>,
    pub created_at: DateTime<Utc>,
}

impl From<PhotoRow> for Photo {
    fn from(row: PhotoRow) -> Self {
        Self {
            id: row.id,
            album_id: row.album_id,
            owner_id: row.owner_id,
            is_public: row.is_public,
            starred: row.starred,
            title: row.title,
            description: row.description,
            tags: row.tags,
            location: row.location,
            model: row.model,
            taken_at: row.taken_at,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(album_kind: &str) -> AlbumRow {
        AlbumRow {
            id: "a1".to_owned(),
            title: "Holiday".to_owned(),
            owner_id: 5,
            owner_name: "Alice".to_owned(),
            is_public: false,
            viewable: true,
            requires_link: false,
            has_password: true,
            full_photo: true,
            downloadable: false,
            share_button_visible: false,
            shared_with: vec![8, 7, 8],
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            album_kind: album_kind.to_owned(),
            parent_id: Some("root".to_owned()),
            cover_id: None,
            show_tags: None,
        }
    }

    #[test]
    fn test_plain_row() -> Result<(), DbError> {
        let album = Album::try_from(row("plain"))?;

        assert_eq!(album.parent_id(), Some("root"));
        assert_eq!(album.shared_with, BTreeSet::from([7, 8]));
        assert!(album.full_photo_override);
        assert!(album.has_password);
        Ok(())
    }

    #[test]
    fn test_tag_row_without_tags() -> Result<(), DbError> {
        let album = Album::try_from(row("tag"))?;

        assert_eq!(album.kind, AlbumKind::Tag { show_tags: vec![] });
        assert_eq!(album.parent_id(), None);
        Ok(())
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(
            Album::try_from(row("smart")),
            Err(DbError::InvalidRow(_))
        ));
    }
}
