use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Fields that only one kind of album carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AlbumKind {
    /// A regular album, optionally nested under another plain album.
    #[serde(rename_all = "camelCase")]
    Plain {
        parent_id: Option<String>,
        cover_id: Option<String>,
    },
    /// An album whose contents are all photos carrying one of `show_tags`.
    #[serde(rename_all = "camelCase")]
    Tag { show_tags: Vec<String> },
}

impl AlbumKind {
    #[must_use]
    pub const fn plain() -> Self {
        Self::Plain {
            parent_id: None,
            cover_id: None,
        }
    }
}

impl Default for AlbumKind {
    fn default() -> Self {
        Self::plain()
    }
}

/// An album as handed over by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub title: String,
    pub owner_id: i32,
    /// Display name of the owner, joined in by the store.
    #[builder(into, default)]
    #[serde(default)]
    pub owner_name: String,
    #[builder(default)]
    pub is_public: bool,
    /// `false` means the album is hidden from listings.
    #[builder(default = true)]
    pub viewable: bool,
    #[builder(default)]
    #[serde(default)]
    pub requires_link: bool,
    #[builder(default)]
    #[serde(default)]
    pub has_password: bool,
    #[builder(default)]
    #[serde(default)]
    pub full_photo_override: bool,
    #[builder(default)]
    #[serde(default)]
    pub downloadable_override: bool,
    #[builder(default)]
    #[serde(default)]
    pub share_button_visible_override: bool,
    #[builder(default)]
    #[serde(default)]
    pub shared_with: BTreeSet<i32>,
    #[builder(default = DateTime::<Utc>::UNIX_EPOCH)]
    pub created_at: DateTime<Utc>,
    #[builder(default)]
    #[serde(flatten)]
    pub kind: AlbumKind,
}

impl Album {
    /// Public and not hidden.
    #[must_use]
    pub const fn is_publicly_viewable(&self) -> bool {
        self.is_public && self.viewable
    }

    #[must_use]
    pub fn is_owned_by(&self, user_id: Option<i32>) -> bool {
        user_id.is_some_and(|id| id == self.owner_id)
    }

    #[must_use]
    pub fn is_shared_with(&self, user_id: Option<i32>) -> bool {
        user_id.is_some_and(|id| self.shared_with.contains(&id))
    }

    /// Parent of a plain album. Tag albums never have one.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        match &self.kind {
            AlbumKind::Plain { parent_id, .. } => parent_id.as_deref(),
            AlbumKind::Tag { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_tag_album(&self) -> bool {
        matches!(self.kind, AlbumKind::Tag { .. })
    }
}
