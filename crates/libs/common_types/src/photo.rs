use bon::Builder;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Textual form of `taken_at` that free-text search matches against.
pub const TAKEN_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A photo as handed over by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[builder(into)]
    pub id: String,
    /// `None` for unsorted photos.
    #[builder(into)]
    pub album_id: Option<String>,
    pub owner_id: i32,
    #[builder(default)]
    #[serde(default)]
    pub is_public: bool,
    #[builder(default)]
    #[serde(default)]
    pub starred: bool,
    #[builder(into, default)]
    #[serde(default)]
    pub title: String,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(default)]
    #[serde(default)]
    pub tags: Vec<String>,
    #[builder(into)]
    pub location: Option<String>,
    #[builder(into)]
    pub model: Option<String>,
    pub taken_at: Option<NaiveDateTime>,
    #[builder(default = DateTime::<Utc>::UNIX_EPOCH)]
    pub created_at: DateTime<Utc>,
}

impl Photo {
    #[must_use]
    pub const fn is_unsorted(&self) -> bool {
        self.album_id.is_none()
    }

    /// Tags joined the way they are stored, comma separated.
    #[must_use]
    pub fn tags_text(&self) -> String {
        self.tags.join(",")
    }

    #[must_use]
    pub fn taken_at_text(&self) -> Option<String> {
        self.taken_at
            .map(|taken_at| taken_at.format(TAKEN_AT_FORMAT).to_string())
    }
}
