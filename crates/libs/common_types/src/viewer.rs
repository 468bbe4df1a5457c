use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    Anonymous,
    User,
    Admin,
}

impl Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Anonymous => "anonymous",
            Self::User => "user",
            Self::Admin => "admin",
        };
        f.write_str(s)
    }
}

/// The identity a request is evaluated for.
///
/// Built once per request by the session layer and never mutated afterwards.
/// The constructors keep `user_id` present for every role except
/// [`ViewerRole::Anonymous`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerContext {
    role: ViewerRole,
    user_id: Option<i32>,
    can_upload: bool,
    unlocked_albums: HashSet<String>,
}

impl ViewerContext {
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            role: ViewerRole::Anonymous,
            user_id: None,
            can_upload: false,
            unlocked_albums: HashSet::new(),
        }
    }

    #[must_use]
    pub fn user(user_id: i32, can_upload: bool) -> Self {
        Self {
            role: ViewerRole::User,
            user_id: Some(user_id),
            can_upload,
            unlocked_albums: HashSet::new(),
        }
    }

    /// Admins can always upload.
    #[must_use]
    pub fn admin(user_id: i32) -> Self {
        Self {
            role: ViewerRole::Admin,
            user_id: Some(user_id),
            can_upload: true,
            unlocked_albums: HashSet::new(),
        }
    }

    /// Albums this session already unlocked with their password.
    #[must_use]
    pub fn with_unlocked_albums<I, S>(mut self, album_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unlocked_albums
            .extend(album_ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn role(&self) -> ViewerRole {
        self.role
    }

    #[must_use]
    pub const fn user_id(&self) -> Option<i32> {
        self.user_id
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, ViewerRole::Admin)
    }

    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        !matches!(self.role, ViewerRole::Anonymous)
    }

    #[must_use]
    pub const fn can_upload(&self) -> bool {
        self.can_upload
    }

    #[must_use]
    pub fn has_unlocked(&self, album_id: &str) -> bool {
        self.unlocked_albums.contains(album_id)
    }
}
