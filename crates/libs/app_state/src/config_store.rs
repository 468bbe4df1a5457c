use crate::{ConfigurationError, GalleryConfig};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fmt::Display;

/// Names of the gallery settings this workspace reads.
pub mod keys {
    pub const SINGLE_LIBRARY: &str = "single_library";
    pub const SINGLE_LIBRARY_OWNER: &str = "single_library_owner";
    pub const PUBLIC_PHOTOS_HIDDEN: &str = "public_photos_hidden";
    pub const FULL_PHOTO: &str = "full_photo";
    pub const DOWNLOADABLE: &str = "downloadable";
    pub const SHARE_BUTTON_VISIBLE: &str = "share_button_visible";
    pub const SORTING_ALBUMS_COL: &str = "sorting_albums_col";
    pub const SORTING_ALBUMS_ORDER: &str = "sorting_albums_order";
    pub const RECENT_AGE_DAYS: &str = "recent_age_days";
}

/// A raw setting value as it comes out of YAML or the environment.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Documented fallback for a key, `None` when the key has to be configured.
fn default_value(key: &str) -> Option<ConfigValue> {
    let value = match key {
        keys::SINGLE_LIBRARY | keys::DOWNLOADABLE | keys::SHARE_BUTTON_VISIBLE => {
            ConfigValue::Bool(false)
        }
        keys::PUBLIC_PHOTOS_HIDDEN | keys::FULL_PHOTO => ConfigValue::Bool(true),
        keys::SORTING_ALBUMS_COL => ConfigValue::Text("created_at".to_owned()),
        keys::SORTING_ALBUMS_ORDER => ConfigValue::Text("ASC".to_owned()),
        keys::RECENT_AGE_DAYS => ConfigValue::Int(1),
        _ => return None,
    };
    Some(value)
}

/// Key/value gallery settings with typed accessors.
///
/// Read-only once loaded. Computations never read from it directly; they take a
/// [`GalleryConfig`] snapshot built by [`ConfigStore::snapshot`].
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ConfigStore {
    values: HashMap<String, ConfigValue>,
}

impl ConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.values.insert(key.to_owned(), value.into());
        self
    }

    /// The configured value, falling back to the documented default.
    pub fn get(&self, key: &str) -> Result<ConfigValue, ConfigurationError> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| default_value(key))
            .ok_or_else(|| ConfigurationError::MissingKey(key.to_owned()))
    }

    /// Like [`ConfigStore::get`], but a key without default is `Ok(None)`.
    pub fn get_optional_string(&self, key: &str) -> Result<Option<String>, ConfigurationError> {
        match self.get(key) {
            Ok(value) => Ok(Some(value.to_string())),
            Err(ConfigurationError::MissingKey(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Accepts booleans as well as the `0`/`1` and `"true"`/`"false"` forms.
    pub fn get_bool(&self, key: &str) -> Result<bool, ConfigurationError> {
        match self.get(key)? {
            ConfigValue::Bool(b) => Ok(b),
            ConfigValue::Int(0) => Ok(false),
            ConfigValue::Int(1) => Ok(true),
            ConfigValue::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(invalid(key, &ConfigValue::Text(s), "a boolean")),
            },
            other @ ConfigValue::Int(_) => Err(invalid(key, &other, "a boolean")),
        }
    }

    pub fn get_int(&self, key: &str) -> Result<i64, ConfigurationError> {
        match self.get(key)? {
            ConfigValue::Int(i) => Ok(i),
            ConfigValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| invalid(key, &ConfigValue::Text(s.clone()), "an integer")),
            other @ ConfigValue::Bool(_) => Err(invalid(key, &other, "an integer")),
        }
    }

    pub fn get_string(&self, key: &str) -> Result<String, ConfigurationError> {
        Ok(self.get(key)?.to_string())
    }

    /// Reads every setting once into an immutable snapshot.
    pub fn snapshot(&self) -> Result<GalleryConfig, ConfigurationError> {
        GalleryConfig::from_store(self)
    }
}

fn invalid(key: &str, value: &ConfigValue, expected: &'static str) -> ConfigurationError {
    ConfigurationError::InvalidValue {
        key: key.to_owned(),
        value: value.to_string(),
        expected,
    }
}
