//! Postgres collaborators that load albums and photos with the visibility
//! predicate pushed down into the query.
//!
//! Expected relations: `album` (one row per album, `album_kind` is `plain` or
//! `tag`), `album_shared_user (album_id, user_id)`, `photo` and `app_user`.

mod album_store;
mod error;
mod photo_store;
mod rows;
mod utils;

pub use album_store::*;
pub use error::*;
pub use photo_store::*;
pub use rows::*;
pub use utils::*;
