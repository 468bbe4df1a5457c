#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_inception,
    clippy::struct_excessive_bools
)]

pub mod access;
pub mod database;
mod error;
pub mod presenter;
pub mod search;
pub mod visibility;

pub use error::*;
