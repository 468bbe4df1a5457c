#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]

mod config_store;
mod error;
mod gallery_config;
mod load_settings;
mod raw_settings;
mod settings;

pub use config_store::*;
pub use error::*;
pub use gallery_config::*;
pub use load_settings::*;
pub use raw_settings::*;
pub use settings::*;
