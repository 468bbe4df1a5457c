#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]
mod album;
mod photo;
mod viewer;

pub use album::*;
pub use photo::*;
pub use viewer::*;
