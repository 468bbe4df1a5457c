mod resolver;
mod smart_albums;

pub use resolver::*;
pub use smart_albums::*;
