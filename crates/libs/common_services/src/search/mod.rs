mod engine;
mod terms;

pub use engine::*;
pub use terms::*;
