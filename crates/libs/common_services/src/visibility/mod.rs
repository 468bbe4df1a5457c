mod filter;
mod policy;
mod sql_filter;

pub use filter::*;
pub use policy::*;
