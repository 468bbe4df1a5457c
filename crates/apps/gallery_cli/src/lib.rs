pub mod cli;
pub mod logging;
pub mod run;
pub mod source;
