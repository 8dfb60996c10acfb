pub mod config;
pub mod generate;
pub mod scan;
pub mod summary;
pub mod watch;
