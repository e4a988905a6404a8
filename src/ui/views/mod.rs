pub mod config;
pub mod generate;
pub mod keys;
pub mod watch;
