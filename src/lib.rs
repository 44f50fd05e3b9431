pub mod config;
pub mod motion;
pub mod protocol;
