pub mod config;
pub mod delay;
