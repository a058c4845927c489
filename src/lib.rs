pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod vault;
