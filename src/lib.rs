pub mod cli;
pub mod config;
pub mod process;
pub mod style;
