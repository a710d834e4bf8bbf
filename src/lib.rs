pub mod commands;
pub mod config;
pub mod process;
pub mod unix;
