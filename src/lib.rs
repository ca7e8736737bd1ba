pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod render;
pub mod report;
pub mod scanner;
