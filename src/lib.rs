pub mod analyzer;
pub mod cli;
pub mod config;
pub mod demands;
pub mod error;
pub mod export;
pub mod logging;
pub mod pipeline;
pub mod scanner;
