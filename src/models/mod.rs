pub mod config;

pub use config::{AppConfig, Compression, CONFIG_ENV};
