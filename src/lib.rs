pub mod app;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod note;
pub mod storage;
pub mod ui;
pub mod wizard;

pub use config::{AppConfig, ConfigLoader, ConfigPaths};
