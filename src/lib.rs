//! gumdrop: author reusable droplet launch configurations from the live
//! provider catalog and keep them in a local YAML file.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod prompt;
pub mod store;
pub mod wizard;

pub use error::AppError;
