//! modelman_core - Core library for the model manager client
//!
//! This crate provides:
//! - Model Registry Gateway client (list and pull models over HTTP)
//! - Client state and the fetch/pull workflows
//! - Theme preference and backend configuration

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod state;
pub mod theme;

pub use config::Config;
pub use error::GatewayError;
pub use gateway::{HttpGateway, ModelGateway};
pub use models::{LocalModel, ModelList, DISCOVERABLE_MODELS};
pub use state::{ClientState, Status, StatusKind};
pub use theme::{Theme, ThemePreference};
