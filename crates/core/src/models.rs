use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model already present in the backend's local storage.
///
/// Produced entirely by the gateway response; the client never mutates
/// individual fields, it only replaces the whole collection on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalModel {
    pub name: String,
    /// Unique key for the model blob.
    pub digest: String,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    pub modified_at: DateTime<Utc>,
}

/// Wire shape of the gateway list response.
///
/// The backend may answer `{}` or omit the field entirely; both are
/// treated as an empty list.
#[derive(Debug, Default, Deserialize)]
pub struct ModelList {
    #[serde(default)]
    pub models: Vec<LocalModel>,
}

/// Curated suggestion list shown on the Discover tab. Names here are not
/// necessarily present locally; pulling one downloads it to the backend.
pub const DISCOVERABLE_MODELS: &[&str] = &[
    "llama3:8b",
    "llama3:70b",
    "mistral:7b",
    "gemma:2b",
    "gemma:7b",
    "phi3:mini",
    "qwen2:7b",
    "codellama:7b",
    "llava:7b",
    "tinyllama:1.1b",
];
