use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tracing::debug;

use crate::error::GatewayError;
use crate::models::{LocalModel, ModelList};

/// The Model Registry Gateway: the backend HTTP service exposing the
/// model list and pull endpoints.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Fetch the models currently available in the backend's storage.
    async fn list_models(&self) -> Result<Vec<LocalModel>, GatewayError>;

    /// Ask the backend to download the named model. Returns once the
    /// progress stream reaches end-of-stream; individual progress records
    /// are not surfaced.
    async fn pull_model(&self, name: &str) -> Result<(), GatewayError>;
}

/// HTTP implementation of [`ModelGateway`] against the reverse-proxied
/// backend API (base path `/modelmanager/api` by default).
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("modelman/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl ModelGateway for HttpGateway {
    async fn list_models(&self) -> Result<Vec<LocalModel>, GatewayError> {
        let url = self.endpoint("models");
        debug!(%url, "listing local models");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status().as_u16()));
        }

        let list: ModelList = response.json().await?;
        Ok(list.models)
    }

    async fn pull_model(&self, name: &str) -> Result<(), GatewayError> {
        let url = self.endpoint("models/pull");
        debug!(%url, model = name, "requesting model pull");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status().as_u16()));
        }

        // The body is a stream of progress records. Drain it to completion;
        // success is solely "stream reached end without transport error".
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            chunk?;
        }

        debug!(model = name, "pull stream finished");
        Ok(())
    }
}
