use thiserror::Error;

/// Errors raised by the Model Registry Gateway.
///
/// Both variants are caught at the workflow boundary and converted to a
/// user-visible status message; neither propagates further and neither is
/// retried.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Transport failure: unreachable backend, broken stream, bad body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned HTTP status {0}")]
    HttpStatus(u16),
}
