use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("response body is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("response body does not match the add-to-cart shape: {0}")]
    UnexpectedShape(#[source] serde_json::Error),
}
