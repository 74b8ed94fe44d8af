//! Add-to-cart transport: posts form fields to the storefront and classifies the reply.

use async_trait::async_trait;
use reqwest::{multipart::Form, Client};
use shared::{
    domain::CartSummary,
    error::ProtocolError,
    protocol::{AddToCartResponse, FormField, REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE},
};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid form action '{action}': {source}")]
    InvalidAction {
        action: String,
        #[source]
        source: url::ParseError,
    },
    #[error("add-to-cart request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unreadable add-to-cart response (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: ProtocolError,
    },
}

#[async_trait]
pub trait CartTransport: Send + Sync {
    /// Posts `fields` to the form's `action` and returns the parsed reply.
    async fn post_form(
        &self,
        action: &str,
        fields: &[FormField],
    ) -> Result<AddToCartResponse, TransportError>;
}

pub struct HttpCartTransport {
    http: Client,
    base_url: Url,
}

impl HttpCartTransport {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a form action the way a browser does: relative to the page URL,
    /// with an empty action meaning the page URL itself.
    pub fn resolve_action(&self, action: &str) -> Result<Url, TransportError> {
        let action = action.trim();
        if action.is_empty() {
            return Ok(self.base_url.clone());
        }
        self.base_url
            .join(action)
            .map_err(|source| TransportError::InvalidAction {
                action: action.to_string(),
                source,
            })
    }
}

#[async_trait]
impl CartTransport for HttpCartTransport {
    async fn post_form(
        &self,
        action: &str,
        fields: &[FormField],
    ) -> Result<AddToCartResponse, TransportError> {
        let url = self.resolve_action(action)?;
        debug!(%url, fields = fields.len(), "posting add-to-cart form");

        let form = fields.iter().fold(Form::new(), |form, field| {
            form.text(field.name.clone(), field.value.clone())
        });
        let response = self
            .http
            .post(url)
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE)
            .multipart(form)
            .send()
            .await?;

        // Status alone does not decide the outcome: error replies still carry JSON.
        let status = response.status();
        let body = response.bytes().await?;
        AddToCartResponse::from_slice(&body).map_err(|source| {
            warn!(status = status.as_u16(), error = %source, "add-to-cart reply was not usable JSON");
            TransportError::Decode {
                status: status.as_u16(),
                source,
            }
        })
    }
}

#[derive(Debug)]
pub enum AddToCartOutcome {
    Added {
        message: Option<String>,
        summary: CartSummary,
    },
    Rejected {
        error: Option<String>,
    },
    Failed(TransportError),
}

impl AddToCartOutcome {
    pub fn from_result(result: Result<AddToCartResponse, TransportError>) -> Self {
        match result {
            Ok(response) if response.success => {
                let summary = response.summary();
                Self::Added {
                    message: response.message,
                    summary,
                }
            }
            Ok(response) => Self::Rejected {
                error: response.error,
            },
            Err(err) => Self::Failed(err),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Added { .. } => "added",
            Self::Rejected { .. } => "rejected",
            Self::Failed(_) => "failed",
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
