use std::sync::Arc;
use std::time::Duration;

use super::Resolvable;
use super::error::DocumentLoadError;
use crate::model::document::DocumentSource;
use crate::proto::http_client::{self, HttpClient};

/// Fetches documents by locator with a single bounded GET, the body is read
/// no further than `max_size`
pub struct RemoteResolver {
    client: Arc<dyn HttpClient>,
    timeout: Duration,
    max_size: usize,
}

impl RemoteResolver {
    pub fn new(client: Arc<dyn HttpClient>, timeout: Duration, max_size: usize) -> Self {
        Self {
            client,
            timeout,
            max_size,
        }
    }
}

#[async_trait::async_trait]
impl Resolvable for RemoteResolver {
    fn can_resolve(&self, source: &DocumentSource) -> bool {
        matches!(source, DocumentSource::Remote(url) if matches!(url.scheme(), "http" | "https"))
    }

    async fn resolve(&self, source: &DocumentSource) -> Result<Vec<u8>, DocumentLoadError> {
        let DocumentSource::Remote(url) = source else {
            return Err(DocumentLoadError::MissingSource);
        };

        let request = self
            .client
            .get(url.as_str())
            .max_response_size(self.max_size);

        let response = tokio::time::timeout(self.timeout, request.send())
            .await
            .map_err(|_| DocumentLoadError::Unreachable("timed out".to_string()))?
            .map_err(to_load_error)?
            .error_for_status()
            .map_err(to_load_error)?;

        Ok(response.body)
    }
}

fn to_load_error(error: http_client::Error) -> DocumentLoadError {
    match error {
        http_client::Error::ResponseTooLarge { size, max } => {
            DocumentLoadError::TooLarge { size, max }
        }
        http_client::Error::StatusCodeIsError(status) => {
            DocumentLoadError::Unreachable(format!("HTTP status {status}"))
        }
        other => DocumentLoadError::Unreachable(other.to_string()),
    }
}
