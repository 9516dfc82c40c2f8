//! Signing payload production and signed artifact validation.
//!
//! [`SigningCore`] is built once from [`CoreConfig`]: every provider is
//! created and registered up front, afterwards the services only read
//! shared, immutable state.

use std::sync::Arc;

use signing_crypto::hasher::sha256::SHA256;

use crate::config::ConfigValidationError;
use crate::config::core_config::CoreConfig;
use crate::proto::http_client::HttpClient;
use crate::proto::http_client::reqwest_client::ReqwestClient;
use crate::provider::document_loader::document_loader_from_config;
use crate::provider::request_verifier::{RequestSignatureVerifierImpl, TrustKey};
use crate::provider::signature_format::provider::signature_format_provider_from_config;
use crate::provider::validation_client::http_client::HTTPValidationClient;
use crate::service::signing_payload::SigningPayloadService;
use crate::service::signing_validation::{RetryPolicy, SigningValidationService};

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod service;

#[cfg(test)]
mod test_utilities;

#[derive(Clone)]
pub struct SigningCore {
    pub signing_payload_service: SigningPayloadService,
    pub signing_validation_service: SigningValidationService,
    pub config: Arc<CoreConfig>,
}

impl SigningCore {
    /// Wires all providers and services
    ///
    /// # Arguments
    ///
    /// * `config` - core configuration
    /// * `http_client` - transport for remote documents and the validation
    ///   backend, a reqwest client bounded by the validation timeout is
    ///   created when `None`
    pub fn new(
        config: CoreConfig,
        http_client: Option<Arc<dyn HttpClient>>,
    ) -> Result<Self, ConfigValidationError> {
        let http_client: Arc<dyn HttpClient> = match http_client {
            Some(client) => client,
            None => {
                let timeout = config.validation.timeout.max(config.document.fetch_timeout);
                Arc::new(
                    ReqwestClient::with_timeout(timeout)
                        .map_err(|e| ConfigValidationError::HttpClient(e.to_string()))?,
                )
            }
        };

        let trust_key = TrustKey::from_config(&config.trust)?;
        let request_verifier = Arc::new(RequestSignatureVerifierImpl::new(
            trust_key,
            config.trust.signature_encoding,
        ));

        let document_loader = Arc::new(document_loader_from_config(
            &config.document,
            http_client.clone(),
        )?);

        let signature_format_provider = Arc::new(signature_format_provider_from_config(
            &config.format,
            Arc::new(SHA256),
        )?);

        let validation_client = Arc::new(HTTPValidationClient::new(
            http_client,
            config.validation.base_url.clone(),
            config.validation.timeout,
        ));
        let retry_policy = RetryPolicy::try_from(&config.validation.retry)?;

        tracing::info!(
            algorithm = %config.trust.algorithm,
            formats = ?config
                .format
                .iter()
                .filter(|(_, fields)| fields.enabled)
                .map(|(format, _)| format.to_string())
                .collect::<Vec<_>>(),
            validation_url = %config.validation.base_url,
            "Signing core initialized"
        );

        Ok(Self {
            signing_payload_service: SigningPayloadService::new(
                request_verifier,
                document_loader,
                signature_format_provider,
            ),
            signing_validation_service: SigningValidationService::new(
                validation_client,
                retry_policy,
            ),
            config: Arc::new(config),
        })
    }
}
