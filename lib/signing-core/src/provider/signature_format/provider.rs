use std::collections::HashMap;
use std::sync::Arc;

use signing_crypto::Hasher;

use super::SignatureFormatStrategy;
use super::error::UnsupportedFormatError;
use super::pades::PAdES;
use super::xades::XAdES;
use crate::config::ConfigValidationError;
use crate::config::core_config::FormatConfig;
use crate::model::signature_format::SignatureFormat;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SignatureFormatProvider: Send + Sync {
    fn get_strategy(
        &self,
        format: SignatureFormat,
    ) -> Result<Arc<dyn SignatureFormatStrategy>, UnsupportedFormatError>;
}

#[derive(Default)]
pub struct SignatureFormatProviderImpl {
    strategies: HashMap<SignatureFormat, Arc<dyn SignatureFormatStrategy>>,
}

impl SignatureFormatProviderImpl {
    pub fn register(
        mut self,
        format: SignatureFormat,
        strategy: Arc<dyn SignatureFormatStrategy>,
    ) -> Self {
        self.strategies.insert(format, strategy);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl SignatureFormatProvider for SignatureFormatProviderImpl {
    fn get_strategy(
        &self,
        format: SignatureFormat,
    ) -> Result<Arc<dyn SignatureFormatStrategy>, UnsupportedFormatError> {
        self.strategies
            .get(&format)
            .cloned()
            .ok_or_else(|| UnsupportedFormatError(format.to_string()))
    }
}

pub fn signature_format_provider_from_config(
    config: &FormatConfig,
    hasher: Arc<dyn Hasher>,
) -> Result<SignatureFormatProviderImpl, ConfigValidationError> {
    let mut provider = SignatureFormatProviderImpl::default();

    for (format, fields) in config {
        if !fields.enabled {
            tracing::info!(%format, "Signature format disabled");
            continue;
        }

        let strategy: Arc<dyn SignatureFormatStrategy> = match format {
            SignatureFormat::XAdES => Arc::new(XAdES::new(hasher.clone())),
            SignatureFormat::PAdES => Arc::new(PAdES::new(hasher.clone())),
        };
        provider = provider.register(*format, strategy);
    }

    if provider.is_empty() {
        return Err(ConfigValidationError::NoFormatEnabled);
    }

    Ok(provider)
}
