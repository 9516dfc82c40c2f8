//! Resolution of document references into raw bytes.
//!
//! Every [`DocumentSource`] variant is served by a [`Resolvable`]
//! implementation. The loaded document is then checked against the
//! configured size limit first and the MIME allow-list second.

use std::sync::Arc;

use mime::Mime;

use self::error::DocumentLoadError;
use self::inline::InlineResolver;
use self::remote::RemoteResolver;
use crate::config::ConfigValidationError;
use crate::config::core_config::DocumentConfig;
use crate::model::document::{DocumentRef, DocumentSource, ResolvedDocument};
use crate::proto::http_client::HttpClient;

pub mod error;
pub mod inline;
pub mod remote;


#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait Resolvable: Send + Sync {
    fn can_resolve(&self, source: &DocumentSource) -> bool;

    async fn resolve(&self, source: &DocumentSource) -> Result<Vec<u8>, DocumentLoadError>;
}

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait DocumentLoader: Send + Sync {
    async fn load(&self, document: &DocumentRef) -> Result<ResolvedDocument, DocumentLoadError>;
}

pub struct DocumentLoaderImpl {
    resolvers: Vec<Arc<dyn Resolvable>>,
    max_size: usize,
    allowed_mime_types: Vec<Mime>,
}

impl DocumentLoaderImpl {
    pub fn new(
        resolvers: Vec<Arc<dyn Resolvable>>,
        max_size: usize,
        allowed_mime_types: Vec<Mime>,
    ) -> Self {
        Self {
            resolvers,
            max_size,
            allowed_mime_types,
        }
    }

    fn is_allowed(&self, mime_type: &str) -> bool {
        let Ok(mime) = mime_type.trim().parse::<Mime>() else {
            return false;
        };

        self.allowed_mime_types.iter().any(|allowed| {
            allowed.type_() == mime.type_() && allowed.subtype() == mime.subtype()
        })
    }
}

pub fn document_loader_from_config(
    config: &DocumentConfig,
    client: Arc<dyn HttpClient>,
) -> Result<DocumentLoaderImpl, ConfigValidationError> {
    let allowed_mime_types = config
        .allowed_mime_types
        .iter()
        .map(|value| {
            value
                .parse::<Mime>()
                .map_err(|_| ConfigValidationError::InvalidMimeType(value.to_owned()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let resolvers: Vec<Arc<dyn Resolvable>> = vec![
        Arc::new(InlineResolver),
        Arc::new(RemoteResolver::new(client, config.fetch_timeout, config.max_size)),
    ];

    Ok(DocumentLoaderImpl::new(
        resolvers,
        config.max_size,
        allowed_mime_types,
    ))
}

#[async_trait::async_trait]
impl DocumentLoader for DocumentLoaderImpl {
    async fn load(&self, document: &DocumentRef) -> Result<ResolvedDocument, DocumentLoadError> {
        let resolver = self
            .resolvers
            .iter()
            .find(|resolver| resolver.can_resolve(&document.source))
            .ok_or(DocumentLoadError::MissingSource)?;

        let content = resolver.resolve(&document.source).await?;

        if content.len() > self.max_size {
            return Err(DocumentLoadError::TooLarge {
                size: content.len(),
                max: self.max_size,
            });
        }

        if !self.is_allowed(&document.mime_type) {
            return Err(DocumentLoadError::UnsupportedMime(
                document.mime_type.to_owned(),
            ));
        }

        tracing::debug!(
            size = content.len(),
            mime_type = %document.mime_type,
            "Document resolved"
        );

        Ok(ResolvedDocument {
            content,
            mime_type: document.mime_type.to_owned(),
            file_name: document.file_name.to_owned(),
        })
    }
}
