use super::Resolvable;
use super::error::DocumentLoadError;
use crate::model::document::DocumentSource;

pub struct InlineResolver;

#[async_trait::async_trait]
impl Resolvable for InlineResolver {
    fn can_resolve(&self, source: &DocumentSource) -> bool {
        matches!(source, DocumentSource::Inline(_))
    }

    async fn resolve(&self, source: &DocumentSource) -> Result<Vec<u8>, DocumentLoadError> {
        match source {
            DocumentSource::Inline(content) if !content.is_empty() => Ok(content.to_owned()),
            _ => Err(DocumentLoadError::MissingSource),
        }
    }
}
