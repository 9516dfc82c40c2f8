use std::fmt;

use url::Url;

#[derive(Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Inline(Vec<u8>),
    Remote(Url),
}

impl fmt::Debug for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline(content) => write!(f, "Inline(<{} bytes>)", content.len()),
            Self::Remote(url) => f.debug_tuple("Remote").field(&url.as_str()).finish(),
        }
    }
}

/// Document as referenced by the caller, not yet resolved
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRef {
    pub source: DocumentSource,
    pub mime_type: String,
    pub file_name: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub content: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

impl fmt::Debug for ResolvedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedDocument")
            .field("content", &format_args!("<{} bytes>", self.content.len()))
            .field("mime_type", &self.mime_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}
