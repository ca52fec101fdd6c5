use bytes::Bytes;

/// A file sent back verbatim by [`ApiFacade::send_download`].
///
/// `name` lands unescaped inside the quoted `Content-Disposition` filename,
/// so callers must make sure it holds no quotes or path separators.
///
/// [`ApiFacade::send_download`]: crate::api::ApiFacade::send_download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadableFile {
    pub name: String,
    pub content_type: String,
    pub body: Bytes,
}

impl DownloadableFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        body: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            body: body.into(),
        }
    }
}
