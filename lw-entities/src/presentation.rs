use crate::time::*;

/// Metadata of an uploaded presentation file.
///
/// The file contents are stored elsewhere.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationFile {
    pub file_name   : String,
    pub media_type  : String,
    pub size_bytes  : u64,
    pub uploaded_at : Timestamp,
}

impl PresentationFile {
    /// The lowercase file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(str::to_ascii_lowercase)
    }
}
