use serde::{Deserialize, Serialize};

/// Metadata returned by the backend after a successful file upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    pub url: String,
}
