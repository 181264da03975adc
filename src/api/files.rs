//! File upload endpoint.

use reqwest::multipart::{Form, Part};

use crate::models::FileUpload;

use super::{ApiResult, Gateway};

pub struct FilesApi {
    gateway: Gateway,
}

impl FilesApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Upload raw file bytes as `multipart/form-data`, overriding the
    /// gateway's default JSON content type for this call only.
    pub async fn upload(
        &self,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> ApiResult<FileUpload> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = Form::new().part("file", part);

        Ok(self
            .gateway
            .post_multipart("/files/upload", form)
            .await?
            .result)
    }
}
