//! Image upload forwarding.

use tracing::instrument;

use super::{BackendClient, BackendError};

/// One file lifted out of the console's multipart form.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl BackendClient {
    /// Forward uploaded images to the backend's store, returning the stored
    /// URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the upload or a part cannot be
    /// built.
    #[instrument(skip(self, token, files), fields(count = files.len()))]
    pub async fn upload_images(
        &self,
        token: &str,
        files: Vec<UploadFile>,
    ) -> Result<Vec<String>, BackendError> {
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| BackendError::Api {
                    status: 400,
                    message: format!("invalid content type: {e}"),
                })?;
            form = form.part("images", part);
        }

        let response = self
            .inner
            .client
            .post(self.endpoint("/api/upload"))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }
}
