//! 欠陥検出サーバーのHTTPクライアント

use crate::error::{InspectorError, Result};
use defect_inspector_common::endpoints::{self, FILE_FIELD, PREDICT_PATH, UPLOAD_PATH};
use defect_inspector_common::{Error, ImageRecord, InspectionApi, UploadEvent};
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use std::time::Duration;

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    /// multipart (field: file) でPOSTし本文を返す
    async fn post_file(&self, path: &str, upload: &UploadEvent) -> defect_inspector_common::Result<String> {
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(&upload.mime_type)
            .map_err(|e| Error::Transport(e.to_string()))?;
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.url(path);
        log::debug!("POST {} ({} bytes)", url, upload.bytes.len());

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http(status.as_u16()));
        }

        response.text().await.map_err(|e| Error::Transport(e.to_string()))
    }

    /// GET /api/image/{id}
    pub async fn get_image(&self, id: u64) -> Result<ImageRecord> {
        let response = self.client.get(self.url(&endpoints::image_path(id))).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(InspectorError::ImageNotFound(id)),
            status if !status.is_success() => Err(InspectorError::Server(status.as_u16())),
            _ => Ok(response.json::<ImageRecord>().await?),
        }
    }

    /// DELETE /api/delete/image/{id}
    pub async fn delete_image(&self, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&endpoints::delete_image_path(id)))
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(InspectorError::ImageNotFound(id)),
            status if !status.is_success() => Err(InspectorError::Server(status.as_u16())),
            _ => Ok(()),
        }
    }
}

impl InspectionApi for HttpApi {
    async fn predict(&self, upload: &UploadEvent) -> defect_inspector_common::Result<String> {
        self.post_file(PREDICT_PATH, upload).await
    }

    async fn upload(&self, upload: &UploadEvent) -> defect_inspector_common::Result<String> {
        self.post_file(UPLOAD_PATH, upload).await
    }
}
