//! 欠陥検出サーバー連携（fetch + FormData）

use defect_inspector_common::endpoints::{self, FILE_FIELD, PREDICT_PATH, UPLOAD_PATH};
use defect_inspector_common::{Error, InspectionApi, Result, UploadEvent};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

/// ブラウザのfetchで送信するAPI実装
#[derive(Debug, Clone, Default)]
pub struct FetchApi {
    /// 空文字列は同一オリジン
    base_url: String,
}

impl FetchApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    async fn post_file(&self, path: &str, upload: &UploadEvent) -> Result<String> {
        let form = build_form(upload).map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(form.as_ref());

        let url = self.url(path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(Error::Http(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| Error::Transport("response body is not text".into()))
    }
}

impl InspectionApi for FetchApi {
    async fn predict(&self, upload: &UploadEvent) -> Result<String> {
        self.post_file(PREDICT_PATH, upload).await
    }

    async fn upload(&self, upload: &UploadEvent) -> Result<String> {
        self.post_file(UPLOAD_PATH, upload).await
    }
}

/// multipart本文を作成（field: file）
pub fn build_form(upload: &UploadEvent) -> std::result::Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let props = BlobPropertyBag::new();
    props.set_type(&upload.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(FILE_FIELD, &blob, &upload.file_name)?;
    Ok(form)
}

fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
