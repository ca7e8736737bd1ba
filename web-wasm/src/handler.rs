//! ファイル選択時の処理
//!
//! 検証 → プレビュー → 送信 → 表示。ローディング解除は `UiState::finish` が必ず行う。

use crate::api::FetchApi;
use defect_inspector_common::upload::validate_file;
use defect_inspector_common::{inspect, ClientSettings, Error, Inspection, Result, UiState, UploadEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, Url};

pub fn handle_file(file: File, settings: ClientSettings, state: RwSignal<UiState>) {
    let labels = settings.locale.labels();
    let file_name = file.name();
    let mime_type = file.type_();

    // 画像以外・空ファイルは通信せずに通知だけ出す
    if let Err(e) = check_file(&file) {
        log::info!("rejected {}: {}", file_name, e);
        state.update(|s| s.reject(&e, labels));
        return;
    }

    let preview = match Url::create_object_url_with_blob(&file) {
        Ok(url) => url,
        Err(e) => {
            log::warn!("プレビューを作成できません: {:?}", e);
            String::new()
        }
    };
    if let Some(previous) = state.try_update(|s| s.begin(preview)).flatten() {
        revoke_preview(&previous);
    }

    let api = FetchApi::new(settings.base_url.clone());
    let with_upload = settings.upload_processed;

    spawn_local(async move {
        let outcome = read_and_inspect(file, file_name, mime_type, &api, with_upload).await;
        if let Err(e) = &outcome {
            log::error!("inspection failed: {}", e);
        }
        state.update(|s| s.finish(outcome, labels));
    });
}

/// 読み込み前の検証（`UploadEvent::validate` と同じ規則）
pub fn check_file(file: &File) -> Result<()> {
    validate_file(&file.name(), &file.type_(), file.size() as u64)
}

async fn read_and_inspect(
    file: File,
    file_name: String,
    mime_type: String,
    api: &FetchApi,
    with_upload: bool,
) -> Result<Inspection> {
    let bytes = gloo::file::futures::read_as_bytes(&gloo::file::File::from(file))
        .await
        .map_err(|e| Error::Transport(e.to_string()))?;
    let event = UploadEvent::new(file_name, mime_type, bytes);
    inspect(api, &event, with_upload).await
}

/// object URLを解放
pub fn revoke_preview(url: &str) {
    if url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
