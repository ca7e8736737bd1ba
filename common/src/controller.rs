//! アップロード制御
//!
//! 1ファイルの送信フロー:
//! 検証 → プレビュー → ローディング → predict → (upload) → 表示 → ローディング解除

use crate::error::{Error, Result};
use crate::i18n::{Labels, Locale};
use crate::parser::{parse_detection_response, parse_upload_response};
use crate::state::UiState;
use crate::types::DetectionResult;
use crate::upload::UploadEvent;

/// バックエンドとの通信
///
/// 実装はどちらも本文テキストを返すだけで、パースはこのモジュールで行う。
/// 2xx以外は `Error::Http(status)` を返すこと。
#[allow(async_fn_in_trait)]
pub trait InspectionApi {
    /// POST /api/predict
    async fn predict(&self, upload: &UploadEvent) -> Result<String>;

    /// POST /upload
    async fn upload(&self, upload: &UploadEvent) -> Result<String>;
}

/// 1回の送信結果
#[derive(Debug)]
pub struct Inspection {
    /// 応答の形が不正な場合は `Err(Error::InvalidFormat)`
    pub detection: Result<DetectionResult>,
    pub result_url: Option<String>,
}

/// predict → upload を順に実行
///
/// predictのHTTPエラー・通信エラーは `Err`。
/// uploadの失敗は無視してリンクなしにする。
pub async fn inspect<A: InspectionApi>(
    api: &A,
    event: &UploadEvent,
    with_upload: bool,
) -> Result<Inspection> {
    let body = api.predict(event).await?;
    let detection = match parse_detection_response(&body) {
        Ok(result) => Ok(result),
        Err(Error::InvalidFormat(msg)) => {
            log::warn!("predict response has unexpected shape: {}", msg);
            Err(Error::InvalidFormat(msg))
        }
        Err(e) => return Err(e),
    };

    let result_url = if with_upload {
        fetch_result_url(api, event).await
    } else {
        None
    };

    Ok(Inspection { detection, result_url })
}

async fn fetch_result_url<A: InspectionApi>(api: &A, event: &UploadEvent) -> Option<String> {
    let body = match api.upload(event).await {
        Ok(body) => body,
        Err(e) => {
            log::debug!("upload request failed: {}", e);
            return None;
        }
    };
    match parse_upload_response(&body) {
        Ok(reply) => {
            if let Some(err) = &reply.error {
                log::debug!("upload endpoint reported error: {}", err);
            }
            reply.result_url.filter(|url| !url.is_empty())
        }
        Err(e) => {
            log::debug!("upload response unreadable: {}", e);
            None
        }
    }
}

/// アップロードコントローラ
///
/// UI状態を所有し、`submit` で1ファイル分のフローを実行する。
/// 同時送信の排他はしない（呼び出し側で逐次実行する）。
pub struct UploadController<A> {
    api: A,
    locale: Locale,
    with_upload: bool,
    state: UiState,
}

impl<A: InspectionApi> UploadController<A> {
    pub fn new(api: A, locale: Locale) -> Self {
        Self {
            api,
            locale,
            with_upload: true,
            state: UiState::default(),
        }
    }

    /// uploadエンドポイントを呼ぶかどうか
    pub fn with_upload(mut self, enabled: bool) -> Self {
        self.with_upload = enabled;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn labels(&self) -> &'static Labels {
        self.locale.labels()
    }

    /// ファイルを受け付ける
    ///
    /// 拒否した場合は通知を設定して `Err` を返す（通信しない）。
    pub fn accept(&mut self, event: &UploadEvent, preview_url: impl Into<String>) -> Result<Option<String>> {
        if let Err(e) = event.validate() {
            self.state.reject(&e, self.locale.labels());
            return Err(e);
        }
        Ok(self.state.begin(preview_url))
    }

    /// 通信部分のみ実行（状態は変更しない）
    pub async fn run(&self, event: &UploadEvent) -> Result<Inspection> {
        inspect(&self.api, event, self.with_upload).await
    }

    /// 結果を反映してローディングを解除
    pub fn finish(&mut self, outcome: Result<Inspection>) {
        if let Err(e) = &outcome {
            log::error!("inspection failed: {}", e);
        }
        self.state.finish(outcome, self.locale.labels());
    }

    /// 検証 → 送信 → 表示 を一括実行
    pub async fn submit(&mut self, event: &UploadEvent, preview_url: impl Into<String>) -> &UiState {
        if self.accept(event, preview_url).is_err() {
            return &self.state;
        }
        let outcome = self.run(event).await;
        self.finish(outcome);
        &self.state
    }

    /// 状態を破棄し、解放すべきプレビューURLを返す
    pub fn teardown(&mut self) -> Option<String> {
        self.state.reset()
    }
}
