use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("画像ID {0} は登録されていません")]
    ImageNotFound(u64),

    #[error("サーバーエラー: HTTP {0}")]
    Server(u16),

    #[error("HTTPリクエストエラー: {0}")]
    Request(#[from] reqwest::Error),

    #[error("解析エラー: {0}")]
    Inspection(#[from] defect_inspector_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InspectorError>;
