//! クライアント設定（CLIとWebで共通）

use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// 空文字列は同一オリジン
    pub base_url: String,
    pub locale: Locale,
    /// 処理済み画像のリンクを取得するか
    pub upload_processed: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            locale: Locale::default(),
            upload_processed: true,
        }
    }
}
