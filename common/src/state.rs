//! UI状態
//!
//! ブラウザ側もCLI側もこの状態遷移だけを通して表示を変える。
//! `finish` は結果に関係なくローディングを解除する。

use crate::controller::Inspection;
use crate::error::{Error, Result};
use crate::i18n::Labels;
use crate::view::{render_results, ResultsView};

/// 結果エリアに表示する内容
#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Results(ResultsView),
    /// 「Ошибка: ...」形式のエラーブロック
    Error(String),
    /// 応答の形が不正
    InvalidFormat(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub preview_url: Option<String>,
    pub loading: bool,
    pub panel: Option<Panel>,
    /// 処理済み画像へのリンク（Noneなら非表示）
    pub result_link: Option<String>,
    /// 画像以外を選んだときのメッセージ
    pub notice: Option<String>,
    pub dragover: bool,
}

impl UiState {
    pub fn results_visible(&self) -> bool {
        self.panel.is_some()
    }

    pub fn link_visible(&self) -> bool {
        self.result_link.is_some()
    }

    /// ファイル選択を拒否（状態はそのまま、通知のみ）
    pub fn reject(&mut self, error: &Error, labels: &Labels) {
        self.notice = Some(labels.rejection_message(error));
    }

    /// 送信開始
    ///
    /// 前回の結果・リンクを消し、プレビューを差し替えてローディングにする。
    /// 差し替え前のプレビューURLを返す（object URLの解放用）。
    pub fn begin(&mut self, preview_url: impl Into<String>) -> Option<String> {
        let previous = self.preview_url.replace(preview_url.into());
        self.notice = None;
        self.panel = None;
        self.result_link = None;
        self.loading = true;
        previous
    }

    /// 送信完了（成功・失敗どちらでも呼ぶ）
    pub fn finish(&mut self, outcome: Result<Inspection>, labels: &Labels) {
        match outcome {
            Ok(inspection) => {
                self.panel = Some(match inspection.detection {
                    Ok(result) => Panel::Results(render_results(&result, labels)),
                    Err(_) => Panel::InvalidFormat(labels.invalid_format.to_string()),
                });
                self.result_link = inspection.result_url;
            }
            Err(e) => {
                self.panel = Some(Panel::Error(labels.error_message(&e)));
            }
        }
        self.loading = false;
    }

    /// 破棄時にプレビューURLを返して状態を初期化
    pub fn reset(&mut self) -> Option<String> {
        let previous = self.preview_url.take();
        *self = UiState::default();
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::types::DetectionResult;

    fn labels() -> &'static Labels {
        Locale::En.labels()
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert!(!state.loading);
        assert!(!state.results_visible());
        assert!(!state.link_visible());
    }

    #[test]
    fn test_begin_clears_previous_results() {
        let mut state = UiState {
            panel: Some(Panel::Error("old".into())),
            result_link: Some("/static/results/old.jpg".into()),
            notice: Some("Please select an image".into()),
            preview_url: Some("blob:old".into()),
            ..Default::default()
        };

        let previous = state.begin("blob:new");
        assert_eq!(previous.as_deref(), Some("blob:old"));
        assert_eq!(state.preview_url.as_deref(), Some("blob:new"));
        assert!(state.loading);
        assert!(state.panel.is_none());
        assert!(state.result_link.is_none());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_finish_success() {
        let mut state = UiState::default();
        state.begin("blob:a");
        state.finish(
            Ok(Inspection {
                detection: Ok(DetectionResult::default()),
                result_url: Some("/static/results/processed_a.jpg".into()),
            }),
            labels(),
        );
        assert!(!state.loading);
        assert!(matches!(state.panel, Some(Panel::Results(_))));
        assert!(state.link_visible());
    }

    #[test]
    fn test_finish_invalid_format_keeps_link() {
        let mut state = UiState::default();
        state.begin("blob:a");
        state.finish(
            Ok(Inspection {
                detection: Err(Error::InvalidFormat("expected array".into())),
                result_url: Some("/static/results/processed_a.jpg".into()),
            }),
            labels(),
        );
        assert_eq!(
            state.panel,
            Some(Panel::InvalidFormat("Invalid data format from server".into()))
        );
        assert!(state.link_visible());
        assert!(!state.loading);
    }

    #[test]
    fn test_finish_error() {
        let mut state = UiState::default();
        state.begin("blob:a");
        state.finish(Err(Error::Http(502)), labels());
        assert_eq!(state.panel, Some(Panel::Error("Analysis error: 502".into())));
        assert!(!state.loading);
        assert!(!state.link_visible());
    }

    #[test]
    fn test_reject_sets_notice_only() {
        let mut state = UiState::default();
        state.reject(&Error::NotAnImage("a.txt".into()), labels());
        assert_eq!(state.notice.as_deref(), Some("Please select an image"));
        assert!(!state.loading);
        assert!(state.preview_url.is_none());
    }

    #[test]
    fn test_reset_returns_preview() {
        let mut state = UiState::default();
        state.begin("blob:x");
        assert_eq!(state.reset().as_deref(), Some("blob:x"));
        assert_eq!(state, UiState::default());
    }
}
