//! メインアプリケーションコンポーネント
//!
//! UI状態はこのコンポーネントが所有する。
//! マウント時に設定を読み込み、破棄時にプレビューのobject URLを解放する。

use crate::components::{
    header::Header,
    loader::Loader,
    results_panel::ResultsPanel,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
};
use crate::handler::{handle_file, revoke_preview};
use crate::storage::{load_settings, save_settings};
use defect_inspector_common::endpoints::resolve_link;
use defect_inspector_common::{ClientSettings, UiState};
use leptos::prelude::*;
use web_sys::File;

#[component]
pub fn App() -> impl IntoView {
    let settings = RwSignal::new(load_settings());
    let state = RwSignal::new(UiState::default());

    // 設定変更を保存
    Effect::new(move |_| {
        settings.with(save_settings);
    });

    on_cleanup(move || {
        if let Some(url) = state.try_update_untracked(|s| s.reset()).flatten() {
            revoke_preview(&url);
        }
    });

    let locale = Signal::derive(move || settings.with(|s| s.locale));
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let loading_text = Signal::derive(move || locale.get().labels().loading);

    let on_file = move |file: File| {
        let current: ClientSettings = settings.get_untracked();
        handle_file(file, current, state);
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel settings=settings />

            <UploadArea state=state locale=locale on_file=on_file />

            {move || {
                state
                    .with(|s| s.notice.clone())
                    .map(|notice| view! { <div class="notice error">{notice}</div> })
            }}

            {move || {
                state
                    .with(|s| s.preview_url.clone())
                    .filter(|src| !src.is_empty())
                    .map(|src| {
                        view! { <img id="imagePreview" class="image-preview" src=src alt="preview" /> }
                    })
            }}

            <Loader loading=loading text=loading_text />

            <ResultsPanel state=state locale=locale />

            {move || {
                state
                    .with(|s| s.result_link.clone())
                    .map(|link| {
                        let href = settings.with(|s| resolve_link(&s.base_url, &link));
                        view! {
                            <div id="resultLink" class="result-link">
                                <a
                                    id="processedImageLink"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {move || locale.get().labels().processed_image}
                                </a>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
