//! アップロードエリアコンポーネント

use defect_inspector_common::{Locale, UiState};
use leptos::html;
use leptos::prelude::*;
use web_sys::{DragEvent, File, HtmlInputElement};

#[component]
pub fn UploadArea<F>(
    state: RwSignal<UiState>,
    locale: Signal<Locale>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone,
{
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            state.update(|s| s.dragover = false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !state.with_untracked(|s| s.dragover) {
            state.update(|s| s.dragover = true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        state.update(|s| s.dragover = false);
    };

    // ファイル選択ダイアログを開く（ローディング中はinputがdisabled）
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_file(file);
        }
        // 同じファイルを再選択できるようにする
        input.set_value("");
    };

    view! {
        <div
            id="uploadCard"
            class=move || {
                let mut classes = vec!["upload-area"];
                state.with(|s| {
                    if s.dragover {
                        classes.push("dragover");
                    }
                    if s.loading {
                        classes.push("busy");
                    }
                });
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"📷"</div>
            <p>{move || locale.get().labels().drop_hint}</p>
            <p class="text-muted">{move || locale.get().labels().accepted_formats}</p>
            <input
                id="imageUpload"
                type="file"
                accept="image/*"
                class="hidden-input"
                node_ref=input_ref
                disabled=move || state.with(|s| s.loading)
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
        </div>
    }
}
