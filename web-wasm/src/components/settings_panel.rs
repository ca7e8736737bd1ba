//! 設定パネルコンポーネント

use defect_inspector_common::{ClientSettings, Locale};
use leptos::prelude::*;

#[component]
pub fn SettingsPanel(settings: RwSignal<ClientSettings>) -> impl IntoView {
    let labels = move || settings.with(|s| s.locale.labels());

    view! {
        <details class="settings-panel">
            <summary>{move || labels().settings}</summary>
            <div class="settings-grid">
                <div class="form-group">
                    <label for="base-url">{move || labels().server_url}</label>
                    <input
                        type="text"
                        id="base-url"
                        placeholder=move || labels().same_origin
                        prop:value=move || settings.with(|s| s.base_url.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            settings.update(|s| s.base_url = value.trim().to_string());
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="locale">{move || labels().language}</label>
                    <select
                        id="locale"
                        on:change=move |ev| {
                            let value: Locale = event_target_value(&ev).parse().unwrap_or_default();
                            settings.update(|s| s.locale = value);
                        }
                    >
                        {Locale::ALL
                            .into_iter()
                            .map(|locale| {
                                view! {
                                    <option
                                        value=locale.as_str()
                                        selected=move || settings.with(|s| s.locale == locale)
                                    >
                                        {locale.as_str().to_uppercase()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || settings.with(|s| s.upload_processed)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                settings.update(|s| s.upload_processed = checked);
                            }
                        />
                        " "
                        {move || labels().fetch_processed_link}
                    </label>
                </div>
            </div>
        </details>
    }
}
