//! 結果表示コンポーネント

use crate::components::status_icon::StatusIconSvg;
use defect_inspector_common::{Locale, Panel, RegionView, UiState};
use leptos::prelude::*;

#[component]
pub fn ResultsPanel(state: RwSignal<UiState>, locale: Signal<Locale>) -> impl IntoView {
    move || {
        state.with(|s| s.panel.clone()).map(|panel| {
            let body = match panel {
                Panel::Results(results) => view! {
                    <div id="defectsList" class="defects-list">
                        {results
                            .regions
                            .into_iter()
                            .map(|region| view! { <RegionCard region=region /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                Panel::Error(message) => view! {
                    <div class="error">
                        <p>
                            <strong>{move || format!("{}:", locale.get().labels().error_prefix)}</strong>
                            " "
                            {message}
                        </p>
                    </div>
                }
                .into_any(),
                Panel::InvalidFormat(message) => view! {
                    <div class="error">
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
            };

            view! { <div id="results" class="results">{body}</div> }
        })
    }
}

#[component]
fn RegionCard(region: RegionView) -> impl IntoView {
    let defects = region
        .defects
        .into_iter()
        .map(|line| {
            view! {
                <div class="defect-item">
                    <p class="defect-type">
                        <strong>{line.heading}</strong>
                        " "
                        {line.class_name}
                    </p>
                    <p class="defect-confidence">
                        <strong>{line.confidence_label}</strong>
                        " "
                        {line.confidence}
                    </p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="part-result">
            <h3 class="part-title">
                <StatusIconSvg icon=region.icon />
                {region.title}
            </h3>
            {defects}
            {region.placeholder.map(|text| view! { <div class="no-defects">{text}</div> })}
        </div>
    }
}
