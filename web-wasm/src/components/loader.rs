//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn Loader(loading: Signal<bool>, text: Signal<&'static str>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div id="loader" class="loader">
                <div class="spinner" />
                <p class="loader-text">{move || text.get()}</p>
            </div>
        </Show>
    }
}
