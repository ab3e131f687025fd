use leptos::prelude::*;
use thaw::*;

/// Blocks the panel while a request is in flight
#[component]
pub fn LoadingOverlay(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || active.get()>
            <div class="loading-overlay" role="status" aria-live="polite">
                <Spinner />
                <span class="loading-overlay__text">"Loading..."</span>
            </div>
        </Show>
    }
}
