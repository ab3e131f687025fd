use leptos::prelude::*;
use thaw::*;

/// Startup screen shown before the first route renders
#[component]
pub fn SplashScreen() -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="loading-logo">"StayMaster"</div>
            <Spinner />
            <p class="loading-text">"Loading StayMaster..."</p>
        </div>
    }
}
