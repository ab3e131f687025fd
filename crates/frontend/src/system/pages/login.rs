use contracts::system::auth::SignInRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::navigator::{use_router, AppRoute, Navigator};
use crate::shared::cancel::CancelToken;
use crate::shared::orchestrator::use_orchestrator;
use crate::system::auth::api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let orchestrator = use_orchestrator();
    let router = use_router();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let is_loading = RwSignal::new(false);
    let flash = router.take_flash();

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let request = SignInRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let orchestrator = orchestrator.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            if let Err(e) = api::login(&orchestrator, request, &is_loading, &cancel).await {
                if !cancel.is_cancelled() {
                    set_error_message.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"StayMaster"</h1>
                <h2>"Login"</h2>

                {flash.map(|message| view! {
                    <div class="auth-flash" role="status">{message}</div>
                })}

                <form class="auth-form" on:submit=on_submit novalidate>
                    <div class="form__group">
                        <label class="form__label" for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            class="form__input"
                            placeholder="Enter username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                set_username.set(event_target_value(&ev));
                                set_error_message.set(None);
                            }
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form__input"
                            placeholder="Enter password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                set_password.set(event_target_value(&ev));
                                set_error_message.set(None);
                            }
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary auth-button"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Logging in..." } else { "Login" }}
                    </button>

                    <Show when=move || error_message.get().is_some()>
                        <p class="auth-error" role="alert">
                            {move || error_message.get().unwrap_or_default()}
                        </p>
                    </Show>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <button
                        type="button"
                        class="auth-link"
                        on:click=move |_| router.navigate(AppRoute::Register)
                    >
                        "Register here"
                    </button>
                </p>
            </div>
        </div>
    }
}
