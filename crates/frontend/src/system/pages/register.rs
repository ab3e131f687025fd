use contracts::system::auth::{Role, SignUpRequest, REGISTRATION_ROLES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::navigator::{use_router, AppRoute, Navigator};
use crate::shared::cancel::CancelToken;
use crate::shared::orchestrator::use_orchestrator;
use crate::system::auth::api;

#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_edit: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label" for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="form__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    on_edit.run(());
                }
                disabled=move || disabled.get()
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let orchestrator = use_orchestrator();
    let router = use_router();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Customer.code().to_string());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    let clear_error = Callback::new(move |_| error_message.set(None));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);

        let request = SignUpRequest {
            name: name.get_untracked(),
            email: email.get_untracked().trim().to_string(),
            phone: phone.get_untracked().trim().to_string(),
            username: username.get_untracked(),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let orchestrator = orchestrator.clone();
        let cancel = cancel.clone();
        spawn_local(async move {
            match api::register(&orchestrator, request, &is_loading, &cancel).await {
                Ok(()) => router.navigate_with_flash(AppRoute::Login, api::REGISTRATION_SUCCESS),
                Err(e) if !cancel.is_cancelled() => error_message.set(Some(e)),
                Err(_) => {}
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"StayMaster"</h1>
                <h2>"Register"</h2>

                <form class="auth-form" on:submit=on_submit novalidate>
                    <TextField id="name" label="Full Name" input_type="text" placeholder="Enter full name"
                        value=name disabled=is_loading on_edit=clear_error />
                    <TextField id="email" label="Email" input_type="email" placeholder="Enter email"
                        value=email disabled=is_loading on_edit=clear_error />
                    <TextField id="phone" label="Phone" input_type="tel" placeholder="Enter phone number"
                        value=phone disabled=is_loading on_edit=clear_error />
                    <TextField id="username" label="Username" input_type="text" placeholder="Choose a username"
                        value=username disabled=is_loading on_edit=clear_error />
                    <TextField id="password" label="Password" input_type="password" placeholder="At least 6 characters"
                        value=password disabled=is_loading on_edit=clear_error />

                    <div class="form__group">
                        <label class="form__label" for="role">"Role"</label>
                        <select
                            id="role"
                            class="form__select"
                            disabled=move || is_loading.get()
                            on:change=move |ev| {
                                role.set(event_target_value(&ev));
                                error_message.set(None);
                            }
                        >
                            {REGISTRATION_ROLES
                                .iter()
                                .map(|r| {
                                    let code = r.code();
                                    view! {
                                        <option value=code selected=move || role.get() == code>
                                            {r.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <button
                        type="submit"
                        class="btn-primary auth-button"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Registering..." } else { "Register" }}
                    </button>

                    <Show when=move || error_message.get().is_some()>
                        <p class="auth-error" role="alert">
                            {move || error_message.get().unwrap_or_default()}
                        </p>
                    </Show>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <button
                        type="button"
                        class="auth-link"
                        on:click=move |_| router.navigate(AppRoute::Login)
                    >
                        "Login here"
                    </button>
                </p>
            </div>
        </div>
    }
}
