use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{ConfigProvider, ToastPosition, ToasterProvider};

use crate::routes::navigator::RouterService;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::AppConfig;
use crate::shared::http::HttpTransport;
use crate::shared::notify::Toaster;
use crate::shared::orchestrator::Orchestrator;
use crate::system::auth::context::AuthProvider;
use crate::system::auth::session::SessionContext;
use crate::system::auth::storage::LocalStorageSessionStore;
use crate::system::pages::splash::SplashScreen;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider position=ToastPosition::BottomEnd>
                <AppShell />
            </ToasterProvider>
        </ConfigProvider>
    }
}

/// Context services and the page tree; needs the toaster from [`App`]
#[component]
fn AppShell() -> impl IntoView {
    let config = AppConfig::from_env();
    let toaster = Toaster::new(config.toast_timeout_ms);
    let router = RouterService::new();
    router.init_history_integration();
    let session = SessionContext::new(Arc::new(LocalStorageSessionStore));
    let orchestrator = Orchestrator::new(
        Arc::new(HttpTransport::new(config.api_base.clone())),
        session.clone(),
        Arc::new(toaster),
        Arc::new(router),
    );

    let splash_ms = config.splash_ms;
    provide_context(config);
    provide_context(toaster);
    provide_context(router);
    provide_context(orchestrator);

    let (booting, set_booting) = signal(true);
    spawn_local(async move {
        TimeoutFuture::new(splash_ms).await;
        set_booting.set(false);
    });

    view! {
        <AuthProvider session=session>
            <Show when=move || !booting.get() fallback=|| view! { <SplashScreen /> }>
                <AppRoutes />
            </Show>
        </AuthProvider>
    }
}
