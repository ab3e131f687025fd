use contracts::system::auth::Session;
use leptos::prelude::*;

use super::session::SessionContext;
use crate::routes::navigator::{use_router, AppRoute, Navigator};

/// Reactive mirror of the session, kept in sync through
/// [`SessionContext::subscribe`]
#[derive(Clone, Copy)]
pub struct AuthState {
    pub session: RwSignal<Option<Session>>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(session: SessionContext, children: Children) -> impl IntoView {
    let state = AuthState {
        session: RwSignal::new(session.get_session()),
    };
    let mirror = state.session;
    session.subscribe(move |s| {
        mirror.try_set(s.cloned());
    });

    provide_context(session);
    provide_context(state);

    children()
}

/// Hook to access the session context and its reactive mirror
pub fn use_auth() -> (SessionContext, AuthState) {
    let session =
        use_context::<SessionContext>().expect("AuthProvider not found in component tree");
    let state = use_context::<AuthState>().expect("AuthProvider not found in component tree");
    (session, state)
}

/// Helper: Perform logout
pub fn do_logout(session: &SessionContext, navigator: &dyn Navigator) {
    session.clear_session();
    navigator.navigate(AppRoute::Login);
}

/// Logout callback for dashboard headers
pub fn use_logout() -> Callback<()> {
    let (session, _) = use_auth();
    let router = use_router();
    Callback::new(move |_| {
        log::info!("user logged out");
        do_logout(&session, &router);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::orchestrator::testing::{session_with_role, RecordingNavigator};

    #[test]
    fn test_logout_clears_and_leaves() {
        let session = SessionContext::in_memory();
        session.set_session(session_with_role("ADMIN"));
        let navigator = RecordingNavigator::default();

        do_logout(&session, &navigator);

        assert!(session.get_session().is_none());
        assert_eq!(navigator.last(), Some(AppRoute::Login));
    }
}
