use leptos::prelude::*;
use web_sys::window;

/// Every page the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Register,
    AdminDashboard,
    CustomerDashboard,
    RoomDashboard,
    ReservationDashboard,
    TravelCompanyDashboard,
    Reports,
    NotFound,
}

impl AppRoute {
    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Register => "/register",
            AppRoute::AdminDashboard => "/admin-dashboard",
            AppRoute::CustomerDashboard => "/customer-dashboard",
            AppRoute::RoomDashboard => "/room-dashboard",
            AppRoute::ReservationDashboard => "/reservation-dashboard",
            AppRoute::TravelCompanyDashboard => "/travel-company-dashboard",
            AppRoute::Reports => "/reports",
            AppRoute::NotFound => "/404",
        }
    }

    /// `/` lands on the login page, as does an empty path
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => AppRoute::Login,
            "/register" => AppRoute::Register,
            "/admin-dashboard" => AppRoute::AdminDashboard,
            "/customer-dashboard" => AppRoute::CustomerDashboard,
            "/room-dashboard" => AppRoute::RoomDashboard,
            "/reservation-dashboard" => AppRoute::ReservationDashboard,
            "/travel-company-dashboard" => AppRoute::TravelCompanyDashboard,
            "/reports" => AppRoute::Reports,
            _ => AppRoute::NotFound,
        }
    }
}

/// Navigation seam used by guards and the request orchestrator
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: AppRoute);
}

/// History-backed router state.
///
/// `flash` carries a one-shot message to the next page (e.g. the
/// registration confirmation shown above the login form).
#[derive(Clone, Copy)]
pub struct RouterService {
    pub current: RwSignal<AppRoute>,
    pub flash: RwSignal<Option<String>>,
}

impl RouterService {
    pub fn new() -> Self {
        let path = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self {
            current: RwSignal::new(AppRoute::from_path(&path)),
            flash: RwSignal::new(None),
        }
    }

    /// Follow browser back/forward buttons
    pub fn init_history_integration(&self) {
        let current = self.current;
        // lives as long as the app, the handle is never removed
        let _handle = window_event_listener(leptos::ev::popstate, move |_| {
            let path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            current.set(AppRoute::from_path(&path));
        });
    }

    pub fn navigate_with_flash(&self, route: AppRoute, message: impl Into<String>) {
        self.flash.set(Some(message.into()));
        self.navigate(route);
    }

    pub fn take_flash(&self) -> Option<String> {
        let message = self.flash.get_untracked();
        if message.is_some() {
            self.flash.set(None);
        }
        message
    }
}

impl Default for RouterService {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterService {
    fn navigate(&self, route: AppRoute) {
        log::debug!("navigate -> {}", route.path());
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(route.path()));
        }
        self.current.set(route);
    }
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>().expect("RouterService not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/reports/"), AppRoute::Reports);
        assert_eq!(
            AppRoute::from_path("/reservation-dashboard?tab=view"),
            AppRoute::ReservationDashboard
        );
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::AdminDashboard,
            AppRoute::CustomerDashboard,
            AppRoute::RoomDashboard,
            AppRoute::ReservationDashboard,
            AppRoute::TravelCompanyDashboard,
            AppRoute::Reports,
        ] {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
    }
}
