//! Role gate for protected views.
//!
//! [`check_access`] is the pure decision; [`RequireRole`] applies it on
//! mount and schedules the redirect.

use contracts::system::auth::{Role, Session};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::use_auth;
use crate::routes::navigator::{use_router, AppRoute, Navigator};
use crate::shared::api_utils::use_config;
use crate::shared::notify::{use_toaster, Notification, Notifier};

pub const UNAUTHORIZED_NOTICE: &str = "Unauthorized access. Redirecting to login...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStyle {
    Immediate,
    /// Toast `message`, then leave after the configured delay
    AfterNotice { message: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessPolicy {
    pub allowed: &'static [Role],
    pub redirect: RedirectStyle,
}

impl AccessPolicy {
    pub const ADMIN_ONLY: AccessPolicy = AccessPolicy {
        allowed: &[Role::Admin],
        redirect: RedirectStyle::Immediate,
    };

    pub const RESERVATIONS: AccessPolicy = AccessPolicy {
        allowed: &[Role::Customer, Role::Admin],
        redirect: RedirectStyle::AfterNotice {
            message: UNAUTHORIZED_NOTICE,
        },
    };

    pub const TRAVEL_COMPANY: AccessPolicy = AccessPolicy {
        allowed: &[Role::Admin, Role::Customer, Role::TravelCompany],
        redirect: RedirectStyle::AfterNotice {
            message: UNAUTHORIZED_NOTICE,
        },
    };

    /// Policy guarding a route; `None` for public pages
    pub fn for_route(route: AppRoute) -> Option<AccessPolicy> {
        match route {
            AppRoute::AdminDashboard
            | AppRoute::CustomerDashboard
            | AppRoute::RoomDashboard
            | AppRoute::Reports => Some(Self::ADMIN_ONLY),
            AppRoute::ReservationDashboard => Some(Self::RESERVATIONS),
            AppRoute::TravelCompanyDashboard => Some(Self::TRAVEL_COMPANY),
            AppRoute::Login | AppRoute::Register | AppRoute::NotFound => None,
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        role != Role::Unknown && self.allowed.contains(&role)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    Allow(Session),
    Redirect(RedirectStyle),
}

/// A session passes when it carries a token and a permitted role
pub fn check_access(session: Option<&Session>, policy: &AccessPolicy) -> AccessDecision {
    match session {
        Some(s) if !s.token.trim().is_empty() && policy.permits(s.role()) => {
            AccessDecision::Allow(s.clone())
        }
        _ => AccessDecision::Redirect(policy.redirect),
    }
}

/// Renders `children` only while the session satisfies `policy`.
/// A failed check on mount sends the user to the login page; there is no
/// retry.
#[component]
pub fn RequireRole(policy: AccessPolicy, children: ChildrenFn) -> impl IntoView {
    let (_, auth) = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let config = use_config();

    let origin = router.current.get_untracked();
    let session = auth.session.get_untracked();
    if let AccessDecision::Redirect(style) = check_access(session.as_ref(), &policy) {
        log::info!("access to {} denied", origin.path());
        match style {
            RedirectStyle::Immediate => {
                spawn_local(async move { router.navigate(AppRoute::Login) });
            }
            RedirectStyle::AfterNotice { message } => {
                toaster.notify(Notification::error(message));
                let delay = config.redirect_delay_ms;
                spawn_local(async move {
                    TimeoutFuture::new(delay).await;
                    // the user may have moved on during the delay
                    if router.current.get_untracked() == origin {
                        router.navigate(AppRoute::Login);
                    }
                });
            }
        }
    }

    let allowed = move || {
        matches!(
            check_access(auth.session.get().as_ref(), &policy),
            AccessDecision::Allow(_)
        )
    };

    view! {
        <Show when=allowed>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::orchestrator::testing::session_with_role;

    #[test]
    fn test_customer_cannot_open_admin_views() {
        let session = session_with_role("customer");
        for route in [
            AppRoute::AdminDashboard,
            AppRoute::CustomerDashboard,
            AppRoute::RoomDashboard,
            AppRoute::Reports,
        ] {
            let policy = AccessPolicy::for_route(route).unwrap();
            assert_eq!(
                check_access(Some(&session), &policy),
                AccessDecision::Redirect(RedirectStyle::Immediate)
            );
        }
    }

    #[test]
    fn test_role_match_is_case_insensitive() {
        let session = session_with_role("admin");
        assert!(matches!(
            check_access(Some(&session), &AccessPolicy::ADMIN_ONLY),
            AccessDecision::Allow(_)
        ));
    }

    #[test]
    fn test_missing_session_or_token_redirects() {
        assert_eq!(
            check_access(None, &AccessPolicy::RESERVATIONS),
            AccessDecision::Redirect(RedirectStyle::AfterNotice {
                message: UNAUTHORIZED_NOTICE
            })
        );

        let mut session = session_with_role("CUSTOMER");
        session.token = String::new();
        assert!(matches!(
            check_access(Some(&session), &AccessPolicy::RESERVATIONS),
            AccessDecision::Redirect(_)
        ));
    }

    #[test]
    fn test_travel_dashboard_roles() {
        let policy = AccessPolicy::for_route(AppRoute::TravelCompanyDashboard).unwrap();
        for role in ["ADMIN", "CUSTOMER", "TRAVEL_COMPANY"] {
            assert!(matches!(
                check_access(Some(&session_with_role(role)), &policy),
                AccessDecision::Allow(_)
            ));
        }
        assert!(matches!(
            check_access(Some(&session_with_role("MANAGER")), &policy),
            AccessDecision::Redirect(_)
        ));
    }

    #[test]
    fn test_travel_company_cannot_manage_reservations() {
        let policy = AccessPolicy::for_route(AppRoute::ReservationDashboard).unwrap();
        assert!(matches!(
            check_access(Some(&session_with_role("TRAVEL_COMPANY")), &policy),
            AccessDecision::Redirect(_)
        ));
    }

    #[test]
    fn test_public_routes_have_no_policy() {
        assert!(AccessPolicy::for_route(AppRoute::Login).is_none());
        assert!(AccessPolicy::for_route(AppRoute::Register).is_none());
    }
}
