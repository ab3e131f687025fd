use contracts::system::auth::{Role, SignInRequest, SignInResponse, SignUpRequest};
use serde::de::IgnoredAny;

use crate::routes::navigator::AppRoute;
use crate::shared::cancel::CancelToken;
use crate::shared::http::ApiRequest;
use crate::shared::orchestrator::{Action, LoadingSink, Orchestrator};

pub const REGISTRATION_SUCCESS: &str = "Registration successful! Please log in.";

/// Dashboard a freshly signed-in user lands on
pub fn landing_route(role: Role) -> Option<AppRoute> {
    match role {
        Role::Admin => Some(AppRoute::AdminDashboard),
        Role::Customer => Some(AppRoute::ReservationDashboard),
        Role::TravelCompany => Some(AppRoute::TravelCompanyDashboard),
        Role::Unknown => None,
    }
}

/// `POST /api/customers/sign-in`; errors are shown inline on the form
pub fn sign_in(request: &SignInRequest) -> Action<SignInResponse> {
    let request = request
        .validate()
        .and_then(|_| ApiRequest::post("/api/customers/sign-in", request))
        .map(ApiRequest::anonymous);
    Action::new(request, "Login failed").quiet()
}

/// `POST /api/customers/sign-up`; the response body is not used
pub fn sign_up(request: &SignUpRequest) -> Action<IgnoredAny> {
    let request = request
        .validate()
        .and_then(|_| ApiRequest::post("/api/customers/sign-up", request))
        .map(ApiRequest::anonymous);
    Action::new(request, "Registration failed").quiet()
}

/// Sign in, store the session and move to the role's dashboard.
/// Returns the message to show under the form on failure.
pub async fn login(
    orchestrator: &Orchestrator,
    request: SignInRequest,
    loading: &dyn LoadingSink,
    cancel: &CancelToken,
) -> Result<AppRoute, String> {
    let response = orchestrator
        .run(sign_in(&request), loading, cancel)
        .await
        .map_err(|e| e.user_message())?;
    let session = response.into_session()?;
    let route = landing_route(session.role()).ok_or_else(|| "Unknown role".to_string())?;

    orchestrator.session().set_session(session);
    orchestrator.navigate(route);
    Ok(route)
}

pub async fn register(
    orchestrator: &Orchestrator,
    request: SignUpRequest,
    loading: &dyn LoadingSink,
    cancel: &CancelToken,
) -> Result<(), String> {
    orchestrator
        .run(sign_up(&request), loading, cancel)
        .await
        .map(|_| ())
        .map_err(|e| e.user_message())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::shared::orchestrator::testing::Harness;
    use futures::executor::block_on;
    use serde_json::json;

    fn credentials(password: &str) -> SignInRequest {
        SignInRequest {
            username: "nimal".into(),
            password: password.into(),
        }
    }

    #[test]
    fn test_login_stores_session_and_routes_by_role() {
        let h = Harness::new(None);
        h.transport.reply(
            200,
            json!({"token": "jwt", "id": 7, "username": "nimal", "role": "customer", "customerId": 12}),
        );

        let route = block_on(login(
            &h.orchestrator,
            credentials("secret1"),
            &Cell::new(false),
            &CancelToken::new(),
        ));

        assert_eq!(route, Ok(AppRoute::ReservationDashboard));
        assert_eq!(h.navigator.last(), Some(AppRoute::ReservationDashboard));
        let session = h.orchestrator.session().get_session().unwrap();
        assert_eq!(session.token, "jwt");
        assert_eq!(session.customer_id(), Some(12));
        assert_eq!(h.transport.last_bearer(), None);
    }

    #[test]
    fn test_login_validation_stays_local() {
        let h = Harness::new(None);

        let result = block_on(login(
            &h.orchestrator,
            credentials("abc"),
            &Cell::new(false),
            &CancelToken::new(),
        ));

        assert_eq!(
            result.unwrap_err(),
            "Password must be at least 6 characters"
        );
        assert_eq!(h.transport.sent_count(), 0);
        assert!(h.notifier.messages().is_empty());
    }

    #[test]
    fn test_login_without_token_keeps_signed_out() {
        let h = Harness::new(None);
        h.transport
            .reply(200, json!({"id": 7, "username": "nimal", "role": "ADMIN"}));

        let result = block_on(login(
            &h.orchestrator,
            credentials("secret1"),
            &Cell::new(false),
            &CancelToken::new(),
        ));

        assert_eq!(result.unwrap_err(), "No token received");
        assert!(h.orchestrator.session().get_session().is_none());
        assert!(h.navigator.last().is_none());
    }

    #[test]
    fn test_login_rejected_credentials_show_backend_message() {
        let h = Harness::new(None);
        h.transport
            .reply(401, json!({"message": "Invalid username or password"}));

        let result = block_on(login(
            &h.orchestrator,
            credentials("secret1"),
            &Cell::new(false),
            &CancelToken::new(),
        ));

        assert_eq!(result.unwrap_err(), "Invalid username or password");
    }

    #[test]
    fn test_register_rejects_admin_role_locally() {
        let h = Harness::new(None);
        let request = SignUpRequest {
            name: "Nimal Perera".into(),
            email: "nimal@example.com".into(),
            phone: "0771234567".into(),
            username: "nimal".into(),
            password: "secret1".into(),
            role: "ADMIN".into(),
        };

        let result = block_on(register(
            &h.orchestrator,
            request,
            &Cell::new(false),
            &CancelToken::new(),
        ));

        assert_eq!(result.unwrap_err(), "Invalid role selected");
        assert_eq!(h.transport.sent_count(), 0);
    }

    #[test]
    fn test_landing_routes() {
        assert_eq!(landing_route(Role::Admin), Some(AppRoute::AdminDashboard));
        assert_eq!(
            landing_route(Role::TravelCompany),
            Some(AppRoute::TravelCompanyDashboard)
        );
        assert_eq!(landing_route(Role::Unknown), None);
    }
}
