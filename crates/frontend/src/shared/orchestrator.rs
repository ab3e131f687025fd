//! Request orchestration shared by every dashboard.
//!
//! An [`Action`] couples a locally validated request with its fallback error
//! text and success message. [`Orchestrator::run`] drives it: validation
//! gate, loading flag, bearer token, error classification, toast feedback,
//! 401 handling and cancellation.

use std::cell::Cell;
use std::sync::Arc;

use contracts::shared::api_error::ApiErrorBody;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::cancel::CancelToken;
use super::http::{ApiRequest, Transport, TransportError};
use super::notify::{Notification, Notifier};
use crate::routes::navigator::{AppRoute, Navigator};
use crate::system::auth::session::SessionContext;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Rejected locally; no request was sent
    #[error("{0}")]
    Validation(String),
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("{message}")]
    Transport { message: String, detail: String },
    #[error("{message}")]
    Decode { message: String, detail: String },
    #[error("{}", SESSION_EXPIRED)]
    Unauthorized,
    #[error("request cancelled")]
    Cancelled,
}

impl RequestError {
    /// Text shown to the user
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Receives the loading flag of the panel that issued the request
pub trait LoadingSink {
    fn set_loading(&self, loading: bool);
}

impl LoadingSink for RwSignal<bool> {
    fn set_loading(&self, loading: bool) {
        self.try_set(loading);
    }
}

impl LoadingSink for Cell<bool> {
    fn set_loading(&self, loading: bool) {
        self.set(loading);
    }
}

type SuccessMessage<R> = Box<dyn Fn(&R) -> String>;

/// One user action bound to one backend call
pub struct Action<R> {
    request: Result<ApiRequest, String>,
    fallback: String,
    success: Option<SuccessMessage<R>>,
    quiet: bool,
}

impl<R> Action<R> {
    pub fn new(request: Result<ApiRequest, String>, fallback: impl Into<String>) -> Self {
        Self {
            request,
            fallback: fallback.into(),
            success: None,
            quiet: false,
        }
    }

    /// Toast shown when the call succeeds
    pub fn on_success(mut self, message: impl Fn(&R) -> String + 'static) -> Self {
        self.success = Some(Box::new(message));
        self
    }

    /// Failures are returned but not toasted; the caller shows them inline
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    /// Message of a request rejected before sending
    pub fn validation_error(&self) -> Option<&str> {
        self.request.as_ref().err().map(String::as_str)
    }
}

#[derive(Clone)]
pub struct Orchestrator {
    transport: Arc<dyn Transport>,
    session: SessionContext,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl Orchestrator {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: SessionContext,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            navigator,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }

    pub fn navigate(&self, route: AppRoute) {
        self.navigator.navigate(route);
    }

    /// Run one action end to end. Every outcome except `Cancelled` has
    /// already been reported to the user when this returns.
    pub async fn run<R: DeserializeOwned>(
        &self,
        action: Action<R>,
        loading: &dyn LoadingSink,
        cancel: &CancelToken,
    ) -> Result<R, RequestError> {
        let Action {
            request,
            fallback,
            success,
            quiet,
        } = action;

        let request = match request {
            Ok(request) => request,
            Err(message) => {
                log::debug!("validation failed: {}", message);
                if !quiet {
                    self.notifier.notify(Notification::error(message.clone()));
                }
                return Err(RequestError::Validation(message));
            }
        };
        if cancel.is_cancelled() {
            return Err(RequestError::Cancelled);
        }

        loading.set_loading(true);
        let result = self.dispatch::<R>(&request, &fallback, cancel).await;
        loading.set_loading(false);

        match &result {
            Ok(value) => {
                if let Some(message) = success {
                    self.notifier.notify(Notification::success(message(value)));
                }
            }
            Err(error) => self.report(&request, error, quiet),
        }
        result
    }

    async fn dispatch<R: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        fallback: &str,
        cancel: &CancelToken,
    ) -> Result<R, RequestError> {
        let bearer = if request.authenticated {
            Some(self.session.token().ok_or(RequestError::Unauthorized)?)
        } else {
            None
        };

        log::debug!("{} {}", request.method.as_str(), request.path);
        let sent = self
            .transport
            .send(request, bearer.as_deref(), cancel)
            .await;
        if cancel.is_cancelled() {
            return Err(RequestError::Cancelled);
        }

        let response = sent.map_err(|e| match e {
            TransportError::Aborted => RequestError::Cancelled,
            TransportError::Network(detail) => RequestError::Transport {
                message: fallback.to_string(),
                detail,
            },
        })?;

        if response.status == 401 && request.authenticated {
            return Err(RequestError::Unauthorized);
        }
        if !response.is_success() {
            return Err(RequestError::Backend {
                status: response.status,
                message: ApiErrorBody::message_from(&response.body)
                    .unwrap_or_else(|| fallback.to_string()),
            });
        }

        serde_json::from_value::<R>(response.body).map_err(|e| RequestError::Decode {
            message: fallback.to_string(),
            detail: e.to_string(),
        })
    }

    fn report(&self, request: &ApiRequest, error: &RequestError, quiet: bool) {
        match error {
            RequestError::Cancelled => {
                log::debug!("{} {} cancelled", request.method.as_str(), request.path);
            }
            RequestError::Validation(_) => {}
            RequestError::Unauthorized => {
                log::warn!("{} {} unauthorized", request.method.as_str(), request.path);
                self.session.clear_session();
                self.notifier.notify(Notification::error(error.user_message()));
                self.navigator.navigate(AppRoute::Login);
            }
            RequestError::Backend { status, message } => {
                log::warn!(
                    "{} {} failed with {}: {}",
                    request.method.as_str(),
                    request.path,
                    status,
                    message
                );
                if !quiet {
                    self.notifier.notify(Notification::error(error.user_message()));
                }
            }
            RequestError::Transport { detail, .. } | RequestError::Decode { detail, .. } => {
                log::warn!(
                    "{} {} failed: {}",
                    request.method.as_str(),
                    request.path,
                    detail
                );
                if !quiet {
                    self.notifier.notify(Notification::error(error.user_message()));
                }
            }
        }
    }
}

pub fn use_orchestrator() -> Orchestrator {
    use_context::<Orchestrator>().expect("Orchestrator not found in component tree")
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory doubles for the orchestrator seams

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use contracts::system::auth::{Session, UserInfo};
    use serde_json::Value;

    use super::*;
    use crate::shared::http::ApiResponse;
    use crate::shared::notify::NotificationLevel;
    use crate::system::auth::session::MemorySessionStore;

    #[derive(Default)]
    pub struct MockTransport {
        pub sent: Mutex<Vec<(ApiRequest, Option<String>)>>,
        replies: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
        /// Cancel this token while the request is "in flight"
        pub cancel_during_send: Mutex<Option<CancelToken>>,
    }

    impl MockTransport {
        pub fn reply(&self, status: u16, body: Value) {
            self.replies
                .lock()
                .unwrap()
                .push_back(Ok(ApiResponse { status, body }));
        }

        pub fn fail(&self, error: TransportError) {
            self.replies.lock().unwrap().push_back(Err(error));
        }

        pub fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }

        pub fn last_sent(&self) -> Option<ApiRequest> {
            self.sent.lock().unwrap().last().map(|(r, _)| r.clone())
        }

        pub fn last_bearer(&self) -> Option<String> {
            self.sent.lock().unwrap().last().and_then(|(_, b)| b.clone())
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(
            &self,
            request: &ApiRequest,
            bearer: Option<&str>,
            _cancel: &CancelToken,
        ) -> Result<ApiResponse, TransportError> {
            self.sent
                .lock()
                .unwrap()
                .push((request.clone(), bearer.map(str::to_string)));
            if let Some(token) = self.cancel_during_send.lock().unwrap().take() {
                token.cancel();
            }
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(ApiResponse {
                    status: 200,
                    body: Value::Null,
                }))
        }
    }

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub items: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
            self.items
                .lock()
                .unwrap()
                .iter()
                .map(|n| (n.level, n.message.clone()))
                .collect()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.items.lock().unwrap().push(notification);
        }
    }

    #[derive(Default)]
    pub struct RecordingNavigator {
        pub visited: Mutex<Vec<AppRoute>>,
    }

    impl RecordingNavigator {
        pub fn last(&self) -> Option<AppRoute> {
            self.visited.lock().unwrap().last().copied()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, route: AppRoute) {
            self.visited.lock().unwrap().push(route);
        }
    }

    pub fn session_with_role(role: &str) -> Session {
        Session {
            token: "test-token".into(),
            user: UserInfo {
                id: 21,
                username: "tester".into(),
                name: Some("Test User".into()),
                role: role.into(),
                customer_id: Some(42),
            },
        }
    }

    pub struct Harness {
        pub transport: Arc<MockTransport>,
        pub notifier: Arc<RecordingNotifier>,
        pub navigator: Arc<RecordingNavigator>,
        pub orchestrator: Orchestrator,
    }

    impl Harness {
        pub fn new(session: Option<Session>) -> Self {
            let transport = Arc::new(MockTransport::default());
            let notifier = Arc::new(RecordingNotifier::default());
            let navigator = Arc::new(RecordingNavigator::default());
            let store = match session {
                Some(s) => MemorySessionStore::with_session(s),
                None => MemorySessionStore::default(),
            };
            let orchestrator = Orchestrator::new(
                transport.clone(),
                SessionContext::new(Arc::new(store)),
                notifier.clone(),
                navigator.clone(),
            );
            Self {
                transport,
                notifier,
                navigator,
                orchestrator,
            }
        }

        pub fn signed_in(role: &str) -> Self {
            Self::new(Some(session_with_role(role)))
        }
    }
}
