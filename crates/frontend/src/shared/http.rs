//! Fetch layer: request description, transport seam and the browser
//! implementation on top of `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::cancel::CancelToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One backend call, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    /// Attach `Authorization: Bearer <token>` from the current session
    pub authenticated: bool,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            authenticated: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn post<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, String> {
        Self::new(Method::Post, path).with_json(body)
    }

    pub fn put<T: Serialize>(path: impl Into<String>, body: &T) -> Result<Self, String> {
        Self::new(Method::Put, path).with_json(body)
    }

    /// Append `?query` built from a serializable struct
    pub fn get_with_query<Q: Serialize>(path: &str, query: &Q) -> Result<Self, String> {
        let qs = serde_qs::to_string(query)
            .map_err(|e| format!("Failed to build query: {}", e))?;
        Ok(Self::get(format!("{}?{}", path, qs)))
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, String> {
        let value =
            serde_json::to_value(body).map_err(|e| format!("Failed to serialize request: {}", e))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Sign-in and sign-up go out without a bearer token
    pub fn anonymous(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed JSON body; `Null` for an empty body, a JSON string for
    /// non-JSON text
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("request aborted")]
    Aborted,
}

/// Seam between the orchestrator and the network
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<ApiResponse, TransportError>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
        cancel: &CancelToken,
    ) -> Result<ApiResponse, TransportError> {
        if cancel.is_cancelled() {
            return Err(TransportError::Aborted);
        }

        let url = format!("{}{}", self.base, request.path);
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .abort_signal(signal.as_ref());
        if let Some(token) = bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let fetch = async move {
            let response = match &request.body {
                Some(body) => {
                    builder
                        .json(body)
                        .map_err(|e| TransportError::Network(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            }
            .map_err(|e| TransportError::Network(e.to_string()))?;

            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Ok::<_, TransportError>(ApiResponse {
                status,
                body: parse_body(text),
            })
        };

        match cancel.abortable(fetch).await {
            Ok(result) => result,
            Err(_) => {
                if let Some(controller) = controller {
                    controller.abort();
                }
                Err(TransportError::Aborted)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_room::aggregate::{AvailabilityQuery, RoomType};
    use serde_json::json;

    #[test]
    fn test_request_builders() {
        let r = ApiRequest::post("/api/rooms", &json!({"roomNumber": "101"})).unwrap();
        assert_eq!(r.method, Method::Post);
        assert_eq!(r.body, Some(json!({"roomNumber": "101"})));
        assert!(r.authenticated);

        let r = ApiRequest::delete("/api/rooms/4");
        assert_eq!(r.method.as_str(), "DELETE");
        assert!(r.body.is_none());

        assert!(!ApiRequest::get("/api/customers/sign-in").anonymous().authenticated);
    }

    #[test]
    fn test_query_string() {
        let r = ApiRequest::get_with_query(
            "/api/rooms/available",
            &AvailabilityQuery {
                room_type: RoomType::ResidentialSuite,
            },
        )
        .unwrap();
        assert_eq!(r.path, "/api/rooms/available?roomType=RESIDENTIAL_SUITE");
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(String::new()), Value::Null);
        assert_eq!(parse_body("{\"a\":1}".into()), json!({"a": 1}));
        assert_eq!(parse_body("Not Found".into()), json!("Not Found"));
    }

    #[test]
    fn test_success_range() {
        let ok = ApiResponse {
            status: 204,
            body: Value::Null,
        };
        assert!(ok.is_success());
        let err = ApiResponse {
            status: 404,
            body: Value::Null,
        };
        assert!(!err.is_success());
    }
}
