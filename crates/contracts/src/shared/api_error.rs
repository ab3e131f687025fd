use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extract a non-empty `message` from an arbitrary JSON body
    pub fn message_from(body: &serde_json::Value) -> Option<String> {
        serde_json::from_value::<ApiErrorBody>(body.clone())
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_from() {
        assert_eq!(
            ApiErrorBody::message_from(&json!({"message": "Room not found"})),
            Some("Room not found".to_string())
        );
        assert_eq!(ApiErrorBody::message_from(&json!({"message": ""})), None);
        assert_eq!(ApiErrorBody::message_from(&json!({"error": "x"})), None);
        assert_eq!(ApiErrorBody::message_from(&json!("plain text")), None);
        assert_eq!(ApiErrorBody::message_from(&serde_json::Value::Null), None);
    }
}
