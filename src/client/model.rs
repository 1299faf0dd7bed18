//! Request and response bodies of the EBS API

use serde::{Deserialize, Serialize};

/// Broadcaster account returned by credential verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Broadcaster user id, sent back in the `User-ID` header
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// OAuth token issued for this user, when the server hands one out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Body of `POST /api/v1/auth`
#[derive(Debug, Serialize)]
pub(crate) struct AuthRequest<'a> {
    pub code: &'a str,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_shape() {
        let body = serde_json::to_string(&AuthRequest { code: "abc123" }).unwrap();
        assert_eq!(body, r#"{"code":"abc123"}"#);
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","name":"Bob","extra":true}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Bob");
        assert_eq!(user.token, None);
    }
}
