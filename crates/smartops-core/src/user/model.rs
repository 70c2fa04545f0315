//! User domain model.
//!
//! Represents the account returned by the authentication endpoint and
//! persisted alongside the token.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::lenient;

/// Role attached to a user account.
///
/// The backend treats roles as free-form strings; the ones the client
/// routes on get their own variant and anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    User,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Other(role) => role,
        }
    }

    /// Case-insensitive: a server sending `"Admin"` still gets the admin
    /// dashboard.
    pub fn is_admin(&self) -> bool {
        match self {
            UserRole::Admin => true,
            UserRole::User => false,
            UserRole::Other(role) => role.trim().eq_ignore_ascii_case("admin"),
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => UserRole::Admin,
            "user" => UserRole::User,
            _ => UserRole::Other(value),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserRole::from(s.to_string()))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account identifier as the backend sends it: a number or an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{}", id),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId::Number(id)
    }
}

/// The signed-in account.
///
/// Every field is optional and decoded leniently: any JSON object is a
/// usable record. Fields the client does not model are kept in `extra` so
/// the persisted record round-trips what the server sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        deserialize_with = "lenient::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: UserRole,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: Some(UserId::from(id)),
            name: name.into(),
            email: email.into(),
            role,
            extra: Map::new(),
        }
    }

    /// Decodes a user record. Any JSON object is accepted; anything else
    /// (arrays, strings, `null`) yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Parses a persisted user record.
    pub fn from_json(raw: &str) -> Option<Self> {
        Self::from_value(serde_json::from_str(raw).ok()?)
    }

    /// Serializes the record in the shape it is persisted in.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Name to greet the user with; falls back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_open() {
        assert_eq!(UserRole::from("admin".to_string()), UserRole::Admin);
        assert_eq!(UserRole::from("user".to_string()), UserRole::User);
        assert_eq!(
            UserRole::from("technician".to_string()),
            UserRole::Other("technician".to_string())
        );
        assert_eq!(UserRole::Other("technician".into()).to_string(), "technician");
    }

    #[test]
    fn test_user_json_shape() {
        let user = User::new(1, "A", "a@b.com", UserRole::User);
        let json = user.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "A", "email": "a@b.com", "role": "user"})
        );
        assert_eq!(User::from_json(&json), Some(user));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(User::from_json("not json").is_none());
        assert!(User::from_json("null").is_none());
        assert!(User::from_json("[1,2]").is_none());
    }

    #[test]
    fn test_sparse_user_defaults() {
        let user = User::from_json(r#"{"id": 7}"#).unwrap();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.display_name(), "");

        let user = User::from_json(r#"{"id": 7, "email": "t@x.io"}"#).unwrap();
        assert_eq!(user.display_name(), "t@x.io");
    }

    #[test]
    fn test_string_id_and_missing_id_are_accepted() {
        let user = User::from_json(r#"{"id":"65a1f","name":"A","email":"a@b.com","role":"user"}"#).unwrap();
        assert_eq!(user.id, Some(UserId::Text("65a1f".into())));
        assert_eq!(user.id.as_ref().map(ToString::to_string).as_deref(), Some("65a1f"));

        let user = User::from_json(r#"{"name":"no id"}"#).unwrap();
        assert!(user.id.is_none());
        assert_eq!(user.display_name(), "no id");
        assert!(!user.to_json().unwrap().contains("\"id\""));
    }

    #[test]
    fn test_mistyped_fields_and_extras_survive() {
        let raw = r#"{"id":3,"name":42,"role":["admin"],"phone":"555-0100"}"#;
        let user = User::from_json(raw).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.extra.get("phone"), Some(&Value::String("555-0100".into())));

        let restored = User::from_json(&user.to_json().unwrap()).unwrap();
        assert_eq!(restored, user);
    }

    #[test]
    fn test_role_spelling_round_trips() {
        let user = User::from_json(r#"{"id":1,"role":"Admin"}"#).unwrap();
        assert_eq!(user.role, UserRole::Other("Admin".into()));
        assert!(user.role.is_admin());
        assert!(user.to_json().unwrap().contains(r#""role":"Admin""#));

        assert!(UserRole::from(" ADMIN ".to_string()).is_admin());
        assert!(!UserRole::from("administrator".to_string()).is_admin());
        assert!(!UserRole::User.is_admin());
    }
}
