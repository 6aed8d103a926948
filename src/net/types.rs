//! Wire DTOs for the user REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's camelCase JSON. Response types are lenient
//! where the backend is known to vary (numeric vs string `status`, token at
//! the top level vs under `body`).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Login request body. Never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response of `POST /user/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: Option<u16>,
    pub message: Option<String>,
    pub token: Option<String>,
    pub body: Option<TokenBody>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TokenBody {
    pub token: Option<String>,
}

impl LoginResponse {
    /// Session token, preferring `body.token` over a top-level `token`.
    /// Empty strings count as missing.
    pub fn token(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|b| b.token.as_deref())
            .or(self.token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// The signed-in user as returned by the profile endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// Response of `POST /user/profile` and `PUT /user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: Option<u16>,
    pub message: Option<String>,
    pub body: UserProfile,
}

/// Body of `PUT /user/profile`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => number
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom("status out of range")),
        Some(serde_json::Value::String(raw)) => raw
            .trim()
            .parse::<u16>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid status '{raw}'"))),
        Some(_) => Err(D::Error::custom("expected numeric status")),
    }
}
