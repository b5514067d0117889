//! User encoding and decoding.

use domain::{DEFAULT_ROLE, Timestamp, User, UserId};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{DecodeError, Result};

/// Decoding view of a user record: every key is optional so absence can be
/// reported per field instead of as a generic parse failure.
#[derive(Debug, Deserialize)]
struct UserRecord {
    id: Option<UserId>,
    username: Option<String>,
    email: Option<String>,
    created_at: Option<String>,
    is_active: Option<bool>,
    role: Option<String>,
}

impl UserRecord {
    fn into_user(self) -> Result<User> {
        let id = self.id.ok_or(DecodeError::MissingField("id"))?;
        let username = self
            .username
            .ok_or(DecodeError::MissingField("username"))?;
        let email = self.email.ok_or(DecodeError::MissingField("email"))?;
        let created_at = self
            .created_at
            .ok_or(DecodeError::MissingField("created_at"))?;

        Ok(User {
            id,
            username,
            email,
            created_at: Timestamp::parse(&created_at)?,
            is_active: self.is_active.unwrap_or(true),
            role: self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}

/// Encodes a user as a JSON object value.
pub fn encode_user_value(user: &User) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "created_at": user.created_at.to_string(),
        "is_active": user.is_active,
        "role": user.role,
    })
}

/// Encodes a user as canonical JSON text.
#[tracing::instrument(skip(user), fields(user_id = %user.id))]
pub fn encode_user(user: &User) -> String {
    metrics::counter!("codec_users_encoded_total").increment(1);
    encode_user_value(user).to_string()
}

/// Decodes a user from JSON text.
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn decode_user(text: &str) -> Result<User> {
    let result = serde_json::from_str::<UserRecord>(text)
        .map_err(DecodeError::from)
        .and_then(UserRecord::into_user);
    record_failure(result)
}

/// Decodes a user from an already-parsed JSON value.
pub fn decode_user_value(value: Value) -> Result<User> {
    let result = serde_json::from_value::<UserRecord>(value)
        .map_err(DecodeError::from)
        .and_then(UserRecord::into_user);
    record_failure(result)
}

fn record_failure(result: Result<User>) -> Result<User> {
    if let Err(err) = &result {
        metrics::counter!("codec_decode_failures_total").increment(1);
        tracing::warn!(error = %err, "failed to decode user record");
    }
    result
}
