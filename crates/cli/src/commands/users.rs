//! User listing and codec commands.

use domain::UserId;

use crate::dataset::Dataset;
use crate::error::Result;

/// Usernames of active users, one per line.
pub fn active_users(dataset: &Dataset) -> String {
    catalog::filter_active(&dataset.users)
        .iter()
        .map(|user| user.username.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Encodes the user with `id` as JSON.
pub fn encode(dataset: &Dataset, id: UserId) -> Result<String> {
    let user = dataset.user(id)?;
    Ok(codec::encode_user(user))
}

/// Decodes `json` as a user and re-encodes it in canonical form.
pub fn decode(json: &str) -> Result<String> {
    let user = codec::decode_user(json)?;
    Ok(codec::encode_user(&user))
}
