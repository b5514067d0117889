//! Canonical exchange format for user records.
//!
//! A user is encoded as one flat JSON object with the keys `id`,
//! `username`, `email`, `created_at`, `is_active` and `role`. Decoding
//! requires the first four and defaults the rest, so
//! `decode_user(&encode_user(&u))` always yields `u` again.

pub mod error;
pub mod user;

pub use error::{DecodeError, Result};
pub use user::{decode_user, decode_user_value, encode_user, encode_user_value};
