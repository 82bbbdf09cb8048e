//! One-time password-reset codes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A one-time code issued for a password reset, keyed to the user's email.
///
/// Timestamps persist as millisecond epoch numbers, matching the stored
/// collection format. Records are deleted on successful verification and on
/// expiry checks; they are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpRecord {
    pub email: String,
    pub otp: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub expires_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Whether the code is past its expiry at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
