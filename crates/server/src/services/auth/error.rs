//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signup with an email that is already registered.
    #[error("User already exists")]
    UserAlreadyExists,

    /// Wrong email/password pair.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No user with the requested id.
    #[error("User not found")]
    UserNotFound,

    /// Password-reset request for an unregistered email.
    #[error("Email not found in our system")]
    EmailNotFound,

    /// No matching (email, code) pair.
    #[error("Invalid OTP")]
    InvalidOtp,

    /// The code matched but is past its expiry. Reported distinctly from
    /// a wrong code; the record is deleted on this check.
    #[error("OTP has expired")]
    OtpExpired,

    /// Reset token failed signature, binding, or expiry verification.
    #[error("Invalid token")]
    InvalidToken,

    /// New password is below the minimum length.
    #[error("Password must be at least 6 characters")]
    WeakPassword,

    /// Password hashing or verification machinery failed.
    #[error("password hashing error")]
    PasswordHash,

    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}
