//! Authentication service.
//!
//! Credential records live in the `users` collection with argon2 password
//! hashes. Password reset is a two-step flow: a time-boxed 6-digit code is
//! issued against the user's email (delivered by an external transport;
//! here it is logged), then exchanged for a signed bearer token that
//! authorizes the actual password change.

mod error;
pub mod token;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use rand::Rng;
use secrecy::SecretString;
use uuid::Uuid;

use dresshaus_core::{OtpRecord, User, UserId, UserProfile, UserSummary};

use crate::store::JsonStore;

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// How long a reset code stays valid.
const OTP_TTL_MINUTES: i64 = 10;

/// How long a reset token stays valid after OTP verification.
const TOKEN_TTL_MINUTES: i64 = 10;

/// Fields for creating an account. Address fields are optional at the API
/// surface and default to empty strings.
#[derive(Debug, Clone)]
pub struct SignUp {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    pub address_line2: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
    pub password: String,
}

/// Authentication service.
///
/// Handles signup, login, profile lookup, and the OTP password-reset flow.
pub struct AuthService<'a> {
    store: &'a JsonStore,
    reset_secret: &'a SecretString,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(store: &'a JsonStore, reset_secret: &'a SecretString) -> Self {
        Self {
            store,
            reset_secret,
        }
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserAlreadyExists` if the email is registered.
    pub fn sign_up(&self, fields: SignUp) -> Result<UserSummary, AuthError> {
        let mut users: Vec<User> = self.store.load();

        if users.iter().any(|u| u.email == fields.email) {
            return Err(AuthError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::new(format!("user-{}", Uuid::new_v4())),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address_line1: fields.address_line1,
            address_line2: fields.address_line2,
            district: fields.district,
            state: fields.state,
            pincode: fields.pincode,
            password: hash_password(&fields.password)?,
        };

        let summary = user.summary();
        users.push(user);
        self.store.save(&users)?;

        tracing::info!(user_id = %summary.id, "user registered");
        Ok(summary)
    }

    /// Login with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair does not match.
    pub fn login(&self, email: &str, password: &str) -> Result<UserSummary, AuthError> {
        let users: Vec<User> = self.store.load();
        let user = users
            .iter()
            .find(|u| u.email == email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password)?;
        Ok(user.summary())
    }

    /// Full public profile for a user id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no user has the id.
    pub fn user_info(&self, user_id: &UserId) -> Result<UserProfile, AuthError> {
        let users: Vec<User> = self.store.load();
        users
            .iter()
            .find(|u| &u.id == user_id)
            .map(User::profile)
            .ok_or(AuthError::UserNotFound)
    }

    // =========================================================================
    // Password Reset
    // =========================================================================

    /// Issue a 6-digit reset code for the email, valid for ten minutes.
    ///
    /// Delivery is an external collaborator; the code is logged here in
    /// its place.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailNotFound` if the email is not registered.
    pub fn request_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let users: Vec<User> = self.store.load();
        if !users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailNotFound);
        }

        let code = generate_otp();
        let now = Utc::now();

        let mut otps: Vec<OtpRecord> = self.store.load();
        otps.push(OtpRecord {
            email: email.to_owned(),
            otp: code.clone(),
            created_at: now,
            expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        });
        self.store.save(&otps)?;

        // Stand-in for the email transport
        tracing::info!(email, otp = %code, "password reset code issued");
        Ok(())
    }

    /// Exchange a reset code for a signed reset token.
    ///
    /// The matched record is deleted whether the code is expired or valid,
    /// so a second attempt with the same code reports "invalid" rather than
    /// "expired".
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidOtp` if no (email, code) pair matches, or
    /// `AuthError::OtpExpired` if the match is past its expiry.
    pub fn verify_otp(&self, email: &str, code: &str) -> Result<String, AuthError> {
        let mut otps: Vec<OtpRecord> = self.store.load();
        let position = otps
            .iter()
            .position(|o| o.email == email && o.otp == code)
            .ok_or(AuthError::InvalidOtp)?;

        let record = otps.remove(position);
        self.store.save(&otps)?;

        let now = Utc::now();
        if record.is_expired(now) {
            return Err(AuthError::OtpExpired);
        }

        Ok(token::issue(
            self.reset_secret,
            email,
            now + Duration::minutes(TOKEN_TTL_MINUTES),
        ))
    }

    /// Set a new password, authorized by a reset token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::WeakPassword` if the password is under six
    /// characters, `AuthError::InvalidToken` if the token fails
    /// verification against the email, or `AuthError::UserNotFound` if the
    /// email is not registered.
    pub fn reset_password(
        &self,
        email: &str,
        reset_token: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        if new_password.len() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword);
        }

        if !token::verify(self.reset_secret, email, reset_token, Utc::now()) {
            return Err(AuthError::InvalidToken);
        }

        let mut users: Vec<User> = self.store.load();
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(AuthError::UserNotFound)?;

        user.password = hash_password(new_password)?;
        self.store.save(&users)?;

        tracing::info!(email, "password reset completed");
        Ok(())
    }
}

/// Random 6-digit numeric code.
fn generate_otp() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

/// Hash a password with argon2 and a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored argon2 hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::InvalidCredentials)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("kR8#mW2$pL5!qX9@tB4&vN7*yF0^zC3d")
    }

    fn sign_up_fields(email: &str) -> SignUp {
        SignUp {
            name: "Asha".to_owned(),
            email: email.to_owned(),
            phone: "9999999999".to_owned(),
            address_line1: "12 Rose St".to_owned(),
            address_line2: String::new(),
            district: "Central".to_owned(),
            state: "KA".to_owned(),
            pincode: "560001".to_owned(),
            password: "hunter22".to_owned(),
        }
    }

    #[test]
    fn test_sign_up_then_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        let summary = auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        assert!(summary.id.as_str().starts_with("user-"));

        let logged_in = auth.login("a@x.com", "hunter22").unwrap();
        assert_eq!(logged_in.id, summary.id);
    }

    #[test]
    fn test_password_stored_hashed() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();

        let users: Vec<User> = store.load();
        assert_ne!(users[0].password, "hunter22");
        assert!(users[0].password.starts_with("$argon2"));
    }

    #[test]
    fn test_duplicate_email_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        assert!(matches!(
            auth.sign_up(sign_up_fields("a@x.com")),
            Err(AuthError::UserAlreadyExists)
        ));
    }

    #[test]
    fn test_login_wrong_password_unauthorized() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        assert!(matches!(
            auth.login("a@x.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            auth.login("nobody@x.com", "hunter22"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_user_info_returns_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        let summary = auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        let profile = auth.user_info(&summary.id).unwrap();
        assert_eq!(profile.pincode, "560001");

        assert!(matches!(
            auth.user_info(&UserId::new("user-missing")),
            Err(AuthError::UserNotFound)
        ));
    }

    #[test]
    fn test_reset_flow_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        auth.request_password_reset("a@x.com").unwrap();

        let otps: Vec<OtpRecord> = store.load();
        let code = otps[0].otp.clone();
        assert_eq!(code.len(), 6);

        let reset_token = auth.verify_otp("a@x.com", &code).unwrap();
        auth.reset_password("a@x.com", &reset_token, "newpass99").unwrap();

        assert!(auth.login("a@x.com", "newpass99").is_ok());
        assert!(matches!(
            auth.login("a@x.com", "hunter22"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_reset_for_unknown_email_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        assert!(matches!(
            auth.request_password_reset("nobody@x.com"),
            Err(AuthError::EmailNotFound)
        ));
    }

    #[test]
    fn test_verify_wrong_code_is_invalid_and_keeps_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();
        auth.request_password_reset("a@x.com").unwrap();

        assert!(matches!(
            auth.verify_otp("a@x.com", "000000"),
            Err(AuthError::InvalidOtp)
        ));

        let otps: Vec<OtpRecord> = store.load();
        assert_eq!(otps.len(), 1);
    }

    #[test]
    fn test_expired_code_reported_distinctly_and_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();

        let now = Utc::now();
        store
            .save(&[OtpRecord {
                email: "a@x.com".to_owned(),
                otp: "123456".to_owned(),
                created_at: now - Duration::minutes(20),
                expires_at: now - Duration::minutes(10),
            }])
            .unwrap();

        assert!(matches!(
            auth.verify_otp("a@x.com", "123456"),
            Err(AuthError::OtpExpired)
        ));

        // Record removed: a second attempt is "invalid", not "expired"
        assert!(matches!(
            auth.verify_otp("a@x.com", "123456"),
            Err(AuthError::InvalidOtp)
        ));
    }

    #[test]
    fn test_reset_password_validates_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let secret = secret();
        let auth = AuthService::new(&store, &secret);

        auth.sign_up(sign_up_fields("a@x.com")).unwrap();

        assert!(matches!(
            auth.reset_password("a@x.com", "whatever", "short"),
            Err(AuthError::WeakPassword)
        ));
        assert!(matches!(
            auth.reset_password("a@x.com", "reset-bogus-token", "longenough"),
            Err(AuthError::InvalidToken)
        ));

        // Token issued for a different email must not authorize this one
        let foreign = token::issue(&secret, "b@x.com", Utc::now() + Duration::minutes(10));
        assert!(matches!(
            auth.reset_password("a@x.com", &foreign, "longenough"),
            Err(AuthError::InvalidToken)
        ));
    }
}
