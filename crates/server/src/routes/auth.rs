//! Account and password-reset handlers.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use dresshaus_core::{UserId, UserProfile, UserSummary};

use crate::error::{AppError, Result};
use crate::routes::present;
use crate::services::{AuthService, SignUp};
use crate::state::AppState;

// =============================================================================
// Request / Response types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ForgotPasswordBody {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyOtpBody {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordBody {
    pub email: Option<String>,
    pub token: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpBody>,
) -> Result<Json<AccountResponse>> {
    let (Some(name), Some(email), Some(password)) = (
        present(body.name),
        present(body.email),
        present(body.password),
    ) else {
        return Err(AppError::Validation(
            "Name, email, and password are required".to_owned(),
        ));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    let user = auth.sign_up(SignUp {
        name,
        email,
        phone: body.phone.unwrap_or_default(),
        address_line1: body.address_line1.unwrap_or_default(),
        address_line2: body.address_line2.unwrap_or_default(),
        district: body.district.unwrap_or_default(),
        state: body.state.unwrap_or_default(),
        pincode: body.pincode.unwrap_or_default(),
        password,
    })?;

    Ok(Json(AccountResponse {
        success: true,
        message: "User created successfully".to_owned(),
        user,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<AccountResponse>> {
    let (Some(email), Some(password)) = (present(body.email), present(body.password)) else {
        return Err(AppError::Validation(
            "Email and password are required".to_owned(),
        ));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    let user = auth.login(&email, &password)?;

    Ok(Json(AccountResponse {
        success: true,
        message: "Login successful".to_owned(),
        user,
    }))
}

/// GET /api/auth/user?userId=
pub async fn user_info(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ProfileResponse>> {
    let Some(user_id) = present(query.user_id) else {
        return Err(AppError::Validation("userId is required".to_owned()));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    let user = auth.user_info(&UserId::new(user_id))?;

    Ok(Json(ProfileResponse {
        success: true,
        user,
    }))
}

/// POST /api/auth/forgot-password
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPasswordBody>,
) -> Result<Json<ForgotPasswordResponse>> {
    let Some(email) = present(body.email) else {
        return Err(AppError::Validation("Email is required".to_owned()));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    auth.request_password_reset(&email)?;

    Ok(Json(ForgotPasswordResponse {
        success: true,
        message: "OTP has been sent to your email".to_owned(),
        email,
    }))
}

/// POST /api/auth/verify-otp
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpBody>,
) -> Result<Json<VerifyOtpResponse>> {
    let (Some(email), Some(otp)) = (present(body.email), present(body.otp)) else {
        return Err(AppError::Validation(
            "Email and OTP are required".to_owned(),
        ));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    let token = auth.verify_otp(&email, &otp)?;

    Ok(Json(VerifyOtpResponse {
        success: true,
        message: "OTP verified successfully".to_owned(),
        token,
    }))
}

/// POST /api/auth/reset-password
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordBody>,
) -> Result<Json<MessageResponse>> {
    let (Some(email), Some(token), Some(new_password)) = (
        present(body.email),
        present(body.token),
        present(body.new_password),
    ) else {
        return Err(AppError::Validation(
            "Email, token, and new password are required".to_owned(),
        ));
    };

    let auth = AuthService::new(state.store(), &state.config().reset_secret);
    auth.reset_password(&email, &token, &new_password)?;

    Ok(Json(MessageResponse {
        success: true,
        message: "Password has been reset successfully".to_owned(),
    }))
}
