use axum::{extract::State, Json};

use crate::{
    error::{AppError, Result},
    models::{AuthResponse, LoginRequest, UserRole},
    queries::user_queries,
    utils::jwt,
    AppState,
};

/// Back-office sign-in. Valid credentials without the admin role are refused
/// outright; there is nothing a non-admin session could do here.
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let user = user_queries::find_by_email(&state.db, &payload.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let password_hash = user
        .password
        .as_ref()
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let is_valid = bcrypt::verify(&payload.password, password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    if !is_valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let role = UserRole::from_lookup(Some(user.app_role.as_str()));

    if role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "This account is not allowed to access the back office".to_string(),
        ));
    }

    let token = jwt::generate_token(user.id, &user.email, role)?;

    Ok(Json(AuthResponse { token }))
}
