use axum::{extract::State, Extension, Json};

use crate::{
    error::Result,
    models::{SessionResponse, SessionUser, UserRole},
    queries::user_queries,
    utils::{extractors::extract_user_id, jwt::Claims},
    AppState,
};

/// Who the presented token belongs to, with the admin flag re-derived from a
/// fresh role lookup. A failed lookup demotes to non-admin instead of
/// erroring; the user is still signed in either way.
pub async fn get_session(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<SessionResponse>> {
    let user_id = extract_user_id(&claims)?;

    let role = match user_queries::find_role_by_id(&state.db, user_id).await {
        Ok(role) => UserRole::from_lookup(role.as_deref()),
        Err(e) => {
            tracing::error!("Role lookup failed for user {}: {}", user_id, e);
            UserRole::Customer
        }
    };

    Ok(Json(SessionResponse {
        user: SessionUser {
            id: user_id,
            email: claims.email,
        },
        is_admin: role == UserRole::Admin,
    }))
}
