/*
 * Responsibility
 * - 認証済みユーザー向け handler (/me, /users/{username}, /admin/whoami)
 * - 認可判定は route_layer の guard が済ませている前提。handler は CurrentUser を受け取るだけ
 */
use axum::{Json, extract::Path};

use crate::api::v1::dto::session::{SessionResponse, UserAccessResponse};
use crate::api::v1::extractors::CurrentUser;

pub async fn me(CurrentUser(claims): CurrentUser) -> Json<SessionResponse> {
    Json(claims.into())
}

pub async fn user_access(
    CurrentUser(claims): CurrentUser,
    Path(username): Path<String>,
) -> Json<UserAccessResponse> {
    Json(UserAccessResponse::new(username, &claims))
}

pub async fn admin_whoami(CurrentUser(claims): CurrentUser) -> Json<SessionResponse> {
    tracing::info!(username = %claims.username, "admin session inspected");
    Json(claims.into())
}
