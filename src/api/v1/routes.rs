/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - guard (ensure_*) は route_layer で route ごとに掛ける
 *   (route_layer なので path param が取れる / 未マッチの 404 には掛からない)
 */
use axum::{Router, middleware::from_fn, routing::get};

use crate::api::v1::handlers::session::{admin_whoami, me, user_access};
use crate::middleware::auth::guards::{ensure_admin, ensure_logged_in, ensure_self_or_admin};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(me).route_layer(from_fn(ensure_logged_in)))
        .route(
            "/users/{username}",
            get(user_access).route_layer(from_fn(ensure_self_or_admin)),
        )
        .route(
            "/admin/whoami",
            get(admin_whoami).route_layer(from_fn(ensure_admin)),
        )
}
