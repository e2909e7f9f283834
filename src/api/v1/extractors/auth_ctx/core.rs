/*
 * Responsibility
 * - CurrentUser の FromRequestParts 実装 (axum 依存はここに閉じる)
 */
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::RequestContext;
use crate::state::AppState;

use super::CurrentUser;

/// RequestContext が無い (middleware 未設定) か user が None なら 401
impl FromRequestParts<AppState> for CurrentUser
where
    AppState: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .and_then(|ctx| ctx.user().cloned())
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}
