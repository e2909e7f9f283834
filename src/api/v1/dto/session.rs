/*
 * Responsibility
 * - 認証済みセッション系 endpoint の response DTO
 * - claims をそのまま返すのではなく、クライアント向けの形に整える
 */
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::auth::UserClaims;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub username: String,
    pub is_admin: bool,
    pub issued_at: Option<DateTime<Utc>>,
}

impl From<UserClaims> for SessionResponse {
    fn from(claims: UserClaims) -> Self {
        Self {
            issued_at: claims.issued_at(),
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccessResponse {
    pub username: String,
    pub viewer: String,
    // true when access was granted by the admin override rather than ownership
    pub via_admin: bool,
}

impl UserAccessResponse {
    pub fn new(target: String, viewer: &UserClaims) -> Self {
        Self {
            via_admin: viewer.username != target,
            viewer: viewer.username.clone(),
            username: target,
        }
    }
}
