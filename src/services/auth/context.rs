/*
 * Responsibility
 * - リクエスト単位の認証状態 (RequestContext)
 * - authenticate layer が extensions に入れ、guard / extractor は読むだけ
 */
use super::claims::UserClaims;

/// Per-request authentication state.
///
/// The authenticate layer inserts one of these into the request extensions for
/// every request; guards and extractors only read it. `user` is set only when
/// the request carried a token that verified against the configured secret.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub user: Option<UserClaims>,
}

impl RequestContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&UserClaims> {
        self.user.as_ref()
    }
}
