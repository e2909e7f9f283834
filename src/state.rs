/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - auth: AuthGuard (起動時に1度だけ構築、以後は読み取り専用)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::AuthGuard;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<AuthGuard>,
}

impl AppState {
    pub fn new(auth: Arc<AuthGuard>) -> Self {
        Self { auth }
    }
}
