/*
 * Responsibility
 * - access: 全リクエストで authenticate (拒否しない)
 * - guards: route ごとの認可判定 (失敗は 401)
 */
pub mod access;
pub mod guards;
