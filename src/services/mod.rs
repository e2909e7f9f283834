/*
 * Responsibility
 * - ドメインロジック (HTTP 非依存)
 * - auth: bearer token 検証 + claim ベースの認可判定
 */
pub mod auth;
