/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: authenticate (全リクエスト) + route ごとの guard
 * - http / cors / security_headers: 横断的な transport 関心事
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
