/*!
 * Authenticated user extractor
 *
 * Responsibility:
 * - authenticate middleware が extensions に置いた RequestContext から、検証済み claims を handler に渡す
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - CurrentUser
 */

mod core;
mod types;

pub use types::CurrentUser;
