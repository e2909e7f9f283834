/*
 * Responsibility
 * - Handler から見える「認証済みユーザー」の型
 * - 検証は middleware (access) / 認可判定は guards の責務。ここは型 (契約) だけ
 */
use crate::services::auth::UserClaims;

/// 認証済みリクエストの呼び出し元
///
/// guard を通過した route では必ず取得できる。
/// guard 無しの route で使うと、匿名リクエストは 401 になる。
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserClaims);
