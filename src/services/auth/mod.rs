/*
 * Responsibility
 * - auth ドメインの公開インターフェース (re-export)
 */
pub mod claims;
pub mod context;
pub mod guard;

pub use claims::UserClaims;
pub use context::RequestContext;
pub use guard::{AuthGuard, Unauthorized, require_admin, require_logged_in, require_self_or_admin};
