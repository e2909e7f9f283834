//! Bearer token 検証 → RequestContext を extensions に入れる
//!
//! - すべてのリクエストに対して 1 度だけ実行される (ルーティングより外側)
//! - トークン無し / 検証失敗はエラーにしない。匿名 (user = None) として次へ進める
//! - 拒否するかどうかは route ごとの guard (`super::guards`) が決める

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::services::auth::RequestContext;
use crate::state::AppState;

/// Router 全体に authenticate middleware を適用する。
///
/// 例：
/// ```ignore
/// let app = Router::new().nest("/api/v1", api::v1::routes());
/// let app = middleware::auth::access::apply(app, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, authenticate))
}

async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let mut ctx = RequestContext::anonymous();

    let auth = match req.headers().get(header::AUTHORIZATION).map(|v| v.to_str()) {
        Some(Ok(value)) => Some(value),
        Some(Err(_)) => {
            tracing::debug!("authorization header is not valid ascii, continuing as anonymous");
            None
        }
        None => None,
    };

    state.auth.authenticate(&mut ctx, auth);

    if let Some(user) = ctx.user() {
        tracing::debug!(username = %user.username, is_admin = user.is_admin, "request authenticated");
    }

    // middleware → guard / extractor への受け渡し
    req.extensions_mut().insert(ctx);

    next.run(req).await
}
