/*
 * Responsibility
 * - route ごとの認可 guard (ensure_logged_in / ensure_admin / ensure_self_or_admin)
 * - `route_layer(from_fn(...))` で掛ける: ルーティング後なので path param が取れる
 * - access::apply が RequestContext を入れている前提。無ければ匿名扱い
 */
use std::collections::HashMap;

use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{
    RequestContext, require_admin, require_logged_in, require_self_or_admin,
};

pub async fn ensure_logged_in(req: Request, next: Next) -> Result<Response, AppError> {
    require_logged_in(context(&req))?;
    Ok(next.run(req).await)
}

pub async fn ensure_admin(req: Request, next: Next) -> Result<Response, AppError> {
    require_admin(context(&req))?;
    Ok(next.run(req).await)
}

/// Target user comes from the `{username}` path parameter.
/// Routes without that parameter fall back to the admin check.
pub async fn ensure_self_or_admin(
    Path(params): Path<HashMap<String, String>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    match params.get("username") {
        Some(target) => require_self_or_admin(context(&req), target)?,
        None => require_admin(context(&req))?,
    }
    Ok(next.run(req).await)
}

static ANONYMOUS: RequestContext = RequestContext { user: None };

fn context(req: &Request) -> &RequestContext {
    req.extensions()
        .get::<RequestContext>()
        .unwrap_or(&ANONYMOUS)
}
