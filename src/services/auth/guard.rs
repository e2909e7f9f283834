/*
 * Responsibility
 * - Bearer token の抽出・検証 (authenticate) と claims ベースの認可判定 (require_*)
 * - axum には依存しない。Authorization ヘッダと {username} は middleware::auth から渡される
 */

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use super::claims::UserClaims;
use super::context::RequestContext;

const BEARER_SCHEME: &str = "Bearer ";

/// The single failure kind raised by the authorization guards.
///
/// It deliberately carries no detail about which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unauthorized")]
pub struct Unauthorized;

/// Verifies HMAC-signed access tokens against the process secret.
///
/// Built once at startup and shared read-only across requests.
#[derive(Clone)]
pub struct AuthGuard {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthGuard")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthGuard {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` / `nbf` are checked when present, but tokens are not required to carry them.
        validation.required_spec_claims.clear();
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify and decode a token (without the scheme prefix).
    pub fn verify(&self, token: &str) -> Result<UserClaims, jsonwebtoken::errors::Error> {
        let data = jsonwebtoken::decode::<UserClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Attach the caller's claims to `ctx` if `header` holds a valid token.
    ///
    /// A missing header or a token that fails verification leaves `ctx`
    /// untouched: the request simply proceeds as anonymous.
    pub fn authenticate(&self, ctx: &mut RequestContext, header: Option<&str>) {
        let Some(header) = header else {
            return;
        };

        let token = bearer_token(header);
        if token.is_empty() {
            return;
        }

        match self.verify(token) {
            Ok(claims) => ctx.user = Some(claims),
            Err(err) => {
                tracing::debug!(error = %err, "access token rejected, continuing as anonymous");
            }
        }
    }
}

/// Strip an optional, case-insensitive `Bearer ` scheme and surrounding whitespace.
pub fn bearer_token(header: &str) -> &str {
    let header = header.trim();
    let token = match header.get(..BEARER_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER_SCHEME) => {
            &header[BEARER_SCHEME.len()..]
        }
        _ => header,
    };
    token.trim()
}

pub fn require_logged_in(ctx: &RequestContext) -> Result<(), Unauthorized> {
    ctx.user().map(|_| ()).ok_or(Unauthorized)
}

pub fn require_admin(ctx: &RequestContext) -> Result<(), Unauthorized> {
    match ctx.user() {
        Some(user) if user.is_admin => Ok(()),
        _ => Err(Unauthorized),
    }
}

/// Passes for admins, or when the caller is the user named by the route.
/// Username comparison is exact (case-sensitive).
pub fn require_self_or_admin(
    ctx: &RequestContext,
    target_username: &str,
) -> Result<(), Unauthorized> {
    match ctx.user() {
        Some(user) if user.is_admin || user.username == target_username => Ok(()),
        _ => Err(Unauthorized),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{SECRET, sign, token_for};
    use super::*;
    use serde_json::json;

    fn guard() -> AuthGuard {
        AuthGuard::new(SECRET, 0)
    }

    fn user(username: &str, is_admin: bool) -> RequestContext {
        RequestContext {
            user: Some(UserClaims {
                username: username.into(),
                is_admin,
                iat: None,
                exp: None,
                extra: Default::default(),
            }),
        }
    }

    mod authenticate {
        use super::*;

        #[test]
        fn sets_user_from_valid_bearer_header() {
            let iat = chrono::Utc::now().timestamp();
            let token = sign(
                &json!({ "username": "test", "isAdmin": false, "iat": iat }),
                SECRET,
            );
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            assert_eq!(
                ctx.user,
                Some(UserClaims {
                    username: "test".into(),
                    is_admin: false,
                    iat: Some(iat),
                    exp: None,
                    extra: Default::default(),
                })
            );
        }

        #[test]
        fn no_header_leaves_context_unset() {
            let mut ctx = RequestContext::anonymous();
            guard().authenticate(&mut ctx, None);
            assert!(ctx.user.is_none());
        }

        #[test]
        fn token_signed_with_other_secret_is_anonymous() {
            let token = sign(&json!({ "username": "test", "isAdmin": false }), "wrong");
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            assert!(ctx.user.is_none());
        }

        #[test]
        fn malformed_token_is_anonymous() {
            let mut ctx = RequestContext::anonymous();
            guard().authenticate(&mut ctx, Some("Bearer not.a.jwt"));
            assert!(ctx.user.is_none());

            guard().authenticate(&mut ctx, Some("Bearer "));
            assert!(ctx.user.is_none());
        }

        #[test]
        fn expired_token_is_anonymous() {
            let now = chrono::Utc::now().timestamp();
            let token = sign(
                &json!({ "username": "test", "iat": now - 7200, "exp": now - 3600 }),
                SECRET,
            );
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            assert!(ctx.user.is_none());
        }

        #[test]
        fn not_yet_valid_token_is_anonymous() {
            let now = chrono::Utc::now().timestamp();
            let token = sign(
                &json!({ "username": "test", "iat": now, "nbf": now + 3600 }),
                SECRET,
            );
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            assert!(ctx.user.is_none());
        }

        #[test]
        fn extra_payload_fields_are_kept() {
            let token = sign(
                &json!({ "username": "test", "isAdmin": false, "iat": 1, "firstName": "T" }),
                SECRET,
            );
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            let user = ctx.user.expect("user should be set");
            assert_eq!(user.username, "test");
            assert_eq!(user.iat, Some(1));
            assert_eq!(user.extra.get("firstName"), Some(&json!("T")));
        }

        #[test]
        fn unexpired_token_keeps_exp() {
            let now = chrono::Utc::now().timestamp();
            let token = sign(
                &json!({ "username": "test", "iat": now, "exp": now + 3600 }),
                SECRET,
            );
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            let user = ctx.user.expect("user should be set");
            assert_eq!(user.exp, Some(now + 3600));
        }

        #[test]
        fn payload_without_username_is_anonymous() {
            let token = sign(&json!({ "isAdmin": true }), SECRET);
            let mut ctx = RequestContext::anonymous();

            guard().authenticate(&mut ctx, Some(&format!("Bearer {token}")));

            assert!(ctx.user.is_none());
        }

        #[test]
        fn scheme_is_case_insensitive_and_optional() {
            let token = token_for("test", true);

            for header in [
                format!("bearer {token}"),
                format!("BEARER {token}"),
                format!("  Bearer   {token}  "),
                token.clone(),
            ] {
                let mut ctx = RequestContext::anonymous();
                guard().authenticate(&mut ctx, Some(&header));
                let user = ctx.user.expect("user should be set");
                assert_eq!(user.username, "test");
                assert!(user.is_admin);
            }
        }
    }

    #[test]
    fn bearer_token_strips_scheme_and_whitespace() {
        assert_eq!(bearer_token("Bearer abc"), "abc");
        assert_eq!(bearer_token("bEaReR abc"), "abc");
        assert_eq!(bearer_token(" Bearer  abc \t"), "abc");
        assert_eq!(bearer_token("abc"), "abc");
        assert_eq!(bearer_token("Bearer"), "Bearer");
        assert_eq!(bearer_token("Basic abc"), "Basic abc");
        assert_eq!(bearer_token("ünïcödé"), "ünïcödé");
    }

    #[test]
    fn require_logged_in_checks_presence() {
        assert_eq!(require_logged_in(&user("test", false)), Ok(()));
        assert_eq!(
            require_logged_in(&RequestContext::anonymous()),
            Err(Unauthorized)
        );
    }

    #[test]
    fn require_admin_checks_flag() {
        assert_eq!(require_admin(&user("test", true)), Ok(()));
        assert_eq!(require_admin(&user("test", false)), Err(Unauthorized));
        assert_eq!(require_admin(&RequestContext::anonymous()), Err(Unauthorized));
    }

    mod self_or_admin {
        use super::*;

        #[test]
        fn passes_for_current_user() {
            assert_eq!(require_self_or_admin(&user("test1", false), "test1"), Ok(()));
        }

        #[test]
        fn passes_for_admin() {
            assert_eq!(require_self_or_admin(&user("test1", true), "test2"), Ok(()));
        }

        #[test]
        fn rejects_other_user() {
            assert_eq!(
                require_self_or_admin(&user("test1", false), "test3"),
                Err(Unauthorized)
            );
        }

        #[test]
        fn comparison_is_case_sensitive() {
            assert_eq!(
                require_self_or_admin(&user("test1", false), "Test1"),
                Err(Unauthorized)
            );
        }

        #[test]
        fn rejects_anonymous() {
            assert_eq!(
                require_self_or_admin(&RequestContext::anonymous(), "test1"),
                Err(Unauthorized)
            );
        }
    }
}
