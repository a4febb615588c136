use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{application::error::ApplicationError, domain::config::settings::Settings};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub exp: i64,
}

/// Identity extracted from a verified bearer token, inserted into request
/// extensions by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Stateless HS256 verification against the shared signing secret. Expiry
/// is enforced; any failure collapses into a single 401 message.
pub fn verify_bearer_token(token: &str, secret: &str) -> Result<String, ApplicationError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.user_id)
    .map_err(|e| {
        warn!("Token verification failed: {}", e);
        ApplicationError::Unauthenticated("Invalid or expired token".to_string())
    })
}

/// Middleware guarding owner-scoped routes: requires an
/// `Authorization: Bearer <token>` header and stores the verified identity
/// for the handler.
pub async fn require_bearer_auth(
    State(settings): State<Arc<Settings>>,
    headers: HeaderMap,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApplicationError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = match header_value {
        Some(value) if value.starts_with("Bearer ") => &value[7..],
        _ => {
            warn!("Missing or malformed Authorization header");
            return Err(ApplicationError::Unauthenticated(
                "Authentication required".to_string(),
            ));
        }
    };

    let user_id = verify_bearer_token(token, &settings.jwt_secret)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-signing-secret";

    fn issue(user_id: &str, exp: i64, secret: &str) -> String {
        let claims = Claims {
            user_id: user_id.to_string(),
            exp,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn extracts_the_user_id_from_a_valid_token() {
        let token = issue("u1", future_exp(), SECRET);
        assert_eq!(verify_bearer_token(&token, SECRET).unwrap(), "u1");
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let token = issue("u1", future_exp(), "other-secret");
        assert!(matches!(
            verify_bearer_token(&token, SECRET),
            Err(ApplicationError::Unauthenticated(_))
        ));
    }

    #[test]
    fn rejects_an_expired_token() {
        let token = issue("u1", chrono::Utc::now().timestamp() - 3600, SECRET);
        assert!(matches!(
            verify_bearer_token(&token, SECRET),
            Err(ApplicationError::Unauthenticated(_))
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            verify_bearer_token("definitely.not.a.jwt", SECRET),
            Err(ApplicationError::Unauthenticated(_))
        ));
    }
}
