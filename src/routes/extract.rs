//! Request extractors resolving the current user from a bearer token.

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use std::future::Future;
use std::pin::Pin;

use crate::error::ApiError;
use crate::models::User;
use crate::routes::AppState;

/// Extractor that requires a valid bearer token for an existing user
///
/// Rejects with 401 "Could not validate credentials" otherwise.
pub struct CurrentUser(pub User);

/// Extractor that resolves the user when possible
///
/// A missing, invalid or expired token, or an unknown user, yields `None`
/// rather than an error.
pub struct MaybeUser(pub Option<User>);

type ExtractFuture<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

impl FromRequest for CurrentUser {
    type Error = ApiError;
    type Future = ExtractFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let state = state.ok_or_else(|| ApiError::Internal("Application state missing".to_string()))?;
            let token = token.ok_or_else(ApiError::credentials)?;

            lookup_user(&state, &token)
                .await
                .map(CurrentUser)
                .ok_or_else(ApiError::credentials)
        })
    }
}

impl FromRequest for MaybeUser {
    type Error = ApiError;
    type Future = ExtractFuture<Self>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let user = match (state, token) {
                (Some(state), Some(token)) => lookup_user(&state, &token).await,
                _ => None,
            };
            Ok(MaybeUser(user))
        })
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

async fn lookup_user(state: &AppState, token: &str) -> Option<User> {
    let user_id = match state.tokens.verify(token) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::debug!("Rejected bearer token: {}", e);
            return None;
        }
    };

    match state.postgres.get_user(&user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Failed to load user {} for token: {}", user_id, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_token_parsing() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer abc.def.ghi"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("abc.def.ghi"));

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "bearer   xyz"))
            .to_http_request();
        assert_eq!(bearer_token(&req).as_deref(), Some("xyz"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwYXNz"))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);

        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[actix_web::test]
    async fn test_maybe_user_without_state_is_none() {
        let (req, mut payload) = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer token"))
            .to_http_parts();

        let MaybeUser(user) = MaybeUser::from_request(&req, &mut payload).await.unwrap();
        assert!(user.is_none());
    }

    #[actix_web::test]
    async fn test_current_user_rejects_anonymous_request() {
        let (req, mut payload) = TestRequest::default().to_http_parts();

        assert!(CurrentUser::from_request(&req, &mut payload).await.is_err());
    }
}
