use actix_web::dev::Payload;
use actix_web::{web, Error as ActixError, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::cookies::{get_cookie, TOKEN_COOKIE};
use crate::error::ApiError;

/// Request guard for routes that require an authenticated caller.
///
/// Extraction performs the whole verification step: read the `token` cookie,
/// verify the signature against the configured secret, and parse the user id
/// out of the audience claim. A missing cookie and an invalid token fail
/// identically as 401 `"Unauthorized"`; handlers that take this extractor
/// never run without a verified identity.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub i32);

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = match req.app_data::<web::Data<Config>>() {
            Some(config) => get_cookie(req, TOKEN_COOKIE)
                .ok_or_else(|| ApiError::Unauthorized("Unauthorized".into()))
                .and_then(|token| verify_token(&token, &config.jwt_secret))
                .and_then(|claims| claims.user_id()),
            // Startup wires the Config into app data; reaching this branch
            // means the app was assembled without it.
            None => Err(ApiError::Internal("signing secret not configured".into())),
        };

        ready(user_id.map(AuthenticatedUser).map_err(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::dev::Payload;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/bytive_test".into(),
            jwt_secret: "extractor_secret".into(),
            server_host: "127.0.0.1".into(),
            server_port: 8080,
        }
    }

    #[actix_rt::test]
    async fn test_valid_cookie_yields_user_id() {
        let token = crate::auth::token::generate_token(123, "extractor_secret").unwrap();
        let req = test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .insert_header((header::COOKIE, format!("token={}", token)))
            .to_http_request();

        let mut payload = Payload::None;
        let extracted = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(extracted.unwrap().0, 123);
    }

    #[actix_rt::test]
    async fn test_missing_cookie_is_unauthorized() {
        let req = test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        let err = result.unwrap_err();
        assert_eq!(err.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_rt::test]
    async fn test_unrelated_cookies_are_unauthorized() {
        let req = test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .insert_header((header::COOKIE, "foo=bar; baz=qux"))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(
            result.unwrap_err().error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_rt::test]
    async fn test_foreign_secret_cookie_is_unauthorized() {
        let foreign_token =
            crate::auth::token::generate_token(123, "some_other_secret").unwrap();
        let req = test::TestRequest::default()
            .app_data(web::Data::new(test_config()))
            .insert_header((header::COOKIE, format!("token={}", foreign_token)))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(
            result.unwrap_err().error_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[actix_rt::test]
    async fn test_missing_config_is_internal() {
        let token = crate::auth::token::generate_token(123, "extractor_secret").unwrap();
        let req = test::TestRequest::default()
            .insert_header((header::COOKIE, format!("token={}", token)))
            .to_http_request();

        let mut payload = Payload::None;
        let result = AuthenticatedUser::from_request(&req, &mut payload).await;
        assert_eq!(
            result.unwrap_err().error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
