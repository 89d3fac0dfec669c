use crate::{
    adapter::http::middleware::extractor::AuthUser,
    application::app_error::{AppError, AppResult},
    infra::config::AppConfig,
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authentication lives in front of this service; the gateway terminates it
/// and forwards the resolved user id in a trusted header. The middleware only
/// checks the header carries a well-formed integer id.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let user_id = extract_user_id(&request, &config.auth.identity_header)?;
    request.extensions_mut().insert(AuthUser { user_id });
    Ok(next.run(request).await)
}

fn extract_user_id(request: &Request, identity_header: &str) -> AppResult<String> {
    let value = request
        .headers()
        .get(identity_header)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    if value.parse::<i64>().is_err() {
        return Err(AppError::InvalidCredentials);
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use axum::extract::Request;
    use axum::body::Body;

    use crate::adapter::http::middleware::auth::extract_user_id;

    fn request_with_header(name: &str, value: &str) -> Request {
        Request::builder().header(name, value).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_extract_user_id_ok() {
        let request = request_with_header("x-user-id", "42");
        assert_eq!(extract_user_id(&request, "x-user-id").unwrap(), "42");
    }

    #[test]
    fn test_extract_user_id_missing_header() {
        let request = Request::builder().body(Body::empty()).unwrap();
        assert!(extract_user_id(&request, "x-user-id").is_err());
    }

    #[test]
    fn test_extract_user_id_rejects_non_numeric() {
        let request = request_with_header("x-user-id", "mallory");
        assert!(extract_user_id(&request, "x-user-id").is_err());
    }
}
