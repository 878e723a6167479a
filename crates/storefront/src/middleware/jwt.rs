use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use shared::{abstract_trait::DynJwtService, config::Claims, errors::HttpError};
use tracing::warn;

const NOT_LOGGED_IN: &str = "You are not logged in, please provide token";

/// Verifies the `token` cookie, then the bearer header, and stores the first valid
/// [`Claims`] in the request extensions. A stale cookie does not hide a valid bearer token.
pub async fn auth_middleware(
    cookie_jar: CookieJar,
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::to_owned);

    let candidates = cookie_jar
        .get("token")
        .map(|cookie| cookie.value().to_string())
        .into_iter()
        .chain(bearer);

    let mut rejection = HttpError::Unauthorized(NOT_LOGGED_IN.to_string());

    for token in candidates {
        match jwt.verify_token(&token) {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                return Ok(next.run(req).await);
            }
            Err(err) => {
                warn!("🚫 Rejected token: {err}");
                rejection = HttpError::from(err);
            }
        }
    }

    Err(rejection)
}

/// Must run after [`auth_middleware`].
pub async fn admin_middleware(
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    match req.extensions().get::<Claims>() {
        Some(claims) if claims.is_admin() => Ok(next.run(req).await),
        Some(claims) => {
            warn!("⛔ User {} attempted an admin route", claims.sub);
            Err(HttpError::Forbidden(
                "Access denied. Required role: admin".to_string(),
            ))
        }
        None => Err(HttpError::Unauthorized(NOT_LOGGED_IN.to_string())),
    }
}
