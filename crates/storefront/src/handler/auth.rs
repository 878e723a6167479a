use crate::middleware::{jwt::auth_middleware, validate::SimpleValidatedJson};
use axum::{
    Extension, Json,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use shared::{
    abstract_trait::DynAuthService,
    config::Claims,
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{ApiResponse, LoginResponse, UserResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

const TOKEN_COOKIE: &str = "token";

pub async fn health_checker_handler() -> Result<impl IntoResponse, HttpError> {
    const MESSAGE: &str = "Storefront API is up and running";

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "success",
            "message": MESSAGE
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login_user_handler(
    Extension(service): Extension<DynAuthService>,
    jar: CookieJar,
    SimpleValidatedJson(body): SimpleValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.login_user(&body).await?;

    let cookie = Cookie::build((TOKEN_COOKIE, response.data.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(cookie), (StatusCode::OK, Json(response))))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = serde_json::Value)
    ),
    tag = "Auth"
)]
pub async fn logout_handler(jar: CookieJar) -> impl IntoResponse {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));

    (
        jar,
        Json(ApiResponse::success("Logged out successfully", ())),
    )
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserResponse>),
        (status = 400, description = "User already exists or invalid body")
    ),
    tag = "Auth"
)]
pub async fn register_user_handler(
    Extension(service): Extension<DynAuthService>,
    SimpleValidatedJson(body): SimpleValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.register_user(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Get Me user", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Auth",
)]
pub async fn get_me_handler(
    Extension(service): Extension<DynAuthService>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.get_me(claims.sub).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn auth_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/auth/register", post(register_user_handler))
        .route("/api/auth/login", post(login_user_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/healthchecker", get(health_checker_handler))
        .layer(Extension(app_state.di_container.auth_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/auth/me", get(get_me_handler))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.auth_service.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(private_routes)
}
