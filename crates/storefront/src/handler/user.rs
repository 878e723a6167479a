use crate::middleware::jwt::{admin_middleware, auth_middleware};
use axum::{
    Extension, Json, extract::Path, http::StatusCode, middleware, response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::DynUserQueryService,
    domain::responses::{ApiResponse, UserResponse},
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users, without password hashes", body = ApiResponse<Vec<UserResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn get_users(
    Extension(service): Extension<DynUserQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "User",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(service): Extension<DynUserQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/users", get(get_users))
        .route("/api/users/{id}", get(get_user))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.user_service.query.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
