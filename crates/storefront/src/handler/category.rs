use crate::middleware::{
    jwt::{admin_middleware, auth_middleware},
    validate::SimpleValidatedJson,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{
    abstract_trait::{DynCategoryCommandService, DynCategoryQueryService},
    domain::{
        requests::CategoryRequest,
        responses::{ApiResponse, CategoryResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    responses(
        (status = 200, description = "All categories with subcategories", body = ApiResponse<Vec<CategoryResponse>>)
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "Category",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    Extension(service): Extension<DynCategoryQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/categories/slug/{slug}",
    tag = "Category",
    params(("slug" = String, Path, description = "Category slug, e.g. leather-products")),
    responses(
        (status = 200, description = "Category details", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category_by_slug(
    Extension(service): Extension<DynCategoryQueryService>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_slug(&slug).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "Category",
    security(("bearer_auth" = [])),
    request_body = CategoryRequest,
    responses(
        (status = 201, description = "Category created", body = ApiResponse<CategoryResponse>),
        (status = 400, description = "Invalid body or slug already taken"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_category(
    Extension(service): Extension<DynCategoryCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_category(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category replaced", body = ApiResponse<CategoryResponse>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<CategoryRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_category(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "Category",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted", body = serde_json::Value),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    Extension(service): Extension<DynCategoryCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_category(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(get_category))
        .route("/api/categories/slug/{slug}", get(get_category_by_slug))
        .layer(Extension(app_state.di_container.category_service.query.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/categories", post(create_category))
        .route(
            "/api/categories/{id}",
            put(update_category).delete(delete_category),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.category_service.command.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
