use crate::middleware::{
    jwt::{admin_middleware, auth_middleware},
    validate::{SimpleValidatedJson, ValidatedQuery},
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
    abstract_trait::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::{FindAllProducts, ProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "Products in insertion order", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Invalid filter"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    ValidatedQuery(params): ValidatedQuery<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Product",
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Invalid body"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product replaced", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_product(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = serde_json::Value),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_product(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{id}", get(get_product))
        .layer(Extension(app_state.di_container.product_service.query.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/products", post(create_product))
        .route(
            "/api/products/{id}",
            put(update_product).delete(delete_product),
        )
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_service.command.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
