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
    routing::{get, patch, post},
};
use shared::{
    abstract_trait::{DynOrderCommandService, DynOrderQueryService},
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest, UpdateOrderStatusRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::HttpError,
    state::AppState,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = ApiResponse<OrderResponse>),
        (status = 400, description = "Empty order, unknown product or invalid address")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Orders, newest first", body = ApiResponse<Vec<OrderResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin role required")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order details", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Order updated", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Status change not allowed")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order(id, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderResponse>),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Status change not allowed")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<Uuid>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_order_status(id, body.status).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order deleted", body = serde_json::Value),
        (status = 404, description = "Order not found")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.delete_order(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/orders", post(create_order))
        .layer(Extension(app_state.di_container.order_service.command.clone()));

    let admin_routes = OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route(
            "/api/orders/{id}",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route("/api/orders/{id}/status", patch(update_order_status))
        .route_layer(middleware::from_fn(admin_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.order_service.query.clone()))
        .layer(Extension(app_state.di_container.order_service.command.clone()))
        .layer(Extension(app_state.jwt_config.clone()));

    public_routes.merge(admin_routes)
}
