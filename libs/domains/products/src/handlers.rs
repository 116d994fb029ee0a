use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorResponse, FieldError, IdPath, ValidationErrorResponse};
use serde_json::Value;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{
    CreateProduct, DeletedResponse, PRODUCT_DELETED, Product, ProductListResponse,
    ProductResponse, ProductSummary, UpdateProduct,
};
use crate::repository::ProductRepository;
use crate::service::ProductService;
use crate::validation;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        toggle_availability,
        delete_product,
    ),
    components(schemas(
        Product,
        ProductSummary,
        CreateProduct,
        UpdateProduct,
        ProductResponse,
        ProductListResponse,
        DeletedResponse,
        ErrorResponse,
        ValidationErrorResponse,
        FieldError,
    )),
    tags(
        (name = "Products", description = "CRUD products")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product)
                .put(update_product)
                .patch(toggle_availability)
                .delete(delete_product),
        )
        .with_state(shared_service)
}

/// Get a list of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Successful response", body = ProductListResponse),
        (status = 500, description = "Unexpected persistence failure", body = ErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<ProductListResponse>> {
    let data = service.list_products().await?;
    Ok(Json(ProductListResponse { data }))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "The ID of the product to retrieve")
    ),
    responses(
        (status = 200, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.get_product(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductResponse),
        (status = 400, description = "Invalid input data", body = ValidationErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Json(body): Json<Value>,
) -> ProductResult<impl IntoResponse> {
    let input = validation::validate_create(&body).map_err(ProductError::Validation)?;
    let data = service.create_product(input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse { data })))
}

/// Update a product with user input
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "The ID of the product to update")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Invalid id or invalid input data", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    Json(body): Json<Value>,
) -> ProductResult<Json<ProductResponse>> {
    let input = validation::validate_update(&body).map_err(ProductError::Validation)?;
    let data = service.update_product(id, input).await?;

    Ok(Json(ProductResponse { data }))
}

/// Update product availability
///
/// Flips the stored value; the request body is ignored entirely.
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "The ID of the product to update")
    ),
    responses(
        (status = 200, description = "Successful response", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn toggle_availability<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductResponse>> {
    let data = service.toggle_availability(id).await?;
    Ok(Json(ProductResponse { data }))
}

/// Delete a product by a given ID
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "The ID of the product to delete")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<DeletedResponse>> {
    service.delete_product(id).await?;

    Ok(Json(DeletedResponse {
        data: PRODUCT_DELETED.to_string(),
    }))
}
