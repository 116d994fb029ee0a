//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST API Rust / Axum",
        version = "1.0.0",
        description = "API Docs for Products"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "CRUD products")
    )
)]
pub struct ApiDoc;
