use utoipa::OpenApi;

/// Aggregated OpenAPI document for the commerce API.
///
/// Domain docs already carry their full public paths, so they are nested
/// under the empty prefix rather than a path segment.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce API",
        description = "Product catalog, order history and client accounts"
    ),
    nest(
        (path = String::new(), api = domain_products::ProductsApiDoc),
        (path = String::new(), api = domain_products::CategoriesApiDoc),
        (path = String::new(), api = domain_orders::OrdersApiDoc),
        (path = String::new(), api = domain_users::UsersApiDoc)
    )
)]
pub struct ApiDoc;
