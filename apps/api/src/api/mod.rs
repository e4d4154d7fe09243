use axum::Router;

pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod users;

/// Composes the domain routers.
///
/// Every domain router carries its full public paths (`/products`,
/// `/orders`, ...), so they are merged rather than nested: the `path`
/// field of error bodies must equal the path the client requested.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .merge(products::router(state))
        .merge(categories::router(state))
        .merge(orders::router(state))
        .merge(users::router(state))
}

/// Router with the /ready endpoint that pings the database
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
