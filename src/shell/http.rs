use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;

use crate::adapters::inbound::http as cart_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/cart", get(cart_http::get_cart))
        .route("/cart/items", post(cart_http::add_product))
        .route(
            "/cart/items/{product_id}",
            patch(cart_http::update_product_amount).delete(cart_http::remove_product),
        )
        .route("/cart/checkout", post(cart_http::checkout))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
