// HTTP inbound adapter for the cart.
//
// Responsibilities
// - Translate requests into cart store calls and answer with the derived cart view.
// - Catch every cart failure at this boundary, raise its notification and answer
//   with the notification body.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::application::errors::CartError;
use crate::application::notifications::{CartOperation, Notification};
use crate::core::cart::decide::UpdateProductAmount;
use crate::core::cart::product::ProductId;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct AddProductBody {
    pub product_id: ProductId,
}

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: i64,
}

#[derive(Serialize)]
pub struct NotificationBody {
    pub kind: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct FailureResponse {
    pub notification: NotificationBody,
}

fn status_for(error: &CartError) -> StatusCode {
    match error {
        CartError::Stock(_) => StatusCode::CONFLICT,
        CartError::UnavailableProduct(_) | CartError::NotFound(_) => StatusCode::NOT_FOUND,
        CartError::PriceOverflow(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CartError::Backend(_) => StatusCode::BAD_GATEWAY,
        CartError::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn failure(state: &AppState, operation: CartOperation, error: CartError) -> Response {
    let notification = Notification::for_failure(operation, &error);
    state.notifier.notify(notification).await;
    (
        status_for(&error),
        Json(FailureResponse {
            notification: NotificationBody {
                kind: notification.kind(),
                message: notification.message(),
            },
        }),
    )
        .into_response()
}

pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.cart.lock().await.view())
}

pub async fn add_product(
    State(state): State<AppState>,
    body: Result<Json<AddProductBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let mut store = state.cart.lock().await;
    match store.add_product(body.product_id).await {
        Ok(()) => Json(store.view()).into_response(),
        Err(error) => failure(&state, CartOperation::Add, error).await,
    }
}

pub async fn remove_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Response {
    let mut store = state.cart.lock().await;
    match store.remove_product(product_id).await {
        Ok(()) => Json(store.view()).into_response(),
        Err(error) => failure(&state, CartOperation::Remove, error).await,
    }
}

pub async fn update_product_amount(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateProductAmount {
        product_id,
        amount: body.amount,
    };
    let mut store = state.cart.lock().await;
    match store.update_product_amount(command).await {
        Ok(()) => Json(store.view()).into_response(),
        Err(error) => failure(&state, CartOperation::Update, error).await,
    }
}

/// Order processing is not part of this service; the cart is left as is.
pub async fn checkout(State(state): State<AppState>) -> Response {
    let view = state.cart.lock().await.view();
    tracing::info!(lines = view.items.len(), "checkout requested");
    (StatusCode::ACCEPTED, Json(view)).into_response()
}

#[cfg(test)]
mod cart_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::adapters::in_memory::in_memory_notifier::InMemoryNotifier;
    use crate::adapters::in_memory::in_memory_snapshot_store::InMemorySnapshotStore;
    use crate::adapters::in_memory::in_memory_storefront::InMemoryStorefront;
    use crate::application::cart_store::DynCartStore;
    use crate::application::notifications::Notification;
    use crate::shell::http::router;
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::catalog_product;

    struct TestApp {
        app: Router,
        storefront: Arc<InMemoryStorefront>,
        snapshots: Arc<InMemorySnapshotStore>,
        notifier: Arc<InMemoryNotifier>,
    }

    async fn make_test_app() -> TestApp {
        let storefront = Arc::new(
            InMemoryStorefront::new()
                .with_product(catalog_product(1), 2)
                .with_product(catalog_product(2), 5),
        );
        let snapshots = Arc::new(InMemorySnapshotStore::new());
        let notifier = Arc::new(InMemoryNotifier::new());
        let store = DynCartStore::load(storefront.clone(), storefront.clone(), snapshots.clone())
            .await
            .unwrap();
        let state = AppState::new(store, notifier.clone());
        TestApp {
            app: router(state),
            storefront,
            snapshots,
            notifier,
        }
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    fn add(product_id: u64) -> Request<Body> {
        Request::post("/cart/items")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"product_id":{product_id}}}"#)))
            .unwrap()
    }

    fn update(product_id: u64, amount: i64) -> Request<Body> {
        Request::patch(format!("/cart/items/{product_id}"))
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"amount":{amount}}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_the_empty_cart() {
        let test = make_test_app().await;
        let (status, json) = send(
            &test.app,
            Request::get("/cart").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"], serde_json::json!([]));
        assert_eq!(json["total_formatted"], "R$ 0,00");
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_view_after_adding() {
        let test = make_test_app().await;
        let (status, json) = send(&test.app, add(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["id"], 1);
        assert_eq!(json["items"][0]["amount"], 1);
        assert_eq!(json["items"][0]["subtotal_formatted"], "R$ 179,90");
        assert_eq!(test.snapshots.save_count(), 1);
    }

    #[tokio::test]
    async fn it_should_return_409_and_notify_when_out_of_stock() {
        let test = make_test_app().await;
        send(&test.app, add(1)).await;
        send(&test.app, add(1)).await;

        let (status, json) = send(&test.app, add(1)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["notification"]["kind"], "out_of_stock");
        assert_eq!(
            test.notifier.notifications().await,
            vec![Notification::OutOfStock]
        );
    }

    #[tokio::test]
    async fn it_should_return_404_when_adding_an_unknown_product() {
        let test = make_test_app().await;
        let (status, json) = send(&test.app, add(77)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["notification"]["kind"], "add_failure");
    }

    #[tokio::test]
    async fn it_should_return_502_when_the_storefront_is_offline() {
        let test = make_test_app().await;
        test.storefront.toggle_offline();
        let (status, json) = send(&test.app, add(1)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json["notification"]["kind"], "add_failure");
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_snapshot_cannot_be_written() {
        let test = make_test_app().await;
        test.snapshots.toggle_offline();
        let (status, json) = send(
            &test.app,
            Request::delete("/cart/items/1").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["notification"]["kind"], "remove_failure");
    }

    #[tokio::test]
    async fn it_should_remove_a_line() {
        let test = make_test_app().await;
        send(&test.app, add(1)).await;
        send(&test.app, add(2)).await;

        let (status, json) = send(
            &test.app,
            Request::delete("/cart/items/1").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["items"][0]["id"], 2);
    }

    #[tokio::test]
    async fn it_should_update_the_amount() {
        let test = make_test_app().await;
        send(&test.app, add(2)).await;

        let (status, json) = send(&test.app, update(2, 4)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["amount"], 4);
        assert_eq!(json["items"][0]["can_decrement"], true);
    }

    #[tokio::test]
    async fn it_should_ignore_a_non_positive_amount() {
        let test = make_test_app().await;
        send(&test.app, add(2)).await;

        let (status, json) = send(&test.app, update(2, 0)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["items"][0]["amount"], 1);
        assert!(test.notifier.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn it_should_return_409_and_notify_when_updating_above_stock() {
        let test = make_test_app().await;
        send(&test.app, add(2)).await;

        let (status, json) = send(&test.app, update(2, 9)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["notification"]["kind"], "out_of_stock");
        assert_eq!(
            test.notifier.notifications().await,
            vec![Notification::OutOfStock]
        );
        let (_, cart) = send(&test.app, Request::get("/cart").body(Body::empty()).unwrap()).await;
        assert_eq!(cart["items"][0]["amount"], 1);
    }

    #[tokio::test]
    async fn it_should_return_422_on_a_malformed_amount() {
        let test = make_test_app().await;
        send(&test.app, add(2)).await;
        let saves = test.snapshots.save_count();

        let (status, _) = send(
            &test.app,
            Request::patch("/cart/items/2")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"amount":"three"}"#))
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(test.snapshots.save_count(), saves);
        assert!(test.notifier.notifications().await.is_empty());
    }

    #[tokio::test]
    async fn it_should_return_404_when_updating_a_missing_line() {
        let test = make_test_app().await;
        let (status, json) = send(&test.app, update(2, 1)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["notification"]["kind"], "update_failure");
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let test = make_test_app().await;
        let (status, _) = send(
            &test.app,
            Request::post("/cart/items")
                .header("content-type", "application/json")
                .body(Body::from("not-json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_accept_checkout_without_touching_the_cart() {
        let test = make_test_app().await;
        send(&test.app, add(1)).await;
        let saves = test.snapshots.save_count();

        let (status, json) = send(
            &test.app,
            Request::post("/cart/checkout").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(json["items"][0]["amount"], 1);
        assert_eq!(test.snapshots.save_count(), saves);
    }
}
