//! HTTP client for the storefront catalog and stock endpoints.
//!
//! Serves both the `ProductCatalog` and `StockChecker` ports:
//! - `GET {base}/products/{id}` returns catalog data.
//! - `GET {base}/stock/{id}` returns the available quantity.
//!
//! A 404 or a `null` body means "absent". Any other failure is a `BackendError`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::cart::product::{CatalogProduct, ProductId, StockEntry};
use crate::core::ports::{BackendError, ProductCatalog, StockChecker};

#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: Client,
    base_url: String,
}

impl HttpStorefrontApi {
    /// `timeout` of `None` leaves requests unbounded.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, BackendError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "storefront request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;
        serde_json::from_slice::<Option<T>>(&body)
            .map_err(|e| BackendError::InvalidResponse(format!("{url}: {e}")))
    }
}

#[async_trait::async_trait]
impl ProductCatalog for HttpStorefrontApi {
    async fn get_product(
        &self,
        product_id: ProductId,
    ) -> Result<Option<CatalogProduct>, BackendError> {
        self.get_json(&format!("products/{product_id}")).await
    }
}

#[async_trait::async_trait]
impl StockChecker for HttpStorefrontApi {
    async fn get_stock(&self, product_id: ProductId) -> Result<Option<StockEntry>, BackendError> {
        self.get_json(&format!("stock/{product_id}")).await
    }
}

#[cfg(test)]
mod storefront_api_tests {
    use super::*;
    use axum::{
        Json, Router, extract::Path, http::StatusCode as AxumStatus, response::IntoResponse,
        routing::get,
    };
    use rstest::rstest;
    use rust_decimal::Decimal;
    use serde_json::json;

    async fn product(Path(id): Path<u64>) -> axum::response::Response {
        match id {
            1 => Json(json!({
                "id": 1,
                "title": "Tênis de Caminhada Leve Confortável",
                "price": 179.9,
                "image": "https://cdn.example.com/products/1.jpg"
            }))
            .into_response(),
            2 => Json(json!({ "id": 2, "title": "missing price" })).into_response(),
            3 => AxumStatus::INTERNAL_SERVER_ERROR.into_response(),
            4 => Json(serde_json::Value::Null).into_response(),
            _ => AxumStatus::NOT_FOUND.into_response(),
        }
    }

    async fn stock(Path(id): Path<u64>) -> axum::response::Response {
        match id {
            1 => Json(json!({ "id": 1, "amount": 3 })).into_response(),
            _ => (AxumStatus::NOT_FOUND, Json(json!({}))).into_response(),
        }
    }

    async fn spawn_api() -> String {
        let app = Router::new()
            .route("/products/{id}", get(product))
            .route("/stock/{id}", get(stock));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    async fn api() -> HttpStorefrontApi {
        HttpStorefrontApi::new(spawn_api().await, Some(Duration::from_secs(5))).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_parse_a_catalog_product() {
        let product = api().await.get_product(1).await.unwrap().unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.price, Decimal::new(1799, 1));
        assert_eq!(product.image, "https://cdn.example.com/products/1.jpg");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_parse_a_stock_entry() {
        let stock = api().await.get_stock(1).await.unwrap();
        assert_eq!(stock, Some(StockEntry { id: 1, amount: 3 }));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_map_not_found_to_none() {
        let api = api().await;
        assert_eq!(api.get_product(99).await, Ok(None));
        assert_eq!(api.get_stock(99).await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_map_a_null_body_to_none() {
        assert_eq!(api().await.get_product(4).await, Ok(None));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_mismatching_shape() {
        let result = api().await.get_product(2).await;
        assert!(matches!(result, Err(BackendError::InvalidResponse(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_unexpected_statuses() {
        let result = api().await.get_product(3).await;
        match result {
            Err(BackendError::Status { status, url }) => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/products/3"));
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unreachable_backend() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpStorefrontApi::new(format!("http://{addr}"), None).unwrap();
        let result = api.get_stock(1).await;
        assert!(matches!(result, Err(BackendError::Transport(_))));
    }
}
