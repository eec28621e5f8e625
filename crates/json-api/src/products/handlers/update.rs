//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::data::ProductUpdate;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Update Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub price: u64,
    pub active: bool,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            price: request.price,
            active: request.active,
        }
    }
}

/// Product Update Handler
///
/// Price changes apply to carts and checkouts from now on; placed orders keep
/// the prices they were created with.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::FORBIDDEN, description = "Admin token required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot),
    fields(product_uuid = tracing::field::Empty, price = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.require_admin()?;

    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("price", request.price);

    let product = state
        .app
        .products
        .update_product(product.into(), request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{Mocks, make_product};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        Mocks {
            products,
            ..Mocks::default()
        }
        .into_admin_service(Router::with_path("products/{product}").put(handler))
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let mut updated = make_product(uuid, 250);

        updated.active = false;

        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .withf(move |u, update| {
                *u == uuid
                    && *update
                        == ProductUpdate {
                            price: 250,
                            active: false,
                        }
            })
            .return_once(move |_, _| Ok(updated));

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "price": 250, "active": false }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(body.price, 250);
        assert!(!body.active, "product should now be inactive");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();
        let mut products = MockProductsService::new();

        products
            .expect_update_product()
            .once()
            .return_once(|_, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&json!({ "price": 250, "active": true }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
