//! Test Helpers

use crate::{
    domain::{
        carts::{CartsService, CartsServiceError, data::NewCartLine, models::Cart},
        customers::records::CustomerUuid,
        orders::{
            OrdersService, OrdersServiceError,
            data::NewOrder,
            records::{OrderRecord, OrderUuid},
        },
        products::records::ProductUuid,
    },
    test::TestContext,
};

pub(crate) async fn add_item(
    ctx: &TestContext,
    customer: CustomerUuid,
    product: ProductUuid,
    quantity: i32,
) -> Result<Cart, CartsServiceError> {
    ctx.carts
        .add_item(
            customer,
            NewCartLine {
                product_uuid: product,
                quantity,
            },
        )
        .await
}

pub(crate) async fn checkout(
    ctx: &TestContext,
    customer: CustomerUuid,
) -> Result<OrderRecord, OrdersServiceError> {
    ctx.orders
        .create_order(
            customer,
            NewOrder {
                uuid: OrderUuid::new(),
            },
        )
        .await
}
