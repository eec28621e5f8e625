//! Orders service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::{
        carts::{
            models::CartTotals,
            repositories::{PgCartLinesRepository, PgCartsRepository},
        },
        customers::{records::CustomerUuid, repository::PgCustomersRepository},
        orders::{
            data::NewOrder,
            errors::OrdersServiceError,
            models::OrderDraft,
            records::{OrderRecord, OrderUuid},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
            status::OrderTransition,
        },
        products::repository::PgProductsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    orders_repository: PgOrdersRepository,
    lines_repository: PgOrderLinesRepository,
    customers_repository: PgCustomersRepository,
    carts_repository: PgCartsRepository,
    cart_lines_repository: PgCartLinesRepository,
    products_repository: PgProductsRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            orders_repository: PgOrdersRepository::new(),
            lines_repository: PgOrderLinesRepository::new(),
            customers_repository: PgCustomersRepository::new(),
            carts_repository: PgCartsRepository::new(),
            cart_lines_repository: PgCartLinesRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    /// Attach lines to each order, preserving the order of `orders`.
    async fn with_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        mut orders: Vec<OrderRecord>,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        if orders.is_empty() {
            return Ok(orders);
        }

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let mut lines = self.lines_repository.list_lines(tx, &uuids).await?;

        for order in &mut orders {
            order.lines = lines.remove(&order.uuid).unwrap_or_default();
        }

        Ok(orders)
    }

    async fn transition(
        &self,
        order: OrderUuid,
        transition: OrderTransition,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(updated) = self
            .orders_repository
            .transition_order(&mut tx, order, transition)
            .await?
        else {
            let current = self
                .orders_repository
                .find_order(&mut tx, order)
                .await?
                .ok_or(OrdersServiceError::OrderNotFound)?;

            warn!(status = %current.status, "rejected order transition");

            return Err(OrdersServiceError::InvalidTransition {
                from: current.status,
                transition,
            });
        };

        let mut updated = self.with_lines(&mut tx, vec![updated]).await?;

        tx.commit().await?;

        let updated = updated.pop().ok_or(OrdersServiceError::OrderNotFound)?;

        info!(status = %updated.status, version = updated.version, "order transitioned");

        Ok(updated)
    }
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_order",
        skip(self, order),
        fields(customer_uuid = %customer, order_uuid = %order.uuid),
        err
    )]
    async fn create_order(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let profile = self
            .customers_repository
            .find_customer(&mut tx, customer)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound)?;

        if !profile.is_checkout_ready() {
            return Err(OrdersServiceError::CheckoutNotReady {
                missing: profile.missing_checkout_fields(),
            });
        }

        let cart = self
            .carts_repository
            .lock_cart(&mut tx, customer)
            .await?
            .ok_or(OrdersServiceError::EmptyCart)?;

        let cart_lines = self.cart_lines_repository.list_lines(&mut tx, cart.uuid).await?;

        if cart_lines.is_empty() {
            return Err(OrdersServiceError::EmptyCart);
        }

        let mut draft = OrderDraft::new(order.uuid, customer);

        for cart_line in &cart_lines {
            let product = self
                .products_repository
                .resolve_product(&mut tx, cart_line.product_uuid)
                .await?
                .filter(|product| product.available)
                .ok_or(OrdersServiceError::ProductUnavailable(cart_line.product_uuid))?;

            draft.push_line(cart_line.product_uuid, cart_line.quantity, product.price)?;
        }

        let mut created = self.orders_repository.create_order(&mut tx, &draft).await?;

        for line in &draft.lines {
            let line = self
                .lines_repository
                .create_line(&mut tx, created.uuid, line)
                .await?;

            created.lines.push(line);
        }

        self.cart_lines_repository
            .clear_lines(&mut tx, cart.uuid)
            .await?;

        self.carts_repository
            .update_totals(&mut tx, cart.uuid, CartTotals::default())
            .await?;

        tx.commit().await?;

        info!(
            lines = created.lines.len(),
            total_items = created.total_items,
            total_price = created.total_price,
            "placed order"
        );

        Ok(created)
    }

    #[tracing::instrument(
        name = "orders.service.accept_order",
        skip(self),
        fields(order_uuid = %order),
        err
    )]
    async fn accept_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        self.transition(order, OrderTransition::Accept).await
    }

    #[tracing::instrument(
        name = "orders.service.cancel_order",
        skip(self),
        fields(order_uuid = %order),
        err
    )]
    async fn cancel_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        self.transition(order, OrderTransition::Cancel).await
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .orders_repository
            .find_order(&mut tx, order)
            .await?
            .ok_or(OrdersServiceError::OrderNotFound)?;

        let mut records = self.with_lines(&mut tx, vec![record]).await?;

        tx.commit().await?;

        records.pop().ok_or(OrdersServiceError::OrderNotFound)
    }

    async fn list_orders_for_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self
            .orders_repository
            .list_customer_orders(&mut tx, customer)
            .await?;

        let orders = self.with_lines(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let mut tx = self.db.begin().await?;

        let orders = self.orders_repository.list_orders(&mut tx).await?;

        let orders = self.with_lines(&mut tx, orders).await?;

        tx.commit().await?;

        Ok(orders)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Turn the customer's cart into a placed order at current catalog
    /// prices and empty the cart, atomically.
    async fn create_order(
        &self,
        customer: CustomerUuid,
        order: NewOrder,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Move a placed order to accepted.
    async fn accept_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Move a placed order to cancelled.
    async fn cancel_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order with its lines.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// A customer's orders, newest first.
    async fn list_orders_for_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Every order, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;
    use tokio::task::JoinSet;

    use crate::{
        domain::{
            carts::CartsService,
            customers::{CustomersService, data::ProfileUpdate},
            orders::status::OrderStatus,
            products::{ProductsService, data::ProductUpdate},
        },
        test::{
            TestContext,
            helpers::{add_item, checkout},
        },
    };

    use super::*;

    async fn order_count(ctx: &TestContext) -> TestResult<i64> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(ctx.db.pool())
            .await?;

        Ok(count)
    }

    #[tokio::test]
    async fn checkout_places_order_and_empties_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product_a = ctx.create_product(10_00).await;
        let product_b = ctx.create_product(5_00).await;

        add_item(&ctx, customer, product_a, 2).await?;
        add_item(&ctx, customer, product_b, 1).await?;

        let order = checkout(&ctx, customer).await?;

        assert_eq!(order.customer_uuid, customer);
        assert_eq!(order.status, OrderStatus::Placed);
        assert_eq!(order.total_items, 3);
        assert_eq!(order.total_price, 25_00);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(
            order
                .lines
                .iter()
                .map(|line| (line.position, line.product_uuid, line.quantity, line.unit_price))
                .collect::<Vec<_>>(),
            vec![(0, product_a, 2, 10_00), (1, product_b, 1, 5_00)]
        );
        assert_eq!(
            order.lines.iter().map(|line| line.line_total).sum::<u64>(),
            order.total_price
        );

        let cart = ctx.carts.get_cart(customer).await?;

        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_price, 0);

        assert_eq!(ctx.orders.get_order(order.uuid).await?, order);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_uses_current_price_not_cart_snapshot() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(10_00).await;

        add_item(&ctx, customer, product, 3).await?;

        ctx.products
            .update_product(
                product,
                ProductUpdate {
                    price: 8_00,
                    active: true,
                },
            )
            .await?;

        let order = checkout(&ctx, customer).await?;

        assert_eq!(order.lines[0].unit_price, 8_00);
        assert_eq!(order.lines[0].line_total, 24_00);
        assert_eq!(order.total_price, 24_00);

        Ok(())
    }

    #[tokio::test]
    async fn order_prices_ignore_later_catalog_changes() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(10_00).await;

        add_item(&ctx, customer, product, 1).await?;

        let order = checkout(&ctx, customer).await?;

        ctx.products
            .update_product(
                product,
                ProductUpdate {
                    price: 99_00,
                    active: false,
                },
            )
            .await?;

        let reloaded = ctx.orders.get_order(order.uuid).await?;

        assert_eq!(reloaded.lines[0].unit_price, 10_00);
        assert_eq!(reloaded.total_price, 10_00);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_empty_cart_returns_empty_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart without a cart, got {result:?}"
        );

        let product = ctx.create_product(1_00).await;

        add_item(&ctx, customer, product, 1).await?;
        ctx.carts.remove_item(customer, product).await?;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::EmptyCart)),
            "expected EmptyCart with an emptied cart, got {result:?}"
        );
        assert_eq!(order_count(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_missing_phone_leaves_cart_untouched() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("Ada").await;
        let product = ctx.create_product(10_00).await;

        ctx.customers
            .update_profile(
                customer,
                ProfileUpdate {
                    address: Some("1 Main St".to_string()),
                    city: Some("Springfield".to_string()),
                    phone: None,
                },
            )
            .await?;

        let before = add_item(&ctx, customer, product, 2).await?;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(
                &result,
                Err(OrdersServiceError::CheckoutNotReady { missing }) if missing == &["phone"]
            ),
            "expected CheckoutNotReady, got {result:?}"
        );
        assert_eq!(ctx.carts.get_cart(customer).await?, before);
        assert_eq!(order_count(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_not_ready_is_reported_before_empty_cart() {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("Ada").await;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::CheckoutNotReady { .. })),
            "expected CheckoutNotReady, got {result:?}"
        );
    }

    #[tokio::test]
    async fn checkout_with_deactivated_product_leaves_cart_untouched() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let kept = ctx.create_product(1_00).await;
        let withdrawn = ctx.create_product(2_00).await;

        add_item(&ctx, customer, kept, 1).await?;
        let before = add_item(&ctx, customer, withdrawn, 1).await?;

        ctx.products
            .update_product(
                withdrawn,
                ProductUpdate {
                    price: 2_00,
                    active: false,
                },
            )
            .await?;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::ProductUnavailable(uuid)) if uuid == withdrawn),
            "expected ProductUnavailable, got {result:?}"
        );
        assert_eq!(ctx.carts.get_cart(customer).await?, before);
        assert_eq!(order_count(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_total_beyond_storage_range_returns_invalid_data() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(1).await;

        let before = add_item(&ctx, customer, product, 2).await?;

        ctx.products
            .update_product(
                product,
                ProductUpdate {
                    price: 5_000_000_000_000_000_000,
                    active: true,
                },
            )
            .await?;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::InvalidData)),
            "expected InvalidData, got {result:?}"
        );
        assert_eq!(ctx.carts.get_cart(customer).await?, before);
        assert_eq!(order_count(&ctx).await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn checkout_with_deleted_product_returns_product_unavailable() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(1_00).await;

        add_item(&ctx, customer, product, 1).await?;
        ctx.products.delete_product(product).await?;

        let result = checkout(&ctx, customer).await;

        assert!(
            matches!(result, Err(OrdersServiceError::ProductUnavailable(uuid)) if uuid == product),
            "expected ProductUnavailable, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_for_unknown_customer_returns_customer_not_found() {
        let ctx = TestContext::new().await;

        let result = checkout(&ctx, CustomerUuid::new()).await;

        assert!(
            matches!(result, Err(OrdersServiceError::CustomerNotFound)),
            "expected CustomerNotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn retried_checkout_with_same_uuid_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(1_00).await;
        let uuid = OrderUuid::new();

        add_item(&ctx, customer, product, 1).await?;
        ctx.orders.create_order(customer, NewOrder { uuid }).await?;

        let before = add_item(&ctx, customer, product, 1).await?;

        let result = ctx.orders.create_order(customer, NewOrder { uuid }).await;

        assert!(
            matches!(result, Err(OrdersServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );
        assert_eq!(ctx.carts.get_cart(customer).await?, before);
        assert_eq!(order_count(&ctx).await?, 1);

        Ok(())
    }

    #[tokio::test]
    async fn accept_moves_placed_order_to_accepted() -> TestResult {
        let ctx = TestContext::new().await;
        let order = ctx.place_order(1_00, 1).await?;

        let accepted = ctx.orders.accept_order(order.uuid).await?;

        assert_eq!(accepted.status, OrderStatus::Accepted);
        assert_eq!(accepted.version, order.version + 1);
        assert_eq!(accepted.lines, order.lines);

        Ok(())
    }

    #[tokio::test]
    async fn second_transition_is_rejected_and_keeps_first_status() -> TestResult {
        let ctx = TestContext::new().await;

        for (first, second) in [
            (OrderTransition::Accept, OrderTransition::Accept),
            (OrderTransition::Accept, OrderTransition::Cancel),
            (OrderTransition::Cancel, OrderTransition::Cancel),
            (OrderTransition::Cancel, OrderTransition::Accept),
        ] {
            let uuid = ctx.place_order(1_00, 1).await?.uuid;

            let apply = |transition| {
                let orders = &ctx.orders;
                async move {
                    match transition {
                        OrderTransition::Accept => orders.accept_order(uuid).await,
                        OrderTransition::Cancel => orders.cancel_order(uuid).await,
                    }
                }
            };

            let after_first = apply(first).await?;

            let result = apply(second).await;

            assert!(
                matches!(
                    result,
                    Err(OrdersServiceError::InvalidTransition { from, transition })
                        if from == after_first.status && transition == second
                ),
                "expected InvalidTransition for {first} then {second}, got {result:?}"
            );

            let reloaded = ctx.orders.get_order(uuid).await?;

            assert_eq!(reloaded.status, first.target());
            assert_eq!(reloaded.version, after_first.version);
        }

        Ok(())
    }

    #[tokio::test]
    async fn cancel_on_accepted_order_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let order = ctx.place_order(1_00, 1).await?;

        ctx.orders.accept_order(order.uuid).await?;

        let result = ctx.orders.cancel_order(order.uuid).await;

        assert!(
            matches!(
                result,
                Err(OrdersServiceError::InvalidTransition {
                    from: OrderStatus::Accepted,
                    transition: OrderTransition::Cancel,
                })
            ),
            "expected InvalidTransition, got {result:?}"
        );
        assert_eq!(
            ctx.orders.get_order(order.uuid).await?.status,
            OrderStatus::Accepted
        );

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_accept_and_cancel_apply_exactly_one() -> TestResult {
        let ctx = TestContext::new().await;
        let uuid = ctx.place_order(1_00, 1).await?.uuid;

        let orders = Arc::new(ctx.orders.clone());
        let mut tasks = JoinSet::new();

        for transition in [OrderTransition::Accept, OrderTransition::Cancel] {
            let orders = Arc::clone(&orders);

            tasks.spawn(async move {
                let result = match transition {
                    OrderTransition::Accept => orders.accept_order(uuid).await,
                    OrderTransition::Cancel => orders.cancel_order(uuid).await,
                };

                (transition, result)
            });
        }

        let mut applied = Vec::new();
        let mut rejected = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined? {
                (transition, Ok(order)) => applied.push((transition, order)),
                (transition, Err(OrdersServiceError::InvalidTransition { from, .. })) => {
                    rejected.push((transition, from));
                }
                (transition, Err(error)) => {
                    return Err(format!("{transition} failed with {error:?}").into());
                }
            }
        }

        let [(winner, order)] = applied.as_slice() else {
            return Err(format!("expected one applied transition, got {applied:?}").into());
        };
        let [(loser, seen)] = rejected.as_slice() else {
            return Err(format!("expected one rejected transition, got {rejected:?}").into());
        };

        assert_ne!(winner, loser);
        assert_eq!(order.status, winner.target());
        assert_eq!(*seen, winner.target());

        let reloaded = ctx.orders.get_order(uuid).await?;

        assert_eq!(reloaded.status, winner.target());
        assert_eq!(reloaded.version, order.version);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_checkouts_of_one_cart_place_one_order() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_ready_customer("Ada").await;
        let product = ctx.create_product(3_00).await;

        add_item(&ctx, customer, product, 2).await?;

        let orders = Arc::new(ctx.orders.clone());
        let mut tasks = JoinSet::new();

        for _ in 0..2 {
            let orders = Arc::clone(&orders);

            tasks.spawn(async move {
                orders
                    .create_order(
                        customer,
                        NewOrder {
                            uuid: OrderUuid::new(),
                        },
                    )
                    .await
            });
        }

        let mut placed = Vec::new();
        let mut empty = 0;

        while let Some(joined) = tasks.join_next().await {
            match joined? {
                Ok(order) => placed.push(order),
                Err(OrdersServiceError::EmptyCart) => empty += 1,
                Err(error) => return Err(format!("checkout failed with {error:?}").into()),
            }
        }

        let [order] = placed.as_slice() else {
            return Err(format!("expected one placed order, got {placed:?}").into());
        };

        assert_eq!(empty, 1);
        assert_eq!(order.total_items, 2);
        assert_eq!(order.total_price, 6_00);
        assert_eq!(order_count(&ctx).await?, 1);
        assert!(ctx.carts.get_cart(customer).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn transitions_on_unknown_order_return_order_not_found() {
        let ctx = TestContext::new().await;

        let accept = ctx.orders.accept_order(OrderUuid::new()).await;
        let cancel = ctx.orders.cancel_order(OrderUuid::new()).await;
        let get = ctx.orders.get_order(OrderUuid::new()).await;

        for result in [accept, cancel, get] {
            assert!(
                matches!(result, Err(OrdersServiceError::OrderNotFound)),
                "expected OrderNotFound, got {result:?}"
            );
        }
    }

    #[tokio::test]
    async fn cancelling_does_not_restore_the_cart() -> TestResult {
        let ctx = TestContext::new().await;
        let order = ctx.place_order(1_00, 2).await?;

        ctx.orders.cancel_order(order.uuid).await?;

        assert!(ctx.carts.get_cart(order.customer_uuid).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn listings_are_newest_first() -> TestResult {
        let ctx = TestContext::new().await;
        let ada = ctx.create_ready_customer("Ada").await;
        let bob = ctx.create_ready_customer("Bob").await;
        let product = ctx.create_product(1_00).await;

        let mut ada_orders = Vec::new();

        for quantity in 1..=3 {
            add_item(&ctx, ada, product, quantity).await?;
            ada_orders.push(checkout(&ctx, ada).await?.uuid);
        }

        add_item(&ctx, bob, product, 1).await?;
        let bob_order = checkout(&ctx, bob).await?.uuid;

        let listed: Vec<OrderUuid> = ctx
            .orders
            .list_orders_for_customer(ada)
            .await?
            .into_iter()
            .map(|order| order.uuid)
            .collect();

        ada_orders.reverse();
        assert_eq!(listed, ada_orders);

        let all = ctx.orders.list_orders().await?;

        assert_eq!(all.len(), 4);
        assert_eq!(all[0].uuid, bob_order);
        assert!(all.iter().all(|order| order.lines.len() == 1));
        assert_eq!(
            all.iter().map(|order| order.total_items).collect::<Vec<_>>(),
            vec![1, 3, 2, 1]
        );

        Ok(())
    }

    #[tokio::test]
    async fn listing_for_customer_without_orders_is_empty() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("Ada").await;

        assert!(ctx.orders.list_orders_for_customer(customer).await?.is_empty());
        assert!(ctx.orders.list_orders().await?.is_empty());

        Ok(())
    }
}
