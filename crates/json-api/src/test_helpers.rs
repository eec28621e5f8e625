//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use storefront_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        carts::{
            MockCartsService,
            models::{Cart, CartTotals},
            records::CartLineRecord,
        },
        customers::{
            MockCustomersService,
            records::{CustomerRecord, CustomerUuid},
        },
        orders::{
            MockOrdersService, OrderStatus,
            records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
    },
};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_CUSTOMER_UUID: CustomerUuid = CustomerUuid::from_uuid(Uuid::nil());

/// Service mocks with no expectations; any unexpected call fails the test.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) products: MockProductsService,
    pub(crate) customers: MockCustomersService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            products: Arc::new(self.products),
            customers: Arc::new(self.customers),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            auth: Arc::new(self.auth),
        })
    }

    /// Route served as the customer [`TEST_CUSTOMER_UUID`].
    pub(crate) fn into_customer_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_customer)
                .push(route),
        )
    }

    /// Route served as an administrator.
    pub(crate) fn into_admin_service(self, route: Router) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(self.into_state()))
                .hoop(inject_admin)
                .push(route),
        )
    }

    pub(crate) fn into_service_without_principal(self, route: Router) -> Service {
        Service::new(Router::new().hoop(inject(self.into_state())).push(route))
    }
}

#[salvo::handler]
async fn inject_customer(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_principal(Principal::Customer(TEST_CUSTOMER_UUID));
    ctrl.call_next(req, depot, res).await;
}

#[salvo::handler]
async fn inject_admin(req: &mut Request, depot: &mut Depot, res: &mut Response, ctrl: &mut FlowCtrl) {
    depot.insert_principal(Principal::Admin);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        price,
        active: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
        deleted_at: None,
    }
}

pub(crate) fn make_customer(uuid: CustomerUuid) -> CustomerRecord {
    CustomerRecord {
        uuid,
        name: "Ada".to_string(),
        address: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        phone: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A cart for [`TEST_CUSTOMER_UUID`] holding `(product, quantity, unit_price)` lines.
pub(crate) fn make_cart(lines: &[(ProductUuid, u32, u64)]) -> Cart {
    let lines: Vec<CartLineRecord> = lines
        .iter()
        .map(|&(product_uuid, quantity, unit_price)| CartLineRecord {
            product_uuid,
            quantity,
            unit_price,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        })
        .collect();

    let totals = CartTotals::from_lines(&lines).unwrap_or_default();

    Cart {
        customer_uuid: TEST_CUSTOMER_UUID,
        lines,
        total_items: totals.total_items,
        total_price: totals.total_price,
        version: 1,
        updated_at: Some(Timestamp::UNIX_EPOCH),
    }
}

pub(crate) fn make_order(
    uuid: OrderUuid,
    customer_uuid: CustomerUuid,
    status: OrderStatus,
) -> OrderRecord {
    OrderRecord {
        uuid,
        customer_uuid,
        status,
        total_items: 2,
        total_price: 20_00,
        version: 1,
        lines: vec![OrderLineRecord {
            uuid: OrderLineUuid::new(),
            position: 0,
            product_uuid: ProductUuid::new(),
            quantity: 2,
            unit_price: 10_00,
            line_total: 20_00,
        }],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A storage failure that services surface as their `Sql` variant.
pub(crate) fn storage_error() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}
