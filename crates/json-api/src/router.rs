//! App Router

use salvo::Router;

use crate::{admin, auth, carts, orders, products, profile};

/// Every route that requires a bearer token.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("profile")
                .get(profile::get::handler)
                .put(profile::update::handler),
        )
        .push(
            Router::with_path("cart").get(carts::get::handler).push(
                Router::with_path("items")
                    .post(carts::items::create::handler)
                    .push(
                        Router::with_path("{product}")
                            .put(carts::items::update::handler)
                            .delete(carts::items::delete::handler),
                    ),
            ),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .push(Router::with_path("cancel").post(orders::cancel::handler)),
                ),
        )
        .push(
            Router::with_path("admin/orders")
                .get(admin::orders::index::handler)
                .push(
                    Router::with_path("{order}")
                        .get(admin::orders::get::handler)
                        .push(Router::with_path("accept").post(admin::orders::accept::handler))
                        .push(Router::with_path("cancel").post(admin::orders::cancel::handler)),
                ),
        )
}
