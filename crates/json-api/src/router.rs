//! App Router

use salvo::Router;

use crate::{clients, customers};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("customer")
                .push(Router::with_path("create").post(customers::create::handler))
                .push(Router::with_path("all").get(customers::index::handler))
                .push(Router::with_path("by-mobile/{mobile}").get(customers::get::by_mobile))
                .push(Router::with_path("by-username/{user_name}").get(customers::get::by_user_name))
                .push(Router::with_path("by-email/{email}").get(customers::get::by_email))
                .push(Router::with_path("update").put(customers::update::handler))
                .push(Router::with_path("delete/{mobile}").delete(customers::delete::handler))
                .push(
                    Router::with_path("mobile/{user_name}/{mobile}")
                        .patch(customers::mobile::handler),
                )
                .push(Router::with_path("status/{mobile}/{status}").patch(customers::status::handler))
                .push(
                    Router::with_path("search")
                        .push(Router::with_path("ends-with/{suffix}").get(customers::search::ends_with))
                        .push(
                            Router::with_path("starts-with/{prefix}")
                                .get(customers::search::starts_with),
                        )
                        .push(Router::with_path("keyword/{term}").get(customers::search::keyword))
                        .push(
                            Router::with_path("paged-by-username/{user_name}")
                                .get(customers::search::paged_by_user_name),
                        ),
                )
                .push(Router::with_path("raw-by-email/{email}").get(customers::raw::handler))
                .push(Router::with_path("address/{user_name}").patch(customers::address::handler))
                .push(Router::with_path("purge-inactive").delete(customers::purge::handler))
                .push(Router::with_path("page").get(customers::paging::paged))
                .push(Router::with_path("page-sort").get(customers::paging::paged_sorted))
                .push(Router::with_path("sort").get(customers::paging::sorted)),
        )
        .push(
            Router::with_path("client")
                .push(Router::with_path("create").post(clients::create::handler))
                .push(Router::with_path("all").get(clients::index::handler))
                .push(
                    Router::with_path("{id}")
                        .get(clients::get::handler)
                        .put(clients::update::handler)
                        .delete(clients::delete::handler),
                ),
        )
}
