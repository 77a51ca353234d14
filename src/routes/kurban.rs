//! Kurban CRUD routes.
//! `/kurban/` (trailing slash, empty id) is routed explicitly so it answers with
//! "id not provided" instead of a bare 404. Unsupported methods answer with the
//! error envelope rather than an empty 405.

use crate::handlers::kurban::{
    create, delete as delete_handler, list, method_not_allowed, missing_id, missing_update_data, read,
    update,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn kurban_routes(state: AppState) -> Router {
    Router::new()
        .route("/kurban", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/kurban/",
            get(missing_id)
                .put(missing_update_data)
                .delete(missing_id)
                .fallback(method_not_allowed),
        )
        .route(
            "/kurban/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
