use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", get(handlers::booking::list_bookings))
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/bookings/:id", get(handlers::booking::get_booking))
        .route("/api/bookings/:id", put(handlers::booking::update_booking))
        .route(
            "/api/bookings/:id",
            delete(handlers::booking::delete_booking),
        )
}
