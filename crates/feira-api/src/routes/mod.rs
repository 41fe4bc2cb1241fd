mod health;
mod street_market;

use axum::Router;
use axum::routing::{get, patch};

use crate::state::AppState;
use crate::trace;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ping", get(health::ping))
        .route(
            "/street_market",
            get(street_market::list).post(street_market::create),
        )
        .route(
            "/street_market/{id}",
            patch(street_market::edit).delete(street_market::remove),
        )
        .layer(axum::middleware::from_fn(trace::trace_request))
}
