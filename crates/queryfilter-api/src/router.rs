//! Route definitions.
//!
//! Model routes are supplied by the binary through [`filter_route`]; the
//! router adds the health endpoint, tracing and request logging, and
//! threads `AppState` through every route.

use axum::extract::State;
use axum::routing::{MethodRouter, get};
use axum::{Router, middleware as axum_middleware};
use serde::Serialize;
use sqlx::FromRow;
use sqlx::postgres::PgRow;
use tower_http::trace::TraceLayer;

use queryfilter_core::traits::FilterModel;
use queryfilter_core::types::FilterFlags;

use crate::extractors::FilterQuery;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router around the given model routes.
pub fn build_router(state: AppState, resources: Router<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .merge(resources)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// `GET` route listing `M`, filtered by the stages enabled in `flags`.
pub fn filter_route<M>(flags: FilterFlags) -> MethodRouter<AppState>
where
    M: FilterModel + for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
{
    get(
        move |State(state): State<AppState>, FilterQuery(params): FilterQuery| async move {
            handlers::list::list_filtered::<M>(&state, &params, flags).await
        },
    )
}
