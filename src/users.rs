//! The demo `users` resource.

use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use queryfilter_api::{AppState, filter_route};
use queryfilter_derive::FilterModel;
use queryfilter_scope::FilterFlags;

/// A row of the `users` table.
///
/// `username` and `email` filter by equality and `username` and `full_name`
/// are searched. `id` and `created_at` carry no tags, so a query string
/// cannot name them.
#[derive(Debug, Clone, Serialize, FromRow, FilterModel)]
#[filter(table = "users")]
pub struct User {
    pub id: i64,
    #[filter(searchable, filterable)]
    pub username: String,
    #[filter(param = "full_name", searchable)]
    pub full_name: String,
    #[filter(filterable)]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// `GET /users` with every filter stage enabled.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", filter_route::<User>(FilterFlags::ALL))
}
