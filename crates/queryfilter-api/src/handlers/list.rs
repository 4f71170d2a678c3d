//! Generic filtered listing.

use axum::Json;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::postgres::PgRow;

use queryfilter_core::traits::FilterModel;
use queryfilter_core::types::FilterFlags;
use queryfilter_core::types::pagination::PageResponse;
use queryfilter_scope::QueryParams;

use crate::dto::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// List rows of `M` narrowed by the request's query parameters.
///
/// Only the stages enabled in `flags` run; ignored parameters never fail
/// the request.
pub async fn list_filtered<M>(
    state: &AppState,
    params: &QueryParams,
    flags: FilterFlags,
) -> Result<Json<ApiResponse<PageResponse<M>>>, ApiError>
where
    M: FilterModel + for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
{
    let page = state.repository.list::<M>(params, flags).await?;
    Ok(Json(ApiResponse::ok(page)))
}
