//! Generic filtered listing over any [`FilterModel`].

use serde::Serialize;
use sqlx::{FromRow, PgPool};
use sqlx::postgres::PgRow;
use tracing::debug;

use queryfilter_core::result::AppResult;
use queryfilter_core::traits::FilterModel;
use queryfilter_core::types::FilterFlags;
use queryfilter_core::types::pagination::PageResponse;
use queryfilter_scope::{QueryParams, ScopeComposer};

use crate::select::SelectQuery;

/// Repository that lists rows of a model filtered by request parameters.
#[derive(Debug, Clone)]
pub struct FilterRepository {
    pool: PgPool,
    composer: ScopeComposer,
}

impl FilterRepository {
    /// Create a new repository.
    pub fn new(pool: PgPool, composer: ScopeComposer) -> Self {
        Self { pool, composer }
    }

    /// Build the select for `M` with the request's scope applied.
    pub fn prepare<M: FilterModel>(
        &self,
        params: &QueryParams,
        flags: FilterFlags,
    ) -> AppResult<SelectQuery> {
        let scope = self.composer.compose::<M>(params, flags)?;
        let mut query = SelectQuery::for_model::<M>();
        scope.apply(&mut query);
        Ok(query)
    }

    /// List rows of `M` matching the request parameters.
    pub async fn list<M>(&self, params: &QueryParams, flags: FilterFlags) -> AppResult<PageResponse<M>>
    where
        M: FilterModel + for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
    {
        let query = self.prepare::<M>(params, flags)?;
        debug!(
            table = M::table_name(),
            flags = ?flags,
            paginated = query.window().is_some(),
            "Listing filtered rows"
        );
        query.fetch_page(&self.pool).await
    }
}
