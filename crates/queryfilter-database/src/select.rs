//! A PostgreSQL `SELECT` that a filter scope is applied to.
//!
//! Every request value is bound as a parameter; only identifiers from the
//! model policy and the numeric window are written into the SQL text.

use serde::Serialize;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::{FromRow, Postgres, QueryBuilder};
use tracing::debug;

use queryfilter_core::error::{AppError, ErrorKind};
use queryfilter_core::result::AppResult;
use queryfilter_core::traits::{FilterModel, QueryModifier};
use queryfilter_core::types::filter::{FilterField, FilterValue, SearchClause};
use queryfilter_core::types::pagination::{PageResponse, PaginationPlan};
use queryfilter_core::types::sorting::SortField;

#[derive(Debug, Clone)]
enum Condition {
    Predicate(FilterField),
    Search(SearchClause),
}

/// `SELECT * FROM <table>` with the conditions, ordering and window
/// collected from a scope.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: String,
    conditions: Vec<Condition>,
    order_by: Vec<SortField>,
    count: bool,
    window: Option<(u64, u64)>,
}

impl SelectQuery {
    /// An unfiltered select over `table`.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            conditions: Vec::new(),
            order_by: Vec::new(),
            count: false,
            window: None,
        }
    }

    /// An unfiltered select over the model's table.
    pub fn for_model<M: FilterModel>() -> Self {
        Self::new(M::table_name())
    }

    /// The requested `(limit, offset)`, if any.
    pub fn window(&self) -> Option<(u64, u64)> {
        self.window
    }

    /// `SELECT count(*)` over the filtered rows, when requested.
    pub fn count_query(&self) -> Option<QueryBuilder<'static, Postgres>> {
        if !self.count {
            return None;
        }
        let mut qb = QueryBuilder::new("SELECT count(*) FROM ");
        qb.push(quote_ident(&self.table));
        self.push_where(&mut qb);
        Some(qb)
    }

    /// The row query.
    pub fn select_query(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT * FROM ");
        qb.push(quote_ident(&self.table));
        self.push_where(&mut qb);

        for (i, sort) in self.order_by.iter().enumerate() {
            qb.push(if i == 0 { " ORDER BY " } else { ", " });
            qb.push(quote_ident(&self.table))
                .push(".")
                .push(quote_ident(&sort.field))
                .push(" ")
                .push(sort.direction.as_sql());
        }

        if let Some((limit, offset)) = self.window {
            qb.push(" LIMIT ").push(limit).push(" OFFSET ").push(offset);
        }

        qb
    }

    fn push_where(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        for (i, condition) in self.conditions.iter().enumerate() {
            qb.push(if i == 0 { " WHERE " } else { " AND " });
            match condition {
                Condition::Predicate(clause) => push_predicate(qb, clause),
                Condition::Search(clause) => push_search(qb, clause),
            }
        }
    }

    /// Run the count (if requested) and row queries.
    ///
    /// Database errors are returned as [`ErrorKind::Database`].
    pub async fn fetch_page<T>(&self, pool: &PgPool) -> AppResult<PageResponse<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin,
    {
        let total = match self.count_query() {
            Some(mut qb) => {
                let total: i64 = qb
                    .build_query_scalar::<i64>()
                    .fetch_one(pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count rows", e)
                    })?;
                Some(u64::try_from(total).unwrap_or(0))
            }
            None => None,
        };

        let mut qb = self.select_query();
        debug!(sql = qb.sql(), "Running filtered select");
        let items: Vec<T> = qb
            .build_query_as::<T>()
            .fetch_all(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch rows", e))?;

        Ok(match (self.window, total) {
            (Some((limit, offset)), Some(total)) => {
                PageResponse::new(items, offset / limit + 1, limit, total)
            }
            _ => PageResponse::single(items),
        })
    }
}

impl QueryModifier for SelectQuery {
    fn add_predicate(&mut self, clause: &FilterField) {
        self.conditions.push(Condition::Predicate(clause.clone()));
    }

    fn add_search(&mut self, clause: &SearchClause) {
        if !clause.columns.is_empty() {
            self.conditions.push(Condition::Search(clause.clone()));
        }
    }

    fn add_count_query(&mut self) {
        self.count = true;
    }

    fn add_order_by(&mut self, sort: &SortField) {
        self.order_by.push(sort.clone());
    }

    fn add_limit_offset(&mut self, limit: u64, offset: u64) {
        let max = PaginationPlan::MAX_WINDOW;
        if limit > 0 && limit <= max && offset <= max {
            self.window = Some((limit, offset));
        }
    }
}

/// Values are bound as `TEXT`, so the column is compared through its text
/// form to work on non-text columns.
fn push_predicate(qb: &mut QueryBuilder<'static, Postgres>, clause: &FilterField) {
    qb.push(quote_ident(&clause.column)).push("::text");
    match &clause.value {
        FilterValue::String(value) => {
            qb.push(" = ").push_bind(value.clone());
        }
        FilterValue::StringList(values) => {
            qb.push(" = ANY(").push_bind(values.clone()).push(")");
        }
    }
}

fn push_search(qb: &mut QueryBuilder<'static, Postgres>, clause: &SearchClause) {
    qb.push("(");
    for (i, column) in clause.columns.iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        qb.push(quote_ident(column))
            .push("::text LIKE ")
            .push_bind(clause.pattern.clone());
    }
    qb.push(")");
}

/// Double-quote an identifier, doubling embedded quotes.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
