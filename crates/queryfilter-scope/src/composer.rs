//! Scope composition: the entry point turning request parameters into an
//! ordered list of query modifications.

use std::sync::Arc;

use tracing::debug;

use queryfilter_core::config::FilterConfig;
use queryfilter_core::result::AppResult;
use queryfilter_core::traits::{FilterModel, QueryModifier};
use queryfilter_core::types::filter::{FilterField, SearchClause};
use queryfilter_core::types::flags::FilterFlags;
use queryfilter_core::types::sorting::SortField;

use crate::pagination::build_pagination_plan;
use crate::params::{self, QueryParams, parse_parameters};
use crate::policy::{FieldPolicyTable, PolicyRegistry};
use crate::predicate::build_predicates;
use crate::search::build_search_clause;
use crate::sort::build_sort_clause;

/// One query modification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeOp {
    /// AND an equality or membership predicate.
    Predicate(FilterField),
    /// AND an OR-combined substring match.
    Search(SearchClause),
    /// Order the results.
    OrderBy(SortField),
    /// Count the filtered rows before paging.
    CountQuery,
    /// Restrict to a window.
    LimitOffset {
        /// Maximum rows returned.
        limit: u64,
        /// Rows skipped.
        offset: u64,
    },
}

/// An ordered set of query modifications for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    ops: Vec<ScopeOp>,
}

impl Scope {
    /// A scope that leaves the query untouched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The composed operations, in application order.
    pub fn ops(&self) -> &[ScopeOp] {
        &self.ops
    }

    /// Whether applying the scope changes nothing.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Whether a count query was requested.
    pub fn paginates(&self) -> bool {
        self.ops.contains(&ScopeOp::CountQuery)
    }

    /// Feed every operation to `query`, in order.
    pub fn apply<Q: QueryModifier + ?Sized>(&self, query: &mut Q) {
        for op in &self.ops {
            match op {
                ScopeOp::Predicate(clause) => query.add_predicate(clause),
                ScopeOp::Search(clause) => query.add_search(clause),
                ScopeOp::OrderBy(sort) => query.add_order_by(sort),
                ScopeOp::CountQuery => query.add_count_query(),
                ScopeOp::LimitOffset { limit, offset } => query.add_limit_offset(*limit, *offset),
            }
        }
    }

    fn push(&mut self, op: ScopeOp) {
        self.ops.push(op);
    }
}

/// Composes scopes from request parameters using a policy registry and
/// filtering defaults.
#[derive(Debug, Clone)]
pub struct ScopeComposer {
    config: FilterConfig,
    registry: Option<Arc<PolicyRegistry>>,
}

impl Default for ScopeComposer {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl ScopeComposer {
    /// A composer backed by the process-wide policy registry.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            registry: None,
        }
    }

    /// A composer backed by its own registry.
    pub fn with_registry(config: FilterConfig, registry: Arc<PolicyRegistry>) -> Self {
        Self {
            config,
            registry: Some(registry),
        }
    }

    /// The filtering defaults in use.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    fn registry(&self) -> &PolicyRegistry {
        match self.registry.as_deref() {
            Some(registry) => registry,
            None => PolicyRegistry::global(),
        }
    }

    /// Compose the scope of a request against model `M`.
    ///
    /// Only a misconfigured model policy is an error; every request-side
    /// problem degrades to the affected step being skipped. With no flag
    /// set the policy is not consulted at all.
    pub fn compose<M: FilterModel>(
        &self,
        params: &QueryParams,
        flags: FilterFlags,
    ) -> AppResult<Scope> {
        if flags.is_empty() {
            return Ok(Scope::empty());
        }
        let policy = self.registry().get_or_build::<M>()?;
        Ok(self.compose_with_policy(&policy, params, flags))
    }

    /// Compose against an already-built policy table.
    pub fn compose_with_policy(
        &self,
        policy: &FieldPolicyTable,
        params: &QueryParams,
        flags: FilterFlags,
    ) -> Scope {
        let mut scope = Scope::empty();

        if flags.contains(FilterFlags::FILTER) {
            for clause in build_predicates(policy, &parse_parameters(params)) {
                scope.push(ScopeOp::Predicate(clause));
            }
        }

        if flags.contains(FilterFlags::SEARCH) && self.config.search_enabled {
            if let Some(clause) = params
                .get(params::SEARCH)
                .and_then(|term| build_search_clause(policy, term))
            {
                scope.push(ScopeOp::Search(clause));
            }
        }

        if flags.contains(FilterFlags::ORDER_BY) {
            let sort = build_sort_clause(
                policy,
                params.get(params::ORDER_BY),
                params.get(params::ORDER_DIRECTION),
                &self.config.default_sort(),
            );
            scope.push(ScopeOp::OrderBy(sort));
        }

        if flags.contains(FilterFlags::PAGINATE) {
            if let Some(plan) = build_pagination_plan(
                params.get(params::PAGE),
                params.get(params::LIMIT),
                &self.config,
            ) {
                scope.push(ScopeOp::CountQuery);
                scope.push(ScopeOp::LimitOffset {
                    limit: plan.limit(),
                    offset: plan.offset(),
                });
            }
        }

        debug!(
            table = policy.table(),
            ?flags,
            ops = scope.ops.len(),
            "Composed filter scope"
        );

        scope
    }
}

/// Compose the scope of a request against model `M` with default filtering
/// settings and the process-wide policy registry.
pub fn filter_by_query<M: FilterModel>(params: &QueryParams, flags: FilterFlags) -> AppResult<Scope> {
    ScopeComposer::default().compose::<M>(params, flags)
}
