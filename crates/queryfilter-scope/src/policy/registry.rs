//! Process-wide cache of policy tables keyed by model type.

use std::any::{TypeId, type_name};
use std::sync::{Arc, LazyLock};

use dashmap::DashMap;
use tracing::debug;

use queryfilter_core::result::AppResult;
use queryfilter_core::traits::FilterModel;

use super::FieldPolicyTable;

static GLOBAL: LazyLock<PolicyRegistry> = LazyLock::new(PolicyRegistry::new);

/// Cache of built policy tables.
///
/// A table is built at most once per model type: the first caller holds the
/// entry's shard lock while building and concurrent callers for the same
/// type wait for it. Failed builds are not cached.
#[derive(Debug, Default)]
pub struct PolicyRegistry {
    tables: DashMap<TypeId, Arc<FieldPolicyTable>>,
}

impl PolicyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            tables: DashMap::new(),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Return the cached table for `M`, building it on first use.
    pub fn get_or_build<M: FilterModel>(&self) -> AppResult<Arc<FieldPolicyTable>> {
        let key = TypeId::of::<M>();

        if let Some(table) = self.tables.get(&key) {
            return Ok(Arc::clone(table.value()));
        }

        let entry = self.tables.entry(key).or_try_insert_with(|| {
            debug!(model = type_name::<M>(), "Extracting filter policy");
            FieldPolicyTable::for_model::<M>().map(Arc::new)
        })?;

        Ok(Arc::clone(entry.value()))
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been built yet.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Return the policy table for `M` from the process-wide registry.
pub fn extract_policy<M: FilterModel>() -> AppResult<Arc<FieldPolicyTable>> {
    PolicyRegistry::global().get_or_build::<M>()
}
