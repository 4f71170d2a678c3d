//! Pagination planning.

use tracing::debug;

use queryfilter_core::config::FilterConfig;
use queryfilter_core::types::pagination::PaginationPlan;

/// Resolve `page` / `limit` into a plan.
///
/// Neither supplied: no pagination. One supplied: the other defaults to
/// page 1 or `config.default_limit`. A non-numeric or non-positive value
/// disables pagination for the request. Limits above `config.max_limit`
/// are clamped.
pub fn build_pagination_plan(
    page: Option<&str>,
    limit: Option<&str>,
    config: &FilterConfig,
) -> Option<PaginationPlan> {
    if page.is_none() && limit.is_none() {
        return None;
    }

    let page = match page {
        Some(raw) => parse_positive(raw, "page")?,
        None => 1,
    };
    let limit = match limit {
        Some(raw) => parse_positive(raw, "limit")?,
        None => config.default_limit,
    };
    let limit = limit.min(config.max_limit.max(1));

    let plan = PaginationPlan::new(page, limit);
    if plan.is_none() {
        debug!(page, limit, "Pagination window exceeds bigint range; not paginating");
    }
    plan
}

fn parse_positive(raw: &str, param: &'static str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            debug!(param, value = raw, "Invalid pagination value; not paginating");
            None
        }
    }
}
