//! Pagination state
//!
//! Holds the validated paging configuration of one request and the row
//! window derived from the total row count.

use crate::errors::PaginationError;
use crate::pagination::codec::{OverrideCodec, Overrides};
use crate::pagination::ordering::SortOrder;
use crate::validation::ValidatedSortField;
use config::{PaginationConfig, FALLBACK_LIMIT, FALLBACK_SORT};
use type_mapping::{TagMap, TagValue};

/// Validated pagination settings and derived page window
///
/// Every setter is validate-or-ignore: a value outside its allow-list leaves
/// the previous value in place. `from`, `to` and `total` are only derived by
/// [`set_count`](Self::set_count) and stay 0 until it is called.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    pub(crate) page: u64,
    pub(crate) limit: u32,
    pub(crate) sort: String,
    pub(crate) order: SortOrder,
    pub(crate) search: String,
    pub(crate) tags: TagMap,
    pub(crate) meta: TagMap,

    pub(crate) limits: Vec<u32>,
    pub(crate) sorts: Vec<String>,

    pub(crate) count: u64,
    pub(crate) from: u64,
    pub(crate) to: u64,
    pub(crate) total: u64,
}

impl PaginationState {
    /// Seed a state from allow-lists and defaults, without overrides
    ///
    /// Zero limits and sort names that are not valid identifiers are dropped
    /// from the allow-lists. A default outside its allow-list falls back to
    /// [`FALLBACK_LIMIT`] / [`FALLBACK_SORT`], or to the first allowed entry
    /// when the fallback is not allowed either.
    pub fn new<L, S, N>(limits: L, default_limit: u32, sorts: S, default_sort: &str) -> Self
    where
        L: IntoIterator<Item = u32>,
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let limits = sanitize_limits(limits);
        let sorts = sanitize_sorts(sorts);

        let limit = seed(&limits, default_limit, FALLBACK_LIMIT);
        let sort = seed(&sorts, default_sort.to_string(), FALLBACK_SORT.to_string());

        Self {
            page: 1,
            limit,
            sort,
            order: SortOrder::Asc,
            search: String::new(),
            tags: TagMap::new(),
            meta: TagMap::new(),
            limits,
            sorts,
            count: 0,
            from: 0,
            to: 0,
            total: 0,
        }
    }

    /// Seed a state and apply an override payload
    ///
    /// Fails when the payload cannot be decoded; use
    /// [`init_lenient`](Self::init_lenient) to fall back to defaults instead.
    pub fn init<L, S, N>(
        limits: L,
        default_limit: u32,
        sorts: S,
        default_sort: &str,
        encoded: &str,
    ) -> Result<Self, PaginationError>
    where
        L: IntoIterator<Item = u32>,
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut state = Self::new(limits, default_limit, sorts, default_sort);
        state.apply_override(encoded)?;
        Ok(state)
    }

    /// Seed a state and apply an override payload, keeping defaults if it
    /// cannot be decoded
    pub fn init_lenient<L, S, N>(
        limits: L,
        default_limit: u32,
        sorts: S,
        default_sort: &str,
        encoded: &str,
    ) -> Self
    where
        L: IntoIterator<Item = u32>,
        S: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let mut state = Self::new(limits, default_limit, sorts, default_sort);
        if let Err(err) = state.apply_override(encoded) {
            tracing::debug!(error = %err, "Ignoring pagination override, using defaults");
        }
        state
    }

    /// Seed a state from configuration and apply an override payload
    pub fn from_config(config: &PaginationConfig, encoded: &str) -> Result<Self, PaginationError> {
        Self::init(
            config.limits.allowed.iter().copied(),
            config.limits.default,
            config.sort.allowed.iter().cloned(),
            &config.sort.default,
            encoded,
        )
    }

    /// Decode an override payload and apply it
    ///
    /// On error nothing is applied.
    pub fn apply_override(&mut self, encoded: &str) -> Result<(), PaginationError> {
        let overrides = OverrideCodec::decode(encoded)?;
        self.apply(overrides);
        Ok(())
    }

    /// Apply decoded overrides through the regular setters
    pub fn apply(&mut self, overrides: Overrides) {
        if let Some(page) = overrides.page {
            self.set_page(page);
        }
        if let Some(limit) = overrides.limit {
            self.set_limit(limit);
        }
        if let Some(sort) = overrides.sort {
            self.set_sort(&sort);
        }
        if let Some(order) = overrides.order {
            self.set_order_str(&order);
        }
        if let Some(search) = overrides.search {
            self.set_search(search);
        }
        if let Some(tags) = overrides.tags {
            self.set_tags(tags);
        }
    }

    /// Set current page; pages below 1 are ignored
    ///
    /// The page is clamped against the page count only in `set_count`.
    pub fn set_page(&mut self, page: u64) {
        if page >= 1 {
            self.page = page;
        } else {
            debug_log!("Rejected page {}", page);
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    /// Set page size if it is allowed
    pub fn set_limit(&mut self, limit: u32) {
        if self.limits.contains(&limit) {
            self.limit = limit;
        } else {
            debug_log!("Rejected limit {} (allowed: {:?})", limit, self.limits);
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Set sort column if it is allowed
    pub fn set_sort(&mut self, sort: &str) {
        if self.sorts.iter().any(|s| s == sort) {
            self.sort = sort.to_string();
        } else {
            debug_log!("Rejected sort {:?} (allowed: {:?})", sort, self.sorts);
        }
    }

    pub fn sort(&self) -> &str {
        &self.sort
    }

    pub fn set_order(&mut self, order: SortOrder) {
        self.order = order;
    }

    /// Set sort direction from `asc` / `desc`; anything else is ignored
    pub fn set_order_str(&mut self, order: &str) {
        match SortOrder::from_param(order) {
            Some(order) => self.order = order,
            None => {
                debug_log!("Rejected order {:?}", order);
            }
        }
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Replace all tags
    pub fn set_tags(&mut self, tags: TagMap) {
        self.tags = tags;
    }

    pub fn tags(&self) -> &TagMap {
        &self.tags
    }

    pub fn set_tag(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        self.tags.insert(key, value);
    }

    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<TagValue>) {
        self.meta.insert(key, value);
    }

    pub fn meta(&self, key: &str) -> Option<&TagValue> {
        self.meta.get(key)
    }

    pub fn has_meta(&self, key: &str) -> bool {
        self.meta.contains_key(key)
    }

    pub fn meta_data(&self) -> &TagMap {
        &self.meta
    }

    pub fn allowed_limits(&self) -> &[u32] {
        &self.limits
    }

    pub fn allowed_sorts(&self) -> &[String] {
        &self.sorts
    }

    /// Set the total row count and derive the page window
    ///
    /// Clamps `page` to `total`, then up to 1, so an empty result set ends
    /// with `page == 1` and `total == 0`.
    pub fn set_count(&mut self, count: u64) {
        let limit = u64::from(self.limit);

        self.count = count;
        self.total = count.div_ceil(limit);

        if self.page > self.total {
            self.page = self.total;
        }
        if self.page < 1 {
            self.page = 1;
        }

        self.from = (self.page - 1) * limit + 1;
        self.to = self.from.saturating_add(limit).min(count);

        trace_log!(
            "Derived page window: count={} total={} page={} from={} to={}",
            self.count,
            self.total,
            self.page,
            self.from,
            self.to
        );
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// 1-based first row of the current page
    pub fn from(&self) -> u64 {
        self.from
    }

    /// Last row of the current page, clipped to the row count
    pub fn to(&self) -> u64 {
        self.to
    }

    /// Number of pages
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Zero-based row offset of the current page
    ///
    /// Before `set_count` the offset is computed from the page alone.
    pub fn offset(&self) -> u64 {
        if self.from == 0 {
            (self.page - 1).saturating_mul(u64::from(self.limit))
        } else {
            self.from - 1
        }
    }

    /// ORDER BY / LIMIT tail for the current page, with a leading space
    pub fn to_sql_fragment(&self) -> String {
        format!(
            " ORDER BY {} {} LIMIT {}, {}",
            self.sort,
            self.order.to_sql(),
            self.offset(),
            self.limit
        )
    }
}

fn sanitize_limits<L: IntoIterator<Item = u32>>(limits: L) -> Vec<u32> {
    limits
        .into_iter()
        .filter(|&limit| {
            if limit == 0 {
                tracing::warn!("Dropping zero page size from allowed limits");
            }
            limit > 0
        })
        .collect()
}

fn sanitize_sorts<S, N>(sorts: S) -> Vec<String>
where
    S: IntoIterator<Item = N>,
    N: Into<String>,
{
    sorts
        .into_iter()
        .map(Into::into)
        .filter(|sort| match ValidatedSortField::new(sort) {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Dropping sort column from allowed sorts");
                false
            }
        })
        .collect()
}

fn seed<T: PartialEq + Clone>(allowed: &[T], default: T, fallback: T) -> T {
    if allowed.contains(&default) {
        default
    } else if allowed.contains(&fallback) || allowed.is_empty() {
        fallback
    } else {
        allowed[0].clone()
    }
}
