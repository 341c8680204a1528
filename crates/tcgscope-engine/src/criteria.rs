use tcgscope_core::ProductKey;
use tcgscope_geo::Coordinates;

/// Which store types pass the type filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreTypeFilter {
    #[default]
    All,
    /// Brick-and-mortar presence required (possibly alongside online sales).
    PhysicalOnly,
    OnlineOnly,
}

/// One query's filter and ranking criteria. Session-scoped, never persisted.
#[derive(Debug, Clone, Default)]
pub struct QueryCriteria {
    /// Exact-match city filter; `None` passes everything, including stores
    /// without a city.
    pub city: Option<String>,
    pub store_type: StoreTypeFilter,
    /// Product keys that must all be confirmed present.
    pub products: Vec<ProductKey>,
    /// The position distances are measured from.
    pub reference: Option<Coordinates>,
    pub sort_by_distance: bool,
}
