//! Session-scoped filter state and the reference-position request
//! lifecycle.
//!
//! The position provider is an external capability that may be slow,
//! denied, or unsupported. While a request is outstanding the criteria
//! simply carry no reference position and queries run without distance
//! data; a failure degrades the same way. Clearing the position also
//! clears distance sorting, so a stale sort mode can never outlive the
//! position it depended on.

use tcgscope_core::ProductKey;
use tcgscope_geo::Coordinates;

use crate::criteria::{QueryCriteria, StoreTypeFilter};

/// Why the reference-position provider failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    PermissionDenied,
    Unavailable,
    TimedOut,
    Unsupported,
}

impl std::fmt::Display for PositionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionError::PermissionDenied => write!(f, "position permission denied"),
            PositionError::Unavailable => write!(f, "position unavailable"),
            PositionError::TimedOut => write!(f, "position request timed out"),
            PositionError::Unsupported => write!(f, "position provider unsupported"),
        }
    }
}

/// State of the single outstanding position exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PositionRequest {
    #[default]
    Idle,
    Requesting,
    Resolved(Coordinates),
    Failed(PositionError),
}

/// One user session's filter selections plus the position request state.
#[derive(Debug, Default)]
pub struct FilterSession {
    criteria: QueryCriteria,
    position: PositionRequest,
}

impl FilterSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn position(&self) -> PositionRequest {
        self.position
    }

    pub fn select_city(&mut self, city: Option<String>) {
        self.criteria.city = city;
    }

    pub fn set_store_type(&mut self, store_type: StoreTypeFilter) {
        self.criteria.store_type = store_type;
    }

    /// Add the key to the selected set, or remove it if already selected.
    pub fn toggle_product(&mut self, key: ProductKey) {
        if let Some(index) = self.criteria.products.iter().position(|k| *k == key) {
            self.criteria.products.remove(index);
        } else {
            self.criteria.products.push(key);
        }
    }

    pub fn set_sort_by_distance(&mut self, sort: bool) {
        self.criteria.sort_by_distance = sort;
    }

    /// Start a position request. Distance sorting turns on now so results
    /// rank by proximity as soon as the fix arrives.
    pub fn begin_position_request(&mut self) {
        self.position = PositionRequest::Requesting;
        self.criteria.sort_by_distance = true;
    }

    pub fn resolve_position(&mut self, coords: Coordinates) {
        self.position = PositionRequest::Resolved(coords);
        self.criteria.reference = Some(coords);
    }

    /// Record a provider failure. The reference stays unset and queries
    /// keep working without distance data.
    pub fn fail_position(&mut self, error: PositionError) {
        self.position = PositionRequest::Failed(error);
        self.criteria.reference = None;
    }

    /// Use a preset city centre instead of a live fix.
    pub fn set_manual_position(&mut self, coords: Coordinates) {
        self.resolve_position(coords);
        self.criteria.sort_by_distance = true;
    }

    /// Drop the reference position. Distance sorting is cleared with it;
    /// a sort mode must never outlive the position it depends on.
    pub fn clear_position(&mut self) {
        self.position = PositionRequest::Idle;
        self.criteria.reference = None;
        self.criteria.sort_by_distance = false;
    }

    /// Reset every selection and the position state.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
    }
}
