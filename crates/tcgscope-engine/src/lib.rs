//! The catalog filter/rank engine: a pure query pipeline over the
//! immutable store collection, plus the session-scoped filter state.

pub mod criteria;
pub mod query;
pub mod session;

pub use criteria::{QueryCriteria, StoreTypeFilter};
pub use query::{query, RankedStore};
pub use session::{FilterSession, PositionError, PositionRequest};
