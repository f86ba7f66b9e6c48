//! Typed cache key registry.
//!
//! A key identifies one cached query result; equality is structural, so two
//! views asking for the same resource with the same parameters share one
//! cache entry. Keys are grouped so a write can conservatively invalidate
//! every aggregate that depends on it.

/// Cache key for one query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// Paginated customer list.
    Customers { limit: usize, offset: usize },
    CustomerStats,
    /// Paginated order list.
    Orders { limit: usize, offset: usize },
    OrderStats,
    BatchStats,
    DashboardStats,
    CurrentUser,
}

/// Invalidation group a key belongs to.
///
/// The `Stats` group covers customer, order, batch, and dashboard stats
/// together: a write to any resource refreshes all dependent aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGroup {
    Customers,
    Orders,
    Stats,
    Auth,
}

impl QueryKey {
    /// The invalidation group this key belongs to.
    #[must_use]
    pub const fn group(&self) -> KeyGroup {
        match self {
            Self::Customers { .. } => KeyGroup::Customers,
            Self::Orders { .. } => KeyGroup::Orders,
            Self::CustomerStats
            | Self::OrderStats
            | Self::BatchStats
            | Self::DashboardStats => KeyGroup::Stats,
            Self::CurrentUser => KeyGroup::Auth,
        }
    }
}
