//! Offset/limit pagination over fixed in-memory lists.

use serde::{Deserialize, Serialize};

/// Default page size when `limit` is absent from the query string.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// `limit`/`offset` query parameters, defaulting to 10/0.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub offset: usize,
}

const fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// A pagination-sliced view of a fixed list plus the page envelope.
///
/// `pages == ceil(total / limit)`, with `limit` clamped to 1 for the page
/// count when the caller asks for a zero-sized page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub pages: usize,
}

impl<T: Clone> Paginated<T> {
    /// Slice `all` according to the query.
    ///
    /// The returned slice length is always `min(limit, max(0, total - offset))`.
    #[must_use]
    pub fn slice(all: &[T], query: PageQuery) -> Self {
        let total = all.len();
        let items: Vec<T> = all
            .iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();

        Self {
            items,
            total,
            limit: query.limit,
            offset: query.offset,
            pages: total.div_ceil(query.limit.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(limit: usize, offset: usize) -> PageQuery {
        PageQuery { limit, offset }
    }

    #[test]
    fn test_slice_length_invariant() {
        let all: Vec<u32> = (0..23).collect();
        for limit in [0, 1, 5, 10, 23, 50] {
            for offset in [0, 1, 10, 22, 23, 99] {
                let page = Paginated::slice(&all, query(limit, offset));
                let expected = limit.min(all.len().saturating_sub(offset));
                assert_eq!(page.items.len(), expected, "limit={limit} offset={offset}");
                assert_eq!(page.total, 23);
            }
        }
    }

    #[test]
    fn test_pages_is_ceiling_division() {
        let all: Vec<u32> = (0..23).collect();
        assert_eq!(Paginated::slice(&all, query(10, 0)).pages, 3);
        assert_eq!(Paginated::slice(&all, query(23, 0)).pages, 1);
        assert_eq!(Paginated::slice(&all, query(24, 0)).pages, 1);
        assert_eq!(Paginated::slice(&all, query(1, 0)).pages, 23);
    }

    #[test]
    fn test_zero_limit_yields_empty_slice() {
        let all: Vec<u32> = (0..5).collect();
        let page = Paginated::slice(&all, query(0, 0));
        assert!(page.items.is_empty());
        // limit clamped to 1 for the page count
        assert_eq!(page.pages, 5);
    }

    #[test]
    fn test_offset_past_end() {
        let all: Vec<u32> = (0..5).collect();
        let page = Paginated::slice(&all, query(10, 7));
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_slice_preserves_order() {
        let all: Vec<u32> = (0..10).collect();
        let page = Paginated::slice(&all, query(3, 4));
        assert_eq!(page.items, vec![4, 5, 6]);
    }
}
