//! Listing service with fixed-size pages.

use super::ReadStore;
use crate::domain::{Pagination, StreetMarket, StreetMarketFilter};
use crate::error::MarketResult;

const PER_PAGE: i64 = 100;

/// Translates a 1-based page number into offset/limit and lists markets.
pub struct StreetMarketReader<R> {
    repo: R,
}

impl<R: ReadStore> StreetMarketReader<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List street markets for `page` (pages start at 1; anything below
    /// behaves like the first page). The offset saturates at `i64::MAX`
    /// instead of overflowing for absurd page numbers.
    pub async fn list(
        &self,
        page: i64,
        filter: &StreetMarketFilter,
    ) -> MarketResult<Vec<StreetMarket>> {
        let mut pagination = Pagination {
            offset: 0,
            limit: PER_PAGE,
        };
        if page > 1 {
            pagination.offset = page
                .saturating_sub(1)
                .saturating_mul(PER_PAGE)
                .saturating_add(1);
        }

        self.repo.list(pagination, filter).await
    }
}
