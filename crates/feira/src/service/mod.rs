//! Service layer: validation, id generation and not-found mapping.
//!
//! Services talk to the repository through the store traits below, so tests
//! substitute in-memory doubles. The traits mirror the four repository
//! operations one-to-one.

mod eraser;
mod reader;
mod writer;

pub use eraser::StreetMarketEraser;
pub use reader::StreetMarketReader;
pub use writer::StreetMarketWriter;

use crate::domain::{Pagination, StreetMarket, StreetMarketFilter, StreetMarketPatch};
use crate::error::MarketResult;

/// Write side of the store.
pub trait WriteStore: Send + Sync {
    fn create(
        &self,
        record: &StreetMarket,
    ) -> impl std::future::Future<Output = MarketResult<()>> + Send;

    fn update(
        &self,
        id: &str,
        patch: &StreetMarketPatch,
    ) -> impl std::future::Future<Output = MarketResult<()>> + Send;
}

/// Read side of the store.
pub trait ReadStore: Send + Sync {
    fn list(
        &self,
        page: Pagination,
        filter: &StreetMarketFilter,
    ) -> impl std::future::Future<Output = MarketResult<Vec<StreetMarket>>> + Send;
}

/// Deletion side of the store.
pub trait EraseStore: Send + Sync {
    fn delete_by_id(&self, id: &str) -> impl std::future::Future<Output = MarketResult<()>> + Send;
}
