//! Deletion service.

use super::EraseStore;
use crate::domain::MarketId;
use crate::error::{MarketError, MarketResult};

/// Deletes street markets by validated identifier.
pub struct StreetMarketEraser<R> {
    repo: R,
}

impl<R: EraseStore> StreetMarketEraser<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Delete the record named by `id`; a zero-row delete is reported as
    /// not-found.
    pub async fn delete(&self, id: &MarketId) -> MarketResult<()> {
        match self.repo.delete_by_id(id.as_str()).await {
            Err(MarketError::NothingDeleted) => Err(MarketError::NotFound),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubStore {
        outcome: Option<MarketError>,
    }

    impl EraseStore for StubStore {
        async fn delete_by_id(&self, _id: &str) -> MarketResult<()> {
            match &self.outcome {
                None => Ok(()),
                Some(MarketError::NothingDeleted) => Err(MarketError::NothingDeleted),
                Some(_) => Err(MarketError::Unexpected("stub".into())),
            }
        }
    }

    fn id() -> MarketId {
        MarketId::parse("944ec25d-aac4-4c35-8301-6b35e0d7c05f").unwrap()
    }

    #[tokio::test]
    async fn delete_succeeds() {
        let eraser = StreetMarketEraser::new(StubStore { outcome: None });
        eraser.delete(&id()).await.unwrap();
    }

    #[tokio::test]
    async fn nothing_deleted_becomes_not_found() {
        let eraser = StreetMarketEraser::new(StubStore {
            outcome: Some(MarketError::NothingDeleted),
        });
        let err = eraser.delete(&id()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn other_errors_pass_through() {
        let eraser = StreetMarketEraser::new(StubStore {
            outcome: Some(MarketError::Unexpected("db".into())),
        });
        let err = eraser.delete(&id()).await.unwrap_err();
        assert!(matches!(err, MarketError::Unexpected(_)));
    }
}
