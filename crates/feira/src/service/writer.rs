//! Create/edit service.

use uuid::Uuid;

use super::WriteStore;
use crate::domain::{MarketId, StreetMarketCreateInput, StreetMarketPatch};
use crate::error::{MarketError, MarketResult};

/// Generates identifiers for new records; injectable for deterministic tests.
type IdGen = fn() -> String;

fn uuid_v4() -> String {
    Uuid::new_v4().to_string()
}

/// Validates input, assigns an identifier and writes street markets.
pub struct StreetMarketWriter<R> {
    repo: R,
    id_gen: IdGen,
}

impl<R: WriteStore> StreetMarketWriter<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            id_gen: uuid_v4,
        }
    }

    pub fn with_id_gen(repo: R, id_gen: IdGen) -> Self {
        Self { repo, id_gen }
    }

    /// Validate the input, assemble the record under a fresh identifier and
    /// insert it. Returns the new identifier.
    pub async fn create(&self, input: StreetMarketCreateInput) -> MarketResult<String> {
        input.validate()?;

        let id = (self.id_gen)();
        let record = input.into_record(id.clone());
        self.repo.create(&record).await?;

        Ok(id)
    }

    /// Apply a partial update to the record named by `id`.
    ///
    /// A zero-row update means the target does not exist and is reported as
    /// not-found rather than as a bare row-count signal.
    pub async fn edit(&self, id: &MarketId, patch: &StreetMarketPatch) -> MarketResult<()> {
        match self.repo.update(id.as_str(), patch).await {
            Err(MarketError::NothingUpdated) => Err(MarketError::NotFound),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StreetMarket;
    use std::sync::Mutex;

    #[derive(Default)]
    struct SpyStore {
        created: Mutex<Vec<StreetMarket>>,
        update_outcome: Option<MarketError>,
    }

    impl WriteStore for SpyStore {
        async fn create(&self, record: &StreetMarket) -> MarketResult<()> {
            self.created.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn update(&self, _id: &str, _patch: &StreetMarketPatch) -> MarketResult<()> {
            match &self.update_outcome {
                None => Ok(()),
                Some(MarketError::NothingUpdated) => Err(MarketError::NothingUpdated),
                Some(_) => Err(MarketError::Unexpected("spy".into())),
            }
        }
    }

    fn input() -> StreetMarketCreateInput {
        StreetMarketCreateInput {
            long: -46.550164,
            lat: -23.558733,
            sectcens: "355030885000091".into(),
            area: "3550308005040".into(),
            iddist: "87".into(),
            district: "VILA FORMOSA".into(),
            idsubth: "26".into(),
            subtownhall: "ARICANDUVA".into(),
            region5: "Leste".into(),
            region8: "Leste 1".into(),
            name: "VILA FORMOSA".into(),
            register: "4041-0".into(),
            street: "RUA MARAGOJIPE".into(),
            number: 500,
            neighborhood: "VL FORMOSA".into(),
            addrextrainfo: "TV RUA PRETORIA".into(),
        }
    }

    #[tokio::test]
    async fn create_assigns_generated_id() {
        let writer = StreetMarketWriter::with_id_gen(SpyStore::default(), || {
            "944ec25d-aac4-4c35-8301-6b35e0d7c05f".to_string()
        });

        let id = writer.create(input()).await.unwrap();
        assert_eq!(id, "944ec25d-aac4-4c35-8301-6b35e0d7c05f");
        let created = writer.repo.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].id, id);
        assert!(created[0].createdat.is_none());
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_touching_store() {
        let writer = StreetMarketWriter::new(SpyStore::default());
        let mut inp = input();
        inp.name = String::new();

        let err = writer.create(inp).await.unwrap_err();
        assert!(err.is_validation());
        assert!(writer.repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_maps_nothing_updated_to_not_found() {
        let store = SpyStore {
            update_outcome: Some(MarketError::NothingUpdated),
            ..Default::default()
        };
        let writer = StreetMarketWriter::new(store);
        let id = MarketId::parse("944ec25d-aac4-4c35-8301-6b35e0d7c05f").unwrap();
        let patch = StreetMarketPatch {
            name: Some("LAPA".into()),
            ..Default::default()
        };

        let err = writer.edit(&id, &patch).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn edit_passes_other_errors_through() {
        let store = SpyStore {
            update_outcome: Some(MarketError::Unexpected("db".into())),
            ..Default::default()
        };
        let writer = StreetMarketWriter::new(store);
        let id = MarketId::parse("944ec25d-aac4-4c35-8301-6b35e0d7c05f").unwrap();
        let patch = StreetMarketPatch {
            name: Some("LAPA".into()),
            ..Default::default()
        };

        let err = writer.edit(&id, &patch).await.unwrap_err();
        assert!(matches!(err, MarketError::Unexpected(_)));
    }
}
