//! Domain types for street-market records.
//!
//! Field names double as column names (the identifier lower-cased, nothing
//! else), so the structs here are the canonical column list for the
//! `street_market` table.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{MarketError, MarketResult};

/// A validated street-market identifier (UUID, caller-assigned).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketId(String);

impl MarketId {
    /// Parse and validate an identifier.
    pub fn parse(raw: impl Into<String>) -> MarketResult<Self> {
        let raw = raw.into();
        Uuid::parse_str(&raw)
            .map_err(|_| MarketError::validation("id is not a valid UUID"))?;
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MarketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single street-market entity.
///
/// `id` is assigned before insertion and immutable afterwards. `createdat`
/// is managed by the store (default `now()`) and excluded from generic
/// statement construction.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetMarket {
    pub id: String,
    pub long: f64,
    pub lat: f64,
    pub sectcens: String,
    pub area: String,
    pub iddist: String,
    pub district: String,
    pub idsubth: String,
    pub subtownhall: String,
    pub region5: String,
    pub region8: String,
    pub name: String,
    pub register: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub addrextrainfo: String,
    pub createdat: Option<DateTime<Utc>>,
}

/// Partial update of a street market; `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreetMarketPatch {
    pub long: Option<f64>,
    pub lat: Option<f64>,
    pub sectcens: Option<String>,
    pub area: Option<String>,
    pub iddist: Option<String>,
    pub district: Option<String>,
    pub idsubth: Option<String>,
    pub subtownhall: Option<String>,
    pub region5: Option<String>,
    pub region8: Option<String>,
    pub name: Option<String>,
    pub register: Option<String>,
    pub street: Option<String>,
    pub number: Option<i32>,
    pub neighborhood: Option<String>,
    pub addrextrainfo: Option<String>,
}

impl StreetMarketPatch {
    /// Whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Equality filter for [`List`](crate::repository::StreetMarketRepository::list);
/// `None` means "no constraint on this column".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetMarketFilter {
    pub district: Option<String>,
    pub region5: Option<String>,
    pub name: Option<String>,
    pub neighborhood: Option<String>,
}

/// Offset/limit pair, mapped verbatim into the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Rows to skip (non-negative).
    pub offset: i64,
    /// Max rows to return (positive).
    pub limit: i64,
}

/// Input for creating a street market; every attribute is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StreetMarketCreateInput {
    pub long: f64,
    pub lat: f64,
    pub sectcens: String,
    pub area: String,
    pub iddist: String,
    pub district: String,
    pub idsubth: String,
    pub subtownhall: String,
    pub region5: String,
    pub region8: String,
    pub name: String,
    pub register: String,
    pub street: String,
    pub number: i32,
    pub neighborhood: String,
    pub addrextrainfo: String,
}

impl StreetMarketCreateInput {
    /// Validate that every attribute is provided, naming the first missing
    /// field. Coordinates at exactly 0.0 are treated as not provided, as in
    /// the source dataset (no market sits on the null island).
    pub fn validate(&self) -> MarketResult<()> {
        if self.long == 0.0 {
            return Err(MarketError::validation("long is required"));
        }
        if self.lat == 0.0 {
            return Err(MarketError::validation("lat is required"));
        }
        for (field, value) in [
            ("sectcens", &self.sectcens),
            ("area", &self.area),
            ("iddist", &self.iddist),
            ("district", &self.district),
            ("idsubth", &self.idsubth),
            ("subtownhall", &self.subtownhall),
            ("region5", &self.region5),
            ("region8", &self.region8),
            ("name", &self.name),
            ("register", &self.register),
            ("street", &self.street),
            ("neighborhood", &self.neighborhood),
            ("addrextrainfo", &self.addrextrainfo),
        ] {
            if value.is_empty() {
                return Err(MarketError::validation(format!("{field} is required")));
            }
        }
        Ok(())
    }

    /// Assemble the full record with the given identifier.
    pub fn into_record(self, id: String) -> StreetMarket {
        StreetMarket {
            id,
            long: self.long,
            lat: self.lat,
            sectcens: self.sectcens,
            area: self.area,
            iddist: self.iddist,
            district: self.district,
            idsubth: self.idsubth,
            subtownhall: self.subtownhall,
            region5: self.region5,
            region8: self.region8,
            name: self.name,
            register: self.register,
            street: self.street,
            number: self.number,
            neighborhood: self.neighborhood,
            addrextrainfo: self.addrextrainfo,
            createdat: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_input() -> StreetMarketCreateInput {
        StreetMarketCreateInput {
            long: -46.550164,
            lat: -23.558733,
            sectcens: "355030885000091".into(),
            area: "3550308005040".into(),
            iddist: "87".into(),
            district: "VILA FORMOSA".into(),
            idsubth: "26".into(),
            subtownhall: "ARICANDUVA-FORMOSA-CARRAO".into(),
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

    #[test]
    fn market_id_accepts_uuid() {
        let id = MarketId::parse("944ec25d-aac4-4c35-8301-6b35e0d7c05f").unwrap();
        assert_eq!(id.as_str(), "944ec25d-aac4-4c35-8301-6b35e0d7c05f");
    }

    #[test]
    fn market_id_rejects_garbage() {
        let err = MarketId::parse("not-a-uuid").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn create_input_validates() {
        assert!(full_input().validate().is_ok());
    }

    #[test]
    fn create_input_names_missing_field() {
        let mut inp = full_input();
        inp.register = String::new();
        let err = inp.validate().unwrap_err();
        assert_eq!(err.to_string(), "input is invalid: register is required");
    }

    #[test]
    fn create_input_requires_coordinates() {
        let mut inp = full_input();
        inp.lat = 0.0;
        assert!(inp.validate().is_err());
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(StreetMarketPatch::default().is_empty());
        let patch = StreetMarketPatch {
            name: Some("LAPA".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
