//! # feira
//!
//! Core library for the street-market open-data service.
//!
//! The pieces, leaves first:
//!
//! - [`args`] — the SQL argument builder: turns a record into parallel
//!   column / placeholder / value sequences with explicit absence handling
//! - [`repository`] — INSERT/UPDATE/DELETE/SELECT over the `street_market`
//!   table, classifying affected-row counts into the domain error taxonomy
//! - [`service`] — input validation, id generation and not-found mapping on
//!   top of the repository
//!
//! Statements are always parameterized; placeholder numbering starts at `$1`
//! and never leaves gaps. Execution goes through [`GenericClient`] so both a
//! pooled connection and a transaction (or a test double) fit.

pub mod args;
pub mod client;
pub mod domain;
pub mod error;
pub mod pool;
pub mod repository;
pub mod service;

pub use args::{BindArgs, SqlArgs};
pub use client::GenericClient;
pub use domain::{
    MarketId, Pagination, StreetMarket, StreetMarketCreateInput, StreetMarketFilter,
    StreetMarketPatch,
};
pub use error::{MarketError, MarketResult};
pub use pool::{create_pool, create_pool_with_config};
pub use repository::StreetMarketRepository;
pub use service::{StreetMarketEraser, StreetMarketReader, StreetMarketWriter};
