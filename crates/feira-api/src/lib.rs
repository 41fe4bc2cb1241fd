//! HTTP surface for the street-market service.
//!
//! Maps the four store operations onto REST verbs and the domain error
//! taxonomy onto status codes: validation failures are 400, a missing
//! record is 404, everything else is 500.

pub mod error;
pub mod routes;
pub mod state;
pub mod trace;
