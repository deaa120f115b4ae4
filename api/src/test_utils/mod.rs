//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! `InMemoryRepository<R>` backs every record type; tests assert on the rows
//! it holds after a call. `InMemoryRepository::failing()` simulates a database
//! outage.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
