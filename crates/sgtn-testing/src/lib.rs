//! Functional-test harness for the translation service.
//!
//! Boots the service router in-process once per test binary, anchors fixture
//! paths at the project root (the first ancestor holding `testdata/`), and
//! provides assertion clients, envelope decoding and fixture generators.
//! Import from `tests/` and `#[cfg(test)]` code only.
//!
//! ```no_run
//! use sgtn_testing::{endpoints, fixture, harness};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = harness().client()?;
//! let url = endpoints::fill(endpoints::GET_BUNDLE_URL, &fixture::BUNDLE_PARAMS);
//! client.get(&url).await.assert_status_ok();
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod client;
pub mod config;
pub mod contains;
pub mod decode;
pub mod endpoints;
pub mod fixture;
pub mod random;
pub mod root;

pub use bootstrap::{Harness, harness};
