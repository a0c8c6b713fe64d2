//! Domain types shared by the translation service and its test harness.
//!
//! Pure types with no framework dependencies.

pub mod bundle;
pub mod locale;
