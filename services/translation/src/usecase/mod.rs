pub mod bundle;
pub mod locale;
