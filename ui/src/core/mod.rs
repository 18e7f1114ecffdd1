//! Platform-agnostic explorer state: parameters, query encoding, dataset
//! selection and the session tying them together.

pub mod config;
pub mod dataset;
pub mod events;
pub mod format;
pub mod params;
pub mod platform;
pub mod query;
pub mod session;
