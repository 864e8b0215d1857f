//! Presentational components shared by the TPQ dashboards.

pub mod components;

pub use components::*;
