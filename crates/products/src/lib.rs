//! Product catalog records consumed by the forecast engine.
//!
//! The catalog is owned by an external system; this crate only models the
//! snapshot the engine needs: identity plus the replenishment thresholds.

pub mod product;

pub use product::{Product, StockThresholds};
