//! `stockcast-forecast`
//!
//! **Responsibility:** stock forecasting — consumption-rate estimation,
//! forward stock projection, and stockout/reorder date derivation.
//!
//! This crate is deterministic domain logic:
//! - It does no IO; inputs are in-memory snapshots fetched by callers.
//! - It holds no module-level state; identical inputs give identical output.
//! - It never raises on thin data: "insufficient history" and "no predicted
//!   stockout" are valid results carried as `None`, not errors.

pub mod engine;
pub mod input;
pub mod job;
pub mod point;
pub mod report;
pub mod scheduler;

pub use engine::{average_daily_consumption, days_until_reorder, days_until_stockout, project};
pub use input::ForecastInput;
pub use job::{AnalyticsJob, JobError, StockForecastJob};
pub use point::{ForecastPoint, StockStatus};
pub use report::Forecast;
pub use scheduler::{AnalyticsScheduler, LocalScheduler, TenantScope};
