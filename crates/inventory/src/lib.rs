//! Inventory ledger snapshots.
//!
//! This crate models the two inputs the forecast engine reads from the
//! ledger: per-area stock records (summed into an on-hand quantity) and the
//! dated movement log (filtered into an outbound-only history). It is pure
//! data with deterministic aggregation helpers; persistence lives elsewhere.

pub mod movement;
pub mod stock;

pub use movement::{MovementKind, OutboundHistory, StockMovement};
pub use stock::{on_hand_quantity, StockRecord};
