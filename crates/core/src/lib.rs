//! `stockcast-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers and the shared error model. Business rules live
//! in the domain crates (`stockcast-products`, `stockcast-inventory`,
//! `stockcast-forecast`).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{AreaId, MovementId, ProductId, TenantId};
