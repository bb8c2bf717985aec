use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::{DomainError, DomainResult, MovementId, ProductId};

/// Direction of a stock movement in the log.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Stock entering an area (purchase, return, transfer-in).
    Inbound,
    /// Stock leaving an area (sale, transfer-out).
    Outbound,
    /// Manual correction; may go either way, excluded from consumption.
    Adjustment,
}

/// One historical stock movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: f64,
    pub occurred_at: DateTime<Utc>,
}

impl StockMovement {
    pub fn new(
        id: MovementId,
        product_id: ProductId,
        kind: MovementKind,
        quantity: f64,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if !(quantity.is_finite() && quantity >= 0.0) {
            return Err(DomainError::validation(
                "movement quantity must be finite and >= 0",
            ));
        }
        Ok(Self {
            id,
            product_id,
            kind,
            quantity,
            occurred_at,
        })
    }
}

/// Outbound movements of one product, ascending by date.
///
/// This is the exact shape the consumption-rate estimator consumes. The
/// constructor derives it from an unfiltered movement log, so callers never
/// hand the engine a list with the wrong ordering or the wrong kinds in it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutboundHistory {
    movements: Vec<StockMovement>,
}

impl OutboundHistory {
    /// Filter `log` down to outbound movements of `product_id`, sorted
    /// ascending by `occurred_at`. Ties keep log order (stable sort).
    pub fn from_log(log: &[StockMovement], product_id: ProductId) -> Self {
        let mut movements: Vec<StockMovement> = log
            .iter()
            .filter(|m| m.product_id == product_id && m.kind == MovementKind::Outbound)
            .cloned()
            .collect();
        movements.sort_by_key(|m| m.occurred_at);
        Self { movements }
    }

    /// Wrap an already filtered, already ascending list.
    ///
    /// Rejects lists that violate either precondition instead of silently
    /// producing a wrong consumption rate.
    pub fn from_sorted(movements: Vec<StockMovement>) -> DomainResult<Self> {
        if movements.iter().any(|m| m.kind != MovementKind::Outbound) {
            return Err(DomainError::invariant(
                "history must contain outbound movements only",
            ));
        }
        if movements
            .windows(2)
            .any(|w| w[0].occurred_at > w[1].occurred_at)
        {
            return Err(DomainError::invariant(
                "history must be ascending by occurred_at",
            ));
        }
        Ok(Self { movements })
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn first(&self) -> Option<&StockMovement> {
        self.movements.first()
    }

    pub fn last(&self) -> Option<&StockMovement> {
        self.movements.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StockMovement> {
        self.movements.iter()
    }

    /// Total units moved out over the whole history.
    pub fn total_quantity(&self) -> f64 {
        self.movements.iter().map(|m| m.quantity).sum()
    }
}
