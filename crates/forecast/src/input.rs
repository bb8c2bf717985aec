use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::{DomainError, DomainResult, ProductId, TenantId};
use stockcast_inventory::{on_hand_quantity, OutboundHistory, StockRecord};
use stockcast_products::StockThresholds;

/// Snapshot of everything one forecast run needs.
///
/// All fields are plain data fetched by the caller; the engine reads the
/// snapshot and nothing else. `as_of` is "today" for the run — taking it as
/// a parameter rather than reading the clock keeps the engine referentially
/// transparent and its tests deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastInput {
    pub tenant_id: TenantId,
    pub product_id: ProductId,
    /// On-hand quantity summed across storage areas.
    pub current_stock: f64,
    pub history: OutboundHistory,
    pub thresholds: StockThresholds,
    /// Number of future days to project. Values below 1 are clamped to 1 by
    /// the engine; callers normally constrain this to 7/15/30/60/90.
    pub horizon_days: u32,
    pub as_of: DateTime<Utc>,
}

impl ForecastInput {
    pub fn new(
        tenant_id: TenantId,
        product_id: ProductId,
        current_stock: f64,
        history: OutboundHistory,
        thresholds: StockThresholds,
        horizon_days: u32,
        as_of: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if !(current_stock.is_finite() && current_stock >= 0.0) {
            return Err(DomainError::validation(
                "current_stock must be finite and >= 0",
            ));
        }
        Ok(Self {
            tenant_id,
            product_id,
            current_stock,
            history,
            thresholds,
            horizon_days,
            as_of,
        })
    }

    /// Build an input by summing the product's stock records itself, for
    /// callers that hold a raw ledger snapshot rather than a pre-aggregated
    /// on-hand figure.
    pub fn from_stock_records(
        tenant_id: TenantId,
        product_id: ProductId,
        records: &[StockRecord],
        history: OutboundHistory,
        thresholds: StockThresholds,
        horizon_days: u32,
        as_of: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let current_stock = on_hand_quantity(records, product_id);
        Self::new(
            tenant_id,
            product_id,
            current_stock,
            history,
            thresholds,
            horizon_days,
            as_of,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockcast_core::AreaId;

    #[test]
    fn from_stock_records_sums_across_areas() {
        let tenant_id = TenantId::new();
        let product_id = ProductId::new();
        let records = vec![
            StockRecord::new(product_id, AreaId::new(), 30.0).unwrap(),
            StockRecord::new(product_id, AreaId::new(), 12.0).unwrap(),
        ];

        let input = ForecastInput::from_stock_records(
            tenant_id,
            product_id,
            &records,
            OutboundHistory::default(),
            StockThresholds::none(),
            30,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(input.current_stock, 42.0);
    }

    #[test]
    fn rejects_non_finite_stock() {
        let err = ForecastInput::new(
            TenantId::new(),
            ProductId::new(),
            f64::INFINITY,
            OutboundHistory::default(),
            StockThresholds::none(),
            30,
            Utc::now(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
