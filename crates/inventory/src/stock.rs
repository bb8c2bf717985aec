use serde::{Deserialize, Serialize};

use stockcast_core::{AreaId, DomainError, DomainResult, ProductId};

/// Current stock of one product in one storage area.
///
/// The ledger keeps one record per (product, area) pair; the on-hand
/// quantity of a product is the sum over all its records. Quantities are
/// guaranteed non-negative by the upstream ledger, and the constructor
/// re-checks that at the snapshot boundary.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub product_id: ProductId,
    pub area_id: AreaId,
    pub quantity: f64,
}

impl StockRecord {
    pub fn new(product_id: ProductId, area_id: AreaId, quantity: f64) -> DomainResult<Self> {
        if !(quantity.is_finite() && quantity >= 0.0) {
            return Err(DomainError::validation(
                "stock quantity must be finite and >= 0",
            ));
        }
        Ok(Self {
            product_id,
            area_id,
            quantity,
        })
    }
}

/// Sum the on-hand quantity of `product_id` across all storage areas.
///
/// Records for other products are ignored, so a whole-ledger snapshot can be
/// passed without pre-filtering.
pub fn on_hand_quantity(records: &[StockRecord], product_id: ProductId) -> f64 {
    records
        .iter()
        .filter(|r| r.product_id == product_id)
        .map(|r| r.quantity)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn on_hand_sums_across_areas() {
        let product = ProductId::new();
        let records = vec![
            StockRecord::new(product, AreaId::new(), 10.0).unwrap(),
            StockRecord::new(product, AreaId::new(), 2.5).unwrap(),
            StockRecord::new(ProductId::new(), AreaId::new(), 99.0).unwrap(),
        ];
        assert_eq!(on_hand_quantity(&records, product), 12.5);
    }

    #[test]
    fn on_hand_of_unknown_product_is_zero() {
        let records = vec![StockRecord::new(ProductId::new(), AreaId::new(), 7.0).unwrap()];
        assert_eq!(on_hand_quantity(&records, ProductId::new()), 0.0);
    }

    #[test]
    fn record_rejects_negative_quantity() {
        let err = StockRecord::new(ProductId::new(), AreaId::new(), -1.0).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    proptest! {
        /// Property: the aggregate is never negative, whatever the area split.
        #[test]
        fn on_hand_is_non_negative(quantities in prop::collection::vec(0.0f64..1e6, 0..20)) {
            let product = ProductId::new();
            let records: Vec<StockRecord> = quantities
                .iter()
                .map(|&q| StockRecord::new(product, AreaId::new(), q).unwrap())
                .collect();
            prop_assert!(on_hand_quantity(&records, product) >= 0.0);
        }
    }
}
