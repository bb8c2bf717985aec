use serde::{Deserialize, Serialize};

use stockcast_core::{DomainError, DomainResult, ProductId, TenantId};

/// Replenishment thresholds for a product.
///
/// A value of `0.0` means "not configured"; the dashboard lets operators
/// leave either threshold blank, and the ledger stores that as zero. The
/// reorder point is typically above the minimum-stock alarm threshold, but
/// this is not enforced: misconfigured catalogs still get a forecast.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StockThresholds {
    /// Stock level below which the product counts as "low stock".
    pub min_stock: f64,
    /// Stock level at which replenishment should be triggered.
    pub reorder_point: f64,
}

impl StockThresholds {
    pub fn new(min_stock: f64, reorder_point: f64) -> DomainResult<Self> {
        if !(min_stock.is_finite() && min_stock >= 0.0) {
            return Err(DomainError::validation("min_stock must be finite and >= 0"));
        }
        if !(reorder_point.is_finite() && reorder_point >= 0.0) {
            return Err(DomainError::validation(
                "reorder_point must be finite and >= 0",
            ));
        }
        Ok(Self {
            min_stock,
            reorder_point,
        })
    }

    /// Neither threshold configured.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn has_min_stock(&self) -> bool {
        self.min_stock > 0.0
    }

    pub fn has_reorder_point(&self) -> bool {
        self.reorder_point > 0.0
    }
}

/// Catalog product snapshot.
///
/// Immutable for the duration of a forecast run; the catalog owns the
/// authoritative record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    tenant_id: TenantId,
    sku: String,
    name: String,
    thresholds: StockThresholds,
}

impl Product {
    pub fn new(
        id: ProductId,
        tenant_id: TenantId,
        sku: impl Into<String>,
        name: impl Into<String>,
        thresholds: StockThresholds,
    ) -> DomainResult<Self> {
        let sku = sku.into();
        let name = name.into();
        if sku.trim().is_empty() {
            return Err(DomainError::validation("sku cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            tenant_id,
            sku,
            name,
            thresholds,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn thresholds(&self) -> StockThresholds {
        self.thresholds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(thresholds: StockThresholds) -> Product {
        Product::new(
            ProductId::new(),
            TenantId::new(),
            "SKU-001",
            "Test Product",
            thresholds,
        )
        .unwrap()
    }

    #[test]
    fn product_rejects_empty_name() {
        let err = Product::new(
            ProductId::new(),
            TenantId::new(),
            "SKU-001",
            "   ",
            StockThresholds::none(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn product_rejects_empty_sku() {
        let err = Product::new(
            ProductId::new(),
            TenantId::new(),
            "",
            "Test Product",
            StockThresholds::none(),
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn thresholds_reject_negative_values() {
        assert!(StockThresholds::new(-1.0, 0.0).is_err());
        assert!(StockThresholds::new(0.0, -0.5).is_err());
        assert!(StockThresholds::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn zero_threshold_means_not_configured() {
        let t = StockThresholds::new(0.0, 25.0).unwrap();
        assert!(!t.has_min_stock());
        assert!(t.has_reorder_point());

        let product = test_product(t);
        assert_eq!(product.thresholds().reorder_point, 25.0);
    }

    proptest! {
        /// Property: any finite non-negative pair is a valid configuration,
        /// even a reorder point below the minimum-stock alarm.
        #[test]
        fn thresholds_accept_any_non_negative_pair(
            min_stock in 0.0f64..1e6,
            reorder_point in 0.0f64..1e6,
        ) {
            let t = StockThresholds::new(min_stock, reorder_point).unwrap();
            prop_assert_eq!(t.has_min_stock(), min_stock > 0.0);
            prop_assert_eq!(t.has_reorder_point(), reorder_point > 0.0);
        }
    }
}
