use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stock status of a single forecast day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    AtReorderPoint,
    Normal,
}

/// Projected stock level for one day of the forecast horizon.
///
/// Each point carries the (constant) thresholds alongside the projected
/// level so downstream consumers can classify or chart a point without
/// looking the product up again.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: DateTime<Utc>,
    pub projected_stock: f64,
    pub min_stock: f64,
    pub reorder_point: f64,
}

impl ForecastPoint {
    /// Classify this point. Precedence, first match wins:
    /// out of stock, then low stock, then at reorder point, then normal.
    /// A threshold of zero counts as not configured and never matches.
    pub fn status(&self) -> StockStatus {
        if self.projected_stock <= 0.0 {
            StockStatus::OutOfStock
        } else if self.min_stock > 0.0 && self.projected_stock <= self.min_stock {
            StockStatus::LowStock
        } else if self.reorder_point > 0.0 && self.projected_stock <= self.reorder_point {
            StockStatus::AtReorderPoint
        } else {
            StockStatus::Normal
        }
    }
}
