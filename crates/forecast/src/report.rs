use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::point::ForecastPoint;

/// Outcome of one forecast run.
///
/// Thin inputs never make this an error: an empty movement history produces
/// the `insufficient_data` shape (no points, every optional field `None`),
/// and a zero consumption rate produces points but no stockout date. The
/// dates are also `None` when the rate is so small the predicted day falls
/// outside the representable calendar range. Callers render those states;
/// they do not catch anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// One point per day of the horizon, day 0 (today) included. Empty when
    /// there was no history to derive a rate from.
    pub points: Vec<ForecastPoint>,
    pub average_daily_consumption: Option<f64>,
    pub days_until_stockout: Option<i64>,
    pub stockout_date: Option<DateTime<Utc>>,
    pub reorder_date: Option<DateTime<Utc>>,
}

impl Forecast {
    /// The terminal "no history" outcome.
    pub fn insufficient_data() -> Self {
        Self {
            points: Vec::new(),
            average_daily_consumption: None,
            days_until_stockout: None,
            stockout_date: None,
            reorder_date: None,
        }
    }

    pub fn is_insufficient_data(&self) -> bool {
        self.average_daily_consumption.is_none()
    }
}
