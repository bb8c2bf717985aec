//! The forecast computation itself: free, pure functions.
//!
//! Model (deliberately simple):
//! - Consumption rate is a plain average over the observed movement span.
//!   No recency weighting, no seasonality.
//! - Projection is consumption-only; restocking is not simulated, so the
//!   projected series is non-increasing and clamped at zero.
//! - A rate of zero means "no predictable depletion", not infinite runway
//!   guessed some other way: the projection stays flat and no stockout date
//!   is produced.

use chrono::{DateTime, Duration, Utc};

use stockcast_inventory::OutboundHistory;
use stockcast_products::StockThresholds;

use crate::input::ForecastInput;
use crate::point::ForecastPoint;
use crate::report::Forecast;

/// Average units consumed per day over the observed history.
///
/// Returns `None` for an empty history: with no movements there is no span
/// to average over, and the whole forecast is "insufficient data".
///
/// The span is the calendar-day distance between the first and last
/// movement, floored at one day so a single movement (or several on the
/// same day) yields a rate instead of a division by zero.
pub fn average_daily_consumption(history: &OutboundHistory) -> Option<f64> {
    let first = history.first()?;
    let last = history.last()?;

    let span_days = (last.occurred_at.date_naive() - first.occurred_at.date_naive())
        .num_days()
        .max(1);

    Some(history.total_quantity() / span_days as f64)
}

/// Project stock levels forward, one point per day, day 0 included.
///
/// Day 0 carries `on_hand` exactly; day `i` is `max(0, on_hand - rate * i)`.
/// The returned sequence always has `horizon_days + 1` points (horizons
/// below 1 are clamped to 1) and every point repeats the thresholds for
/// downstream status classification.
pub fn project(
    on_hand: f64,
    rate: f64,
    horizon_days: u32,
    thresholds: StockThresholds,
    as_of: DateTime<Utc>,
) -> Vec<ForecastPoint> {
    let horizon = horizon_days.max(1);

    let mut points = Vec::with_capacity(horizon as usize + 1);
    for i in 0..=horizon {
        let projected_stock = if i == 0 {
            on_hand
        } else {
            (on_hand - rate * f64::from(i)).max(0.0)
        };
        points.push(ForecastPoint {
            date: as_of + Duration::days(i64::from(i)),
            projected_stock,
            min_stock: thresholds.min_stock,
            reorder_point: thresholds.reorder_point,
        });
    }
    points
}

/// Whole days until the stock reaches zero, or `None` when the rate is zero
/// (no predicted stockout under this model).
pub fn days_until_stockout(on_hand: f64, rate: f64) -> Option<i64> {
    if rate > 0.0 {
        Some((on_hand / rate).floor() as i64)
    } else {
        None
    }
}

/// Whole days until the stock crosses the reorder point.
///
/// Only computable when the reorder point is configured and the rate is
/// positive. A stock level already at or below the reorder point yields 0
/// days (reorder today), never a negative offset.
pub fn days_until_reorder(on_hand: f64, rate: f64, thresholds: StockThresholds) -> Option<i64> {
    if !thresholds.has_reorder_point() || rate <= 0.0 {
        return None;
    }
    let days = ((on_hand - thresholds.reorder_point) / rate).floor() as i64;
    Some(days.max(0))
}

/// `as_of` plus a whole-day offset, or `None` when the offset is not
/// representable as a calendar date (a near-zero rate can put the stockout
/// quadrillions of days out; that is "undetermined", not a panic).
fn date_after_days(as_of: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Duration::try_days(days).and_then(|delta| as_of.checked_add_signed(delta))
}

/// Run a full forecast over one input snapshot.
pub fn run(input: &ForecastInput) -> Forecast {
    let Some(rate) = average_daily_consumption(&input.history) else {
        return Forecast::insufficient_data();
    };

    let points = project(
        input.current_stock,
        rate,
        input.horizon_days,
        input.thresholds,
        input.as_of,
    );

    let days_until_stockout = days_until_stockout(input.current_stock, rate);
    let stockout_date = days_until_stockout.and_then(|d| date_after_days(input.as_of, d));
    let reorder_date = days_until_reorder(input.current_stock, rate, input.thresholds)
        .and_then(|d| date_after_days(input.as_of, d));

    Forecast {
        points,
        average_daily_consumption: Some(rate),
        days_until_stockout,
        stockout_date,
        reorder_date,
    }
}
