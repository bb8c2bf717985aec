use thiserror::Error;
use tracing::debug;

use stockcast_core::TenantId;

use crate::engine;
use crate::input::ForecastInput;
use crate::report::Forecast;

/// Job-level failure.
///
/// Distinct from forecast outcomes: a job error means the job was *misused*
/// (wrong tenant), not that the data was thin.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("tenant scope violation (job tenant not allowed here)")]
    TenantScope,
}

/// A tenant-scoped analytics unit.
///
/// Jobs consume snapshots supplied by callers; this crate stays
/// storage-agnostic. Implementations must not mutate domain state.
pub trait AnalyticsJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;
    type Output;

    /// The tenant this job belongs to (tenant-safe execution model).
    fn tenant_id(&self) -> TenantId;

    /// The input snapshot the job will run on.
    fn input(&self) -> &Self::Input;

    fn run(&self) -> Result<Self::Output, JobError>;
}

/// Forecast job for a single product snapshot.
#[derive(Debug, Clone)]
pub struct StockForecastJob {
    tenant_id: TenantId,
    input: ForecastInput,
}

impl StockForecastJob {
    pub fn new(tenant_id: TenantId, input: ForecastInput) -> Self {
        Self { tenant_id, input }
    }
}

impl AnalyticsJob for StockForecastJob {
    type Input = ForecastInput;
    type Output = Forecast;

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<Forecast, JobError> {
        if self.input.tenant_id != self.tenant_id {
            return Err(JobError::InvalidInput(
                "tenant_id mismatch between job and snapshot".to_string(),
            ));
        }

        let forecast = engine::run(&self.input);

        debug!(
            tenant_id = %self.tenant_id,
            product_id = %self.input.product_id,
            horizon_days = self.input.horizon_days,
            insufficient_data = forecast.is_insufficient_data(),
            "stock forecast computed"
        );

        Ok(forecast)
    }
}
