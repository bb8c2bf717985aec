use tracing::debug;

use stockcast_core::TenantId;

use crate::job::{AnalyticsJob, JobError};

/// Tenant scope for execution.
///
/// - `Any`: run jobs for any tenant (shared worker).
/// - `Tenant`: only accept jobs for the specified tenant (per-tenant worker,
///   or a request handler acting on behalf of one agency/subaccount).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantScope {
    Any,
    Tenant(TenantId),
}

impl TenantScope {
    pub fn allows(&self, tenant_id: TenantId) -> bool {
        match self {
            TenantScope::Any => true,
            TenantScope::Tenant(t) => *t == tenant_id,
        }
    }
}

/// Executor for analytics jobs.
///
/// Intentionally minimal and runtime-agnostic: jobs are synchronous and run
/// to completion, so the default implementation just checks the tenant scope
/// and invokes the job.
pub trait AnalyticsScheduler: Send + Sync + 'static {
    fn scope(&self) -> TenantScope;

    fn run<J: AnalyticsJob>(&self, job: J) -> Result<J::Output, JobError> {
        if !self.scope().allows(job.tenant_id()) {
            return Err(JobError::TenantScope);
        }
        debug!(tenant_id = %job.tenant_id(), "running analytics job");
        job.run()
    }
}

/// Simple synchronous scheduler that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone)]
pub struct LocalScheduler {
    scope: TenantScope,
}

impl LocalScheduler {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self::new(TenantScope::Tenant(tenant_id))
    }
}

impl AnalyticsScheduler for LocalScheduler {
    fn scope(&self) -> TenantScope {
        self.scope
    }
}
