//! `muster status` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::extract::ServiceStatus;
use crate::orchestrator::Orchestrator;

/// Execute the `status` command.
///
/// Reports, per host in the group, whether the named service process is
/// running.
///
/// # Errors
///
/// Returns an error string if the reply cannot be printed.
pub fn run(
    ctx: &ServiceContext,
    config: &Config,
    group: &str,
    service: &str,
) -> Result<(), String> {
    super::emit(&response(ctx, config, group, service))
}

fn response(
    ctx: &ServiceContext,
    config: &Config,
    group: &str,
    service: &str,
) -> Envelope<Vec<ServiceStatus>> {
    Envelope::from(Orchestrator::new(ctx, config).service_status(group, service))
}
