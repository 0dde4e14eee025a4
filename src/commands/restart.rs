//! `muster restart` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::orchestrator::Orchestrator;

/// Execute the `restart` command.
///
/// Restarts the service on the target host; `data` is `true` when the
/// tool confirmed the restart.
///
/// # Errors
///
/// Returns an error string if the reply cannot be printed.
pub fn run(
    ctx: &ServiceContext,
    config: &Config,
    host: &str,
    service: &str,
) -> Result<(), String> {
    super::emit(&response(ctx, config, host, service))
}

fn response(ctx: &ServiceContext, config: &Config, host: &str, service: &str) -> Envelope<bool> {
    Envelope::from(Orchestrator::new(ctx, config).restart(host, service))
}
