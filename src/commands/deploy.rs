//! `muster deploy` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::extract::HostFailure;
use crate::orchestrator::Orchestrator;

/// Execute the `deploy` command.
///
/// Runs the named playbook and reports the hosts the tool marked fatal;
/// an empty `data` array means every host was reached.
///
/// # Errors
///
/// Returns an error string if the reply cannot be printed.
pub fn run(ctx: &ServiceContext, config: &Config, filename: &str) -> Result<(), String> {
    super::emit(&response(ctx, config, filename))
}

fn response(ctx: &ServiceContext, config: &Config, filename: &str) -> Envelope<Vec<HostFailure>> {
    Envelope::from(Orchestrator::new(ctx, config).deploy(filename))
}
