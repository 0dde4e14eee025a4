//! `muster list` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::store::DescriptorStore;

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error string if the reply cannot be printed.
pub fn run(ctx: &ServiceContext, config: &Config) -> Result<(), String> {
    super::emit(&response(ctx, config))
}

fn response(ctx: &ServiceContext, config: &Config) -> Envelope<Vec<String>> {
    Envelope::from(DescriptorStore::new(ctx, config).list())
}
