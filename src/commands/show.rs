//! `muster show` command.

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::store::DescriptorStore;

/// Execute the `show` command.
///
/// Prints the contents of the named descriptor, or of the inventory when
/// the reserved `hosts` name is given.
///
/// # Errors
///
/// Returns an error string if the reply cannot be printed.
pub fn run(ctx: &ServiceContext, config: &Config, filename: &str) -> Result<(), String> {
    super::emit(&response(ctx, config, filename))
}

fn response(ctx: &ServiceContext, config: &Config, filename: &str) -> Envelope<String> {
    Envelope::from(DescriptorStore::new(ctx, config).read(filename))
}
