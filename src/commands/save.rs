//! `muster save` command.

use std::io;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;
use crate::store::DescriptorStore;

/// Execute the `save` command.
///
/// Reads the replacement contents from stdin until end of input, then
/// overwrites the named descriptor (or the inventory).
///
/// # Errors
///
/// Returns an error string if stdin cannot be read or the reply cannot be
/// printed.
pub fn run(ctx: &ServiceContext, config: &Config, filename: &str) -> Result<(), String> {
    let contents = io::read_to_string(io::stdin())
        .map_err(|e| format!("Failed to read new contents from stdin: {e}"))?;
    super::emit(&response(ctx, config, filename, &contents))
}

fn response(
    ctx: &ServiceContext,
    config: &Config,
    filename: &str,
    contents: &str,
) -> Envelope<&'static str> {
    Envelope::from(DescriptorStore::new(ctx, config).write(filename, contents))
}
