//! Command dispatch and handlers.
//!
//! Every handler answers on stdout with exactly one JSON envelope line;
//! an error envelope is a delivered answer, so the handler still returns
//! `Ok`. The string error channel is reserved for frontend faults such as
//! an unreadable stdin or an unencodable reply.

pub mod deploy;
pub mod list;
pub mod restart;
pub mod save;
pub mod show;
pub mod status;

use serde::Serialize;

use crate::cli::Command;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::envelope::Envelope;

/// Dispatch a parsed command to its handler.
///
/// Builds the configuration and the live service context once and hands
/// both to the handler; nothing below this point reads the environment.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let config = Config::from_env();
    let ctx = ServiceContext::live();
    dispatch_with_context(command, &ctx, &config)
}

/// Dispatch a command with the given service context and configuration.
fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    config: &Config,
) -> Result<(), String> {
    match command {
        Command::List => list::run(ctx, config),
        Command::Show { filename } => show::run(ctx, config, filename),
        Command::Save { filename } => save::run(ctx, config, filename),
        Command::Deploy { filename } => deploy::run(ctx, config, filename),
        Command::Status { group, service } => status::run(ctx, config, group, service),
        Command::Restart { host, service } => restart::run(ctx, config, host, service),
    }
}

/// Prints one envelope as a single JSON line on stdout.
///
/// # Errors
///
/// Returns an error string if the envelope cannot be encoded.
pub(crate) fn emit<T: Serialize>(envelope: &Envelope<T>) -> Result<(), String> {
    let line =
        serde_json::to_string(envelope).map_err(|e| format!("Failed to encode reply: {e}"))?;
    println!("{line}");
    Ok(())
}
