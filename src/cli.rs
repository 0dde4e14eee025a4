//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `muster`.
#[derive(Debug, Parser)]
#[command(
    name = "muster",
    version,
    about = "Manage deployment descriptors and drive the orchestration tool"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the host inventory and every deployment descriptor.
    List,
    /// Print the contents of one descriptor (or the inventory).
    Show {
        /// Store name to read, e.g. `site.yaml` or `hosts`.
        filename: String,
    },
    /// Replace the contents of one descriptor with text read from stdin.
    Save {
        /// Store name to overwrite, e.g. `site.yaml` or `hosts`.
        filename: String,
    },
    /// Run a playbook against all hosts and report the hosts that failed.
    Deploy {
        /// Descriptor filename, e.g. `site.yaml`.
        filename: String,
    },
    /// Check whether a service process is running on every host in a group.
    Status {
        /// Inventory host group to check.
        group: String,
        /// Service process name, e.g. `nginx`.
        service: String,
    },
    /// Restart a service on one host.
    Restart {
        /// Target host address.
        host: String,
        /// Service name; `Web` is replaced with the configured web service.
        service: String,
    },
}
