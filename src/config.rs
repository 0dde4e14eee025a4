//! Runtime configuration loaded from the environment.
//!
//! All paths and tool names are plain values injected into the store and
//! orchestrator at construction time; nothing in the crate reads the
//! environment after startup.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Settings for one dispatch cycle.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the deployment descriptor files.
    pub store_root: PathBuf,
    /// The fixed host-inventory file, outside the store root.
    pub inventory_path: PathBuf,
    /// Binary used for ad-hoc module runs (status checks, restarts).
    pub ansible_bin: String,
    /// Binary used to run a playbook.
    pub playbook_bin: String,
    /// Service name substituted when a restart request names the `Web` alias.
    pub web_service: String,
    /// Upper bound on one external command run.
    pub command_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_root: PathBuf::from("/etc/muster/playbooks"),
            inventory_path: PathBuf::from("/etc/ansible/hosts"),
            ansible_bin: "ansible".to_string(),
            playbook_bin: "ansible-playbook".to_string(),
            web_service: "nginx".to_string(),
            command_timeout: Duration::from_secs(300),
        }
    }
}

impl Config {
    /// Builds a config from defaults overridden by `MUSTER_*` environment
    /// variables, loading a `.env` file first when one is present.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        if let Ok(value) = env::var("MUSTER_STORE_ROOT") {
            config.store_root = PathBuf::from(value);
        }
        if let Ok(value) = env::var("MUSTER_INVENTORY") {
            config.inventory_path = PathBuf::from(value);
        }
        if let Ok(value) = env::var("MUSTER_ANSIBLE_BIN") {
            config.ansible_bin = value;
        }
        if let Ok(value) = env::var("MUSTER_PLAYBOOK_BIN") {
            config.playbook_bin = value;
        }
        if let Ok(value) = env::var("MUSTER_WEB_SERVICE") {
            config.web_service = value;
        }
        if let Ok(value) = env::var("MUSTER_TIMEOUT_SECS") {
            match value.parse::<u64>() {
                Ok(secs) => config.command_timeout = Duration::from_secs(secs),
                Err(_) => warn!(value, "ignoring non-numeric MUSTER_TIMEOUT_SECS"),
            }
        }
        config
    }
}
