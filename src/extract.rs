//! Extraction of per-host records from orchestration tool console text.
//!
//! The tool reports outcomes as free-form console lines; this module owns
//! the only two textual shapes the system understands:
//!
//! ```text
//! fatal: [10.1.2.3]: UNREACHABLE! => {..., "msg": "Failed to connect ..."}
//! 10.1.2.3 | SUCCESS | rc=0 >>
//! ```
//!
//! Each shape is one named pattern profile below, so the coupling to the
//! tool's exact wording stays visible in one place and testable without
//! running any process. Extraction is a pure function of the input text:
//! all non-overlapping matches, scanned left to right, projected into
//! records in match order. No matches means an empty sequence, never an
//! error, and a host reported twice stays in the output twice.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Profile for playbook runs: a `fatal:` task line carrying the host and
/// the tool's quoted failure message. Host addresses are matched as four
/// dot-separated digit runs; octet ranges are deliberately not validated,
/// mirroring what the tool actually prints.
static DEPLOY_FAILURE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"fatal: \[(\d+\.\d+\.\d+\.\d+)\](?:.*)"msg": "([^"]*)""#)
        .expect("deploy failure pattern must compile")
});

/// Profile for ad-hoc module runs: the per-host `SUCCESS`/`FAILED` banner.
static SERVICE_STATUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+\.\d+\.\d+\.\d+) \| (SUCCESS|FAILED)")
        .expect("service status pattern must compile")
});

/// One host that failed during a playbook run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostFailure {
    /// Address of the failed host, as printed by the tool.
    #[serde(rename = "Ip")]
    pub ip: String,
    /// The tool's free-text failure message for that host.
    #[serde(rename = "Reason")]
    pub reason: String,
}

/// Whether a service process was found running on one host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    /// Address of the checked host.
    #[serde(rename = "Ip")]
    pub ip: String,
    /// `true` when the tool printed `SUCCESS` for this host.
    #[serde(rename = "Status")]
    pub up: bool,
}

/// Extracts the per-host failure records from playbook run output.
#[must_use]
pub fn deploy_failures(raw: &str) -> Vec<HostFailure> {
    DEPLOY_FAILURE
        .captures_iter(raw)
        .map(|caps| HostFailure { ip: caps[1].to_string(), reason: caps[2].to_string() })
        .collect()
}

/// Extracts the per-host service status records from ad-hoc run output.
#[must_use]
pub fn service_statuses(raw: &str) -> Vec<ServiceStatus> {
    SERVICE_STATUS
        .captures_iter(raw)
        .map(|caps| ServiceStatus { ip: caps[1].to_string(), up: &caps[2] == "SUCCESS" })
        .collect()
}
