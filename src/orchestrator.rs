//! Use cases: deploy a playbook, check a service, restart a service.
//!
//! Each use case validates its inputs, builds one argument-vector command,
//! runs it synchronously through the `CommandRunner` port, and projects the
//! raw console text into its result shape. A validation failure returns
//! before any command is built, so no process is ever spawned for bad
//! input. A non-zero tool exit is not a failure here: the tool exits
//! non-zero whenever any host fails, and the per-host outcome is read from
//! the output text instead.

use tracing::debug;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::OpsError;
use crate::extract::{self, HostFailure, ServiceStatus};
use crate::ports::shell::{Invocation, RunOutput};
use crate::store::{is_clean_name, DESCRIPTOR_SUFFIX};

/// Caller-facing service alias substituted with the configured web service
/// name before a restart command is built.
const WEB_SERVICE_ALIAS: &str = "Web";

/// Application use cases over one command runner and one configuration.
pub struct Orchestrator<'a> {
    ctx: &'a ServiceContext,
    config: &'a Config,
}

impl<'a> Orchestrator<'a> {
    /// Creates an orchestrator over the given context and configuration.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a Config) -> Self {
        Self { ctx, config }
    }

    /// Runs the named playbook against all hosts and reports every host
    /// the tool marked fatal, in output order. An empty list means the
    /// deploy reached every host.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty filename or one that is not a
    /// plain descriptor name, and an execution error if the tool cannot
    /// be started or times out.
    pub fn deploy(&self, filename: &str) -> Result<Vec<HostFailure>, OpsError> {
        if filename.is_empty() {
            return Err(OpsError::Validation("please choose a file!".to_string()));
        }
        if !filename.ends_with(DESCRIPTOR_SUFFIX) || !is_clean_name(filename) {
            return Err(OpsError::Validation("please choose correct file!".to_string()));
        }
        let playbook = self.config.store_root.join(filename);
        let invocation =
            Invocation::new(&self.config.playbook_bin).arg(playbook.to_string_lossy());
        let output = self.run(invocation)?;
        Ok(extract::deploy_failures(&output.stdout))
    }

    /// Checks whether `service` has a running process on every host in
    /// `group`, one record per host in output order.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when either input is empty, and an execution
    /// error if the tool cannot be started or times out.
    pub fn service_status(
        &self,
        group: &str,
        service: &str,
    ) -> Result<Vec<ServiceStatus>, OpsError> {
        if group.is_empty() {
            return Err(OpsError::Validation("please choose a host group!".to_string()));
        }
        if service.is_empty() {
            return Err(OpsError::Validation("please choose a service!".to_string()));
        }
        let invocation = Invocation::new(&self.config.ansible_bin)
            .arg(group)
            .arg("-m")
            .arg("shell")
            .arg("-a")
            .arg(format!("ps -C {service}"));
        let output = self.run(invocation)?;
        Ok(extract::service_statuses(&output.stdout))
    }

    /// Restarts `service` on `host` and reports whether the tool printed
    /// a `SUCCESS` banner anywhere in its output.
    ///
    /// The `Web` alias is replaced with the configured web service name
    /// before the command is built, whatever the caller passed.
    ///
    /// # Errors
    ///
    /// Returns `Validation` when either input is empty, and an execution
    /// error if the tool cannot be started or times out.
    pub fn restart(&self, host: &str, service: &str) -> Result<bool, OpsError> {
        if host.is_empty() {
            return Err(OpsError::Validation("please choose a host!".to_string()));
        }
        if service.is_empty() {
            return Err(OpsError::Validation("please choose a service!".to_string()));
        }
        let service =
            if service == WEB_SERVICE_ALIAS { self.config.web_service.as_str() } else { service };
        let invocation = Invocation::new(&self.config.ansible_bin)
            .arg(host)
            .arg("-m")
            .arg("service")
            .arg("-a")
            .arg(format!("name={service} state=restarted"))
            .arg("--become");
        let output = self.run(invocation)?;
        Ok(output.stdout.contains("SUCCESS"))
    }

    fn run(&self, invocation: Invocation) -> Result<RunOutput, OpsError> {
        debug!(command = %invocation, "running orchestration tool");
        let output = self.ctx.shell.run(&invocation, self.config.command_timeout)?;
        debug!(
            exit_code = output.exit_code,
            bytes = output.stdout.len(),
            "orchestration tool finished"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{MemFs, NoShell, ScriptedShell};
    use crate::ports::shell::{CommandRunner, RunError};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_config() -> Config {
        Config { store_root: PathBuf::from("/store"), ..Config::default() }
    }

    fn context_with(shell: impl CommandRunner + 'static) -> ServiceContext {
        ServiceContext { shell: Box::new(shell), fs: Box::new(MemFs::new()) }
    }

    #[test]
    fn deploy_rejects_empty_filename_without_spawning() {
        let ctx = context_with(NoShell);
        let config = test_config();
        let err = Orchestrator::new(&ctx, &config).deploy("").unwrap_err();
        assert_eq!(err.to_string(), "please choose a file!");
    }

    #[test]
    fn deploy_rejects_non_descriptor_names_without_spawning() {
        let ctx = context_with(NoShell);
        let config = test_config();
        let orchestrator = Orchestrator::new(&ctx, &config);
        for filename in ["notes.txt", "site.yml", "../evil.yaml", "dir/site.yaml"] {
            let err = orchestrator.deploy(filename).unwrap_err();
            assert_eq!(err.to_string(), "please choose correct file!", "for {filename:?}");
        }
    }

    #[test]
    fn deploy_invokes_the_playbook_binary_with_the_store_path() {
        let shell = Arc::new(ScriptedShell::with_stdout(""));
        let ctx = context_with(Arc::clone(&shell));
        let config = test_config();

        Orchestrator::new(&ctx, &config).deploy("site.yaml").unwrap();

        let calls = shell.recorded();
        assert_eq!(calls.len(), 1);
        let (invocation, timeout) = &calls[0];
        assert_eq!(invocation.program, "ansible-playbook");
        assert_eq!(invocation.args, vec!["/store/site.yaml"]);
        assert_eq!(*timeout, config.command_timeout);
    }

    #[test]
    fn deploy_accepts_inner_dots_in_a_descriptor_name() {
        let shell = Arc::new(ScriptedShell::with_stdout(""));
        let ctx = context_with(Arc::clone(&shell));
        let config = test_config();

        Orchestrator::new(&ctx, &config).deploy("a..b.yaml").unwrap();

        let calls = shell.recorded();
        let (invocation, _) = &calls[0];
        assert_eq!(invocation.args, vec!["/store/a..b.yaml"]);
    }

    #[test]
    fn deploy_reports_failed_hosts_from_tool_output() {
        let raw = "\
ok: [10.0.0.1]
fatal: [10.0.0.2]: FAILED! => {\"changed\": false, \"msg\": \"unreachable\"}
";
        let ctx = context_with(ScriptedShell::with_stdout(raw));
        let config = test_config();

        let failures = Orchestrator::new(&ctx, &config).deploy("site.yaml").unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].ip, "10.0.0.2");
        assert_eq!(failures[0].reason, "unreachable");
    }

    #[test]
    fn deploy_with_non_zero_exit_is_still_a_result() {
        // The tool exits 2 when any host fails; that is data, not an error.
        let shell = ScriptedShell::new(vec![Ok(crate::ports::shell::RunOutput {
            exit_code: 2,
            stdout: String::new(),
        })]);
        let ctx = context_with(shell);
        let config = test_config();

        let failures = Orchestrator::new(&ctx, &config).deploy("site.yaml").unwrap();
        assert!(failures.is_empty());
    }

    #[test]
    fn status_requires_group_and_service() {
        let ctx = context_with(NoShell);
        let config = test_config();
        let orchestrator = Orchestrator::new(&ctx, &config);

        let err = orchestrator.service_status("", "nginx").unwrap_err();
        assert_eq!(err.to_string(), "please choose a host group!");
        let err = orchestrator.service_status("webservers", "").unwrap_err();
        assert_eq!(err.to_string(), "please choose a service!");
    }

    #[test]
    fn status_invokes_an_adhoc_process_check() {
        let shell = Arc::new(ScriptedShell::with_stdout(""));
        let ctx = context_with(Arc::clone(&shell));
        let config = test_config();

        Orchestrator::new(&ctx, &config).service_status("webservers", "nginx").unwrap();

        let calls = shell.recorded();
        let (invocation, _) = &calls[0];
        assert_eq!(invocation.program, "ansible");
        // The module payload travels as one argument, not shell text.
        assert_eq!(invocation.args, vec!["webservers", "-m", "shell", "-a", "ps -C nginx"]);
    }

    #[test]
    fn status_maps_banners_to_records() {
        let raw = "\
10.0.0.1 | SUCCESS | rc=0 >>
10.0.0.2 | FAILED | rc=1 >>
";
        let ctx = context_with(ScriptedShell::with_stdout(raw));
        let config = test_config();

        let statuses =
            Orchestrator::new(&ctx, &config).service_status("webservers", "nginx").unwrap();
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].up);
        assert!(!statuses[1].up);
    }

    #[test]
    fn status_with_no_markers_is_an_empty_list() {
        let ctx = context_with(ScriptedShell::with_stdout("nothing to report\n"));
        let config = test_config();

        let statuses =
            Orchestrator::new(&ctx, &config).service_status("webservers", "nginx").unwrap();
        assert!(statuses.is_empty());
    }

    #[test]
    fn restart_requires_host_and_service() {
        let ctx = context_with(NoShell);
        let config = test_config();
        let orchestrator = Orchestrator::new(&ctx, &config);

        let err = orchestrator.restart("", "nginx").unwrap_err();
        assert_eq!(err.to_string(), "please choose a host!");
        let err = orchestrator.restart("10.0.0.1", "").unwrap_err();
        assert_eq!(err.to_string(), "please choose a service!");
    }

    #[test]
    fn restart_builds_a_privileged_service_command() {
        let shell = Arc::new(ScriptedShell::with_stdout("10.0.0.1 | SUCCESS => {}"));
        let ctx = context_with(Arc::clone(&shell));
        let config = test_config();

        let restarted = Orchestrator::new(&ctx, &config).restart("10.0.0.1", "postgres").unwrap();
        assert!(restarted);

        let calls = shell.recorded();
        let (invocation, _) = &calls[0];
        assert_eq!(invocation.program, "ansible");
        assert_eq!(
            invocation.args,
            vec!["10.0.0.1", "-m", "service", "-a", "name=postgres state=restarted", "--become"]
        );
    }

    #[test]
    fn restart_substitutes_the_web_alias() {
        let shell = Arc::new(ScriptedShell::with_stdout(""));
        let ctx = context_with(Arc::clone(&shell));
        let config = Config { web_service: "httpd".to_string(), ..test_config() };

        let restarted = Orchestrator::new(&ctx, &config).restart("10.0.0.1", "Web").unwrap();
        assert!(!restarted);

        let calls = shell.recorded();
        let (invocation, _) = &calls[0];
        assert!(invocation.args.contains(&"name=httpd state=restarted".to_string()));
    }

    #[test]
    fn launch_failure_surfaces_as_execution_start() {
        let shell = ScriptedShell::new(vec![Err(RunError::Launch {
            program: "ansible-playbook".to_string(),
            message: "No such file or directory".to_string(),
        })]);
        let ctx = context_with(shell);
        let config = test_config();

        let err = Orchestrator::new(&ctx, &config).deploy("site.yaml").unwrap_err();
        assert!(matches!(err, OpsError::ExecutionStart(_)));
    }

    #[test]
    fn timeout_surfaces_as_execution_timeout() {
        let shell =
            ScriptedShell::new(vec![Err(RunError::Timeout { limit: Duration::from_secs(300) })]);
        let ctx = context_with(shell);
        let config = test_config();

        let err =
            Orchestrator::new(&ctx, &config).service_status("webservers", "nginx").unwrap_err();
        assert!(matches!(err, OpsError::ExecutionTimeout(_)));
    }
}
