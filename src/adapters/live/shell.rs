//! Live command runner using `std::process::Command`.

use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::ports::shell::{CommandRunner, Invocation, RunError, RunOutput};

/// Live runner that spawns real processes from the argument vector.
pub struct LiveCommandRunner;

impl CommandRunner for LiveCommandRunner {
    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput, RunError> {
        debug!(command = %invocation, "spawning");

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| RunError::Launch {
                program: invocation.program.clone(),
                message: e.to_string(),
            })?;

        // Collect stdout and wait on a separate thread so the timeout can
        // fire from here. On timeout the child keeps running; the waiter
        // thread reaps it whenever it finally exits, so nothing zombies.
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(child.wait_with_output());
        });

        match rx.recv_timeout(timeout) {
            Ok(Ok(output)) => {
                let exit_code = output.status.code().unwrap_or(-1);
                let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
                debug!(exit_code, bytes = stdout.len(), "command finished");
                Ok(RunOutput { exit_code, stdout })
            }
            Ok(Err(e)) => Err(RunError::Launch {
                program: invocation.program.clone(),
                message: e.to_string(),
            }),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                warn!(command = %invocation, limit_secs = timeout.as_secs(), "command timed out");
                Err(RunError::Timeout { limit: timeout })
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(RunError::Launch {
                program: invocation.program.clone(),
                message: "runner thread exited unexpectedly".to_string(),
            }),
        }
    }
}
