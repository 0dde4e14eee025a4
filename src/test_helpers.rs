//! Shared port fakes for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::filesystem::FileSystem;
use crate::ports::shell::{CommandRunner, Invocation, RunError, RunOutput};

/// In-memory filesystem fake keyed by full path.
pub struct MemFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemFs {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self { files: Mutex::new(HashMap::new()) }
    }

    /// Puts a file in place, creating or replacing it.
    pub fn seed(&self, path: &str, contents: &str) {
        self.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn overwrite(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut files = self.files.lock().unwrap();
        // Mirrors the live adapter: truncate an existing file, never create.
        if !files.contains_key(path) {
            return Err(format!("no such file: {}", path.display()).into());
        }
        files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let files = self.files.lock().unwrap();
        let mut names: Vec<String> = files
            .keys()
            .filter_map(|k| {
                if k.parent() == Some(path) {
                    k.file_name().map(|n| n.to_string_lossy().into_owned())
                } else {
                    None
                }
            })
            .collect();
        if names.is_empty() {
            return Err(format!("no such directory: {}", path.display()).into());
        }
        names.sort();
        Ok(names)
    }
}

/// Command runner that must never be reached; proves validation failures
/// short-circuit before any process would be spawned.
pub struct NoShell;

impl CommandRunner for NoShell {
    fn run(&self, invocation: &Invocation, _timeout: Duration) -> Result<RunOutput, RunError> {
        panic!("unexpected command execution: {invocation}");
    }
}

/// Command runner that replays canned results and records every call.
pub struct ScriptedShell {
    results: Mutex<Vec<Result<RunOutput, RunError>>>,
    calls: Mutex<Vec<(Invocation, Duration)>>,
}

impl ScriptedShell {
    /// Creates a runner that will serve the given results in order.
    #[must_use]
    pub fn new(results: Vec<Result<RunOutput, RunError>>) -> Self {
        Self { results: Mutex::new(results), calls: Mutex::new(Vec::new()) }
    }

    /// Creates a runner that answers one call with the given stdout and a
    /// zero exit.
    #[must_use]
    pub fn with_stdout(stdout: &str) -> Self {
        Self::new(vec![Ok(RunOutput { exit_code: 0, stdout: stdout.to_string() })])
    }

    /// The invocations recorded so far, in call order.
    #[must_use]
    pub fn recorded(&self) -> Vec<(Invocation, Duration)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedShell {
    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput, RunError> {
        self.calls.lock().unwrap().push((invocation.clone(), timeout));
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            panic!("no scripted result left for: {invocation}");
        }
        results.remove(0)
    }
}

/// Lets a test keep a handle on the shell it boxed into a context.
impl CommandRunner for Arc<ScriptedShell> {
    fn run(&self, invocation: &Invocation, timeout: Duration) -> Result<RunOutput, RunError> {
        (**self).run(invocation, timeout)
    }
}
