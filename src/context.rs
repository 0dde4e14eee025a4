//! Service context bundling the port trait objects.

use crate::ports::filesystem::FileSystem;
use crate::ports::shell::CommandRunner;

/// Bundles the port trait objects into a single context.
///
/// Each field provides access to one external boundary. Fields are public
/// so tests can wire fake adapters directly.
pub struct ServiceContext {
    /// Command runner for the orchestration tool.
    pub shell: Box<dyn CommandRunner>,
    /// Filesystem for the descriptor store and host inventory.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a context with real process and filesystem adapters.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::shell::LiveCommandRunner;

        Self { shell: Box::new(LiveCommandRunner), fs: Box::new(LiveFileSystem) }
    }
}
