//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (the orchestration tool's processes, the descriptor
//! filesystem). Implementations live in `src/adapters/`.

pub mod filesystem;
pub mod shell;

pub use filesystem::FileSystem;
pub use shell::{CommandRunner, Invocation, RunError, RunOutput};
