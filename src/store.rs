//! Descriptor store: named deployment descriptors plus the host inventory.
//!
//! The store is a flat directory of descriptor files with one reserved
//! name, [`INVENTORY_NAME`], that resolves to the fixed host-inventory
//! file outside the store root. All I/O goes through the `FileSystem`
//! port so the store is testable without touching real system paths.

use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::OpsError;

/// Reserved name under which the host inventory appears in the store.
pub const INVENTORY_NAME: &str = "hosts";

/// Filename suffix that marks a deployment descriptor.
pub const DESCRIPTOR_SUFFIX: &str = ".yaml";

/// Returns `true` when `name` is a plain filename: non-empty, no path
/// separators, not the `.` or `..` directory reference. Anything else
/// could escape the store root and is rejected before any path is built.
/// Dots inside a name carry no traversal meaning and pass.
pub(crate) fn is_clean_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && name != "." && name != ".."
}

/// Read/write access to the descriptor directory and the inventory file.
pub struct DescriptorStore<'a> {
    ctx: &'a ServiceContext,
    config: &'a Config,
}

impl<'a> DescriptorStore<'a> {
    /// Creates a store over the configured root and inventory paths.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, config: &'a Config) -> Self {
        Self { ctx, config }
    }

    /// Lists the store contents: the inventory pseudo-name first, then
    /// every descriptor file in the store directory, in listing order.
    ///
    /// # Errors
    ///
    /// Returns `FileAccess` if the store directory cannot be listed.
    pub fn list(&self) -> Result<Vec<String>, OpsError> {
        let entries = self.ctx.fs.list_dir(&self.config.store_root).map_err(|e| {
            OpsError::FileAccess(format!(
                "failed to list {}: {e}",
                self.config.store_root.display()
            ))
        })?;
        let mut names = vec![INVENTORY_NAME.to_string()];
        names.extend(entries.into_iter().filter(|name| name.ends_with(DESCRIPTOR_SUFFIX)));
        Ok(names)
    }

    /// Reads a file by its store name.
    ///
    /// The inventory pseudo-name resolves to the inventory path; a clean
    /// name ending in the descriptor suffix resolves into the store root.
    /// Any other name yields empty content rather than an error, so a
    /// caller probing an unknown name sees "nothing there", not a fault.
    ///
    /// # Errors
    ///
    /// Returns `FileAccess` if a resolved path cannot be read.
    pub fn read(&self, name: &str) -> Result<String, OpsError> {
        let Some(path) = self.resolve_readable(name) else {
            return Ok(String::new());
        };
        self.ctx
            .fs
            .read_to_string(&path)
            .map_err(|e| OpsError::FileAccess(format!("failed to read {}: {e}", path.display())))
    }

    /// Replaces the contents of a file by its store name and reports the
    /// fixed `"OK"` marker.
    ///
    /// The target must already exist; the write truncates, never creates.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for names that are not plain filenames, and
    /// `FileAccess` if the resolved file is missing or the write fails.
    pub fn write(&self, name: &str, contents: &str) -> Result<&'static str, OpsError> {
        if !is_clean_name(name) {
            return Err(OpsError::Validation("please choose correct file!".to_string()));
        }
        let path = if name == INVENTORY_NAME {
            self.config.inventory_path.clone()
        } else {
            self.config.store_root.join(name)
        };
        debug!(path = %path.display(), bytes = contents.len(), "writing descriptor");
        self.ctx
            .fs
            .overwrite(&path, contents)
            .map_err(|e| OpsError::FileAccess(format!("failed to write {}: {e}", path.display())))?;
        Ok("OK")
    }

    fn resolve_readable(&self, name: &str) -> Option<PathBuf> {
        if name == INVENTORY_NAME {
            Some(self.config.inventory_path.clone())
        } else if is_clean_name(name) && name.ends_with(DESCRIPTOR_SUFFIX) {
            Some(self.config.store_root.join(name))
        } else {
            None
        }
    }
}
