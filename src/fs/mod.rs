//! Filesystem utilities for ccux.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{CcuxError, Result};
use std::path::Path;

/// Read a UTF-8 file, naming the path in the error.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| CcuxError::io("read", path, e))
}
