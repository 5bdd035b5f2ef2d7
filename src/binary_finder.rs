//! Shared utility for finding BLAST+ binaries
//!
//! This module provides a unified way to find the external BLAST+ tools
//! that works both with system installs and with tools shipped next to the
//! hsdscan executable.

use crate::error::{Result, ScanError};
use std::path::PathBuf;

/// Find a BLAST+ tool by name
///
/// Search order:
/// 1. Same directory as current executable (bundled installs)
/// 2. System PATH
pub fn find_binary(name: &str) -> Result<PathBuf> {
    // 1. Try same directory as the current executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let binary = exe_dir.join(name);
            if binary.exists() {
                return Ok(binary);
            }
        }
    }

    // 2. Fall back to PATH
    if let Ok(path) = which::which(name) {
        return Ok(path);
    }

    Err(ScanError::BinaryNotFound(name.to_string()))
}

pub fn find_makeblastdb() -> Result<PathBuf> {
    find_binary("makeblastdb")
}

pub fn find_blastn() -> Result<PathBuf> {
    find_binary("blastn")
}
