//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over the few system
//! operations the dashboard needs, enabling dependency injection and
//! testability.
//!
//! # Structure
//!
//! - `env` - Environment variables and terminal detection
//! - `fs` - File output

mod env;
mod fs;

use anyhow::Result;
use std::env as std_env;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// Whether stdout is attached to a terminal that can redraw a line in
    /// place. Counter animations are skipped otherwise.
    fn stdout_is_terminal(&self) -> bool;

    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn stdout_is_terminal(&self) -> bool {
        self.stdout_is_terminal_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }
}
