//! Host platform rules.
//!
//! Resolved once at startup and threaded through the pipeline; nothing
//! re-queries the OS after that.

use anyhow::{bail, Result};

/// Compiler used for every compile step and the non-Darwin link step.
pub const COMPILER: &str = "/usr/bin/g++-4.4";

/// Host platform, as far as the link and post-link steps care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Any non-Darwin POSIX host. Links with an $ORIGIN rpath so the
    /// binary finds its shared libraries next to itself.
    Linux,
    /// macOS. Links with the default `g++` alias and copies the dylibs
    /// into the output directories instead of embedding an rpath.
    Darwin,
}

impl Platform {
    /// Detect the platform this process is running on.
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::Darwin,
            _ => Platform::Linux,
        }
    }

    /// Returns the compiler invoked for the link step.
    pub fn link_compiler(&self) -> &'static str {
        match self {
            Platform::Linux => COMPILER,
            Platform::Darwin => "g++",
        }
    }

    /// Returns the rpath argument embedded at link time, if any.
    pub fn rpath_arg(&self) -> Option<&'static str> {
        match self {
            Platform::Linux => Some("-Wl,-rpath,$ORIGIN:$ORIGIN/../../lib"),
            Platform::Darwin => None,
        }
    }

    /// Whether shared libraries are copied into the output directories
    /// after linking.
    pub fn copies_shared_libraries(&self) -> bool {
        matches!(self, Platform::Darwin)
    }

    /// Extension of shared libraries on this platform.
    pub fn shared_library_extension(&self) -> &'static str {
        match self {
            Platform::Linux => "so",
            Platform::Darwin => "dylib",
        }
    }
}

impl TryFrom<&str> for Platform {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "linux" => Ok(Platform::Linux),
            "darwin" => Ok(Platform::Darwin),
            _ => bail!("Unsupported platform: {}", s),
        }
    }
}
