//! Project path resolution.
//!
//! All paths derive from the project root, passed explicitly everywhere;
//! the process working directory is never changed.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::builder::profile::Profile;

/// Resolved project layout.
///
/// The driver SDK layout is fixed: sources in `source/` under the root,
/// headers and prebuilt libraries in `../include` and `../lib` beside it.
#[derive(Debug)]
pub struct Layout {
    root: PathBuf,
    project_name: String,
}

impl Layout {
    /// Resolve the layout from a project root directory.
    ///
    /// The project name is the base name of the canonicalized root, so
    /// the linked binary is named after the checkout directory.
    pub fn resolve(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("Project root not found: {}", root.display()))?;
        let project_name = root
            .file_name()
            .with_context(|| format!("Project root has no directory name: {}", root.display()))?
            .to_str()
            .with_context(|| format!("Project root name is not valid UTF-8: {}", root.display()))?
            .to_string();
        Ok(Self { root, project_name })
    }

    /// Name of the linked executable in each output directory.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Directory holding the `.cpp` inputs.
    pub fn source_dir(&self) -> PathBuf {
        self.root.join("source")
    }

    /// SDK header search paths.
    pub fn include_paths(&self) -> Vec<PathBuf> {
        vec![self.root.join("../include")]
    }

    /// SDK library search paths.
    pub fn link_paths(&self) -> Vec<PathBuf> {
        vec![self.root.join("../lib")]
    }

    /// Directory the shared libraries are copied from on macOS.
    pub fn lib_dir(&self) -> PathBuf {
        self.root.join("../lib")
    }

    /// Output directory for a profile.
    pub fn output_dir(&self, profile: Profile) -> PathBuf {
        self.root.join(profile.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_name_is_root_base_name() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("MyAnalyzer");
        std::fs::create_dir(&root).unwrap();

        let layout = Layout::resolve(&root).unwrap();
        assert_eq!(layout.project_name(), "MyAnalyzer");
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let err = Layout::resolve(Path::new("/no/such/project")).unwrap_err();
        assert!(err.to_string().contains("/no/such/project"));
    }

    #[test]
    fn test_output_dirs_under_root() {
        let tmp = TempDir::new().unwrap();
        let layout = Layout::resolve(tmp.path()).unwrap();

        assert!(layout.output_dir(Profile::Debug).ends_with("debug"));
        assert!(layout.output_dir(Profile::Release).ends_with("release"));
        assert!(layout.source_dir().starts_with(layout.output_dir(Profile::Debug).parent().unwrap()));
    }
}
