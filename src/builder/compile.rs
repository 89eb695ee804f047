//! Compile phase: one compiler invocation per source file per profile.

use anyhow::Result;

use crate::builder::command::ToolCommand;
use crate::builder::layout::Layout;
use crate::builder::platform::COMPILER;
use crate::builder::profile::Profile;
use crate::builder::sources;

/// Build the compile command for one source file. Pure; no side effect.
pub fn compile_command(layout: &Layout, profile: Profile, cpp_file: &str) -> ToolCommand {
    let mut cmd = ToolCommand::new(COMPILER);
    for include in layout.include_paths() {
        cmd = cmd.arg(format!("-I{}", include.display()));
    }
    cmd.args(profile.compile_flags().iter().copied())
        .arg(format!(
            "-o{}",
            layout.output_dir(profile).join(sources::object_name(cpp_file)).display()
        ))
        .arg(layout.source_dir().join(cpp_file).display().to_string())
}

/// Compile every source file for one profile.
pub fn run(layout: &Layout, profile: Profile, cpp_files: &[String]) -> Result<()> {
    println!("=== Compiling {} ===", profile.dir_name());
    for cpp_file in cpp_files {
        compile_command(layout, profile, cpp_file).run();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn layout() -> (TempDir, Layout) {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("LogicDriver");
        std::fs::create_dir(&root).unwrap();
        let layout = Layout::resolve(&root).unwrap();
        (tmp, layout)
    }

    #[test]
    fn test_compile_command_targets_profile_dir() {
        let (_tmp, layout) = layout();

        let debug = compile_command(&layout, Profile::Debug, "a.cpp");
        let release = compile_command(&layout, Profile::Release, "a.cpp");

        assert!(debug.tokens().iter().any(|t| t.starts_with("-o") && t.ends_with("debug/a.o")));
        assert!(release.tokens().iter().any(|t| t.starts_with("-o") && t.ends_with("release/a.o")));
    }

    #[test]
    fn test_compile_command_shape() {
        let (_tmp, layout) = layout();
        let cmd = compile_command(&layout, Profile::Debug, "driver.cpp");
        let tokens = cmd.tokens();

        // include path first, then flags, then -o, then the input
        assert!(tokens[0].starts_with("-I"));
        assert!(tokens[0].ends_with("include"));
        for flag in Profile::Debug.compile_flags() {
            assert!(tokens.contains(&(*flag).to_string()));
        }
        assert!(tokens.last().unwrap().ends_with("source/driver.cpp"));
    }

    #[test]
    fn test_one_command_per_source_per_profile() {
        let (_tmp, layout) = layout();
        let cpp_files = ["a.cpp".to_string(), "b.cpp".to_string()];

        let mut targets = Vec::new();
        for profile in Profile::ALL {
            for cpp_file in &cpp_files {
                let cmd = compile_command(&layout, profile, cpp_file);
                let output = cmd
                    .tokens()
                    .iter()
                    .find(|t| t.starts_with("-o"))
                    .unwrap()
                    .clone();
                targets.push(output);
            }
        }

        assert_eq!(targets.len(), 4);
        for suffix in ["debug/a.o", "debug/b.o", "release/a.o", "release/b.o"] {
            assert!(targets.iter().any(|t| t.ends_with(suffix)), "missing {suffix}");
        }
    }
}
