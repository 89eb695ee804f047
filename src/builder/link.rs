//! Link phase: one linker invocation per profile.

use anyhow::Result;

use crate::builder::command::ToolCommand;
use crate::builder::layout::Layout;
use crate::builder::platform::Platform;
use crate::builder::profile::Profile;
use crate::builder::sources;

/// Libraries the driver binary links against. `-lSaleaeDevice` resolves
/// to libSaleaeDevice.so / .dylib in the SDK lib directory.
pub const LINK_DEPENDENCIES: &[&str] = &["-lSaleaeDevice"];

/// Build the link command for one profile. Pure; no side effect.
///
/// Object files appear in source-enumeration order, the same order the
/// compile phase produced them in. With zero sources the link is still
/// issued with zero objects.
pub fn link_command(
    layout: &Layout,
    platform: Platform,
    profile: Profile,
    cpp_files: &[String],
) -> ToolCommand {
    let mut cmd = ToolCommand::new(platform.link_compiler());
    if let Some(rpath) = platform.rpath_arg() {
        cmd = cmd.arg(rpath);
    }
    for link_path in layout.link_paths() {
        cmd = cmd.arg(format!("-L{}", link_path.display()));
    }
    cmd = cmd.args(LINK_DEPENDENCIES.iter().copied());
    cmd = cmd
        .arg("-o")
        .arg(layout.output_dir(profile).join(layout.project_name()).display().to_string());
    for cpp_file in cpp_files {
        cmd = cmd.arg(
            layout
                .output_dir(profile)
                .join(sources::object_name(cpp_file))
                .display()
                .to_string(),
        );
    }
    cmd
}

/// Link the binary for one profile.
pub fn run(
    layout: &Layout,
    platform: Platform,
    profile: Profile,
    cpp_files: &[String],
) -> Result<()> {
    println!("=== Linking {} ===", profile.dir_name());
    link_command(layout, platform, profile, cpp_files).run();
    Ok(())
}
