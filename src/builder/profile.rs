//! The two build profiles.

/// Build profile: a fixed flag set and a dedicated output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Profile {
    Debug,
    Release,
}

impl Profile {
    /// Both profiles, in the order they are built.
    pub const ALL: [Profile; 2] = [Profile::Debug, Profile::Release];

    /// Output directory name under the project root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Profile::Debug => "debug",
            Profile::Release => "release",
        }
    }

    /// Compile flags for this profile.
    pub fn compile_flags(&self) -> &'static [&'static str] {
        match self {
            Profile::Debug => &["-O0", "-w", "-c", "-fpic", "-g"],
            Profile::Release => &["-O3", "-w", "-c", "-fpic"],
        }
    }
}
