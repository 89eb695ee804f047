//! External tool invocation.
//!
//! Commands are built as discrete argument tokens and handed straight to
//! `std::process::Command`; nothing goes through a shell, so no quoting.

use std::process::Command;

/// A compiler or linker invocation: program plus ordered argument tokens.
#[derive(Clone, Debug)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Argument tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.args
    }

    /// One-line rendering for the build log.
    pub fn render(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Run the command and wait for it to exit.
    ///
    /// The exit status is not inspected: a failing compile or link does
    /// not stop the pipeline, only the tool's own output reports it. A
    /// command that cannot be spawned at all prints a warning and the
    /// pipeline likewise continues.
    pub fn run(&self) {
        println!("{}", self.render());
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        match command.status() {
            Ok(_) => {}
            Err(e) => println!("  Warning: could not run {}: {}", self.program, e),
        }
    }
}
