use std::collections::BTreeMap;
use std::io::Write;

mod env;
mod exit;

pub use env::EnvCommand;
pub use exit::ExitCommand;

use crate::core::state::ShellState;

#[derive(Debug)]
pub enum CommandError {
    IllegalNumber(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::IllegalNumber(token) => write!(f, "exit: Illegal number: {}", token),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

/// What the loop should do once a builtin has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOutcome {
    /// Keep reading; this is the iteration's status.
    Status(i32),
    /// Terminate the shell with this exit code.
    Exit(i32),
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &ShellState,
        out: &mut dyn Write,
    ) -> Result<BuiltinOutcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Exit(ExitCommand),
    Env(EnvCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &ShellState,
        out: &mut dyn Write,
    ) -> Result<BuiltinOutcome, CommandError> {
        match self {
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Env(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Builtins run in-process and are consulted before the search path, so a
/// registered name shadows any same-named executable.
#[derive(Clone)]
pub struct BuiltinRegistry {
    commands: BTreeMap<String, CommandType>,
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("env".to_string(), CommandType::Env(EnvCommand::new()));
        BuiltinRegistry { commands }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Run `name` if the shell implements it. `args` are the words after
    /// the command itself. `None` means the caller should fall through to
    /// path resolution.
    pub fn dispatch(
        &self,
        name: &str,
        args: &[String],
        state: &ShellState,
        out: &mut dyn Write,
    ) -> Option<Result<BuiltinOutcome, CommandError>> {
        self.commands.get(name).map(|cmd| cmd.execute(args, state, out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn test_state(last_status: i32) -> ShellState {
        let mut state = ShellState::new("capillary", Environment::from_entries(Vec::new()), false);
        state.set_status(last_status);
        state
    }

    #[test]
    fn test_builtin_detection() {
        let registry = BuiltinRegistry::new();
        assert!(registry.is_builtin("exit"));
        assert!(registry.is_builtin("env"));
        assert!(!registry.is_builtin("ls"));
        assert!(!registry.is_builtin(""));
    }

    #[test]
    fn test_dispatch_declines_non_builtins() {
        let registry = BuiltinRegistry::new();
        let mut out = Vec::new();
        assert!(registry
            .dispatch("ls", &[], &test_state(0), &mut out)
            .is_none());
        assert!(out.is_empty());
    }

    #[test]
    fn test_bare_exit_carries_last_status() {
        let registry = BuiltinRegistry::new();
        let mut out = Vec::new();
        let result = registry.dispatch("exit", &[], &test_state(3), &mut out);
        assert!(matches!(result, Some(Ok(BuiltinOutcome::Exit(3)))));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::IllegalNumber("abc".to_string());
        assert_eq!(err.to_string(), "exit: Illegal number: abc");
    }
}
