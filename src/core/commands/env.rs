use std::io::Write;

use super::{BuiltinOutcome, Command, CommandError};
use crate::core::state::ShellState;

/// `env`: print the shell's environment copy, one `NAME=VALUE` per line,
/// in the order the entries were received at startup.
#[derive(Clone)]
pub struct EnvCommand;

impl Default for EnvCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EnvCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &ShellState,
        out: &mut dyn Write,
    ) -> Result<BuiltinOutcome, CommandError> {
        for (name, value) in state.environment().iter() {
            writeln!(out, "{}={}", name, value)?;
        }
        Ok(BuiltinOutcome::Status(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn state_with(entries: &[(&str, &str)]) -> ShellState {
        let entries: Vec<(String, String)> = entries
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect();
        ShellState::new("capillary", Environment::from_entries(entries), false)
    }

    #[test]
    fn test_output_is_byte_exact_and_ordered() {
        let state = state_with(&[("PATH", "/bin:/usr/bin"), ("HOME", "/root"), ("EMPTY", "")]);
        let mut out = Vec::new();
        let outcome = EnvCommand::new().execute(&[], &state, &mut out).unwrap();
        assert_eq!(outcome, BuiltinOutcome::Status(0));
        assert_eq!(out, b"PATH=/bin:/usr/bin\nHOME=/root\nEMPTY=\n");
    }

    #[test]
    fn test_empty_environment_prints_nothing() {
        let state = state_with(&[]);
        let mut out = Vec::new();
        let outcome = EnvCommand::new().execute(&[], &state, &mut out).unwrap();
        assert_eq!(outcome, BuiltinOutcome::Status(0));
        assert!(out.is_empty());
    }

    #[test]
    fn test_arguments_are_ignored() {
        let state = state_with(&[("A", "1")]);
        let mut out = Vec::new();
        let args = vec!["--ignored".to_string()];
        EnvCommand::new().execute(&args, &state, &mut out).unwrap();
        assert_eq!(out, b"A=1\n");
    }
}
