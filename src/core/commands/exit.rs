use std::io::Write;

use super::{BuiltinOutcome, Command, CommandError};
use crate::core::state::ShellState;

/// `exit [n]`: end the loop with `n`, or with the last recorded status
/// when no argument is given.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        state: &ShellState,
        _out: &mut dyn Write,
    ) -> Result<BuiltinOutcome, CommandError> {
        match args.first() {
            None => Ok(BuiltinOutcome::Exit(state.last_status())),
            // Base-10 with an optional sign and nothing trailing. A value
            // that does not fit the status integer is reported the same
            // way as garbage; the OS applies the modulo-256 truncation to
            // whatever we hand it.
            Some(token) => match token.parse::<i32>() {
                Ok(code) => Ok(BuiltinOutcome::Exit(code)),
                Err(_) => Err(CommandError::IllegalNumber(token.clone())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;

    fn state_with_status(status: i32) -> ShellState {
        let mut state = ShellState::new("capillary", Environment::from_entries(Vec::new()), false);
        state.set_status(status);
        state
    }

    fn run(args: &[&str], state: &ShellState) -> Result<BuiltinOutcome, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        ExitCommand::new().execute(&args, state, &mut Vec::new())
    }

    #[test]
    fn test_no_argument_uses_last_status() {
        let state = state_with_status(3);
        assert!(matches!(run(&[], &state), Ok(BuiltinOutcome::Exit(3))));
    }

    #[test]
    fn test_numeric_argument_wins() {
        let state = state_with_status(3);
        assert!(matches!(run(&["7"], &state), Ok(BuiltinOutcome::Exit(7))));
        assert!(matches!(run(&["0"], &state), Ok(BuiltinOutcome::Exit(0))));
        assert!(matches!(run(&["-1"], &state), Ok(BuiltinOutcome::Exit(-1))));
    }

    #[test]
    fn test_garbage_is_an_illegal_number() {
        let state = state_with_status(0);
        assert!(matches!(
            run(&["abc"], &state),
            Err(CommandError::IllegalNumber(_))
        ));
        // Trailing non-digits count as garbage, not as a prefix parse.
        assert!(matches!(
            run(&["12abc"], &state),
            Err(CommandError::IllegalNumber(_))
        ));
        assert!(matches!(
            run(&[""], &state),
            Err(CommandError::IllegalNumber(_))
        ));
    }

    #[test]
    fn test_overflow_is_an_illegal_number() {
        let state = state_with_status(0);
        assert!(matches!(
            run(&["99999999999999999999"], &state),
            Err(CommandError::IllegalNumber(_))
        ));
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let state = state_with_status(0);
        assert!(matches!(run(&["5", "9"], &state), Ok(BuiltinOutcome::Exit(5))));
    }
}
