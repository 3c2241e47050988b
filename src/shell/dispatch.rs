use std::io;

use crate::core::commands::BuiltinOutcome;
use crate::input::tokenize;
use crate::process::ChildResult;

/// Loop transition decided by one dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopAction {
    Continue,
    Exit(i32),
}

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> LoopAction;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> LoopAction {
        let tokens = tokenize(line);
        // A blank line is a true no-op, not a success: status untouched.
        if tokens.is_empty() {
            return LoopAction::Continue;
        }
        let command = &tokens[0];

        // Builtins go first and shadow the search path.
        if let Some(result) =
            self.builtins
                .dispatch(command, &tokens[1..], &self.state, &mut io::stdout())
        {
            return match result {
                Ok(BuiltinOutcome::Exit(code)) => LoopAction::Exit(code),
                Ok(BuiltinOutcome::Status(status)) => {
                    self.state.set_status(status);
                    LoopAction::Continue
                }
                Err(err) => {
                    self.report(&format!("{}: {}", self.state.prog_name(), err));
                    self.state.set_status(2);
                    LoopAction::Continue
                }
            };
        }

        let resolved = match self.resolver.resolve(command, self.state.environment()) {
            Some(path) => path,
            None => {
                self.report(&format!(
                    "{}: {}: not found",
                    self.state.prog_name(),
                    command
                ));
                self.state.set_status(127);
                // A missing command ends a batch run outright;
                // interactive sessions keep reading.
                if self.state.is_interactive() {
                    return LoopAction::Continue;
                }
                return LoopAction::Exit(127);
            }
        };

        match self.runner.run(&resolved, &tokens, self.state.environment()) {
            Ok(result) => {
                if let ChildResult::ExecFailed(err) = &result {
                    self.report(&format!(
                        "{}: {}: {}",
                        self.state.prog_name(),
                        command,
                        err
                    ));
                }
                self.state.set_status(result.status());
            }
            Err(err) => {
                // Spawn/wait trouble is the OS's, not the command's:
                // report it and keep the previous status.
                self.report(&format!("{}: {}", self.state.prog_name(), err));
            }
        }

        LoopAction::Continue
    }
}
