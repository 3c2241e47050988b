use crate::core::env::Environment;

/// Process-wide shell state: one instance, built at startup, dropped when
/// the loop returns. The status field is the only thing that changes
/// after construction, once per dispatched line.
pub struct ShellState {
    prog_name: String,
    environment: Environment,
    interactive: bool,
    last_status: i32,
}

impl ShellState {
    pub fn new(prog_name: &str, environment: Environment, interactive: bool) -> Self {
        ShellState {
            prog_name: prog_name.to_string(),
            environment,
            interactive,
            last_status: 0,
        }
    }

    /// Name the shell was invoked as; prefixes every diagnostic.
    pub fn prog_name(&self) -> &str {
        &self.prog_name
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn last_status(&self) -> i32 {
        self.last_status
    }

    pub fn set_status(&mut self, status: i32) {
        self.last_status = status;
    }
}
