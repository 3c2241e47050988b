use libc::{SIGQUIT, SIG_IGN};

use super::ProcessError;

/// Signal dispositions for the shell process itself.
///
/// Children never inherit these choices: the runner restores default
/// handling in the child before the program image goes in, so a Ctrl-C
/// aimed at a foreground command kills the command, not the shell.
pub struct SignalPolicy;

impl SignalPolicy {
    /// Interactive shells survive SIGINT (the pending read is cut short
    /// and the prompt comes back) and ignore SIGQUIT outright.
    ///
    /// Batch mode installs nothing; there is no prompt to redraw and the
    /// inherited default dispositions already do the right thing.
    pub fn install_interactive() -> Result<(), ProcessError> {
        ctrlc::set_handler(|| {
            // Close the interrupted line; the loop redraws the prompt.
            println!();
        })
        .map_err(|err| ProcessError::Signal(err.to_string()))?;

        unsafe {
            libc::signal(SIGQUIT, SIG_IGN);
        }
        Ok(())
    }
}
