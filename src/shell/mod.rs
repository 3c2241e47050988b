use std::env;
use std::io::{self, IsTerminal};

mod dispatch;

use crate::{
    core::{commands::BuiltinRegistry, env::Environment, state::ShellState},
    error::ShellError,
    highlight::DiagnosticHighlighter,
    input::{LineReader, ReadOutcome},
    path::PathResolver,
    process::{ProcessRunner, SignalPolicy},
};

use dispatch::{CommandHandler, LoopAction};

pub struct Shell {
    pub(crate) reader: LineReader,
    pub(crate) state: ShellState,
    pub(crate) builtins: BuiltinRegistry,
    pub(crate) resolver: PathResolver,
    pub(crate) runner: ProcessRunner,
    pub(crate) highlighter: DiagnosticHighlighter,
    pub(crate) prompt_dir: String,
}

impl Shell {
    pub fn new(prog_name: &str) -> Result<Self, ShellError> {
        let interactive = io::stdin().is_terminal();
        let state = ShellState::new(prog_name, Environment::from_process(), interactive);

        // Batch mode keeps inherited signal dispositions and never
        // touches the terminal.
        let reader = if interactive {
            SignalPolicy::install_interactive()?;
            LineReader::interactive()?
        } else {
            LineReader::batch()
        };

        Ok(Shell {
            reader,
            state,
            builtins: BuiltinRegistry::new(),
            resolver: PathResolver::new(),
            runner: ProcessRunner::new(),
            highlighter: DiagnosticHighlighter::new(),
            prompt_dir: prompt_directory()?,
        })
    }

    /// Drive the loop until `exit` or end-of-input. The returned value is
    /// the process's exit code.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = format!("{} $ ", self.prompt_dir);
            match self.reader.read(&prompt)? {
                ReadOutcome::Line(line) => match self.execute_line(&line) {
                    LoopAction::Continue => {}
                    LoopAction::Exit(code) => return Ok(code),
                },
                ReadOutcome::Interrupted => {
                    // Close the interrupted read; the next iteration
                    // redraws the prompt.
                    println!();
                }
                ReadOutcome::Eof => {
                    if self.state.is_interactive() {
                        println!();
                    }
                    return Ok(self.state.last_status());
                }
            }
        }
    }

    pub(crate) fn report(&self, message: &str) {
        eprintln!("{}", self.highlighter.error(message));
    }
}

// Working directory for the prompt, with the home prefix folded to `~`.
// Captured once: nothing in scope changes the working directory.
fn prompt_directory() -> Result<String, ShellError> {
    let current_dir = env::current_dir()?;
    if let Some(home) = dirs::home_dir() {
        if let Ok(rest) = current_dir.strip_prefix(&home) {
            if rest.as_os_str().is_empty() {
                return Ok("~".to_string());
            }
            return Ok(format!("~/{}", rest.display()));
        }
    }
    Ok(current_dir.to_string_lossy().to_string())
}
