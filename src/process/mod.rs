use std::fmt;

pub mod runner;
pub mod signal;

pub use runner::{ChildResult, ProcessRunner};
pub use signal::SignalPolicy;

#[derive(Debug)]
pub enum ProcessError {
    Spawn(std::io::Error),
    Wait(std::io::Error),
    Signal(String),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Spawn(err) => write!(f, "cannot create process: {}", err),
            ProcessError::Wait(err) => write!(f, "cannot wait for child: {}", err),
            ProcessError::Signal(msg) => write!(f, "signal setup failed: {}", msg),
        }
    }
}
