use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// One completed blocking read.
#[derive(Debug)]
pub enum ReadOutcome {
    Line(String),
    /// The read was interrupted before a full line arrived.
    Interrupted,
    Eof,
}

/// Interactive sessions read through a rustyline editor; everything else
/// reads buffered lines straight from stdin. Only the interactive arm
/// ever writes the prompt.
pub enum LineReader {
    Interactive(DefaultEditor),
    Batch(io::BufReader<io::Stdin>),
}

impl LineReader {
    pub fn interactive() -> Result<Self, ShellError> {
        Ok(LineReader::Interactive(DefaultEditor::new()?))
    }

    pub fn batch() -> Self {
        LineReader::Batch(io::BufReader::new(io::stdin()))
    }

    pub fn read(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self {
            LineReader::Interactive(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(ReadOutcome::Line(line)),
                Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
                Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
                Err(err) => Err(err.into()),
            },
            LineReader::Batch(reader) => {
                let mut line = String::new();
                match reader.read_line(&mut line) {
                    Ok(0) => Ok(ReadOutcome::Eof),
                    Ok(_) => {
                        if line.ends_with('\n') {
                            line.pop();
                        }
                        Ok(ReadOutcome::Line(line))
                    }
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                        Ok(ReadOutcome::Interrupted)
                    }
                    Err(err) => Err(err.into()),
                }
            }
        }
    }
}
