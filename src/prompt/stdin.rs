//! Interactive prompt
//!
//! Blocking stdin strategy for interactive runs. An empty reply means
//! "overwrite" wherever overwriting is on offer; otherwise the reply is
//! taken as the replacement filename.

use std::io::{self, BufRead, Write};

use crate::error::ResolveError;
use crate::prompt::strategy::{Conflict, ConflictKind, ConflictStrategy, Resolution};

/// Asks the operator on stdin/stdout, blocking until a line arrives
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    fn read_reply(&self, prompt: &str) -> Result<String, ResolveError> {
        let mut stdout = io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(ResolveError::PromptClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl ConflictStrategy for StdinPrompt {
    fn resolve(&mut self, conflict: &Conflict<'_>) -> Result<Resolution, ResolveError> {
        match conflict.kind {
            ConflictKind::RenameOnly => {
                let reply = self.read_reply(&format!(
                    "\nFile {} already exists. Enter a different name: ",
                    conflict.path.display()
                ))?;
                Ok(Resolution::Rename(reply))
            }
            ConflictKind::File => {
                let reply = self.read_reply(&format!(
                    "\nFile {} already exists. Enter a different name or press enter to overwrite file: ",
                    conflict.path.display()
                ))?;
                if reply.is_empty() {
                    Ok(Resolution::Overwrite)
                } else {
                    Ok(Resolution::Rename(reply))
                }
            }
            ConflictKind::Prefix => {
                let mut stdout = io::stdout();
                writeln!(
                    stdout,
                    "The following files already exist for base path {}*:",
                    conflict.path.display()
                )?;
                for file in conflict.existing {
                    writeln!(stdout, "  {}", file.display())?;
                }
                stdout.flush()?;

                let reply = self.read_reply(
                    "\nEnter a different name or press enter to overwrite files: ",
                )?;
                if reply.is_empty() {
                    Ok(Resolution::Overwrite)
                } else {
                    Ok(Resolution::Rename(reply))
                }
            }
        }
    }
}
