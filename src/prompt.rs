use std::io::{self, BufRead, Write};

/// Prints the `$ ` prompt and reads one line of input.
pub struct ShellPrompt {
    quiet: bool,
}

impl ShellPrompt {
    pub fn new(quiet: bool) -> Self {
        ShellPrompt { quiet }
    }

    /// Show the prompt (unless suppressed) and read the next line, with the
    /// trailing newline removed. `Ok(None)` on end of input.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        if !self.quiet {
            print!("$ ");
            io::stdout().flush()?;
        }
        let mut buf = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut buf)?;
        if bytes_read == 0 {
            // EOF (e.g. Ctrl+D)
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}
