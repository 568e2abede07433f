//! ANSI terminal rendering.
use anyhow::Result;
use std::{
    io::{self, Write},
    thread,
    time::Duration,
};

/// Clears the terminal and redraws one frame per call.
///
/// Frames go to stderr; stdout is left to the caller.
pub(crate) struct AnsiRenderer {
    wait: Duration,
}

impl AnsiRenderer {
    pub(crate) fn new(wait: Duration) -> Self {
        Self { wait }
    }

    pub(crate) fn draw(&mut self, frame: &str) -> Result<()> {
        let mut err = io::stderr();
        write!(err, "{esc}[2J{esc}[1;1H{frame}", esc = 27 as char, frame = frame)?;
        writeln!(err)?;
        err.flush()?;

        if !self.wait.is_zero() {
            thread::sleep(self.wait);
        }
        Ok(())
    }
}
