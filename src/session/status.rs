//! Status line shown under the note list.

use std::fmt;

/// Note counts for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub total: usize,
    pub shown: usize,
}

impl Status {
    pub fn new(total: usize, shown: usize) -> Self {
        Self { total, shown }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} note(s)", self.total)?;
        if self.shown != self.total {
            write!(f, ", {} shown", self.shown)?;
        }
        Ok(())
    }
}
