//! No-op driver

use crate::driver::Driver;
use crate::error::DmxError;
use crate::Result;

/// Driver that accepts every frame and transmits nothing
///
/// Tracks open/close state and counts sent frames so tests and dry runs
/// can observe the interface's behavior without hardware.
#[derive(Debug)]
pub struct DummyDriver {
    closed: bool,
    frames_sent: u64,
}

impl Default for DummyDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyDriver {
    /// Create a dummy driver, initially closed
    pub fn new() -> Self {
        Self {
            closed: true,
            frames_sent: 0,
        }
    }

    /// Number of frames accepted since creation
    pub fn frames_sent(&self) -> u64 {
        self.frames_sent
    }
}

impl Driver for DummyDriver {
    fn open(&mut self) -> Result<()> {
        self.closed = false;
        Ok(())
    }

    fn send(&mut self, _frame: &[u8]) -> Result<()> {
        if self.closed {
            return Err(DmxError::Driver("send on closed driver".into()));
        }
        self.frames_sent += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
