//! Debug driver: logs frames instead of transmitting them

use std::time::Instant;

use crate::driver::{min_frame_time, Driver, IDLE_TIME_MIN};
use crate::error::DmxError;
use crate::Result;

/// Driver that dumps each frame through `tracing` and estimates the
/// refresh rate the caller is achieving
///
/// Useful for developing frame generation without hardware, and for
/// spotting callers that pump frames faster than the protocol's idle
/// minimum would allow on a real wire.
#[derive(Debug)]
pub struct DebugDriver {
    closed: bool,
    last_send: Option<Instant>,
    smoothed_hz: Option<f64>,
}

impl Default for DebugDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugDriver {
    /// Create a debug driver, initially closed
    pub fn new() -> Self {
        Self {
            closed: true,
            last_send: None,
            smoothed_hz: None,
        }
    }

    /// Refresh-rate estimate in Hz, once two frames have been sent
    pub fn refresh_estimate(&self) -> Option<f64> {
        self.smoothed_hz
    }

    fn log_frame(frame: &[u8]) {
        let used = frame.iter().rposition(|&slot| slot != 0).unwrap_or(0);
        tracing::debug!("frame: start code {:#04x}, {} slots", frame[0], frame.len());
        for (row, chunk) in frame[..=used].chunks(16).enumerate() {
            let hex: Vec<String> = chunk.iter().map(|slot| format!("{:02x}", slot)).collect();
            tracing::debug!("{:03} | {}", row * 16, hex.join(" "));
        }
    }

    fn update_estimate(&mut self, now: Instant, slots: usize) {
        let Some(last) = self.last_send.replace(now) else {
            tracing::debug!("no refresh estimate on first frame");
            return;
        };
        let elapsed = now.duration_since(last);

        // gap the wire would have left between this frame and the last
        let wire_time = min_frame_time(slots);
        if elapsed < wire_time + IDLE_TIME_MIN {
            tracing::warn!(
                "frames {:?} apart, below the {:?} wire time plus {:?} idle minimum",
                elapsed,
                wire_time,
                IDLE_TIME_MIN
            );
        }

        let hz = 1.0 / elapsed.as_secs_f64();
        let smoothed = match self.smoothed_hz {
            Some(previous) => (previous + hz) / 2.0,
            None => hz,
        };
        self.smoothed_hz = Some(smoothed);
        tracing::debug!("refresh estimate {:.3} Hz", smoothed);
    }
}

impl Driver for DebugDriver {
    fn open(&mut self) -> Result<()> {
        tracing::info!("debug driver opened");
        self.closed = false;
        Ok(())
    }

    fn send(&mut self, frame: &[u8]) -> Result<()> {
        if self.closed {
            return Err(DmxError::Driver("send on closed driver".into()));
        }
        if frame.is_empty() {
            return Err(DmxError::Driver("frame missing its start code slot".into()));
        }
        Self::log_frame(frame);
        self.update_estimate(Instant::now(), frame.len());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if !self.closed {
            tracing::info!("debug driver closed");
        }
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_needs_two_frames() {
        let mut driver = DebugDriver::new();
        driver.open().unwrap();

        driver.send(&[0u8; 513]).unwrap();
        assert!(driver.refresh_estimate().is_none());

        driver.send(&[0u8; 513]).unwrap();
        assert!(driver.refresh_estimate().is_some());
    }

    #[test]
    fn test_send_after_close_fails() {
        let mut driver = DebugDriver::new();
        driver.open().unwrap();
        driver.close().unwrap();
        assert!(driver.send(&[0u8; 513]).is_err());
    }

    #[test]
    fn test_default_starts_closed() {
        let mut driver = DebugDriver::default();
        assert!(driver.is_closed());
        assert!(driver.send(&[0u8; 513]).is_err());
    }
}
