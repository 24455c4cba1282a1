//! Interface binding a universe's frames to a driver

use crate::driver::{Driver, DriverRegistry};
use crate::error::DmxError;
use crate::universe::FRAME_SIZE;
use crate::Result;

/// Scoped binding between a frame source and one driver
///
/// The interface opens its driver on construction and closes it exactly
/// once when dropped (or via an explicit [`close`](Interface::close)),
/// so the transport is released on every exit path. Frames are staged
/// with [`set_frame`](Interface::set_frame) and only hit the wire on
/// [`send_update`](Interface::send_update).
pub struct Interface {
    driver: Box<dyn Driver>,
    frame: [u8; FRAME_SIZE],
}

impl Interface {
    /// Resolve a driver by name from the registry and open it
    pub fn new(registry: &DriverRegistry, driver_name: &str) -> Result<Self> {
        let driver = registry.create(driver_name)?;
        tracing::info!("interface using {} driver", driver_name);
        Self::from_driver(driver)
    }

    /// Open an interface around an explicit driver instance
    pub fn from_driver(mut driver: Box<dyn Driver>) -> Result<Self> {
        driver.open()?;
        Ok(Self {
            driver,
            frame: [0u8; FRAME_SIZE],
        })
    }

    /// Stage the frame to transmit on the next update
    ///
    /// The frame must be exactly [`FRAME_SIZE`] bytes (start code plus 512
    /// channels); on a length mismatch the previously staged frame is kept.
    pub fn set_frame(&mut self, frame: &[u8]) -> Result<()> {
        if frame.len() != FRAME_SIZE {
            return Err(DmxError::Validation(format!(
                "frame is {} bytes, expected {}",
                frame.len(),
                FRAME_SIZE
            )));
        }
        self.frame.copy_from_slice(frame);
        Ok(())
    }

    /// Reset the staged frame to all zero
    pub fn clear_frame(&mut self) {
        self.frame = [0u8; FRAME_SIZE];
    }

    /// The currently staged frame
    pub fn frame(&self) -> &[u8; FRAME_SIZE] {
        &self.frame
    }

    /// Transmit the staged frame
    ///
    /// Blocks for the driver's physical transmission. Errors propagate;
    /// no retry is attempted here.
    pub fn send_update(&mut self) -> Result<()> {
        self.driver.send(&self.frame)?;
        tracing::trace!("frame sent");
        Ok(())
    }

    /// Close the interface, releasing the driver
    pub fn close(mut self) -> Result<()> {
        self.driver.close()
        // Drop still runs, but Driver::close is idempotent.
    }
}

impl Drop for Interface {
    fn drop(&mut self) {
        if !self.driver.is_closed() {
            if let Err(err) = self.driver.close() {
                tracing::warn!("driver close failed on drop: {}", err);
            }
        }
    }
}
