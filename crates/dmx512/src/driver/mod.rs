//! DMX transport drivers
//!
//! A [`Driver`] consumes serialised frames and is responsible for the
//! physical DMX512 signal: break, mark-after-break, then one slot per byte
//! at 250 kbit/s. The timing constants in this module are the protocol's
//! normative constraints; a transport that cannot meet them is not a
//! conforming DMX512 driver.
//!
//! The built-in [`DebugDriver`] and [`DummyDriver`] exercise the contract
//! without hardware. Real transports (FTDI or other serial bridges) live in
//! their own crates and plug into a [`DriverRegistry`].

pub mod debug;
pub mod dummy;

pub use debug::DebugDriver;
pub use dummy::DummyDriver;

use std::collections::HashMap;
use std::time::Duration;

use crate::error::DmxError;
use crate::Result;

/// DMX512 wire speed in bits per second
pub const BAUD_RATE: u32 = 250_000;

/// Bits per slot: 1 start bit, 8 data bits (LSB first), 2 stop bits
pub const BITS_PER_SLOT: u32 = 11;

/// Time on the wire for a single slot (44 us at 250 kbit/s)
pub const SLOT_TIME: Duration = Duration::from_micros(BITS_PER_SLOT as u64 * 4);

/// Minimum break duration preceding a frame
pub const BREAK_TIME_MIN: Duration = Duration::from_micros(100);

/// Minimum mark-after-break duration
pub const MAB_TIME_MIN: Duration = Duration::from_micros(12);

/// Minimum idle period between the end of one frame and the next break
pub const IDLE_TIME_MIN: Duration = Duration::from_micros(92);

/// Maximum duration of one frame, break start to final stop bits
pub const FRAME_TIME_MAX: Duration = Duration::from_secs(1);

/// Theoretical minimum wire time for a frame of `slots` slots
///
/// Break and mark-after-break at their minimum durations, then each slot
/// back to back. A real transport will be somewhat slower.
pub fn min_frame_time(slots: usize) -> Duration {
    BREAK_TIME_MIN + MAB_TIME_MIN + SLOT_TIME * slots as u32
}

/// A DMX512 transport
///
/// Per frame the transport runs `Idle -> Break -> MarkAfterBreak ->
/// Slot(0) ... Slot(W) -> Idle`, W <= 512. Slot 0 (the start code) is
/// always transmitted; a driver may send fewer than 512 channel slots when
/// handed a partial frame.
pub trait Driver: Send {
    /// Acquire the transport
    fn open(&mut self) -> Result<()>;

    /// Transmit one frame (start code plus up to 512 channel slots)
    ///
    /// Blocks for the physical transmission, bounded by [`FRAME_TIME_MAX`].
    /// Fails rather than silently dropping bytes.
    fn send(&mut self, frame: &[u8]) -> Result<()>;

    /// Release the transport; idempotent
    fn close(&mut self) -> Result<()>;

    /// Check whether the transport is currently closed
    fn is_closed(&self) -> bool;
}

/// Factory producing a fresh driver instance
pub type DriverFactory = Box<dyn Fn() -> Box<dyn Driver> + Send + Sync>;

/// Explicit name-to-factory registry for driver selection
///
/// Owned by whoever wires up the application; there is no implicit global
/// registry. Hardware driver crates register themselves here at startup.
pub struct DriverRegistry {
    factories: HashMap<String, DriverFactory>,
}

impl DriverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Create a registry with the built-in Debug and Dummy drivers
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("Debug", || Box::new(DebugDriver::new()));
        registry.register("Dummy", || Box::new(DummyDriver::new()));
        registry
    }

    /// Register a driver factory under a name, replacing any previous entry
    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn() -> Box<dyn Driver> + Send + Sync + 'static,
    {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Instantiate a driver by name
    pub fn create(&self, name: &str) -> Result<Box<dyn Driver>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| DmxError::UnknownDriver(name.to_string()))?;
        Ok(factory())
    }

    /// Registered driver names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_frame_time() {
        // full frame: 100us break + 12us MAB + 513 * 44us
        let full = min_frame_time(513);
        assert_eq!(full, Duration::from_micros(100 + 12 + 513 * 44));
        assert!(full < Duration::from_millis(25));
        assert!(full < FRAME_TIME_MAX);
    }

    #[test]
    fn test_slot_time() {
        assert_eq!(SLOT_TIME, Duration::from_micros(44));
    }

    #[test]
    fn test_registry_builtins() {
        let registry = DriverRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["Debug", "Dummy"]);

        let mut driver = registry.create("Dummy").unwrap();
        assert!(driver.is_closed());
        driver.open().unwrap();
        assert!(!driver.is_closed());
    }

    #[test]
    fn test_registry_unknown_name() {
        let registry = DriverRegistry::with_builtins();
        let err = registry.create("FT232R").err().unwrap();
        assert!(matches!(err, DmxError::UnknownDriver(_)));
    }

    #[test]
    fn test_registry_custom_driver() {
        let mut registry = DriverRegistry::new();
        assert!(registry.names().is_empty());

        registry.register("Dummy", || Box::new(DummyDriver::new()));
        assert!(registry.create("Dummy").is_ok());
    }
}
