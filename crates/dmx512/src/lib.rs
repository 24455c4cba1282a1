//! DMX512 universe modelling and frame output
//!
//! This crate models addressable lights within a DMX512 universe and
//! reduces them to the 513-slot frame format the protocol transmits:
//!
//! - [`Colour`] - 24-bit RGB values
//! - [`light`] - the [`Light`] capability and built-in 3- and 7-slot
//!   fixtures
//! - [`Universe`] - overlap-checked light registry and frame serialisation
//! - [`driver`] - the transport contract, DMX512 timing constants, and the
//!   built-in Debug/Dummy drivers
//! - [`Interface`] - scoped binding of frames to one driver
//!
//! ## Example
//!
//! ```rust
//! use dmx512::{colour, DriverRegistry, Interface, RgbLight, Universe};
//!
//! # fn main() -> dmx512::Result<()> {
//! let mut universe = Universe::new();
//! let light = universe.add_light(Box::new(RgbLight::new(8)?))?;
//! universe
//!     .light_mut::<RgbLight>(light)
//!     .unwrap()
//!     .set_colour(colour::RED);
//!
//! let registry = DriverRegistry::with_builtins();
//! let mut interface = Interface::new(&registry, "Dummy")?;
//! interface.set_frame(&universe.serialise())?;
//! interface.send_update()?;
//! # Ok(())
//! # }
//! ```
//!
//! Hardware transports implement [`driver::Driver`] in their own crates
//! and register with a [`DriverRegistry`]; the timing invariants they must
//! honor are documented in the [`driver`] module.

/// RGB colour values and named constants
pub mod colour;
/// Transport drivers and the DMX512 timing contract
pub mod driver;
/// Error types
pub mod error;
/// Driver lifecycle and frame transmission
pub mod interface;
/// Light capability and fixture variants
pub mod light;
/// Light registry and frame serialisation
pub mod universe;

pub use colour::Colour;
pub use driver::{DebugDriver, Driver, DriverRegistry, DummyDriver};
pub use error::{DmxError, Result};
pub use interface::Interface;
pub use light::{Light, LightId, MovingHeadLight, RgbLight};
pub use universe::{Universe, FRAME_SIZE, NULL_START_CODE};
