//! Light capability and built-in fixture variants
//!
//! A [`Light`] occupies a fixed run of consecutive slots in a universe,
//! starting at its address, and encodes its current state as exactly
//! `footprint` bytes. What those bytes mean is up to each variant: DMX
//! fixtures have no standardised channel layout, so the contract is only
//! "this many bytes, starting here".

use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::{colour, error::DmxError, Colour, Result};

/// Lowest valid channel address
pub const DMX_MIN_ADDRESS: u16 = 1;
/// Highest valid channel address
pub const DMX_MAX_ADDRESS: u16 = 512;

/// Handle to a light registered in a [`Universe`](crate::Universe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LightId(pub(crate) u32);

/// A DMX light occupying `footprint` consecutive slots
pub trait Light: Send {
    /// Starting channel address (1-512)
    fn address(&self) -> u16;

    /// Number of consecutive slots occupied, starting at `address`
    fn footprint(&self) -> u16;

    /// Encode the current state as exactly `footprint` bytes in address order
    fn encode(&self) -> Vec<u8>;

    /// Last channel address covered by this light
    fn end_address(&self) -> u16 {
        self.address() + self.footprint() - 1
    }

    /// Typed access for mutation through a `Box<dyn Light>`
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Check that a light's slot range lies within the addressable space
pub fn validate_range(address: u16, footprint: u16) -> Result<()> {
    if address < DMX_MIN_ADDRESS || address > DMX_MAX_ADDRESS {
        return Err(DmxError::Validation(format!(
            "address {} out of range ({}-{})",
            address, DMX_MIN_ADDRESS, DMX_MAX_ADDRESS
        )));
    }
    if footprint == 0 {
        return Err(DmxError::Validation("footprint must be at least 1".into()));
    }
    let end = address as u32 + footprint as u32 - 1;
    if end > DMX_MAX_ADDRESS as u32 {
        return Err(DmxError::Validation(format!(
            "light at address {} spans {} slots, past channel {}",
            address, footprint, DMX_MAX_ADDRESS
        )));
    }
    Ok(())
}

/// A 3-slot RGB light
#[derive(Debug, Clone)]
pub struct RgbLight {
    address: u16,
    colour: Colour,
}

impl RgbLight {
    /// Slots occupied by this variant
    pub const FOOTPRINT: u16 = 3;

    /// Create an RGB light at the given address, initially black
    pub fn new(address: u16) -> Result<Self> {
        validate_range(address, Self::FOOTPRINT)?;
        Ok(Self {
            address,
            colour: colour::BLACK,
        })
    }

    /// Create an RGB light with an initial colour
    pub fn with_colour(address: u16, colour: Colour) -> Result<Self> {
        let mut light = Self::new(address)?;
        light.colour = colour;
        Ok(light)
    }

    /// Set the light's colour
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Get the light's current colour
    pub fn colour(&self) -> Colour {
        self.colour
    }
}

impl Light for RgbLight {
    fn address(&self) -> u16 {
        self.address
    }

    fn footprint(&self) -> u16 {
        Self::FOOTPRINT
    }

    fn encode(&self) -> Vec<u8> {
        self.colour.encode().to_vec()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A 7-slot moving-head light: RGB plus rotation and opacity
///
/// Slot layout: red, green, blue, pitch, roll, yaw, opacity.
#[derive(Debug, Clone)]
pub struct MovingHeadLight {
    address: u16,
    colour: Colour,
    rotation: (u8, u8, u8),
    opacity: u8,
}

impl MovingHeadLight {
    /// Slots occupied by this variant
    pub const FOOTPRINT: u16 = 7;

    /// Create a moving-head light: black, rotation zeroed, fully opaque
    pub fn new(address: u16) -> Result<Self> {
        validate_range(address, Self::FOOTPRINT)?;
        Ok(Self {
            address,
            colour: colour::BLACK,
            rotation: (0, 0, 0),
            opacity: 255,
        })
    }

    /// Set the light's colour
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    /// Get the light's current colour
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Set the head rotation
    pub fn set_rotation(&mut self, pitch: u8, roll: u8, yaw: u8) {
        self.rotation = (pitch, roll, yaw);
    }

    /// Get the head rotation as (pitch, roll, yaw)
    pub fn rotation(&self) -> (u8, u8, u8) {
        self.rotation
    }

    /// Set the opacity (0 = fully dimmed, 255 = fully opaque)
    pub fn set_opacity(&mut self, opacity: u8) {
        self.opacity = opacity;
    }

    /// Get the current opacity
    pub fn opacity(&self) -> u8 {
        self.opacity
    }
}

impl Light for MovingHeadLight {
    fn address(&self) -> u16 {
        self.address
    }

    fn footprint(&self) -> u16 {
        Self::FOOTPRINT
    }

    fn encode(&self) -> Vec<u8> {
        let (pitch, roll, yaw) = self.rotation;
        let mut slots = self.colour.encode().to_vec();
        slots.extend_from_slice(&[pitch, roll, yaw, self.opacity]);
        slots
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
