//! 24-bit RGB colour values

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A colour in 24-bit RGB
///
/// Each component is a `u8`, so every representable value is a valid DMX
/// slot value; no runtime range check is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Colour {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Full red
pub const RED: Colour = Colour::new(255, 0, 0);
/// Full green
pub const GREEN: Colour = Colour::new(0, 255, 0);
/// Full blue
pub const BLUE: Colour = Colour::new(0, 0, 255);
/// All components at maximum
pub const WHITE: Colour = Colour::new(255, 255, 255);
/// All components off
pub const BLACK: Colour = Colour::new(0, 0, 0);

impl Colour {
    /// Create a new colour
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Encode the colour in RGB slot order
    pub const fn encode(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Scale all components by a factor, clamped to [0.0, 1.0]
    pub fn scaled(&self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            red: (self.red as f32 * factor) as u8,
            green: (self.green as f32 * factor) as u8,
            blue: (self.blue as f32 * factor) as u8,
        }
    }
}

impl Add for Colour {
    type Output = Colour;

    /// Component-wise saturating addition
    fn add(self, other: Colour) -> Colour {
        Colour {
            red: self.red.saturating_add(other.red),
            green: self.green.saturating_add(other.green),
            blue: self.blue.saturating_add(other.blue),
        }
    }
}

impl Sub for Colour {
    type Output = Colour;

    /// Component-wise saturating subtraction
    fn sub(self, other: Colour) -> Colour {
        Colour {
            red: self.red.saturating_sub(other.red),
            green: self.green.saturating_sub(other.green),
            blue: self.blue.saturating_sub(other.blue),
        }
    }
}
