//! DMX universe: light registry and frame serialisation

use std::collections::BTreeMap;

use crate::error::DmxError;
use crate::light::{validate_range, Light, LightId};
use crate::Result;

/// Serialised frame length: start code plus 512 channel slots
pub const FRAME_SIZE: usize = 513;

/// Start code for standard lighting data frames (slot 0)
pub const NULL_START_CODE: u8 = 0x00;

/// A DMX universe of up to 512 addressable channels
///
/// The universe owns its registered lights and guarantees that no two
/// lights' slot ranges overlap, so serialisation is never ambiguous.
pub struct Universe {
    number: u16,
    lights: BTreeMap<LightId, Box<dyn Light>>,
    next_id: u32,
}

impl Universe {
    /// Create universe number 1
    pub fn new() -> Self {
        Self::with_number(1)
    }

    /// Create a universe with an explicit number
    pub fn with_number(number: u16) -> Self {
        Self {
            number,
            lights: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Get the universe number
    pub fn number(&self) -> u16 {
        self.number
    }

    /// Register a light, rejecting out-of-range or overlapping slot ranges
    ///
    /// On success the universe takes ownership and returns a handle for
    /// later access. On failure the registry is unchanged.
    pub fn add_light(&mut self, light: Box<dyn Light>) -> Result<LightId> {
        validate_range(light.address(), light.footprint())?;

        let (start, end) = (light.address(), light.end_address());
        for (id, existing) in &self.lights {
            if start <= existing.end_address() && existing.address() <= end {
                return Err(DmxError::Conflict(format!(
                    "slots {}-{} overlap light {:?} at {}-{}",
                    start,
                    end,
                    id,
                    existing.address(),
                    existing.end_address()
                )));
            }
        }

        let id = LightId(self.next_id);
        self.next_id += 1;
        tracing::debug!(
            universe = self.number,
            "registered light {:?} at slots {}-{}",
            id,
            start,
            end
        );
        self.lights.insert(id, light);
        Ok(id)
    }

    /// Remove a light, returning ownership of it
    ///
    /// An unknown id is an error rather than a no-op: handles are minted
    /// by this universe, so a miss indicates a caller bug.
    pub fn remove_light(&mut self, id: LightId) -> Result<Box<dyn Light>> {
        self.lights
            .remove(&id)
            .ok_or_else(|| DmxError::NotFound(format!("{:?} not registered", id)))
    }

    /// Check whether a light is registered
    pub fn has_light(&self, id: LightId) -> bool {
        self.lights.contains_key(&id)
    }

    /// Get a registered light
    pub fn light(&self, id: LightId) -> Option<&dyn Light> {
        self.lights.get(&id).map(|light| light.as_ref())
    }

    /// Get mutable, typed access to a registered light
    ///
    /// Returns `None` if the id is unknown or the light is not an `L`.
    pub fn light_mut<L: Light + 'static>(&mut self, id: LightId) -> Option<&mut L> {
        self.lights
            .get_mut(&id)
            .and_then(|light| light.as_any_mut().downcast_mut::<L>())
    }

    /// Iterate over registered lights in handle order
    pub fn lights(&self) -> impl Iterator<Item = (LightId, &dyn Light)> {
        self.lights.iter().map(|(id, light)| (*id, light.as_ref()))
    }

    /// Number of registered lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// Check whether no lights are registered
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Highest channel owned by any registered light (0 when empty)
    pub fn highest_channel(&self) -> u16 {
        self.lights
            .values()
            .map(|light| light.end_address())
            .max()
            .unwrap_or(0)
    }

    /// Serialise the universe into a full frame
    ///
    /// Slot 0 is the start code; slots 1-512 carry each light's encoded
    /// state at its address, 0x00 for unowned channels.
    pub fn serialise(&self) -> [u8; FRAME_SIZE] {
        let mut frame = [0u8; FRAME_SIZE];
        frame[0] = NULL_START_CODE;
        for light in self.lights.values() {
            let start = light.address() as usize;
            let slots = light.encode();
            debug_assert_eq!(slots.len(), light.footprint() as usize);
            frame[start..start + slots.len()].copy_from_slice(&slots);
        }
        frame
    }

    /// Serialise the universe, truncated after the highest owned channel
    ///
    /// The start code is always present; an empty universe yields a single
    /// byte. Lets a driver transmit fewer than 512 channel slots when the
    /// tail of the universe is unused.
    pub fn serialise_partial(&self) -> Vec<u8> {
        let used = self.highest_channel() as usize;
        self.serialise()[..=used].to_vec()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new()
    }
}
