use std::any::Any;

use dmx512::{
    Colour, DmxError, DriverRegistry, Interface, Light, MovingHeadLight, RgbLight, Universe,
    FRAME_SIZE,
};
use proptest::prelude::*;

/// Fixed-output light covering 10 slots, for exercising the registry with
/// a fixture type the crate does not ship
struct StripLight {
    address: u16,
    levels: [u8; 10],
}

impl StripLight {
    fn new(address: u16) -> Self {
        Self {
            address,
            levels: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10],
        }
    }
}

impl Light for StripLight {
    fn address(&self) -> u16 {
        self.address
    }

    fn footprint(&self) -> u16 {
        10
    }

    fn encode(&self) -> Vec<u8> {
        self.levels.to_vec()
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_empty_universe_serialises_to_zero() {
    let universe = Universe::new();
    let frame = universe.serialise();

    assert_eq!(frame.len(), FRAME_SIZE);
    assert_eq!(frame[0], 0x00);
    assert!(frame[1..].iter().all(|&slot| slot == 0));
}

#[test]
fn test_custom_light_serialises_at_address() {
    let mut universe = Universe::new();
    universe.add_light(Box::new(StripLight::new(1))).unwrap();

    let frame = universe.serialise();
    assert_eq!(&frame[1..11], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert!(frame[11..].iter().all(|&slot| slot == 0));
}

#[test]
fn test_custom_light_partial_serialise() {
    let mut universe = Universe::new();
    universe.add_light(Box::new(StripLight::new(1))).unwrap();

    let partial = universe.serialise_partial();
    assert_eq!(partial, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_high_address_must_fit() {
    // 503 + 10 slots covers exactly 503-512
    let mut universe = Universe::new();
    universe.add_light(Box::new(StripLight::new(503))).unwrap();
    let frame = universe.serialise();
    assert_eq!(frame[512], 10);

    // 511 + 10 slots would wrap past the end of the universe
    let err = universe
        .add_light(Box::new(StripLight::new(511)))
        .unwrap_err();
    assert!(matches!(err, DmxError::Validation(_)));
}

#[test]
fn test_mixed_fixture_types() {
    let mut universe = Universe::new();
    let strip = universe.add_light(Box::new(StripLight::new(1))).unwrap();
    let head = universe
        .add_light(Box::new(MovingHeadLight::new(100).unwrap()))
        .unwrap();
    let par = universe
        .add_light(Box::new(
            RgbLight::with_colour(510, Colour::new(255, 0, 255)).unwrap(),
        ))
        .unwrap();

    universe
        .light_mut::<MovingHeadLight>(head)
        .unwrap()
        .set_rotation(40, 50, 60);

    let frame = universe.serialise();
    assert_eq!(frame[1], 1);
    assert_eq!(&frame[103..107], &[40, 50, 60, 255]);
    assert_eq!(&frame[510..513], &[255, 0, 255]);

    universe.remove_light(strip).unwrap();
    universe.remove_light(head).unwrap();
    universe.remove_light(par).unwrap();
    assert!(universe.is_empty());
}

#[test]
fn test_overlap_leaves_universe_unchanged() {
    let mut universe = Universe::new();
    universe.add_light(Box::new(StripLight::new(5))).unwrap();
    let before = universe.serialise();

    let err = universe
        .add_light(Box::new(RgbLight::new(14).unwrap()))
        .unwrap_err();
    assert!(matches!(err, DmxError::Conflict(_)));
    assert_eq!(universe.len(), 1);
    assert_eq!(universe.serialise(), before);
}

#[test]
fn test_frame_reaches_driver_through_interface() {
    let mut universe = Universe::new();
    let light = universe
        .add_light(Box::new(RgbLight::new(8).unwrap()))
        .unwrap();
    universe
        .light_mut::<RgbLight>(light)
        .unwrap()
        .set_colour(Colour::new(255, 0, 255));

    let registry = DriverRegistry::with_builtins();
    let mut interface = Interface::new(&registry, "Dummy").unwrap();
    interface.set_frame(&universe.serialise()).unwrap();
    interface.send_update().unwrap();

    assert_eq!(interface.frame()[8], 255);
    assert_eq!(interface.frame()[9], 0);
    assert_eq!(interface.frame()[10], 255);
}

proptest! {
    #[test]
    fn prop_rgb_light_round_trip(
        address in 1u16..=510,
        red: u8,
        green: u8,
        blue: u8,
    ) {
        let mut universe = Universe::new();
        let colour = Colour::new(red, green, blue);
        universe
            .add_light(Box::new(RgbLight::with_colour(address, colour).unwrap()))
            .unwrap();

        let frame = universe.serialise();
        let start = address as usize;
        prop_assert_eq!(&frame[start..start + 3], &[red, green, blue]);
        for (slot, &value) in frame.iter().enumerate() {
            if !(start..start + 3).contains(&slot) {
                prop_assert_eq!(value, 0);
            }
        }
    }
}
