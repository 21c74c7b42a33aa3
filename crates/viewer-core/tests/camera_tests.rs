// Host-side tests for view actions against a recording orbit-controls handle.

use viewer_core::constants::{MAX_POLAR_ANGLE, MIN_POLAR_ANGLE, SHOWCASE_AZIMUTH, SHOWCASE_POLAR};
use viewer_core::*;

#[derive(Debug, PartialEq)]
enum Call {
    Reset,
    Azimuth(f32),
    Polar(f32),
    Update,
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl OrbitControls for Recorder {
    fn reset(&mut self) {
        self.calls.push(Call::Reset);
    }
    fn set_azimuthal_angle(&mut self, radians: f32) {
        self.calls.push(Call::Azimuth(radians));
    }
    fn set_polar_angle(&mut self, radians: f32) {
        self.calls.push(Call::Polar(radians));
    }
    fn update(&mut self) {
        self.calls.push(Call::Update);
    }
}

#[test]
fn reset_then_update() {
    let mut controls = Recorder::default();
    apply_view_action(&mut controls, ViewAction::Reset);
    assert_eq!(controls.calls, vec![Call::Reset, Call::Update]);
}

#[test]
fn showcase_sets_both_angles_then_updates() {
    let mut controls = Recorder::default();
    apply_view_action(&mut controls, ViewAction::Showcase);
    assert_eq!(
        controls.calls,
        vec![
            Call::Azimuth(SHOWCASE_AZIMUTH),
            Call::Polar(SHOWCASE_POLAR),
            Call::Update
        ]
    );
}

#[test]
fn default_eye_angles() {
    let angles = OrbitAngles::default_eye();
    assert!((angles.azimuth - std::f32::consts::FRAC_PI_4).abs() < 1e-5);
    // Eye at (5, 5, 5): polar = acos(1/sqrt(3)).
    assert!((angles.polar - (1.0f32 / 3.0f32.sqrt()).acos()).abs() < 1e-5);
}

#[test]
fn polar_clamp_respects_limits() {
    let top = OrbitAngles::from_eye(glam::Vec3::new(0.0, 10.0, 0.01)).clamped();
    assert_eq!(top.polar, MIN_POLAR_ANGLE);
    let bottom = OrbitAngles::from_eye(glam::Vec3::new(0.0, -10.0, 0.01)).clamped();
    assert_eq!(bottom.polar, MAX_POLAR_ANGLE);
}
