//! Camera actions issued against the external orbit-controls handle.
//!
//! The renderer owns the camera; the shell only pushes explicit view changes
//! (reset, showcase) and never reads camera state back.

use crate::constants::{
    DEFAULT_CAMERA_EYE, MAX_POLAR_ANGLE, MIN_POLAR_ANGLE, SHOWCASE_AZIMUTH, SHOWCASE_POLAR,
};
use glam::Vec3;

/// Handle to the rendering surface's orbit controls.
pub trait OrbitControls {
    fn reset(&mut self);
    fn set_azimuthal_angle(&mut self, radians: f32);
    fn set_polar_angle(&mut self, radians: f32);
    fn update(&mut self);
}

/// Spherical orbit angles around the target at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitAngles {
    pub azimuth: f32,
    pub polar: f32,
}

impl OrbitAngles {
    /// Angles of an eye position looking at the origin (Y up).
    pub fn from_eye(eye: Vec3) -> Self {
        let radius = eye.length().max(f32::EPSILON);
        Self {
            azimuth: eye.x.atan2(eye.z),
            polar: (eye.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn default_eye() -> Self {
        Self::from_eye(Vec3::from_array(DEFAULT_CAMERA_EYE))
    }

    /// Polar angle limited to the controls' allowed range.
    pub fn clamped(self) -> Self {
        Self {
            polar: self.polar.clamp(MIN_POLAR_ANGLE, MAX_POLAR_ANGLE),
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    Reset,
    Showcase,
}

pub fn apply_view_action(controls: &mut dyn OrbitControls, action: ViewAction) {
    match action {
        ViewAction::Reset => {
            controls.reset();
        }
        ViewAction::Showcase => {
            let angles = OrbitAngles {
                azimuth: SHOWCASE_AZIMUTH,
                polar: SHOWCASE_POLAR,
            }
            .clamped();
            controls.set_azimuthal_angle(angles.azimuth);
            controls.set_polar_angle(angles.polar);
        }
    }
    controls.update();
    log::info!("[camera] applied {:?}", action);
}
