use js_sys::{Function, Reflect};
use viewer_core::OrbitControls;
use wasm_bindgen::{JsCast, JsValue};

/// Orbit controls object handed over by the renderer
/// (`reset`, `setAzimuthalAngle`, `setPolarAngle`, `update`).
#[derive(Clone)]
pub struct JsOrbitControls {
    handle: JsValue,
}

impl JsOrbitControls {
    pub fn new(handle: JsValue) -> Self {
        Self { handle }
    }

    fn call(&self, name: &str, args: &[JsValue]) {
        let func = match Reflect::get(&self.handle, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
        {
            Some(f) => f,
            None => {
                log::warn!("[camera] controls have no {}()", name);
                return;
            }
        };
        let result = match args {
            [] => func.call0(&self.handle),
            [a] => func.call1(&self.handle, a),
            _ => func.apply(&self.handle, &args.iter().collect::<js_sys::Array>()),
        };
        if let Err(e) = result {
            log::warn!("[camera] {}() threw: {:?}", name, e);
        }
    }
}

impl OrbitControls for JsOrbitControls {
    fn reset(&mut self) {
        self.call("reset", &[]);
    }

    fn set_azimuthal_angle(&mut self, radians: f32) {
        self.call("setAzimuthalAngle", &[JsValue::from_f64(radians as f64)]);
    }

    fn set_polar_angle(&mut self, radians: f32) {
        self.call("setPolarAngle", &[JsValue::from_f64(radians as f64)]);
    }

    fn update(&mut self) {
        self.call("update", &[]);
    }
}
