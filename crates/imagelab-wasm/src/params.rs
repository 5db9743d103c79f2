//! Mode selection and parameter schema bindings.
//!
//! Requests are plain JS objects tagged by `mode`:
//!
//! ```typescript
//! const modes = mode_keys();            // ["threshold", "power_law", ...]
//! const schema = param_schema("gaussian_blur");
//! // [{ name: "kernel_size", kind: "int", min: 1, max: 15, default: 3, step: 2 }]
//! const request = default_request("salt_and_pepper");
//! request.apply_median = true;
//! ```

use crate::types::js_error;
use imagelab_core::params::{Mode, SaltAndPepperParams, Transform};
use wasm_bindgen::prelude::*;

/// Stable keys of all modes, in menu order.
#[wasm_bindgen]
pub fn mode_keys() -> Vec<String> {
    Mode::ALL.iter().map(|m| m.key().to_string()).collect()
}

/// Menu labels of all modes, in the same order as [`mode_keys`].
#[wasm_bindgen]
pub fn mode_labels() -> Vec<String> {
    Mode::ALL.iter().map(|m| m.label().to_string()).collect()
}

/// Parameter schema for `mode` (key or label) as an array of objects.
#[wasm_bindgen]
pub fn param_schema(mode: &str) -> Result<JsValue, JsValue> {
    let mode: Mode = mode.parse().map_err(js_error)?;
    serde_wasm_bindgen::to_value(&mode.param_specs()).map_err(js_error)
}

/// Request object for `mode` with default parameters.
///
/// Salt-and-pepper requests get a fresh random seed so repeated runs show
/// different noise.
#[wasm_bindgen]
pub fn default_request(mode: &str) -> Result<JsValue, JsValue> {
    let mode: Mode = mode.parse().map_err(js_error)?;
    serde_wasm_bindgen::to_value(&seeded_default(mode)).map_err(js_error)
}

pub(crate) fn seeded_default(mode: Mode) -> Transform {
    match mode.default_transform() {
        Transform::SaltAndPepper(p) => Transform::SaltAndPepper(SaltAndPepperParams {
            seed: fresh_seed(),
            ..p
        }),
        other => other,
    }
}

/// Random seed that survives the trip through a JS number.
#[cfg(target_arch = "wasm32")]
fn fresh_seed() -> u64 {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    (js_sys::Math::random() * MAX_SAFE_INTEGER) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn fresh_seed() -> u64 {
    SaltAndPepperParams::default().seed
}
