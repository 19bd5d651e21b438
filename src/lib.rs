pub mod coefficients;
pub mod error;
pub mod geo;
pub mod jovian;
pub mod model;
pub mod query;
pub mod synthesis;

#[cfg(test)]
mod helpers;

pub use error::FieldError;
pub use jovian::Model;
pub use model::{FieldConfig, InternalField, ModelDefinition};
pub use query::{Coordinates, FieldOutput, RtpQuery, XyzQuery};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Names of the built in models.
#[wasm_bindgen]
pub fn models() -> Vec<String> {
    Model::ALL.iter().map(|m| m.name().to_string()).collect()
}

/// Evaluates a built in model at spherical positions.
///
/// `query` is `{ r, colat, lon }` where each member is a number or an array of numbers,
/// the result is one `[Br, Btheta, Bphi]` or an array of them, in nT.
#[wasm_bindgen]
pub fn field_rtp(model: &str, query: JsValue) -> Result<JsValue, JsValue> {
    let query: RtpQuery = serde_wasm_bindgen::from_value(query)?;
    let output = model
        .parse::<Model>()
        .and_then(|m| m.field())
        .and_then(|field| field.field_rtp_query(&query))
        .map_err(to_js_error)?;

    Ok(serde_wasm_bindgen::to_value(&output)?)
}

/// Evaluates a built in model at Cartesian positions `{ x, y, z }` in planetary radii,
/// returning `[Bx, By, Bz]` in nT.
#[wasm_bindgen]
pub fn field_xyz(model: &str, query: JsValue) -> Result<JsValue, JsValue> {
    let query: XyzQuery = serde_wasm_bindgen::from_value(query)?;
    let output = model
        .parse::<Model>()
        .and_then(|m| m.field())
        .and_then(|field| field.field_xyz_query(&query))
        .map_err(to_js_error)?;

    Ok(serde_wasm_bindgen::to_value(&output)?)
}

fn to_js_error(err: FieldError) -> JsValue {
    let msg = err.to_string();
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&msg));
    JsValue::from_str(&msg)
}
