use std::f64::consts::PI;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::FieldError;

// Jupiter equatorial radius in km, the unit callers give positions in by default
pub const R_JUPITER_KM: f64 = 71492.0;

/// Queries at or beyond this many planetary radii are assumed to be in the wrong unit.
pub const MAX_RADIUS: f64 = 200.0;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy)]
pub struct SphericalPoint {
    /// Radial distance in planetary radii
    pub r: f64,
    /// Colatitude in radians
    pub colat: f64,
    /// East longitude in radians
    pub lon: f64,
}

impl SphericalPoint {
    pub fn new(r: f64, colat: f64, lon: f64) -> Self {
        Self { r, colat, lon }
    }

    /// Converts a planet centered right handed Cartesian position.
    ///
    /// The longitude comes out of `atan2` and so lies in `(-pi, pi]`.
    pub fn from_cartesian(position: &Vector3<f64>) -> Self {
        let r = position.norm();
        Self {
            r,
            colat: (position.z / r).acos(),
            lon: position.y.atan2(position.x),
        }
    }

    pub fn to_cartesian(&self) -> Vector3<f64> {
        let (sin_t, cos_t) = self.colat.sin_cos();
        let (sin_p, cos_p) = self.lon.sin_cos();
        self.r * Vector3::new(sin_t * cos_p, sin_t * sin_p, cos_t)
    }
}

/// Converts a radius given in the caller's planetary radius into the model's own.
pub fn rescale_radius(r: f64, input_radius_km: f64, reference_radius_km: f64) -> f64 {
    r * input_radius_km / reference_radius_km
}

/// Rotates a `(Br, Btheta, Bphi)` vector at the given angles into `(Bx, By, Bz)`.
pub fn rtp_to_xyz(b: &Vector3<f64>, colat: f64, lon: f64) -> Vector3<f64> {
    let (sin_t, cos_t) = colat.sin_cos();
    let (sin_p, cos_p) = lon.sin_cos();
    let (br, bt, bf) = (b.x, b.y, b.z);

    Vector3::new(
        br * sin_t * cos_p + bt * cos_t * cos_p - bf * sin_p,
        br * sin_t * sin_p + bt * cos_t * sin_p + bf * cos_p,
        br * cos_t - bt * sin_t,
    )
}

/// Rejects radii outside `(0, max_radius)` planetary radii.
pub fn check_radius(r: f64, index: usize, max_radius: f64) -> Result<(), FieldError> {
    if r > 0.0 && r < max_radius {
        return Ok(());
    }
    Err(FieldError::InputRange {
        name: "r",
        value: r,
        index,
        range: "(0, max_radius) planetary radii",
        hint: "did you use km instead?",
    })
}

/// Rejects a spherical position outside the domain the models are defined on.
pub fn check_spherical(
    point: &SphericalPoint,
    index: usize,
    max_radius: f64,
) -> Result<(), FieldError> {
    check_radius(point.r, index, max_radius)?;

    if !(0.0..=PI).contains(&point.colat) {
        return Err(FieldError::InputRange {
            name: "colat",
            value: point.colat,
            index,
            range: "[0, pi] radians",
            hint: "did you use degrees instead?",
        });
    }
    if !(0.0..=2.0 * PI).contains(&point.lon) {
        return Err(FieldError::InputRange {
            name: "lon",
            value: point.lon,
            index,
            range: "[0, 2pi] radians",
            hint: "did you use degrees instead?",
        });
    }

    Ok(())
}
