use nalgebra::Vector3;
use ndarray::{Array1, Array2, ArrayView1, Zip};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    coefficients::{linear_index, prepare, PreparedTables, MAX_DEGREE},
    error::FieldError,
    geo::{
        check_radius, check_spherical, rescale_radius, rtp_to_xyz, SphericalPoint, MAX_RADIUS,
        R_JUPITER_KM,
    },
    query::{check_lengths, columns, FieldOutput, RtpQuery, XyzQuery},
    synthesis::synthesize,
};

/// A named internal field model: its truncation, raw Gauss coefficients and the planetary
/// radius those coefficients assume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelDefinition {
    pub name: String,
    pub planet: String,
    pub degree: usize,
    pub order: usize,
    /// Raw g coefficients in nT, flat layout `[0, 0, g10, g11, g20, g21, g22, ...]`.
    pub g: Vec<f64>,
    /// Raw h coefficients in nT, same layout as `g`.
    pub h: Vec<f64>,
    /// 1 planetary radius as assumed by the coefficients, in km.
    pub reference_radius_km: f64,
    pub citation: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl ModelDefinition {
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Raw `(g, h)` of degree `n` and order `m`, `None` when the table does not reach it.
    pub fn coefficient(&self, n: usize, m: usize) -> Option<(f64, f64)> {
        if n == 0 || m > n || n > self.degree.min(MAX_DEGREE) {
            return None;
        }
        let mn = linear_index(n + 1, m + 1);
        Some((*self.g.get(mn)?, *self.h.get(mn)?))
    }

    /// Normalizes the raw tables, see [`prepare`].
    pub fn prepare(&self) -> Result<PreparedTables, FieldError> {
        if !(self.reference_radius_km.is_finite() && self.reference_radius_km > 0.0) {
            return Err(FieldError::Configuration(format!(
                "model `{}`: reference radius {} km must be positive",
                self.name, self.reference_radius_km
            )));
        }
        prepare(self.degree, self.order, &self.g, &self.h).map_err(|e| e.for_model(&self.name))
    }
}

/// Caller side conventions of a field evaluation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// 1 planetary radius as the caller counts it, in km
    pub input_radius_km: f64,
    /// Exclusive upper bound on query radii, in planetary radii
    pub max_radius: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            input_radius_km: R_JUPITER_KM,
            max_radius: MAX_RADIUS,
        }
    }
}

/// A model ready to be evaluated. Tables are prepared once on construction and never change.
#[derive(Debug, Clone)]
pub struct InternalField {
    definition: ModelDefinition,
    config: FieldConfig,
    tables: PreparedTables,
}

impl InternalField {
    pub fn new(definition: ModelDefinition) -> Result<Self, FieldError> {
        Self::with_config(definition, FieldConfig::default())
    }

    pub fn with_config(
        definition: ModelDefinition,
        config: FieldConfig,
    ) -> Result<Self, FieldError> {
        if !(config.input_radius_km.is_finite() && config.input_radius_km > 0.0) {
            return Err(FieldError::Configuration(format!(
                "input radius {} km must be positive",
                config.input_radius_km
            )));
        }
        let tables = definition.prepare()?;
        debug!(
            model = %definition.name,
            degree = definition.degree,
            order = definition.order,
            reference_radius_km = definition.reference_radius_km,
            input_radius_km = config.input_radius_km,
            "internal field ready"
        );

        Ok(Self {
            definition,
            config,
            tables,
        })
    }

    pub fn definition(&self) -> &ModelDefinition {
        &self.definition
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn tables(&self) -> &PreparedTables {
        &self.tables
    }

    fn to_model_radius(&self, r: f64) -> f64 {
        rescale_radius(
            r,
            self.config.input_radius_km,
            self.definition.reference_radius_km,
        )
    }

    /// `(Br, Btheta, Bphi)` in nT at one spherical position.
    ///
    /// # Arguments
    ///
    /// * `r` - Radial distance in planetary radii, within `(0, max_radius)`.
    /// * `colat` - Colatitude in radians, within `[0, pi]`.
    /// * `lon` - East longitude in radians, within `[0, 2pi]`.
    pub fn field_rtp(&self, r: f64, colat: f64, lon: f64) -> Result<Vector3<f64>, FieldError> {
        let b = self.field_rtp_batch(
            Array1::from_elem(1, r).view(),
            Array1::from_elem(1, colat).view(),
            Array1::from_elem(1, lon).view(),
        )?;
        Ok(Vector3::new(b[[0, 0]], b[[0, 1]], b[[0, 2]]))
    }

    /// `(Bx, By, Bz)` in nT at one Cartesian position given in planetary radii.
    pub fn field_xyz(&self, x: f64, y: f64, z: f64) -> Result<Vector3<f64>, FieldError> {
        let b = self.field_xyz_batch(
            Array1::from_elem(1, x).view(),
            Array1::from_elem(1, y).view(),
            Array1::from_elem(1, z).view(),
        )?;
        Ok(Vector3::new(b[[0, 0]], b[[0, 1]], b[[0, 2]]))
    }

    /// `(Br, Btheta, Bphi)` for every position of a batch, one row per position.
    ///
    /// Every position is validated before any is evaluated, a single bad one fails the
    /// whole batch.
    pub fn field_rtp_batch(
        &self,
        r: ArrayView1<f64>,
        colat: ArrayView1<f64>,
        lon: ArrayView1<f64>,
    ) -> Result<Array2<f64>, FieldError> {
        check_lengths(["r", "colat", "lon"], [r.len(), colat.len(), lon.len()])?;
        for i in 0..r.len() {
            let point = SphericalPoint::new(r[i], colat[i], lon[i]);
            check_spherical(&point, i, self.config.max_radius)
                .inspect_err(|e| warn!(model = %self.definition.name, "{e}"))?;
        }

        let r_model = r.mapv(|r| self.to_model_radius(r));
        synthesize(&self.tables, r_model.view(), colat, lon)
    }

    /// `(Bx, By, Bz)` for every Cartesian position of a batch, one row per position.
    pub fn field_xyz_batch(
        &self,
        x: ArrayView1<f64>,
        y: ArrayView1<f64>,
        z: ArrayView1<f64>,
    ) -> Result<Array2<f64>, FieldError> {
        check_lengths(["x", "y", "z"], [x.len(), y.len(), z.len()])?;

        let n = x.len();
        let mut r = Array1::<f64>::zeros(n);
        let mut colat = Array1::<f64>::zeros(n);
        let mut lon = Array1::<f64>::zeros(n);
        for i in 0..n {
            let point = SphericalPoint::from_cartesian(&Vector3::new(x[i], y[i], z[i]));
            check_radius(point.r, i, self.config.max_radius)
                .inspect_err(|e| warn!(model = %self.definition.name, "{e}"))?;
            r[i] = self.to_model_radius(point.r);
            colat[i] = point.colat;
            lon[i] = point.lon;
        }

        let mut b = synthesize(&self.tables, r.view(), colat.view(), lon.view())?;
        Zip::from(b.rows_mut())
            .and(&colat)
            .and(&lon)
            .for_each(|mut row, &colat, &lon| {
                let xyz = rtp_to_xyz(&Vector3::new(row[0], row[1], row[2]), colat, lon);
                row[0] = xyz.x;
                row[1] = xyz.y;
                row[2] = xyz.z;
            });

        Ok(b)
    }

    /// Spherical evaluation of a query whose coordinates are all scalars or all sequences.
    pub fn field_rtp_query(&self, query: &RtpQuery) -> Result<FieldOutput, FieldError> {
        let c = columns(["r", "colat", "lon"], &query.r, &query.colat, &query.lon)?;
        let b = self.field_rtp_batch(c.a.view(), c.b.view(), c.c.view())?;
        Ok(FieldOutput::from_rows(&b, c.scalar))
    }

    /// Cartesian evaluation of a query whose coordinates are all scalars or all sequences.
    pub fn field_xyz_query(&self, query: &XyzQuery) -> Result<FieldOutput, FieldError> {
        let c = columns(["x", "y", "z"], &query.x, &query.y, &query.z)?;
        let b = self.field_xyz_batch(c.a.view(), c.b.view(), c.c.view())?;
        Ok(FieldOutput::from_rows(&b, c.scalar))
    }
}
