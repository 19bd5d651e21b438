use ndarray::{s, Array1};
use tracing::debug;

use crate::error::FieldError;

/// Schmidt quasi-normalized coefficients and the Legendre recursion terms of a model,
/// truncated to the order the synthesis runs at.
///
/// All three tables use the 1-based linear index `mn = n(n-1)/2 + m` where `n` and `m`
/// are one above the physical degree and order, so index 0 and 1 are placeholders.
///
/// Only [`prepare`] builds them, so every table is long enough for `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTables {
    order: usize,
    g: Array1<f64>,
    h: Array1<f64>,
    rec: Array1<f64>,
}

impl PreparedTables {
    pub fn order(&self) -> usize {
        self.order
    }

    /// Normalized `g` coefficients in nT.
    pub fn g(&self) -> &Array1<f64> {
        &self.g
    }

    /// Normalized `h` coefficients in nT.
    pub fn h(&self) -> &Array1<f64> {
        &self.h
    }

    /// Legendre recursion terms.
    pub fn rec(&self) -> &Array1<f64> {
        &self.rec
    }

    /// Number of harmonic orders walked by the recursion, `order + 1`.
    pub fn k(&self) -> usize {
        self.order + 1
    }
}

/// Linear index of the recursion pair `(n, m)`, both one above the physical degree/order.
#[inline]
pub fn linear_index(n: usize, m: usize) -> usize {
    n * (n - 1) / 2 + m
}

/// Size of each prepared table for a given order: `k(k-1)/2 + k + 1` with `k = order + 1`.
pub fn table_len(order: usize) -> usize {
    let k = order + 1;
    k * (k - 1) / 2 + k + 1
}

/// Highest degree a model definition may declare.
pub const MAX_DEGREE: usize = 100;

/// Size the raw tables are padded to before normalization. One degree more than the
/// model's own since the recursion consumes an extra order internally.
fn padded_len(degree: usize) -> usize {
    (degree + 1) * degree / 2 + 1 + degree + 1
}

fn check_raw(degree: usize, order: usize, g_raw: &[f64], h_raw: &[f64]) -> Result<(), FieldError> {
    if degree == 0 || degree > MAX_DEGREE {
        return Err(FieldError::Configuration(format!(
            "degree {degree} must be within 1..={MAX_DEGREE}"
        )));
    }
    if order == 0 || order > degree {
        return Err(FieldError::Configuration(format!(
            "order {order} must be within 1..={degree}"
        )));
    }
    if g_raw.len() != h_raw.len() {
        return Err(FieldError::Configuration(format!(
            "g has {} coefficients but h has {}",
            g_raw.len(),
            h_raw.len()
        )));
    }
    if g_raw.len() < 2 {
        return Err(FieldError::Configuration(
            "tables must start with two placeholder slots".into(),
        ));
    }
    if let Some(i) = g_raw.iter().chain(h_raw).position(|v| !v.is_finite()) {
        let (table, i) = if i < g_raw.len() { ("g", i) } else { ("h", i - g_raw.len()) };
        return Err(FieldError::Configuration(format!(
            "{table}[{i}] is not a finite number"
        )));
    }
    if g_raw[..2].iter().chain(&h_raw[..2]).any(|&v| v != 0.0) {
        return Err(FieldError::Configuration(
            "placeholder slots 0 and 1 must be zero".into(),
        ));
    }

    // h[n, 0] sits at m = 1 of every recursion degree
    for n in 2..=degree + 1 {
        let mn = linear_index(n, 1);
        if mn >= h_raw.len() {
            break;
        }
        if h_raw[mn] != 0.0 {
            return Err(FieldError::Configuration(format!(
                "h[{}, 0] = {} must be zero",
                n - 1,
                h_raw[mn]
            )));
        }
    }

    Ok(())
}

/// Pads or truncates a raw table to exactly `len` entries.
fn expand(raw: &[f64], len: usize) -> Array1<f64> {
    let mut table = Array1::<f64>::zeros(len);
    let n = raw.len().min(len);
    table.slice_mut(s![..n]).assign(&Array1::from(raw[..n].to_vec()));
    table
}

/// Normalizes raw Gauss coefficients and builds the recursion table for a model of the
/// given degree, truncated to `order`.
///
/// # Arguments
///
/// * `degree` - Maximum spherical harmonic degree the raw tables describe.
/// * `order` - Order to truncate the prepared tables to, `1 <= order <= degree`.
/// * `g_raw` - Raw `g` coefficients in nT, flat 1-based layout with two leading placeholders.
/// * `h_raw` - Raw `h` coefficients in nT, same layout, `h[n, 0]` must be zero.
///
/// # Returns
///
/// The prepared tables, or a `Configuration` error when the raw tables are malformed.
pub fn prepare(
    degree: usize,
    order: usize,
    g_raw: &[f64],
    h_raw: &[f64],
) -> Result<PreparedTables, FieldError> {
    check_raw(degree, order, g_raw, h_raw)?;

    let len = padded_len(degree);
    let mut g = expand(g_raw, len);
    let mut h = expand(h_raw, len);
    let mut rec = Array1::<f64>::zeros(len);

    for n in 1..=degree + 1 {
        let n2 = (2 * n - 1) as f64;
        let n2 = n2 * (n2 - 2.0);
        for m in 1..=n {
            rec[linear_index(n, m)] = ((n - m) * (n + m - 2)) as f64 / n2;
        }
    }

    let mut norm = 1.0_f64;
    for n in 2..=degree + 1 {
        let mn = linear_index(n, 1);
        norm = norm * (2 * n - 3) as f64 / (n - 1) as f64;
        g[mn] *= norm;
        h[mn] *= norm;

        let mut p = norm;
        for m in 2..=n {
            let aa = if m == 2 { 2.0 } else { 1.0 };
            p *= (aa * (n - m + 1) as f64 / (n + m - 2) as f64).sqrt();
            g[mn + m - 1] *= p;
            h[mn + m - 1] *= p;
        }
    }

    let size = table_len(order);
    debug!(degree, order, size, "prepared spherical harmonic tables");

    Ok(PreparedTables {
        order,
        g: g.slice(s![..size]).to_owned(),
        h: h.slice(s![..size]).to_owned(),
        rec: rec.slice(s![..size]).to_owned(),
    })
}
