use nalgebra::Vector3;
use ndarray::{Array2, ArrayView1, Zip};
use tracing::trace;

use crate::coefficients::{linear_index, PreparedTables};
use crate::error::FieldError;

/// Below this `sin(colatitude)` a position is treated as lying on the rotation axis.
pub const POLE_THRESHOLD: f64 = 1e-5;

/// Evaluates the internal field of a prepared model at one position.
///
/// # Arguments
///
/// * `tables` - Prepared coefficients of the model.
/// * `r` - Radial distance in units of the model's reference radius.
/// * `colat` - Colatitude in radians, within `[0, pi]`.
/// * `lon` - East longitude in radians.
///
/// # Returns
///
/// `(Br, Btheta, Bphi)` in nanotesla.
pub fn synthesize_point(
    tables: &PreparedTables,
    r: f64,
    colat: f64,
    lon: f64,
) -> Result<Vector3<f64>, FieldError> {
    if !(r > 0.0) {
        return Err(FieldError::NumericalDomain { r, index: 0 });
    }
    Ok(field_at(tables, r, colat, lon))
}

/// Evaluates the internal field of a prepared model at every position of a batch.
///
/// Row `i` of the `(N, 3)` result holds `(Br, Btheta, Bphi)` for the `i`-th position and
/// is identical to what [`synthesize_point`] returns for it.
pub fn synthesize(
    tables: &PreparedTables,
    r: ArrayView1<f64>,
    colat: ArrayView1<f64>,
    lon: ArrayView1<f64>,
) -> Result<Array2<f64>, FieldError> {
    let n = r.len();
    if colat.len() != n || lon.len() != n {
        return Err(FieldError::InputShape(format!(
            "r, colat and lon have lengths {}, {} and {}",
            n,
            colat.len(),
            lon.len()
        )));
    }
    if let Some((index, &r)) = r.iter().enumerate().find(|&(_, &r)| !(r > 0.0)) {
        return Err(FieldError::NumericalDomain { r, index });
    }

    trace!(points = n, order = tables.order(), "synthesizing field");

    let mut b = Array2::<f64>::zeros((n, 3));
    Zip::from(b.rows_mut())
        .and(&r)
        .and(&colat)
        .and(&lon)
        .for_each(|mut row, &r, &colat, &lon| {
            let v = field_at(tables, r, colat, lon);
            row[0] = v.x;
            row[1] = v.y;
            row[2] = v.z;
        });

    Ok(b)
}

/// Recursive evaluation of the Schmidt quasi-normalized expansion at a single point.
fn field_at(tables: &PreparedTables, r: f64, colat: f64, lon: f64) -> Vector3<f64> {
    let k = tables.k();
    let (g, h, rec) = (tables.g(), tables.h(), tables.rec());

    // a[i] = r^-(i+1), b[i] = i * a[i]
    let da = 1.0 / r;
    let mut a = vec![0.0; k + 1];
    a[0] = da;
    for i in 1..=k {
        a[i] = a[i - 1] * da;
    }
    let b: Vec<f64> = a.iter().enumerate().map(|(i, &ai)| ai * i as f64).collect();

    let cos_phi = lon.cos();
    let sin_phi = lon.sin();
    let cos_theta = colat.cos();
    let sin_theta = colat.sin();
    let on_axis = sin_theta < POLE_THRESHOLD;

    let mut p = 1.0;
    let mut d = 0.0;
    let mut bbr = 0.0;
    let mut bbt = 0.0;
    let mut bbf = 0.0;
    let mut x = 0.0;
    let mut y = 1.0;

    for m in 1..=k {
        let bm = m != 1;
        if bm {
            let w = x;
            x = w * cos_phi + y * sin_phi;
            y = y * cos_phi - w * sin_phi;
        }

        let mut q = p;
        let mut z = d;
        let mut bi = 0.0;
        let mut p2 = 0.0;
        let mut d2 = 0.0;

        for n in m..=k {
            let mn = linear_index(n, m);
            let w = g[mn] * y + h[mn] * x;
            bbr += b[n] * w * q;
            bbt -= a[n] * w * z;
            if bm {
                // on the axis the derivative term stands in for P/sin(theta)
                let qq = if on_axis { z } else { q };
                bi += a[n] * (g[mn] * x - h[mn] * y) * qq;
            }

            let xk = rec[mn];
            let dp = cos_theta * z - sin_theta * q - d2 * xk;
            let pm = cos_theta * q - p2 * xk;
            d2 = z;
            p2 = q;
            z = dp;
            q = pm;
        }

        d = sin_theta * d + cos_theta * p;
        p = sin_theta * p;
        if bm {
            bi *= (m - 1) as f64;
            bbf += bi;
        }
    }

    let bf = if !on_axis {
        bbf / sin_theta
    } else if cos_theta >= 0.0 {
        bbf
    } else {
        -bbf
    };

    Vector3::new(bbr, bbt, bf)
}
