use ndarray::Array2;

// Helper function for approximate comparison of (N, 3) field rows, tolerance relative to
// the magnitude of the expected vector
pub fn assert_rows_approx_eq(result: &Array2<f64>, expected: &Array2<f64>, tolerance: f64) {
    assert_eq!(result.dim(), expected.dim(), "Shape mismatch");
    for (i, (r, e)) in result.rows().into_iter().zip(expected.rows()).enumerate() {
        let scale = e.iter().map(|v| v * v).sum::<f64>().sqrt().max(1.0);
        for j in 0..r.len() {
            let diff = (r[j] - e[j]).abs();
            assert!(
                diff <= tolerance * scale,
                "Mismatch at [{}][{}]: result = {:.6}, expected = {:.6}, diff = {:.3e}",
                i,
                j,
                r[j],
                e[j],
                diff
            );
        }
    }
}
