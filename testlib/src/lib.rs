use approx::assert_abs_diff_eq;

pub const EPSILON: f64 = 1.0e-9;

pub fn assert_point_eq(a: (f64, f64), b: (f64, f64)) {
    assert_abs_diff_eq!(a.0, b.0, epsilon = EPSILON);
    assert_abs_diff_eq!(a.1, b.1, epsilon = EPSILON);
}

pub fn assert_segments_eq(a: &[((f64, f64), (f64, f64))], b: &[((f64, f64), (f64, f64))]) {
    assert_eq!(a.len(), b.len());

    for (a, b) in a.iter().zip(b) {
        assert_point_eq(a.0, b.0);
        assert_point_eq(a.1, b.1);
    }
}

/// compare scalars with a tolerance scaled to their magnitude
pub fn assert_scalar_eq(a: f64, b: f64) {
    assert_abs_diff_eq!(a, b, epsilon = EPSILON * b.abs().max(1.0));
}
