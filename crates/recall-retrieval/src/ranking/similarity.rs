//! Cosine similarity.

/// Cosine similarity of two vectors, accumulated in `f64`.
///
/// Returns 0.0 when either vector has zero norm. The result is clamped to
/// `[-1, 1]` to absorb rounding. Callers must pass equal-length vectors;
/// extra components of the longer one are ignored.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold((0.0f64, 0.0f64, 0.0f64), |(d, na, nb), (&x, &y)| {
        let (x, y) = (f64::from(x), f64::from(y));
        (d + x * y, na + x * x, nb + y * y)
    });
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_direction_is_one() {
        assert!((cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn orthogonal_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 5.0]), 0.0);
    }

    #[test]
    fn opposite_is_minus_one() {
        assert!((cosine_similarity(&[1.0, -1.0], &[-1.0, 1.0]) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn result_is_clamped() {
        let v = [0.1f32; 384];
        let s = cosine_similarity(&v, &v);
        assert!(s <= 1.0);
    }
}
