//! Output-boundary sanitization of floating-point values.
//!
//! Every numeric value handed back to a caller passes through a single
//! sanitizing conversion: NaN and ±infinity become `0.0`. Applying the
//! conversion uniformly at the boundary (rather than per formula) keeps
//! the degenerate-numeric convention in one testable place.

/// Replace a non-finite value with `0.0`.
#[inline]
pub fn clean(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Types whose numeric fields can be sanitized at the output boundary.
///
/// Implementors map every `f64` they carry through [`clean`]. Output
/// structs call this once, immediately before being returned.
pub trait Sanitize: Sized {
    /// Return `self` with all non-finite floats replaced by `0.0`.
    fn sanitize(self) -> Self;
}

impl Sanitize for f64 {
    fn sanitize(self) -> Self {
        clean(self)
    }
}

impl Sanitize for Vec<f64> {
    fn sanitize(self) -> Self {
        self.into_iter().map(clean).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_passes_finite() {
        assert_eq!(clean(1.5), 1.5);
        assert_eq!(clean(-0.0), -0.0);
        assert_eq!(clean(f64::MIN), f64::MIN);
    }

    #[test]
    fn test_clean_zeroes_nan_and_inf() {
        assert_eq!(clean(f64::NAN), 0.0);
        assert_eq!(clean(f64::INFINITY), 0.0);
        assert_eq!(clean(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_vec_sanitize() {
        let v = vec![1.0, f64::NAN, 3.0, f64::INFINITY];
        assert_eq!(v.sanitize(), vec![1.0, 0.0, 3.0, 0.0]);
    }
}
