//! 2x2 complex channel matrix and its singular value decomposition

use nalgebra::Matrix2;
use num_complex::Complex64;
use rand::Rng;
use tracing::trace;

use crate::error::{SimError, SimResult};
use crate::noise::complex_gaussian;

/// QR sweeps allowed before the decomposition is reported as failed
const MAX_SVD_ITERATIONS: usize = 100;

/// Narrowband channel between 2 transmit and 2 receive antennas.
/// Entry `(rx, tx)` is the gain from transmit antenna `tx` to receive antenna `rx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelMatrix {
    h: Matrix2<Complex64>,
}

impl ChannelMatrix {
    pub fn from_entries(h: Matrix2<Complex64>) -> Self {
        Self { h }
    }

    /// I.i.d. Rayleigh channel, unit average power per entry
    pub fn rayleigh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_entries(Matrix2::from_fn(|_, _| complex_gaussian(rng)))
    }

    /// H = U · diag(S) · Vᴴ with singular values in descending order
    pub fn svd(&self) -> SimResult<Svd> {
        if self.h.iter().any(|z| !z.is_finite()) {
            return Err(SimError::Decomposition {
                reason: "channel matrix has non-finite entries".to_string(),
            });
        }

        let not_converged = || SimError::Decomposition {
            reason: format!("SVD did not converge in {} iterations", MAX_SVD_ITERATIONS),
        };
        let svd = self
            .h
            .try_svd(true, true, f64::EPSILON, MAX_SVD_ITERATIONS)
            .ok_or_else(not_converged)?;
        let (mut u, mut v_h) = match (svd.u, svd.v_t) {
            (Some(u), Some(v_t)) => (u, v_t),
            _ => return Err(not_converged()),
        };

        let mut singular_values = [svd.singular_values[0], svd.singular_values[1]];
        if singular_values[0] < singular_values[1] {
            singular_values.swap(0, 1);
            u.swap_columns(0, 1);
            v_h.swap_rows(0, 1);
        }

        trace!(s1 = singular_values[0], s2 = singular_values[1], "2x2 channel decomposed");

        Ok(Svd {
            u,
            singular_values,
            v_h,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Svd {
    pub u: Matrix2<Complex64>,
    /// Descending, non-negative
    pub singular_values: [f64; 2],
    pub v_h: Matrix2<Complex64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn rebuild(svd: &Svd) -> Matrix2<Complex64> {
        let [s1, s2] = svd.singular_values;
        let s = Matrix2::from_diagonal(&Vector2::new(Complex64::from(s1), Complex64::from(s2)));
        svd.u * s * svd.v_h
    }

    fn identity() -> Matrix2<Complex64> {
        Matrix2::identity()
    }

    #[test]
    fn test_identity() {
        let svd = ChannelMatrix::from_entries(identity()).svd().unwrap();
        assert!((svd.singular_values[0] - 1.0).abs() < 1e-12);
        assert!((svd.singular_values[1] - 1.0).abs() < 1e-12);
        assert!((rebuild(&svd) - identity()).norm() < 1e-12);
    }

    #[test]
    fn test_diagonal_sorted_descending() {
        let h = Matrix2::new(c(3.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(0.0, 4.0));
        let svd = ChannelMatrix::from_entries(h).svd().unwrap();

        assert!((svd.singular_values[0] - 4.0).abs() < 1e-10);
        assert!((svd.singular_values[1] - 3.0).abs() < 1e-10);
        assert!((rebuild(&svd) - h).norm() < 1e-10);
    }

    #[test]
    fn test_rank_one() {
        let one = c(1.0, 0.0);
        let h = Matrix2::new(one, one, one, one);
        let svd = ChannelMatrix::from_entries(h).svd().unwrap();

        assert!((svd.singular_values[0] - 2.0).abs() < 1e-10);
        assert!(svd.singular_values[1].abs() < 1e-10);
        assert!((rebuild(&svd) - h).norm() < 1e-10);
    }

    #[test]
    fn test_zero_matrix() {
        let svd = ChannelMatrix::from_entries(Matrix2::zeros()).svd().unwrap();
        assert!(svd.singular_values.iter().all(|s| s.abs() < 1e-12));
    }

    #[test]
    fn test_non_finite_rejected() {
        let h = Matrix2::new(c(f64::NAN, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(1.0, 0.0));
        let err = ChannelMatrix::from_entries(h).svd().unwrap_err();
        assert!(matches!(err, SimError::Decomposition { .. }));
    }

    #[test]
    fn test_random_reconstruction_and_unitarity() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..1000 {
            let channel = ChannelMatrix::rayleigh(&mut rng);
            let svd = channel.svd().unwrap();
            let [s1, s2] = svd.singular_values;

            assert!(s1 >= s2 && s2 >= 0.0, "Singular values {:?} not ordered", svd.singular_values);
            assert!((rebuild(&svd) - channel.h).norm() < 1e-9, "U·S·Vᴴ does not reproduce H");
            assert!((svd.u.adjoint() * svd.u - identity()).norm() < 1e-9, "U not unitary");
            assert!((svd.v_h * svd.v_h.adjoint() - identity()).norm() < 1e-9, "V not unitary");

            assert!((s1 * s2 - channel.h.determinant().norm()).abs() < 1e-9);
            assert!((s1 * s1 + s2 * s2 - channel.h.norm_squared()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rayleigh_entry_power() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let trials = 20000;
        let avg = (0..trials)
            .map(|_| ChannelMatrix::rayleigh(&mut rng).h.norm_squared() / 4.0)
            .sum::<f64>() / trials as f64;
        assert!((avg - 1.0).abs() < 0.02, "Per-entry power {} should be ~1", avg);
    }
}
