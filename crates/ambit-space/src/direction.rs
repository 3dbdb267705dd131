//! Shortest signed displacement between two positions.

use crate::space::{check_pair, Space};
use ambit_core::{Located, Position, SpaceError};

/// The shortest displacement vector taking `from` to `to`.
///
/// Unlike the distance metrics this preserves per-dimension sign, so the
/// result can steer an agent. On a periodic dimension the two candidate
/// arcs are the direct difference and the same displacement measured the
/// other way around the torus; the smaller magnitude wins and ties go to
/// the direct arc. Non-periodic dimensions are plain differences.
///
/// # Errors
///
/// [`SpaceError::DimensionMismatch`] if either position's length disagrees
/// with `space.ndim()`, [`SpaceError::DegeneratePeriodicSize`] if a
/// periodic dimension carries a size `<= 0`.
///
/// # Examples
///
/// ```
/// use ambit_space::{get_direction, BoxSpace};
///
/// let torus = BoxSpace::torus(vec![5.0, 5.0]).unwrap();
/// // Stepping backwards across the seam is shorter than walking forward.
/// let v = get_direction(&[0.0, 0.0], &[4.0, 4.0], &torus).unwrap();
/// assert_eq!(v.as_slice(), &[-1.0, -1.0]);
/// ```
pub fn get_direction<A, B, S>(from: &A, to: &B, space: &S) -> Result<Position, SpaceError>
where
    A: Located + ?Sized,
    B: Located + ?Sized,
    S: Space + ?Sized,
{
    let pf = from.position();
    let pt = to.position();
    check_pair(pf, pt, space.ndim())?;
    let size = space.size();
    let mask = space.periodicity();
    let mut v = Position::with_capacity(pf.len());
    for i in 0..pf.len() {
        let direct = pt[i] - pf[i];
        if !mask[i] {
            v.push(direct);
            continue;
        }
        let len = size[i];
        if len <= 0.0 {
            return Err(SpaceError::DegeneratePeriodicSize { dim: i });
        }
        let inverse = direct - sign(direct) * len;
        v.push(if direct.abs() <= inverse.abs() {
            direct
        } else {
            inverse
        });
    }
    Ok(v)
}

/// Sign with `sign(0) = 0`, so a zero displacement maps to itself.
///
/// `f64::signum` returns `±1.0` for signed zeros and would not, on its
/// own, satisfy that identity.
fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::BoxSpace;
    use proptest::prelude::*;

    // ── Worked examples ─────────────────────────────────────────

    #[test]
    fn torus_direction_crosses_the_seam_when_shorter() {
        // direct = [4, 4], inverse = [-1, -1] → inverse wins per dimension
        let s = BoxSpace::torus(vec![5.0, 5.0]).unwrap();
        let v = get_direction(&[0.0, 0.0], &[4.0, 4.0], &s).unwrap();
        assert_eq!(v.as_slice(), &[-1.0, -1.0]);
    }

    #[test]
    fn open_dimensions_are_plain_differences() {
        let s = BoxSpace::open(vec![10.0, 10.0]).unwrap();
        let v = get_direction(&[2.0, 7.0], &[9.0, 1.0], &s).unwrap();
        assert_eq!(v.as_slice(), &[7.0, -6.0]);
    }

    #[test]
    fn mixed_mask_wraps_only_the_flagged_axis() {
        let s = BoxSpace::new(vec![5.0, 5.0], vec![true, false]).unwrap();
        let v = get_direction(&[0.0, 0.0], &[4.0, 4.0], &s).unwrap();
        assert_eq!(v.as_slice(), &[-1.0, 4.0]);
    }

    #[test]
    fn half_extent_tie_resolves_to_the_direct_arc() {
        // direct = 5, inverse = -5: equal magnitudes, direct wins.
        let s = BoxSpace::torus(vec![10.0]).unwrap();
        let v = get_direction(&[0.0], &[5.0], &s).unwrap();
        assert_eq!(v.as_slice(), &[5.0]);
    }

    #[test]
    fn zero_displacement_stays_zero() {
        let s = BoxSpace::torus(vec![10.0]).unwrap();
        let v = get_direction(&[4.0], &[4.0], &s).unwrap();
        assert_eq!(v.as_slice(), &[0.0]);
    }

    #[test]
    fn direction_is_antisymmetric_off_ties() {
        let s = BoxSpace::torus(vec![10.0]).unwrap();
        let fwd = get_direction(&[1.0], &[8.0], &s).unwrap();
        let back = get_direction(&[8.0], &[1.0], &s).unwrap();
        assert_eq!(fwd.as_slice(), &[-3.0]);
        assert_eq!(back.as_slice(), &[3.0]);
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let s = BoxSpace::torus(vec![10.0]).unwrap();
        assert_eq!(
            get_direction(&[1.0, 2.0], &[3.0], &s),
            Err(SpaceError::DimensionMismatch {
                expected: 1,
                actual: 2,
            })
        );
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        /// Applying the displacement to `from` reaches `to`, modulo each
        /// periodic extent; exactly on non-periodic dimensions.
        #[test]
        fn displacement_round_trips(
            len in 1.0f64..50.0,
            periodic in any::<bool>(),
            ff in 0.0f64..1.0,
            ft in 0.0f64..1.0,
        ) {
            let s = BoxSpace::new(vec![len], vec![periodic]).unwrap();
            let from = len * ff;
            let to = len * ft;
            let v = get_direction(&[from], &[to], &s).unwrap();
            if periodic {
                let drift = (from + v[0] - to).rem_euclid(len);
                prop_assert!(drift < 1e-9 || (len - drift) < 1e-9);
                // Shortest-arc bound.
                prop_assert!(v[0].abs() <= len / 2.0 + 1e-9);
            } else {
                prop_assert!((from + v[0] - to).abs() < 1e-12);
            }
        }

        /// The displacement magnitude equals the Euclidean distance in 1D.
        #[test]
        fn magnitude_matches_the_metric(
            len in 1.0f64..50.0,
            ff in 0.0f64..1.0,
            ft in 0.0f64..1.0,
        ) {
            let s = BoxSpace::torus(vec![len]).unwrap();
            let from = len * ff;
            let to = len * ft;
            let v = get_direction(&[from], &[to], &s).unwrap();
            let d = crate::metric::euclidean_distance(&[from], &[to], &s).unwrap();
            prop_assert!((v[0].abs() - d).abs() < 1e-9);
        }
    }
}
