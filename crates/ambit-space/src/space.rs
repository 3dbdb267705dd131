//! The core [`Space`] capability trait and descriptor-level queries.

use ambit_core::{Located, Position, SpaceError};

/// Capability interface for metric spaces.
///
/// Distance and direction computations depend only on this trait: a
/// dimensionality, a size vector, and a per-dimension periodicity mask.
/// Every space variant (grid, continuous, lattice hybrids, model wrappers
/// that delegate to their space) implements it; the metric functions never
/// see the concrete backend.
///
/// # Invariants
///
/// `size().len() == periodicity().len() == ndim()`, fixed for the space's
/// lifetime. The invariant is owned by descriptor construction
/// ([`BoxSpace::new`](crate::BoxSpace::new) enforces it); implementors of
/// foreign space types must uphold it themselves.
///
/// Size entries are meaningful only on dimensions whose periodicity flag
/// is set; a periodic dimension must have a strictly positive size.
pub trait Space {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Extent of the space along each dimension.
    fn size(&self) -> &[f64];

    /// Per-dimension wraparound flags.
    fn periodicity(&self) -> &[bool];
}

/// The extent of a space along each dimension.
///
/// Entries are meaningful only where the matching periodicity flag is set.
pub fn space_size<S: Space + ?Sized>(space: &S) -> &[f64] {
    space.size()
}

/// Fold a position's periodic coordinates into `[0, size)`.
///
/// Non-periodic coordinates pass through untouched — size carries no
/// meaning on those dimensions. Useful after applying a displacement from
/// [`get_direction`](crate::get_direction) to a position on a torus.
///
/// # Errors
///
/// [`SpaceError::DimensionMismatch`] if the position's length disagrees
/// with the space's dimensionality, [`SpaceError::DegeneratePeriodicSize`]
/// if a periodic dimension has size `<= 0`.
///
/// # Examples
///
/// ```
/// use ambit_space::{normalize_position, BoxSpace};
///
/// let space = BoxSpace::torus(vec![10.0, 10.0]).unwrap();
/// let folded = normalize_position(&[12.0, -3.0], &space).unwrap();
/// assert_eq!(folded.as_slice(), &[2.0, 7.0]);
/// ```
pub fn normalize_position<P, S>(position: &P, space: &S) -> Result<Position, SpaceError>
where
    P: Located + ?Sized,
    S: Space + ?Sized,
{
    let pos = position.position();
    check_position(pos, space.ndim())?;
    let size = space.size();
    let mask = space.periodicity();
    let mut folded = Position::with_capacity(pos.len());
    for (i, &x) in pos.iter().enumerate() {
        if mask[i] {
            let s = size[i];
            if s <= 0.0 {
                return Err(SpaceError::DegeneratePeriodicSize { dim: i });
            }
            folded.push(x.rem_euclid(s));
        } else {
            folded.push(x);
        }
    }
    Ok(folded)
}

/// Check a position's length against a space's dimensionality.
pub(crate) fn check_position(position: &[f64], ndim: usize) -> Result<(), SpaceError> {
    if position.len() != ndim {
        return Err(SpaceError::DimensionMismatch {
            expected: ndim,
            actual: position.len(),
        });
    }
    Ok(())
}

/// Check a pair of positions against a space's dimensionality.
pub(crate) fn check_pair(a: &[f64], b: &[f64], ndim: usize) -> Result<(), SpaceError> {
    check_position(a, ndim)?;
    check_position(b, ndim)
}
