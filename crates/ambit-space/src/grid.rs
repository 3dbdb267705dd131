//! Reference space descriptor: a box with per-dimension wraparound.

use crate::space::Space;
use ambit_core::SpaceError;

/// A D-dimensional box with a per-dimension periodicity mask.
///
/// This is the reference [`Space`] implementation for grid and continuous
/// spaces: a size vector and one wraparound flag per dimension. The
/// descriptor is immutable once built; construction rejects every
/// configuration the metric functions cannot serve.
///
/// # Examples
///
/// ```
/// use ambit_space::{euclidean_distance, BoxSpace, Space};
///
/// // A 10-unit ring: wraparound makes 1 and 8 only 3 apart.
/// let ring = BoxSpace::torus(vec![10.0]).unwrap();
/// assert_eq!(ring.ndim(), 1);
/// assert_eq!(euclidean_distance(&[1.0], &[8.0], &ring).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSpace {
    size: Vec<f64>,
    periodic: Vec<bool>,
}

impl BoxSpace {
    /// Create a descriptor from a size vector and a periodicity mask.
    ///
    /// Returns `Err(SpaceError::DimensionMismatch)` if the vectors have
    /// unequal lengths, `Err(SpaceError::EmptySpace)` if they are empty,
    /// or `Err(SpaceError::DegeneratePeriodicSize)` if any periodic
    /// dimension has size `<= 0`.
    pub fn new(size: Vec<f64>, periodic: Vec<bool>) -> Result<Self, SpaceError> {
        if size.len() != periodic.len() {
            return Err(SpaceError::DimensionMismatch {
                expected: size.len(),
                actual: periodic.len(),
            });
        }
        if size.is_empty() {
            return Err(SpaceError::EmptySpace);
        }
        for (dim, (&s, &p)) in size.iter().zip(&periodic).enumerate() {
            if p && s <= 0.0 {
                return Err(SpaceError::DegeneratePeriodicSize { dim });
            }
        }
        Ok(Self { size, periodic })
    }

    /// All dimensions periodic (a torus).
    pub fn torus(size: Vec<f64>) -> Result<Self, SpaceError> {
        let periodic = vec![true; size.len()];
        Self::new(size, periodic)
    }

    /// No dimension periodic (hard boundaries).
    pub fn open(size: Vec<f64>) -> Result<Self, SpaceError> {
        let periodic = vec![false; size.len()];
        Self::new(size, periodic)
    }

    /// `true` if every dimension wraps.
    pub fn is_torus(&self) -> bool {
        self.periodic.iter().all(|&p| p)
    }
}

impl Space for BoxSpace {
    fn ndim(&self) -> usize {
        self.size.len()
    }

    fn size(&self) -> &[f64] {
        &self.size
    }

    fn periodicity(&self) -> &[bool] {
        &self.periodic
    }
}
