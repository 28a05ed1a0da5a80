//! Randomized Code Assignment
//!
//! Hands each station exactly one row of the Walsh matrix. The mapping
//! is injective (no two stations may share a code, or their signals
//! could not be separated at the receiver) and is drawn from a random
//! permutation of the row indices.
//!
//! The random source is injectable: pass a seed for a reproducible
//! assignment, or `None` to draw from OS entropy. This is the only
//! non-determinism in the whole pipeline.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::assign::CodeAssignment;
//! use cdma_sim::walsh::WalshMatrix;
//!
//! let walsh = WalshMatrix::new(4).unwrap();
//! let stations = ["A".to_string(), "B".to_string()];
//! let assignment = CodeAssignment::generate(&stations, &walsh, Some(7)).unwrap();
//! assert_ne!(assignment.code("A"), assignment.code("B"));
//! ```

use crate::error::{CdmaError, CdmaResult};
use crate::types::{Chip, ChipVector};
use crate::walsh::WalshMatrix;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// A fixed, injective mapping from station identifiers to spreading codes.
///
/// Created once per run and never mutated afterwards. Stations are kept
/// in the enumeration order they were assigned in.
#[derive(Debug, Clone)]
pub struct CodeAssignment {
    entries: Vec<(String, usize, ChipVector)>,
}

impl CodeAssignment {
    /// Assign one matrix row to each station.
    ///
    /// Row indices come from a uniformly random permutation of
    /// `0..order`, truncated to the number of stations, so distinct
    /// stations always receive distinct codes. Fails with
    /// [`CdmaError::InsufficientCodes`] when there are more stations
    /// than rows.
    pub fn generate(
        stations: &[String],
        matrix: &WalshMatrix,
        seed: Option<u64>,
    ) -> CdmaResult<Self> {
        let order = matrix.order();
        if stations.len() > order {
            return Err(CdmaError::InsufficientCodes {
                stations: stations.len(),
                codes: order,
            });
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut indices: Vec<usize> = (0..order).collect();
        indices.shuffle(&mut rng);

        let entries = stations
            .iter()
            .zip(indices)
            .map(|(station, index)| (station.clone(), index, matrix.row(index).to_vec()))
            .collect();
        Ok(Self { entries })
    }

    /// Number of assigned stations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no station was assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Station identifiers in assignment order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(station, _, _)| station.as_str())
    }

    /// The spreading code assigned to one station.
    ///
    /// # Panics
    /// Panics if the station was never assigned.
    pub fn code(&self, station: &str) -> &[Chip] {
        self.try_code(station)
            .unwrap_or_else(|| panic!("station {station:?} has no assigned code"))
    }

    /// The spreading code assigned to one station, if any.
    pub fn try_code(&self, station: &str) -> Option<&[Chip]> {
        self.entries
            .iter()
            .find(|(name, _, _)| name == station)
            .map(|(_, _, code)| code.as_slice())
    }

    /// The matrix row index assigned to one station, if any.
    pub fn row_index(&self, station: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(name, _, _)| name == station)
            .map(|(_, index, _)| *index)
    }

    /// Iterate over `(station, code)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Chip])> {
        self.entries
            .iter()
            .map(|(station, _, code)| (station.as_str(), code.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_assignment_is_injective() {
        let walsh = WalshMatrix::new(8).unwrap();
        let stations = stations(&["A", "B", "C", "D", "E"]);
        let assignment = CodeAssignment::generate(&stations, &walsh, Some(1)).unwrap();

        let mut indices: Vec<usize> = stations
            .iter()
            .map(|s| assignment.row_index(s).unwrap())
            .collect();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), stations.len(), "codes must not collide");
    }

    #[test]
    fn test_seed_is_deterministic() {
        let walsh = WalshMatrix::new(8).unwrap();
        let names = stations(&["A", "B", "C"]);
        let first = CodeAssignment::generate(&names, &walsh, Some(42)).unwrap();
        let second = CodeAssignment::generate(&names, &walsh, Some(42)).unwrap();
        for name in &names {
            assert_eq!(first.row_index(name), second.row_index(name));
        }
    }

    #[test]
    fn test_too_many_stations() {
        let walsh = WalshMatrix::new(4).unwrap();
        let names = stations(&["A", "B", "C", "D", "E"]);
        let err = CodeAssignment::generate(&names, &walsh, Some(0)).unwrap_err();
        assert!(matches!(
            err,
            CdmaError::InsufficientCodes {
                stations: 5,
                codes: 4
            }
        ));
    }

    #[test]
    fn test_full_house_uses_every_row() {
        let walsh = WalshMatrix::new(4).unwrap();
        let names = stations(&["A", "B", "C", "D"]);
        let assignment = CodeAssignment::generate(&names, &walsh, Some(3)).unwrap();
        let mut indices: Vec<usize> = names
            .iter()
            .map(|s| assignment.row_index(s).unwrap())
            .collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unknown_station() {
        let walsh = WalshMatrix::new(2).unwrap();
        let assignment =
            CodeAssignment::generate(&stations(&["A"]), &walsh, Some(0)).unwrap();
        assert!(assignment.try_code("Z").is_none());
        assert!(assignment.row_index("Z").is_none());
    }
}
