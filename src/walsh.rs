//! Walsh–Hadamard Code Generator
//!
//! Builds the orthogonal ±1 spreading-code family used by every station
//! on the channel. The order-n matrix is constructed by recursive
//! doubling from the 1×1 base case:
//!
//! ```text
//!              ┌          ┐
//!              │  W    W  │
//!   H(n)  =    │          │     with  H(1) = [ 1 ],  W = H(n/2)
//!              │  W   -W  │
//!              └          ┘
//! ```
//!
//! Any two distinct rows of the result have zero dot product, and each
//! row's dot product with itself equals n. That orthogonality is what
//! lets a receiver pull one station's bits out of a summed composite.
//!
//! ## Example
//!
//! ```rust
//! use cdma_sim::walsh::WalshMatrix;
//!
//! let walsh = WalshMatrix::new(4).unwrap();
//! assert_eq!(walsh.order(), 4);
//! assert_eq!(walsh.row(0), &[1, 1, 1, 1]);
//! assert_eq!(walsh.row(3), &[1, -1, -1, 1]);
//! ```

use crate::error::{CdmaError, CdmaResult};
use crate::types::{Chip, ChipVector};

/// An immutable Walsh–Hadamard matrix of power-of-two order.
///
/// Rows are the spreading codes handed out to stations. The matrix is
/// built once and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalshMatrix {
    order: usize,
    rows: Vec<ChipVector>,
}

impl WalshMatrix {
    /// Build the Walsh–Hadamard matrix of the given order.
    ///
    /// The order must be a positive power of two; the recursive halving
    /// is undefined otherwise.
    pub fn new(order: usize) -> CdmaResult<Self> {
        if order == 0 || !order.is_power_of_two() {
            return Err(CdmaError::InvalidParameter(format!(
                "matrix order must be a positive power of two, got {order}"
            )));
        }
        Ok(Self {
            order,
            rows: build_rows(order),
        })
    }

    /// Matrix order n (code length and number of codes).
    pub fn order(&self) -> usize {
        self.order
    }

    /// One spreading code.
    ///
    /// # Panics
    /// Panics if `index >= order()`.
    pub fn row(&self, index: usize) -> &[Chip] {
        &self.rows[index]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[ChipVector] {
        &self.rows
    }
}

/// Recursive block construction. `order` is already validated.
fn build_rows(order: usize) -> Vec<ChipVector> {
    if order == 1 {
        return vec![vec![1]];
    }
    let half = build_rows(order / 2);
    let mut rows = Vec::with_capacity(order);
    // Top block: [W, W]
    for row in &half {
        let mut doubled = row.clone();
        doubled.extend_from_slice(row);
        rows.push(doubled);
    }
    // Bottom block: [W, -W]
    for row in &half {
        let mut doubled = row.clone();
        doubled.extend(row.iter().map(|&chip| -chip));
        rows.push(doubled);
    }
    rows
}

/// Integer dot product of two equal-length chip vectors.
pub fn dot(a: &[Chip], b: &[Chip]) -> i32 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| x as i32 * y as i32)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_case() {
        let walsh = WalshMatrix::new(1).unwrap();
        assert_eq!(walsh.rows(), &[vec![1]]);
    }

    #[test]
    fn test_order_two() {
        let walsh = WalshMatrix::new(2).unwrap();
        assert_eq!(walsh.row(0), &[1, 1]);
        assert_eq!(walsh.row(1), &[1, -1]);
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        for order in [0, 3, 5, 6, 12, 100] {
            assert!(
                WalshMatrix::new(order).is_err(),
                "order {order} should be rejected"
            );
        }
    }

    #[test]
    fn test_entries_are_chips() {
        let walsh = WalshMatrix::new(16).unwrap();
        for row in walsh.rows() {
            assert!(row.iter().all(|&c| c == 1 || c == -1));
        }
    }

    #[test]
    fn test_orthogonality_all_accepted_orders() {
        for order in [1usize, 2, 4, 8, 16, 32, 64] {
            let walsh = WalshMatrix::new(order).unwrap();
            for i in 0..order {
                for j in 0..order {
                    let product = dot(walsh.row(i), walsh.row(j));
                    if i == j {
                        assert_eq!(product, order as i32, "self-energy at row {i}, order {order}");
                    } else {
                        assert_eq!(product, 0, "rows {i},{j} not orthogonal at order {order}");
                    }
                }
            }
        }
    }
}
