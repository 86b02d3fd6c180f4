use thiserror::Error;

/// The ways a distance computation can fail.
///
/// None of these depend on the symbols being compared, only on the memory handed to or requested
/// by the solvers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A [Matrix][crate::Matrix] is too small for the pair of sequences.
    ///
    /// Dimensions are given as `(rows, columns)`, i.e. one more than the sequence lengths.
    #[error("matrix of {}x{} cells cannot hold a {}x{} problem", .available.0, .available.1, .required.0, .required.1)]
    Capacity {
        required: (usize, usize),
        available: (usize, usize),
    },

    /// A row buffer is shorter than `len(y) + 1`.
    #[error("row of {available} cells cannot hold {required}")]
    RowCapacity { required: usize, available: usize },

    /// The allocator refused to provide `cells` cells.
    #[error("failed to allocate {cells} cells")]
    Allocation { cells: usize },

    /// The requested number of cells does not fit in a `usize`.
    #[error("buffer size overflows usize")]
    Overflow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_reports_both_dimensions() {
        let e = Error::Capacity {
            required: (4, 7),
            available: (3, 3),
        };

        assert_eq!(e.to_string(), "matrix of 3x3 cells cannot hold a 4x7 problem");
    }

    #[test]
    fn row_capacity_reports_lengths() {
        let e = Error::RowCapacity {
            required: 8,
            available: 5,
        };

        assert_eq!(e.to_string(), "row of 5 cells cannot hold 8");
    }

    #[test]
    fn overflow_does_not_claim_a_cell_count() {
        assert_eq!(Error::Overflow.to_string(), "buffer size overflows usize");
    }
}
