use crate::Error;
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

/// A reusable distance matrix.
///
/// Cell `(i, j)` holds the cost of transforming the first `i` symbols of the left-hand side into
/// the first `j` symbols of the right-hand side. A matrix built for lengths `(m, n)` can be reused
/// for any pair of sequences no longer than `m` and `n` respectively, its contents are overwritten
/// on every use and never need to be cleared.
///
/// # Example
///
/// ```rust
/// use weighted_edit_distance::{buffered_edit_distance, Matrix, Weights};
///
/// let mut d = Matrix::new(8, 8);
/// let w = Weights::LEVENSHTEIN;
///
/// assert_eq!(buffered_edit_distance(b"kitten", b"sitting", w, &mut d), Ok(3));
/// assert_eq!(buffered_edit_distance(b"book", b"burn", w, &mut d), Ok(3));
/// assert!(buffered_edit_distance(b"apple", b"pineapple", w, &mut d).is_err());
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Matrix {
    cells: Box<[usize]>,
    columns: usize,
}

impl Matrix {
    /// Allocates a zeroed matrix for sequences of lengths up to `m` and `n`.
    ///
    /// # Panics
    ///
    /// Panics if `(m + 1) * (n + 1)` overflows `usize`, see [Matrix::try_new].
    pub fn new(m: usize, n: usize) -> Self {
        match dimensions(m, n) {
            Some((rows, columns)) => Matrix {
                cells: vec![0; rows * columns].into_boxed_slice(),
                columns,
            },

            None => panic!("a {m}x{n} matrix overflows usize"),
        }
    }

    /// Like [Matrix::new], but reports allocation failure instead of aborting.
    pub fn try_new(m: usize, n: usize) -> Result<Self, Error> {
        let (rows, columns) = dimensions(m, n).ok_or(Error::Overflow)?;
        let cells = rows * columns;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        buffer.resize(cells, 0);

        Ok(Matrix {
            cells: buffer.into_boxed_slice(),
            columns,
        })
    }

    /// The longest sequences this matrix can hold, as `(m, n)`.
    #[inline]
    pub fn capacity(&self) -> (usize, usize) {
        (self.cells.len() / self.columns - 1, self.columns - 1)
    }

    /// Whether sequences of lengths `m` and `n` fit in this matrix.
    #[inline]
    pub fn fits(&self, m: usize, n: usize) -> bool {
        let (rows, columns) = self.capacity();
        m <= rows && n <= columns
    }

    /// Fails with [Error::Capacity] unless sequences of lengths `m` and `n` fit in this matrix.
    pub fn check(&self, m: usize, n: usize) -> Result<(), Error> {
        if self.fits(m, n) {
            Ok(())
        } else {
            let (rows, columns) = self.capacity();
            Err(Error::Capacity {
                required: (m.saturating_add(1), n.saturating_add(1)),
                available: (rows + 1, columns + 1),
            })
        }
    }

    /// Iterates over the rows of this matrix.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[usize]> {
        self.cells.chunks_exact(self.columns)
    }

    /// Borrows row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        let rows = self.rows().len();
        match self.cells.chunks_exact(self.columns).nth(i) {
            Some(row) => row,
            None => panic!("row {i} out of range for a matrix of {rows} rows"),
        }
    }

    /// Borrows row `i` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [usize] {
        let rows = self.rows().len();
        match self.cells.chunks_exact_mut(self.columns).nth(i) {
            Some(row) => row,
            None => panic!("row {i} out of range for a matrix of {rows} rows"),
        }
    }

    /// Splits out rows `i - 1` and `i`, the latter mutably.
    #[inline]
    pub(crate) fn adjacent_rows_mut(&mut self, i: usize) -> (&[usize], &mut [usize]) {
        debug_assert!(i > 0);
        let (head, tail) = self.cells.split_at_mut(i * self.columns);
        (&head[(i - 1) * self.columns..], &mut tail[..self.columns])
    }
}

fn dimensions(m: usize, n: usize) -> Option<(usize, usize)> {
    let rows = m.checked_add(1)?;
    let columns = n.checked_add(1)?;
    rows.checked_mul(columns)?;
    Some((rows, columns))
}

impl Index<(usize, usize)> for Matrix {
    type Output = usize;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.row(i)[j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.row_mut(i)[j]
    }
}

/// One row per line, columns right-aligned.
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.cells.iter().max().map_or(1, |c| c.to_string().len());

        for row in self.rows() {
            let cells = row.iter().format_with(" ", |c, g| g(&format_args!("{c:>width$}")));
            writeln!(f, "[{cells}]")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use test_strategy::proptest;

    #[test]
    fn new_matrix_has_room_for_the_empty_prefix() {
        let d = Matrix::new(5, 5);
        assert_eq!(d.rows().len(), 6);
        assert!(d.rows().all(|r| r.len() == 6));
        assert_eq!(d.capacity(), (5, 5));
    }

    #[proptest]
    fn new_matrix_is_zeroed(#[strategy(0usize..32)] m: usize, #[strategy(0usize..32)] n: usize) {
        let d = Matrix::new(m, n);
        assert!(d.rows().flatten().all(|&c| c == 0));
    }

    #[proptest]
    fn try_new_agrees_with_new(
        #[strategy(0usize..32)] m: usize,
        #[strategy(0usize..32)] n: usize,
    ) {
        assert_eq!(Matrix::try_new(m, n), Ok(Matrix::new(m, n)));
    }

    #[test]
    fn try_new_reports_overflow() {
        assert_eq!(Matrix::try_new(usize::MAX, 1), Err(Error::Overflow));
        assert_eq!(Matrix::try_new(1, usize::MAX), Err(Error::Overflow));
        assert_eq!(Matrix::try_new(usize::MAX / 2, usize::MAX / 2), Err(Error::Overflow));
    }

    #[test]
    fn try_new_reports_exhaustion() {
        let m = isize::MAX as usize / 16;
        assert_matches!(Matrix::try_new(m, 1), Err(Error::Allocation { cells }) if cells == 2 * (m + 1));
    }

    #[proptest]
    fn smaller_problems_fit(
        #[strategy(0usize..32)] m: usize,
        #[strategy(0usize..32)] n: usize,
        #[strategy(0..=#m)] i: usize,
        #[strategy(0..=#n)] j: usize,
    ) {
        let d = Matrix::new(m, n);
        assert!(d.fits(i, j));
        assert_eq!(d.check(i, j), Ok(()));
    }

    #[proptest]
    fn larger_problems_are_rejected(
        #[strategy(0usize..32)] m: usize,
        #[strategy(0usize..32)] n: usize,
        #[strategy(1usize..8)] k: usize,
    ) {
        let d = Matrix::new(m, n);

        assert_matches!(d.check(m + k, n), Err(Error::Capacity { required, available }) => {
            assert_eq!(required, (m + k + 1, n + 1));
            assert_eq!(available, (m + 1, n + 1));
        });

        assert_matches!(d.check(m, n + k), Err(Error::Capacity { .. }));
    }

    #[test]
    fn cells_are_addressed_by_row_then_column() {
        let mut d = Matrix::new(2, 3);
        d[(1, 2)] = 7;
        assert_eq!(d.rows().nth(1), Some(&[0, 0, 7, 0][..]));
        assert_eq!(d[(1, 2)], 7);
    }

    #[test]
    #[should_panic]
    fn columns_past_the_end_do_not_wrap_into_the_next_row() {
        let mut d = Matrix::new(2, 2);
        d[(0, 3)] = 42;
    }

    #[test]
    #[should_panic]
    fn columns_past_the_end_cannot_be_read() {
        let d = Matrix::new(2, 2);
        assert_eq!(d[(1, 3)], 0);
    }

    #[test]
    #[should_panic]
    fn rows_past_the_end_cannot_be_read() {
        let d = Matrix::new(2, 2);
        assert_eq!(d[(3, 0)], 0);
    }

    #[test]
    fn rows_are_borrowed_whole() {
        let mut d = Matrix::new(1, 2);
        d.row_mut(1).copy_from_slice(&[4, 5, 6]);
        assert_eq!(d.row(0), &[0, 0, 0]);
        assert_eq!(d.row(1), &[4, 5, 6]);
    }

    #[test]
    fn adjacent_rows_are_consecutive() {
        let mut d = Matrix::new(2, 1);
        d.row_mut(0).copy_from_slice(&[1, 2]);

        let (previous, current) = d.adjacent_rows_mut(1);
        assert_eq!(previous, &[1, 2]);
        current.copy_from_slice(&[3, 4]);

        assert_eq!(d.rows().collect::<Vec<_>>(), [&[1, 2], &[3, 4], &[0, 0]]);
    }

    #[test]
    fn display_aligns_columns() {
        let mut d = Matrix::new(1, 2);
        d.row_mut(0).copy_from_slice(&[0, 1, 2]);
        d.row_mut(1).copy_from_slice(&[1, 10, 3]);

        assert_eq!(d.to_string(), "[ 0  1  2]\n[ 1 10  3]\n");
    }
}
