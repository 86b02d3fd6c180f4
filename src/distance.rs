use crate::{rows, Error, Matrix, Weights};
use log::{debug, trace};
use std::mem::swap;

/// Computes row `i` of the distance matrix from row `i - 1`.
///
/// `a` is the `i`-th symbol of the left-hand side, both rows are exactly `y.len() + 1` long.
#[inline]
fn step<T: PartialEq>(
    i: usize,
    a: &T,
    y: &[T],
    w: &Weights,
    previous: &[usize],
    current: &mut [usize],
) {
    current[0] = i;

    for (j, b) in y.iter().enumerate() {
        current[j + 1] = if a == b {
            previous[j]
        } else {
            let delete = previous[j + 1].saturating_add(w.delete);
            let insert = current[j].saturating_add(w.insert);
            let substitute = previous[j].saturating_add(w.substitute);
            delete.min(insert).min(substitute)
        };
    }
}

/// Fills the top-left `(x.len() + 1) x (y.len() + 1)` corner of `d`, which must be large enough.
fn fill<T: PartialEq>(x: &[T], y: &[T], w: &Weights, d: &mut Matrix) -> usize {
    let n = y.len();

    for (j, c) in d.row_mut(0)[..=n].iter_mut().enumerate() {
        *c = j;
    }

    for (i, a) in x.iter().enumerate() {
        let (previous, current) = d.adjacent_rows_mut(i + 1);
        step(i + 1, a, y, w, &previous[..=n], &mut current[..=n]);
    }

    d[(x.len(), n)]
}

/// Runs the recurrence on a pair of rows, both exactly `y.len() + 1` long.
fn roll<'r, T: PartialEq>(
    x: &[T],
    y: &[T],
    w: &Weights,
    mut previous: &'r mut [usize],
    mut current: &'r mut [usize],
) -> usize {
    for (j, c) in previous.iter_mut().enumerate() {
        *c = j;
    }

    for (i, a) in x.iter().enumerate() {
        step(i + 1, a, y, w, previous, current);
        swap(&mut previous, &mut current);
    }

    previous[y.len()]
}

/// Finds the lowest total cost of the edits that transform `x` into `y`.
///
/// Builds the whole `(x.len() + 1) x (y.len() + 1)` distance matrix, prefer
/// [compact_edit_distance] when memory matters or [buffered_edit_distance] in hot loops.
///
/// The first row and column of the matrix count symbols rather than weigh them, so transforming
/// from or into an empty sequence always costs its length regardless of `w`.
///
/// # Example
///
/// ```rust
/// use weighted_edit_distance::{edit_distance, Weights};
///
/// let w = Weights::LEVENSHTEIN;
/// assert_eq!(edit_distance(b"kitten", b"sitting", w), 3);
/// assert_eq!(edit_distance(b"", b"abc", w), 3);
///
/// let w = Weights { insert: 1, delete: 1, substitute: 2 };
/// assert_eq!(edit_distance(b"book", b"burn", w), 6);
/// ```
pub fn edit_distance<T: PartialEq>(x: &[T], y: &[T], w: Weights) -> usize {
    let mut d = Matrix::new(x.len(), y.len());
    let distance = fill(x, y, &w, &mut d);
    trace!("distance matrix:\n{d}");
    distance
}

/// Like [edit_distance], but only ever keeps two rows of the distance matrix.
pub fn compact_edit_distance<T: PartialEq>(x: &[T], y: &[T], w: Weights) -> usize {
    let mut previous = vec![0; y.len() + 1];
    let mut current = vec![0; y.len() + 1];
    roll(x, y, &w, &mut previous, &mut current)
}

/// Like [edit_distance], but fills the caller's [Matrix] instead of allocating one.
///
/// Only the top-left `(x.len() + 1) x (y.len() + 1)` cells are written, every one of them before
/// it is read, so the matrix may be reused across calls without being cleared.
///
/// # Errors
///
/// Fails with [Error::Capacity], leaving `d` untouched, if the sequences don't [fit][Matrix::fits].
pub fn buffered_edit_distance<T: PartialEq>(
    x: &[T],
    y: &[T],
    w: Weights,
    d: &mut Matrix,
) -> Result<usize, Error> {
    trace!("buffered distance between {} and {} symbols", x.len(), y.len());

    if let Err(e) = d.check(x.len(), y.len()) {
        debug!("{e}");
        return Err(e);
    }

    let distance = fill(x, y, &w, d);
    trace!("distance matrix, cells past ({}, {}) are stale:\n{d}", x.len(), y.len());
    Ok(distance)
}

/// Like [compact_edit_distance], but works on the caller's rows instead of allocating them.
///
/// Only the first `y.len() + 1` cells of each row are written, every one of them before it is
/// read. Which of the two rows ends up holding the last row of the matrix is unspecified.
///
/// # Errors
///
/// Fails with [Error::RowCapacity], leaving both rows untouched, if either is shorter than
/// `y.len() + 1`.
pub fn buffered_compact_edit_distance<T: PartialEq>(
    x: &[T],
    y: &[T],
    w: Weights,
    previous: &mut [usize],
    current: &mut [usize],
) -> Result<usize, Error> {
    trace!("buffered compact distance between {} and {} symbols", x.len(), y.len());

    if let Err(e) = rows::check(y.len(), previous, current) {
        debug!("{e}");
        return Err(e);
    }

    let n = y.len();
    Ok(roll(x, y, &w, &mut previous[..=n], &mut current[..=n]))
}
