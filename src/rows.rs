use crate::Error;

/// A reusable pair of rows for the compacted solver.
///
/// Both rows have the same length, one more than the longest right-hand side they can hold.
///
/// # Example
///
/// ```rust
/// use weighted_edit_distance::{buffered_compact_edit_distance, Rows, Weights};
///
/// let mut rows = Rows::new(16);
/// let w = Weights::LEVENSHTEIN;
///
/// for (x, y, d) in [("apple", "snapple", 2), ("kitten", "sitting", 3), ("", "abc", 3)] {
///     let x: Vec<_> = x.chars().collect();
///     let y: Vec<_> = y.chars().collect();
///     let (previous, current) = rows.split();
///     assert_eq!(buffered_compact_edit_distance(&x, &y, w, previous, current), Ok(d));
/// }
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Rows {
    previous: Box<[usize]>,
    current: Box<[usize]>,
}

impl Rows {
    /// Allocates zeroed rows for right-hand sides of length up to `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n + 1` overflows `usize`.
    pub fn new(n: usize) -> Self {
        let len = match n.checked_add(1) {
            Some(len) => len,
            None => panic!("a row of {n} symbols overflows usize"),
        };

        Rows {
            previous: vec![0; len].into_boxed_slice(),
            current: vec![0; len].into_boxed_slice(),
        }
    }

    /// Like [Rows::new], but reports allocation failure instead of aborting.
    pub fn try_new(n: usize) -> Result<Self, Error> {
        let len = n.checked_add(1).ok_or(Error::Overflow)?;

        Ok(Rows {
            previous: row(len)?,
            current: row(len)?,
        })
    }

    /// The longest right-hand side these rows can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.previous.len() - 1
    }

    /// Fails with [Error::RowCapacity] unless a right-hand side of length `n` fits.
    pub fn check(&self, n: usize) -> Result<(), Error> {
        check(n, &self.previous, &self.current)
    }

    /// Borrows the rows as `(previous, current)`.
    #[inline]
    pub fn split(&mut self) -> (&mut [usize], &mut [usize]) {
        (&mut *self.previous, &mut *self.current)
    }
}

fn row(len: usize) -> Result<Box<[usize]>, Error> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation { cells: len })?;
    buffer.resize(len, 0);
    Ok(buffer.into_boxed_slice())
}

pub(crate) fn check(n: usize, previous: &[usize], current: &[usize]) -> Result<(), Error> {
    let required = n.saturating_add(1);
    let available = previous.len().min(current.len());

    if required <= available {
        Ok(())
    } else {
        Err(Error::RowCapacity {
            required,
            available,
        })
    }
}
