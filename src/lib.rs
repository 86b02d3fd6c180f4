//! # Overview
//!
//! This crate computes a weighted version of the [Levenshtein distance][levenshtein] between two
//! sequences of arbitrary symbols, that is the lowest total cost of the insertions, deletions and
//! substitutions that transform one sequence into the other, according to user-defined [Weights].
//!
//! The same recurrence is offered through four entry points that only differ in how they manage
//! memory:
//!
//! * [edit_distance] allocates the whole distance matrix on every call;
//! * [compact_edit_distance] allocates just two rows of it on every call;
//! * [buffered_edit_distance] fills a caller-provided [Matrix];
//! * [buffered_compact_edit_distance] works on caller-provided rows, see [Rows].
//!
//! The buffered variants never allocate, which makes them the natural choice for hot loops that
//! compute many distances, such as nearest-neighbor search or ranking spelling suggestions.
//! Buffers are validated once on entry and may be reused across calls without being cleared.
//!
//! [levenshtein]:  https://en.wikipedia.org/wiki/Levenshtein_distance
//!
//! # Example
//!
//! ```rust
//! use weighted_edit_distance::*;
//!
//! let words = ["apple", "snapple", "kitten", "sitting", "book", "burn"];
//! let words: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();
//!
//! let w = Weights::LEVENSHTEIN;
//! let mut d = Matrix::new(8, 8);
//!
//! let closest: Vec<_> = words
//!     .iter()
//!     .map(|x| {
//!         words
//!             .iter()
//!             .filter(|y| *y != x)
//!             .map(|y| buffered_edit_distance(x, y, w, &mut d))
//!             .collect::<Result<Vec<_>, _>>()
//!             .map(|ds| ds.into_iter().min())
//!     })
//!     .collect::<Result<_, _>>()?;
//!
//! assert_eq!(closest, [Some(2), Some(2), Some(3), Some(3), Some(3), Some(3)]);
//! # Ok::<_, Error>(())
//! ```

mod distance;
mod error;
mod matrix;
mod rows;
mod weights;

pub use distance::*;
pub use error::*;
pub use matrix::*;
pub use rows::*;
pub use weights::*;
