use derive_more::From;

/// The cost of each kind of edit.
///
/// Substituting a symbol for an identical one is a match and is always free, regardless of
/// [substitute][Weights::substitute].
///
/// # Example
///
/// ```rust
/// use weighted_edit_distance::Weights;
///
/// let w: Weights = (1, 2, 3).into();
///
/// assert_eq!(w.insert, 1);
/// assert_eq!(w.delete, 2);
/// assert_eq!(w.substitute, 3);
/// assert_eq!(Weights::uniform(1), Weights::LEVENSHTEIN);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct Weights {
    /// The cost of inserting a symbol of the right-hand side.
    pub insert: usize,

    /// The cost of deleting a symbol of the left-hand side.
    pub delete: usize,

    /// The cost of replacing a symbol by a different one.
    pub substitute: usize,
}

impl Weights {
    /// The classic Levenshtein distance, every edit costs one.
    pub const LEVENSHTEIN: Self = Self::uniform(1);

    /// Every edit costs the same.
    #[inline]
    pub const fn uniform(cost: usize) -> Self {
        Weights {
            insert: cost,
            delete: cost,
            substitute: cost,
        }
    }
}
