use log::trace;
use num_traits::PrimInt;

use crate::error::{Error, Result};

/// Dynamic-programming table of split counts for every amount `0..=target`.
///
/// A fresh table holds a single split for amount 0 (the empty combination)
/// and none for any other amount. After folding in a sequence of
/// denominations, `ways(i)` is the number of combinations of those
/// denominations, each usable any number of times, that sum exactly to `i`.
///
/// # Examples
///
/// ```
/// use denoms::cs::dynamic::SplitTable;
///
/// let mut table = SplitTable::<u64>::new(4);
/// table.fold(1);
/// assert_eq!(table.as_slice(), &[1, 1, 1, 1, 1]);
///
/// table.fold(2);
/// // 4 = 1+1+1+1 = 1+1+2 = 2+2
/// assert_eq!(table.as_slice(), &[1, 1, 2, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTable<T> {
    ways: Vec<T>,
}

impl<T: PrimInt> SplitTable<T> {
    /// Creates a table for amounts `0..=target` with no denominations folded in.
    pub fn new(target: usize) -> Self {
        let mut ways = vec![T::zero(); target + 1];
        ways[0] = T::one();
        Self { ways }
    }

    /// The largest amount tracked by the table.
    pub fn target(&self) -> usize {
        self.ways.len() - 1
    }

    /// Folds one denomination into the table.
    ///
    /// Amounts are visited in increasing order so that `ways[i - denom]`
    /// already includes splits using `denom`, which is what makes the supply
    /// of each denomination unbounded.
    ///
    /// `denom` must be positive and counts must fit in `T`; neither is
    /// checked here. Use [`SplitTable::try_fold`] when either may not hold.
    pub fn fold(&mut self, denom: usize) {
        for amount in denom..self.ways.len() {
            self.ways[amount] = self.ways[amount] + self.ways[amount - denom];
        }
    }

    /// Checked version of [`SplitTable::fold`].
    ///
    /// Rejects a zero denomination and reports the first amount whose count
    /// would overflow `T`. The table is unchanged when an error is returned.
    pub fn try_fold(&mut self, denom: usize) -> Result<()> {
        if denom == 0 {
            return Err(Error::InvalidDenomination { index: 0 });
        }

        let mut next = self.ways.clone();
        for amount in denom..next.len() {
            next[amount] = next[amount]
                .checked_add(&next[amount - denom])
                .ok_or(Error::Overflow { amount })?;
        }
        self.ways = next;
        Ok(())
    }

    /// Number of splits of `amount`, or `None` if it is past the target.
    pub fn ways(&self, amount: usize) -> Option<T> {
        self.ways.get(amount).copied()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.ways
    }

    /// Consumes the table, returning the number of splits of the target.
    pub fn into_ways(self) -> T {
        self.ways[self.ways.len() - 1]
    }
}

/// Counts the ways to split `target` into the given denominations.
///
/// Each denomination may be used any number of times and order does not
/// matter, so `[1, 2]` splits 4 as `1+1+1+1`, `1+1+2` and `2+2`. The
/// denominations are folded in the order given; the final count does not
/// depend on that order.
///
/// Denominations must be positive and the count must fit in a `usize`. This
/// is the caller's responsibility; see [`try_count_denoms_splits`] for a
/// version that checks both.
///
/// # Examples
///
/// ```
/// use denoms::cs::dynamic::count_denoms_splits;
///
/// assert_eq!(count_denoms_splits(&[1, 2], 4), 3);
/// assert_eq!(count_denoms_splits(&[1, 5, 10, 25], 100), 242);
///
/// // Zero coins sum to zero in exactly one way.
/// assert_eq!(count_denoms_splits(&[], 0), 1);
/// assert_eq!(count_denoms_splits(&[], 7), 0);
/// ```
pub fn count_denoms_splits(denoms: &[usize], target: usize) -> usize {
    let mut table = SplitTable::<usize>::new(target);
    for &denom in denoms {
        table.fold(denom);
        trace!("folded denomination {denom} into split table for target {target}");
    }
    table.into_ways()
}

/// Checked version of [`count_denoms_splits`].
///
/// Returns [`Error::InvalidDenomination`] for a zero denomination and
/// [`Error::Overflow`] if any intermediate count exceeds `usize::MAX`. For
/// valid inputs the result is identical to the unchecked count.
///
/// # Examples
///
/// ```
/// use denoms::cs::dynamic::try_count_denoms_splits;
/// use denoms::Error;
///
/// assert_eq!(try_count_denoms_splits(&[1, 5, 10, 25], 100), Ok(242));
/// assert_eq!(
///     try_count_denoms_splits(&[1, 0], 3),
///     Err(Error::InvalidDenomination { index: 1 })
/// );
/// ```
pub fn try_count_denoms_splits(denoms: &[usize], target: usize) -> Result<usize> {
    if let Some(index) = denoms.iter().position(|&denom| denom == 0) {
        return Err(Error::InvalidDenomination { index });
    }

    let mut table = SplitTable::<usize>::new(target);
    for &denom in denoms {
        table.try_fold(denom)?;
        trace!("folded denomination {denom} into split table for target {target}");
    }
    Ok(table.into_ways())
}
