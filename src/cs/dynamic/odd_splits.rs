use std::fmt;
use std::ops::RangeInclusive;

use log::{debug, info};
use num_integer::Integer;

use super::coin_change::count_denoms_splits;

pub const DEFAULT_DENOMS: [usize; 4] = [1, 5, 10, 25];
pub const DEFAULT_TARGET: usize = 100;
pub const DEFAULT_AMOUNTS: RangeInclusive<usize> = 1..=100;

/// Whether an integer is even or odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    pub fn of(value: usize) -> Self {
        if value.is_odd() {
            Parity::Odd
        } else {
            Parity::Even
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Sum of the odd split counts over a range of amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OddSplitSummary {
    pub sum: usize,
    /// Amounts whose split count was odd, in increasing order.
    pub odd_amounts: Vec<usize>,
    pub parity: Parity,
}

/// Counts the splits of every amount in `amounts` and sums those that are odd.
///
/// Each amount is counted from a fresh table; nothing is shared between
/// amounts.
///
/// # Examples
///
/// ```
/// use denoms::cs::dynamic::{sum_odd_splits, Parity};
///
/// // [1, 2] splits 1..=4 in 1, 2, 2, 3 ways.
/// let summary = sum_odd_splits(&[1, 2], 1..=4);
/// assert_eq!(summary.sum, 4);
/// assert_eq!(summary.odd_amounts, vec![1, 4]);
/// assert_eq!(summary.parity, Parity::Even);
/// ```
pub fn sum_odd_splits(denoms: &[usize], amounts: RangeInclusive<usize>) -> OddSplitSummary {
    let mut sum = 0;
    let mut odd_amounts = Vec::new();

    for amount in amounts {
        let ways = count_denoms_splits(denoms, amount);
        debug!("amount {amount}: {ways} splits");
        if ways.is_odd() {
            sum += ways;
            odd_amounts.push(amount);
        }
    }

    OddSplitSummary {
        sum,
        odd_amounts,
        parity: Parity::of(sum),
    }
}

/// Inputs for one reporting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub denoms: Vec<usize>,
    pub target: usize,
    pub amounts: RangeInclusive<usize>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            denoms: DEFAULT_DENOMS.to_vec(),
            target: DEFAULT_TARGET,
            amounts: DEFAULT_AMOUNTS,
        }
    }
}

impl Scenario {
    pub fn with_denoms(mut self, denoms: &[usize]) -> Self {
        self.denoms = denoms.to_vec();
        self
    }

    pub fn with_target(mut self, target: usize) -> Self {
        self.target = target;
        self
    }

    pub fn with_amounts(mut self, amounts: RangeInclusive<usize>) -> Self {
        self.amounts = amounts;
        self
    }
}

/// Results of [`run`], rendered by its `Display` impl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub denoms: Vec<usize>,
    pub target: usize,
    pub amounts: RangeInclusive<usize>,
    /// Number of ways to split `target`.
    pub ways: usize,
    pub odd_splits: OddSplitSummary,
}

/// Counts the splits of the scenario's target, then sums the odd split
/// counts over its amounts.
pub fn run(scenario: &Scenario) -> Report {
    let ways = count_denoms_splits(&scenario.denoms, scenario.target);
    info!(
        "{ways} ways to split {} into {:?}",
        scenario.target, scenario.denoms
    );

    let odd_splits = sum_odd_splits(&scenario.denoms, scenario.amounts.clone());
    info!(
        "odd split counts over {:?} sum to {} ({} amounts)",
        scenario.amounts,
        odd_splits.sum,
        odd_splits.odd_amounts.len()
    );

    Report {
        denoms: scenario.denoms.clone(),
        target: scenario.target,
        amounts: scenario.amounts.clone(),
        ways,
        odd_splits,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "denominations: {:?}", self.denoms)?;
        writeln!(f, "target: {}", self.target)?;
        writeln!(f, "ways to split: {}", self.ways)?;
        writeln!(
            f,
            "sum of odd split counts for {} through {}: {}",
            self.amounts.start(),
            self.amounts.end(),
            self.odd_splits.sum
        )?;
        write!(f, "... which is {}", self.odd_splits.parity)
    }
}
