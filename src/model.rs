//! Static probability model and interval partition.
//!
//! The model maps each distinct symbol of a training sequence to its exact
//! probability, its occurrence count, and a half-open sub-interval of
//! `[0, 1)` proportional to that probability. Entries keep the order of
//! first occurrence; encode and decode walk the same order, so the
//! partition is reproducible from the training sequence alone.

use std::fmt;
use std::hash::Hash;

use ahash::AHashMap;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, ToPrimitive, Zero};

use crate::error::{Error, Result};

/// A half-open interval `[low, high)` with exact rational bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    low: BigRational,
    high: BigRational,
}

impl Interval {
    /// Create an interval from exact bounds.
    pub fn new(low: BigRational, high: BigRational) -> Self {
        Self { low, high }
    }

    /// Lower bound (inclusive).
    pub fn low(&self) -> &BigRational {
        &self.low
    }

    /// Upper bound (exclusive).
    pub fn high(&self) -> &BigRational {
        &self.high
    }

    /// Exact width `high - low`.
    pub fn width(&self) -> BigRational {
        &self.high - &self.low
    }

    /// Whether `number` lies inside the half-open interval.
    pub fn contains(&self, number: &BigRational) -> bool {
        &self.low <= number && number < &self.high
    }
}

impl Default for Interval {
    /// The unit interval `[0, 1)`.
    fn default() -> Self {
        Self::new(BigRational::zero(), BigRational::one())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.low, self.high)
    }
}

/// Per-symbol model data: probability, count, and partition slot.
#[derive(Debug, Clone)]
pub struct SymbolEntry {
    probability: BigRational,
    frequency: u64,
    interval: Interval,
}

impl SymbolEntry {
    fn new(probability: BigRational) -> Self {
        Self {
            probability,
            frequency: 1,
            interval: Interval::default(),
        }
    }

    /// Exact probability in `(0, 1]`.
    pub fn probability(&self) -> &BigRational {
        &self.probability
    }

    /// Occurrence count in the training sequence.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// The symbol's sub-interval of `[0, 1)`.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }
}

/// Ordered symbol -> entry mapping shared by encoder and decoder.
///
/// Entry order is the order of first occurrence in the training sequence.
/// It is arbitrary with respect to probability and must never be re-sorted:
/// the partition walked during decode has to be the one used to encode.
#[derive(Debug, Clone)]
pub struct Model<S> {
    entries: Vec<(S, SymbolEntry)>,
    index: AHashMap<S, usize>,
}

impl<S: Clone + Eq + Hash> Model<S> {
    /// Build a model from a non-empty training sequence.
    ///
    /// Each occurrence contributes exactly `1/N` of probability mass;
    /// afterwards the entries are partitioned into contiguous sub-intervals
    /// of `[0, 1)` in insertion order. All arithmetic is exact, so the
    /// accumulated upper bound lands on 1 precisely.
    ///
    /// # Errors
    /// Returns [`Error::EmptyInput`] if `symbols` is empty.
    pub fn build(symbols: &[S]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(Error::EmptyInput);
        }

        let step = BigRational::new(BigInt::one(), BigInt::from(symbols.len()));
        let mut entries: Vec<(S, SymbolEntry)> = Vec::new();
        let mut index: AHashMap<S, usize> = AHashMap::new();

        for symbol in symbols {
            match index.get(symbol) {
                Some(&slot) => {
                    let entry = &mut entries[slot].1;
                    entry.probability += &step;
                    entry.frequency += 1;
                }
                None => {
                    index.insert(symbol.clone(), entries.len());
                    entries.push((symbol.clone(), SymbolEntry::new(step.clone())));
                }
            }
        }

        let mut lo = BigRational::zero();
        for (_, entry) in &mut entries {
            let hi = &lo + &entry.probability;
            entry.interval = Interval::new(lo, hi.clone());
            lo = hi;
        }
        debug_assert!(lo.is_one());

        Ok(Self { entries, index })
    }

    /// Look up the entry for a symbol.
    pub fn entry(&self, symbol: &S) -> Option<&SymbolEntry> {
        self.index.get(symbol).map(|&slot| &self.entries[slot].1)
    }

    /// Iterate entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &SymbolEntry)> {
        self.entries.iter().map(|(s, e)| (s, e))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model has no entries. Unreachable through [`Model::build`],
    /// which rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Shannon entropy of the model in bits per symbol.
    ///
    /// Reporting-only, so the lossy conversion to `f64` is acceptable here;
    /// everything the codec itself depends on stays exact.
    pub fn entropy(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, e)| {
                let p = e.probability.to_f64().unwrap_or(0.0);
                -p * p.log2()
            })
            .sum()
    }
}
