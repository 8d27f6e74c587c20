//! Interval-narrowing arithmetic encoder.
//!
//! Encoding walks the input left to right and shrinks a working interval
//! once per symbol: the current `[low, high)` is replaced by the slice of
//! itself proportional to the symbol's model sub-interval. The width is
//! multiplied by a factor `< 1` at every step, so after a few hundred
//! symbols it is astronomically small; exact rationals keep the bounds
//! lossless where any fixed-width float would collapse to zero width.

use std::hash::Hash;

use crate::error::{Error, Result};
use crate::model::{Interval, Model};

/// Arithmetic encoder over a shared read-only model.
pub struct Encoder<'a, S> {
    model: &'a Model<S>,
    interval: Interval,
    position: usize,
}

impl<'a, S: Clone + Eq + Hash> Encoder<'a, S> {
    /// Create an encoder with the working interval at `[0, 1)`.
    pub fn new(model: &'a Model<S>) -> Self {
        Self {
            model,
            interval: Interval::default(),
            position: 0,
        }
    }

    /// Narrow the working interval by one symbol.
    ///
    /// Both bounds are derived from the pre-update `low`, i.e. the update
    /// is simultaneous:
    ///
    /// ```text
    /// low'  = low + (high - low) * Lj
    /// high' = low + (high - low) * Hj
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::UnknownSymbol`] if the symbol has no model entry.
    pub fn push(&mut self, symbol: &S) -> Result<()> {
        let entry = self
            .model
            .entry(symbol)
            .ok_or(Error::UnknownSymbol(self.position))?;

        let width = self.interval.width();
        let low = self.interval.low() + &width * entry.interval().low();
        let high = self.interval.low() + &width * entry.interval().high();
        self.interval = Interval::new(low, high);
        self.position += 1;
        Ok(())
    }

    /// Narrow the working interval by a whole sequence.
    pub fn push_all(&mut self, symbols: &[S]) -> Result<()> {
        for symbol in symbols {
            self.push(symbol)?;
        }
        Ok(())
    }

    /// Current working interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Finish encoding and return the final interval.
    pub fn finish(self) -> Interval {
        self.interval
    }
}

/// Encode a whole sequence against `model` in one call.
///
/// # Errors
/// Returns [`Error::UnknownSymbol`] if any symbol has no model entry.
pub fn encode<S: Clone + Eq + Hash>(model: &Model<S>, symbols: &[S]) -> Result<Interval> {
    let mut encoder = Encoder::new(model);
    encoder.push_all(symbols)?;
    Ok(encoder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    fn ratio(num: i64, den: i64) -> BigRational {
        BigRational::new(BigInt::from(num), BigInt::from(den))
    }

    #[test]
    fn test_ab_narrows_to_quarter_half() {
        let symbols = chars("ab");
        let model = Model::build(&symbols).unwrap();
        let interval = encode(&model, &symbols).unwrap();
        assert_eq!(interval.low(), &ratio(1, 4));
        assert_eq!(interval.high(), &ratio(1, 2));
    }

    #[test]
    fn test_single_symbol_keeps_unit_interval() {
        let symbols = chars("aaaa");
        let model = Model::build(&symbols).unwrap();
        let interval = encode(&model, &symbols).unwrap();
        assert_eq!(interval.low(), &ratio(0, 1));
        assert_eq!(interval.high(), &ratio(1, 1));
    }

    #[test]
    fn test_constant_sequence_never_narrows() {
        // A constant sequence builds a single-symbol model whose slice is
        // all of [0, 1); each step multiplies the width by exactly 1.
        let symbols = vec![4u8, 4];
        let model = Model::build(&symbols).unwrap();

        let mut encoder = Encoder::new(&model);
        for symbol in &symbols {
            encoder.push(symbol).unwrap();
            assert_eq!(encoder.interval(), &Interval::default());
        }
    }

    #[test]
    fn test_unknown_symbol_reports_position() {
        let model = Model::build(&chars("ab")).unwrap();
        let err = encode(&model, &chars("abc")).unwrap_err();
        assert_eq!(err, Error::UnknownSymbol(2));
    }

    #[test]
    fn test_each_step_properly_nests_the_interval() {
        let symbols = chars("abracadabra");
        let model = Model::build(&symbols).unwrap();

        let mut encoder = Encoder::new(&model);
        let mut previous = encoder.interval().clone();
        for symbol in &symbols {
            encoder.push(symbol).unwrap();
            let current = encoder.interval();
            assert!(current.low() >= previous.low());
            assert!(current.high() <= previous.high());
            assert!(current.width() < previous.width());
            assert!(current.low() < current.high());
            previous = current.clone();
        }
    }

    #[test]
    fn test_final_width_is_product_of_probabilities() {
        let symbols = chars("aab");
        let model = Model::build(&symbols).unwrap();
        let interval = encode(&model, &symbols).unwrap();
        // (2/3) * (2/3) * (1/3)
        assert_eq!(interval.width(), ratio(4, 27));
    }

    #[test]
    fn test_encoding_a_different_sequence_over_the_same_model() {
        let model = Model::build(&chars("ab")).unwrap();
        let interval = encode(&model, &chars("ba")).unwrap();
        assert_eq!(interval.low(), &ratio(1, 2));
        assert_eq!(interval.high(), &ratio(3, 4));
    }
}
