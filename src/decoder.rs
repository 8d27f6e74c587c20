//! Arithmetic decoder: interval narrowing replayed in reverse.
//!
//! The decoder holds the codeword's exact rational value and repeatedly
//! asks which model sub-interval contains it. Each hit emits that symbol
//! and renormalizes the number back into `[0, 1)` relative to the chosen
//! sub-interval, undoing one encoding step. The coder is not
//! self-terminating: there is no end-of-message symbol, so the caller
//! supplies the original symbol count out of band.

use std::hash::Hash;

use num_rational::BigRational;

use crate::codeword::Codeword;
use crate::error::{Error, Result};
use crate::model::Model;

/// Arithmetic decoder over a shared read-only model.
pub struct Decoder<'a, S> {
    model: &'a Model<S>,
    number: BigRational,
}

impl<'a, S: Clone + Eq + Hash> Decoder<'a, S> {
    /// Create a decoder positioned at an exact rational `number`.
    pub fn new(model: &'a Model<S>, number: BigRational) -> Self {
        Self { model, number }
    }

    /// Create a decoder from a codeword, interpreting it as `0.b1b2...bk`.
    pub fn from_codeword(model: &'a Model<S>, codeword: &Codeword) -> Self {
        Self::new(model, codeword.value())
    }

    /// Decode one symbol and renormalize.
    ///
    /// Scans entries in their fixed first-occurrence order for the
    /// half-open sub-interval containing the current number, then maps the
    /// remainder back into `[0, 1)` with
    /// `number := (number - low) / (high - low)`.
    ///
    /// # Errors
    /// Returns [`Error::NoMatchingInterval`] if no sub-interval contains
    /// the number: the model, codeword, or length do not belong together.
    pub fn next_symbol(&mut self) -> Result<S> {
        for (symbol, entry) in self.model.iter() {
            let interval = entry.interval();
            if interval.contains(&self.number) {
                self.number = (&self.number - interval.low()) / interval.width();
                return Ok(symbol.clone());
            }
        }
        Err(Error::NoMatchingInterval)
    }

    /// Decode exactly `count` symbols.
    pub fn decode(&mut self, count: usize) -> Result<Vec<S>> {
        let mut symbols = Vec::with_capacity(count);
        for _ in 0..count {
            symbols.push(self.next_symbol()?);
        }
        Ok(symbols)
    }
}

/// Decode `count` symbols of `codeword` against `model` in one call.
///
/// # Errors
/// Returns [`Error::NoMatchingInterval`] on a model/codeword/length
/// mismatch.
pub fn decode<S: Clone + Eq + Hash>(
    model: &Model<S>,
    codeword: &Codeword,
    count: usize,
) -> Result<Vec<S>> {
    Decoder::from_codeword(model, codeword).decode(count)
}
