//! # Exact Arithmetic Coding
//!
//! *Entropy coding by interval narrowing over arbitrary-precision rationals.*
//!
//! ## Intuition First
//!
//! Picture the unit interval `[0, 1)` carved into one slice per symbol,
//! each slice as wide as that symbol's probability. Encoding a message
//! means repeatedly zooming into the slice of the next symbol: after the
//! whole message the working interval is a tiny window that only that
//! exact message reaches. Any number inside the window identifies the
//! message, so the coder emits the shortest binary fraction that fits.
//!
//! ## The Problem
//!
//! Prefix coders like Huffman must spend a whole number of bits per
//! symbol, rounding every probability to a power of two. Arithmetic
//! coding lets symbols share bits: a symbol with probability 0.9 costs
//! only ~0.15 bits. The price is numerical delicacy — the interval width
//! shrinks geometrically, and after a few hundred symbols no fixed-width
//! float can hold the bounds apart. This crate therefore does every step
//! of the codec in exact rational arithmetic and only converts to digits
//! at the very end, growing the working precision until the two bounds
//! become distinguishable.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1952  Huffman     Optimal prefix codes, whole bits per symbol
//! 1976  Rissanen    Arithmetic coding reaches the entropy rate
//! 1987  Witten+     Practical fixed-precision arithmetic coding (CACM)
//! 2007  Duda        ANS trades the interval for an integer state
//! ```
//!
//! ## Mathematical Formulation
//!
//! Given symbol `c` with partition slice `[L_c, H_c)`, one encoding step
//! maps the working interval `[low, high)` through
//!
//! ```text
//! low'  = low + (high - low) * L_c
//! high' = low + (high - low) * H_c
//! ```
//!
//! Decoding inverts it: find the slice containing the number `x`, emit
//! its symbol, and renormalize `x := (x - L_c) / (H_c - L_c)`.
//!
//! ## Complexity Analysis
//!
//! - **Time**: one exact rational multiply-add per symbol; numerators and
//!   denominators grow linearly in message length, so a full encode is
//!   quadratic in bit operations. Codeword selection renders at most
//!   `O(log(1/width))` binary digits, doubling its precision as needed.
//! - **Space**: `O(alphabet)` for the model, `O(message)` for the bounds.
//!
//! ## Failure Modes
//!
//! 1. **Model mismatch**: decoding depends on the caller-supplied model
//!    and symbol count. A number outside every slice is reported, but a
//!    plausible-looking wrong model decodes to garbage undetectably.
//! 2. **Pathological precision**: the digit search doubles its working
//!    precision until the bounds separate and gives up past a large cap
//!    rather than looping forever.
//!
//! ## Example
//!
//! ```
//! use arith::{decode, encode, Codeword, Model};
//!
//! let symbols: Vec<char> = "abracadabra".chars().collect();
//! let model = Model::build(&symbols)?;
//!
//! let interval = encode(&model, &symbols)?;
//! let codeword = Codeword::from_interval(&interval)?;
//!
//! let decoded = decode(&model, &codeword, symbols.len())?;
//! assert_eq!(decoded, symbols);
//! # Ok::<(), arith::Error>(())
//! ```
//!
//! ## Implementation Notes
//!
//! The model is an explicit insertion-ordered map built once per training
//! sequence and shared read-only by encoder and decoder; first-occurrence
//! order fixes the partition, so both sides reproduce it from the same
//! sequence without any ambient state. The codeword is a bare digit
//! string with an implicit leading `0.`; callers who concatenate several
//! codewords must delimit them, and the symbol count travels out of band.
//!
//! ## References
//!
//! - Rissanen, J. (1976). "Generalized Kraft inequality and arithmetic coding."
//! - Witten, I., Neal, R., Cleary, J. (1987). "Arithmetic coding for data compression."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codeword;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod model;

pub use codeword::Codeword;
pub use decoder::{decode, Decoder};
pub use encoder::{encode, Encoder};
pub use error::{Error, Result};
pub use model::{Interval, Model, SymbolEntry};
