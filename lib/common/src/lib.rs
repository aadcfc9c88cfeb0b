//! Numeric plumbing shared by the `objtext` parser and writer.

use std::{
    fmt::{Debug, Display, LowerExp},
    str::FromStr,
};

use num_traits::{AsPrimitive, Float, PrimInt};

pub mod number;

pub use number::{NumberError, Shortest};

/// Trait for types which can act as indices within an array (or an array-like structure).
///
/// Text formats count from 1; values of an `ArrayIndex` always count from 0.
pub trait ArrayIndex:
    PrimInt + AsPrimitive<usize> + Debug + Display + Send + Sync + 'static
{
    /// Convert a 1-based index, as read from text, to a 0-based index.
    ///
    /// Returns `None` if the result would be negative or doesn't fit within `Self`.
    #[inline]
    fn from_one_based(n: i64) -> Option<Self> {
        n.checked_sub(1)
            .filter(|i| *i >= 0)
            .and_then(<Self as num_traits::NumCast>::from)
    }

    /// The 1-based form of this index, as written to text.
    #[inline]
    fn to_one_based(self) -> i128 {
        // every primitive integer up to 64 bits fits in an i128
        self.to_i128().map_or(i128::MAX, |i| i + 1)
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt + AsPrimitive<usize> + Debug + Display + Send + Sync + 'static
{
}

/// Trait for floating-point types which can be stored as mesh coordinates.
///
/// `Display` & `LowerExp` must produce the shortest digits which read back as the same value;
/// this holds for [f32] and [f64].
pub trait Real: Float + FromStr + Display + LowerExp + Debug + Send + Sync + 'static {}
impl<R> Real for R where R: Float + FromStr + Display + LowerExp + Debug + Send + Sync + 'static {}
