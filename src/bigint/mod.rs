// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

#[macro_use]
mod ops;

mod add;
#[cfg(test)]
mod arb;
mod cmp;
mod codec;
mod convert;
mod div;
pub mod magnitude;
pub mod mul;

use std::fmt;

pub use magnitude::{CHUNK_BASE, CHUNK_DIGITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[inline]
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    /// Sign of a product or quotient of operands with these signs.
    #[inline]
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Arbitrary-precision signed integer.
///
/// Stored as sign plus magnitude, the magnitude being little-endian base [`CHUNK_BASE`] chunks.
/// Every value is kept canonical: the magnitude has no most significant zero chunks and
/// zero is always [`Sign::Positive`], so the derived equality is value equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

impl BigInt {
    /// Builds a canonical value out of any raw magnitude.
    pub(crate) fn from_mag(sign: Sign, mut mag: Vec<u32>) -> Self {
        magnitude::normalize(&mut mag);
        let sign = if magnitude::is_zero(&mag) {
            Sign::Positive
        } else {
            sign
        };

        Self { sign, mag }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            mag: vec![0],
        }
    }

    #[must_use]
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            mag: vec![1],
        }
    }

    /// Builds a value from little-endian chunks. Returns `None` if a chunk is not below
    /// [`CHUNK_BASE`].
    #[must_use]
    pub fn from_chunks(sign: Sign, chunks: Vec<u32>) -> Option<Self> {
        if chunks.iter().any(|&c| c >= CHUNK_BASE) {
            return None;
        }

        Some(Self::from_mag(sign, chunks))
    }

    #[inline]
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Little-endian chunks of the magnitude. Never empty.
    #[inline]
    #[must_use]
    pub fn chunks(&self) -> &[u32] {
        &self.mag
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.mag == [0]
    }

    #[inline]
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[inline]
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            mag: self.mag.clone(),
        }
    }

    /// `-1`, `0` or `1`.
    #[must_use]
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self {
                sign: self.sign,
                mag: vec![1],
            }
        }
    }

    /// Unary plus.
    #[inline]
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}
