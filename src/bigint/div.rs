// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

//! Floor division.
//!
//! The long division below truncates toward zero. The signed wrappers turn that into floor
//! rounding by stepping the quotient down once when the operand signs differ and the division
//! is inexact, which makes every nonzero remainder carry the sign of the divisor.

use super::magnitude::{self, normalize, CHUNK_BASE};
use super::{BigInt, Sign};
use crate::error::BigIntErr;
use log::*;
use std::cmp::Ordering;

impl BigInt {
    /// Quotient rounded toward negative infinity.
    pub fn div_floor(&self, other: &BigInt) -> Result<BigInt, BigIntErr> {
        if other.is_zero() {
            return Err(BigIntErr::DivisionByZero);
        }

        let sign = self.sign.combine(other.sign);
        if other.mag == [1] {
            return Ok(BigInt::from_mag(sign, self.mag.clone()));
        }

        let (quotient, exact) = match magnitude::cmp(&self.mag, &other.mag) {
            Ordering::Less => (BigInt::zero(), self.is_zero()),
            Ordering::Equal => (BigInt::from_mag(sign, vec![1]), true),
            Ordering::Greater => {
                let (q, r) = long_division(&self.mag, &other.mag);
                (BigInt::from_mag(sign, q), magnitude::is_zero(&r))
            }
        };

        if sign == Sign::Negative && !exact {
            return Ok(&quotient - &BigInt::one());
        }

        Ok(quotient)
    }

    /// `self - self.div_floor(other) * other`. A nonzero result has the sign of `other`.
    pub fn rem_floor(&self, other: &BigInt) -> Result<BigInt, BigIntErr> {
        self.div_rem_floor(other).map(|(_, r)| r)
    }

    /// Floor quotient and remainder together.
    pub fn div_rem_floor(&self, other: &BigInt) -> Result<(BigInt, BigInt), BigIntErr> {
        let q = self.div_floor(other)?;
        let r = self - &(&q * other);
        Ok((q, r))
    }
}

/// Schoolbook long division of magnitudes, `a >= b > 1`. Returns truncated quotient and remainder.
fn long_division(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    trace!("long division {} by {} chunks", a.len(), b.len());
    let mut quotient = Vec::with_capacity(a.len());
    let mut rem = vec![0];

    for &chunk in a.iter().rev() {
        rem.insert(0, chunk);
        normalize(&mut rem);

        let q = largest_multiple(&rem, b);
        if q > 0 {
            magnitude::sub_assign(&mut rem, &magnitude::mul_chunk(b, q));
        }
        quotient.push(q);
    }

    quotient.reverse();
    normalize(&mut quotient);
    (quotient, rem)
}

/// Largest `q` in `[0, CHUNK_BASE)` with `q * b <= rem`, found by binary search.
fn largest_multiple(rem: &[u32], b: &[u32]) -> u32 {
    if magnitude::cmp(rem, b) == Ordering::Less {
        return 0;
    }

    let (mut lo, mut hi) = (1, CHUNK_BASE - 1);
    let mut best = 1;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if magnitude::cmp(&magnitude::mul_chunk(b, mid), rem) == Ordering::Greater {
            hi = mid - 1;
        } else {
            best = mid;
            lo = mid + 1;
        }
    }

    best
}

fn div(a: &BigInt, b: &BigInt) -> BigInt {
    match a.div_floor(b) {
        Ok(q) => q,
        Err(_) => panic!("attempt to divide by zero"),
    }
}

fn rem(a: &BigInt, b: &BigInt) -> BigInt {
    match a.rem_floor(b) {
        Ok(r) => r,
        Err(_) => panic!("attempt to calculate the remainder with a divisor of zero"),
    }
}

forward_binop!(Div, div, DivAssign, div_assign, div);
forward_binop!(Rem, rem, RemAssign, rem_assign, rem);
