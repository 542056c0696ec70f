// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

//! Multiplication.
//!
//! A single entry point, [`mul_mag`], picks between the schoolbook product and Karatsuba by
//! operand size. The switch-over chunk count comes from [`crate::settings::SETTINGS`].
//! Karatsuba recursion depth is logarithmic in the operand length since every level at least
//! roughly halves the longest operand.

use super::magnitude::{self, normalize, trim};
use super::BigInt;
use crate::settings::{MIN_KARATSUBA_THRESHOLD, SETTINGS};
use log::*;

pub(crate) fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    BigInt::from_mag(a.sign.combine(b.sign), mul_mag(&a.mag, &b.mag))
}

forward_binop!(Mul, mul, MulAssign, mul_assign, mul);

/// Magnitude product using the configured Karatsuba threshold.
#[must_use]
pub fn mul_mag(a: &[u32], b: &[u32]) -> Vec<u32> {
    mul_karatsuba(a, b, SETTINGS.arith.karatsuba_threshold())
}

/// Magnitude product that switches to the schoolbook algorithm once either operand has fewer
/// than `threshold` chunks. Thresholds below [`MIN_KARATSUBA_THRESHOLD`] are raised to it.
#[must_use]
pub fn mul_karatsuba(a: &[u32], b: &[u32], threshold: usize) -> Vec<u32> {
    karatsuba(a, b, threshold.max(MIN_KARATSUBA_THRESHOLD))
}

fn karatsuba(a: &[u32], b: &[u32], threshold: usize) -> Vec<u32> {
    let (a, b) = (trim(a), trim(b));
    if a.len() < threshold || b.len() < threshold {
        return magnitude::mul_schoolbook(a, b);
    }

    let m = (a.len().max(b.len()) + 1) / 2;
    trace!("karatsuba split {}x{} chunks at {}", a.len(), b.len(), m);

    // The shorter operand may not reach the split point, its high half is then empty
    let (a_low, a_high) = a.split_at(m.min(a.len()));
    let (b_low, b_high) = b.split_at(m.min(b.len()));

    let z0 = karatsuba(a_low, b_low, threshold);
    let z2 = karatsuba(a_high, b_high, threshold);
    let mut z1 = karatsuba(
        &magnitude::add(a_low, a_high),
        &magnitude::add(b_low, b_high),
        threshold,
    );
    magnitude::sub_assign(&mut z1, &z2);
    magnitude::sub_assign(&mut z1, &z0);

    let mut out = Vec::with_capacity(a.len() + b.len() + 1);
    out.extend_from_slice(&z0);
    magnitude::add_shifted(&mut out, &z1, m);
    magnitude::add_shifted(&mut out, &z2, 2 * m);
    normalize(&mut out);
    out
}
