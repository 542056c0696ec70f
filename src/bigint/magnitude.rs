// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

//! Unsigned chunk-vector arithmetic.
//!
//! A magnitude is a little-endian sequence of base [`CHUNK_BASE`] digits. Functions in this module
//! accept slices that may carry most significant zero chunks (or be empty, which reads as zero)
//! and always return normalized vectors unless stated otherwise.

use std::cmp::Ordering;

/// Value of a single chunk position.
pub const CHUNK_BASE: u32 = 1_000_000_000;

/// Decimal digits held by one chunk.
pub const CHUNK_DIGITS: usize = 9;

const BASE: u64 = CHUNK_BASE as u64;

/// Strips most significant zero chunks, leaving `[0]` for zero.
pub fn normalize(mag: &mut Vec<u32>) {
    while mag.len() > 1 && mag.last() == Some(&0) {
        mag.pop();
    }
    if mag.is_empty() {
        mag.push(0);
    }
}

/// Slice without its most significant zero chunks. Zero becomes the empty slice.
#[inline]
#[must_use]
pub fn trim(mag: &[u32]) -> &[u32] {
    let len = mag.iter().rposition(|&c| c != 0).map_or(0, |i| i + 1);
    &mag[..len]
}

#[inline]
#[must_use]
pub fn is_zero(mag: &[u32]) -> bool {
    mag.iter().all(|&c| c == 0)
}

/// Compares chunk count first, then chunks from the most significant end.
#[must_use]
pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    let (a, b) = (trim(a), trim(b));
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

#[must_use]
pub fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;

    for (i, &x) in long.iter().enumerate() {
        // Two chunks plus a carry stay below 2^31
        let sum = x + short.get(i).copied().unwrap_or(0) + carry;
        out.push(sum % CHUNK_BASE);
        carry = sum / CHUNK_BASE;
    }

    if carry > 0 {
        out.push(carry);
    }

    normalize(&mut out);
    out
}

/// `a - b`. Requires `a >= b`.
#[must_use]
pub fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = a.to_vec();
    sub_assign(&mut out, b);
    out
}

/// Subtracts `b` from `acc` in place and normalizes it. Requires `acc >= b`.
///
/// The borrow keeps rippling past the end of `b` through zero chunks of `acc`,
/// which the Karatsuba middle term relies on.
pub fn sub_assign(acc: &mut Vec<u32>, b: &[u32]) {
    debug_assert!(cmp(acc, b) != Ordering::Less);
    let b = trim(b);
    let mut borrow = 0;

    for (i, chunk) in acc.iter_mut().enumerate() {
        if i >= b.len() && borrow == 0 {
            break;
        }

        let rhs = b.get(i).copied().unwrap_or(0) + borrow;
        if *chunk >= rhs {
            *chunk -= rhs;
            borrow = 0;
        } else {
            *chunk = *chunk + CHUNK_BASE - rhs;
            borrow = 1;
        }
    }

    debug_assert_eq!(borrow, 0);
    normalize(acc);
}

/// Adds `x * BASE^shift` into `acc`, growing it as needed. The result is not normalized.
pub fn add_shifted(acc: &mut Vec<u32>, x: &[u32], shift: usize) {
    let x = trim(x);
    if x.is_empty() {
        return;
    }
    if acc.len() < shift + x.len() {
        acc.resize(shift + x.len(), 0);
    }

    let mut carry = 0;
    let mut pos = shift;
    for &chunk in x {
        let sum = acc[pos] + chunk + carry;
        acc[pos] = sum % CHUNK_BASE;
        carry = sum / CHUNK_BASE;
        pos += 1;
    }

    while carry > 0 {
        if pos == acc.len() {
            acc.push(0);
        }
        let sum = acc[pos] + carry;
        acc[pos] = sum % CHUNK_BASE;
        carry = sum / CHUNK_BASE;
        pos += 1;
    }
}

/// Multiplies a magnitude by a single chunk value.
#[must_use]
pub fn mul_chunk(a: &[u32], q: u32) -> Vec<u32> {
    let a = trim(a);
    if q == 0 || a.is_empty() {
        return vec![0];
    }

    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0_u64;
    for &chunk in a {
        let cur = u64::from(chunk) * u64::from(q) + carry;
        out.push((cur % BASE) as u32);
        carry = cur / BASE;
    }
    if carry > 0 {
        out.push(carry as u32);
    }

    out
}

/// Quadratic multiplication, the baseline every faster path is checked against.
#[must_use]
pub fn mul_schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (a, b) = (trim(a), trim(b));
    if a.is_empty() || b.is_empty() {
        return vec![0];
    }

    let mut out = vec![0_u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        // (BASE - 1) + (BASE - 1)^2 + carry < BASE^2, well inside u64
        let mut carry = 0_u64;
        for (j, &y) in b.iter().enumerate() {
            let cur = u64::from(out[i + j]) + u64::from(x) * u64::from(y) + carry;
            out[i + j] = (cur % BASE) as u32;
            carry = cur / BASE;
        }

        let mut k = i + b.len();
        while carry > 0 {
            let cur = u64::from(out[k]) + carry;
            out[k] = (cur % BASE) as u32;
            carry = cur / BASE;
            k += 1;
        }
    }

    normalize(&mut out);
    out
}
