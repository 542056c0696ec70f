// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use super::magnitude::CHUNK_BASE;
use super::{BigInt, Sign};
use crate::error::BigIntErr;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, FromPrimitive, Num, One, Signed, ToPrimitive,
    Zero,
};

impl BigInt {
    fn from_u128_with_sign(sign: Sign, mut value: u128) -> Self {
        let mut mag = Vec::with_capacity(5);
        while value > 0 {
            mag.push((value % u128::from(CHUNK_BASE)) as u32);
            value /= u128::from(CHUNK_BASE);
        }

        Self::from_mag(sign, mag)
    }

    /// Magnitude as `u128`, `None` if it does not fit.
    fn mag_to_u128(&self) -> Option<u128> {
        self.mag.iter().rev().try_fold(0_u128, |acc, &chunk| {
            acc.checked_mul(u128::from(CHUNK_BASE))?
                .checked_add(u128::from(chunk))
        })
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_u128_with_sign(Sign::Positive, value as u128)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                    Self::from_u128_with_sign(sign, value.unsigned_abs() as u128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_u128().and_then(|v| u64::try_from(v).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        let mag = self.mag_to_u128()?;
        match self.sign {
            Sign::Positive => i128::try_from(mag).ok(),
            Sign::Negative if mag == i128::MIN.unsigned_abs() => Some(i128::MIN),
            Sign::Negative => i128::try_from(mag).ok().map(|v| -v),
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }

        self.mag_to_u128()
    }
}

impl FromPrimitive for BigInt {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_i128(n: i128) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u128(n: u128) -> Option<Self> {
        Some(Self::from(n))
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        BigInt::zero()
    }

    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    fn one() -> Self {
        BigInt::one()
    }
}

impl Num for BigInt {
    type FromStrRadixErr = BigIntErr;

    /// Only radix 10 is supported.
    fn from_str_radix(text: &str, radix: u32) -> Result<Self, BigIntErr> {
        if radix != 10 {
            return Err(BigIntErr::InvalidFormat);
        }

        Self::parse(text)
    }
}

impl Signed for BigInt {
    fn abs(&self) -> Self {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        BigInt::signum(self)
    }

    fn is_positive(&self) -> bool {
        BigInt::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl CheckedAdd for BigInt {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.div_floor(v).ok()
    }
}
