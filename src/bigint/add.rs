// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use super::magnitude;
use super::{BigInt, Sign};
use std::cmp::Ordering;
use std::ops::Neg;

pub(crate) fn add(a: &BigInt, b: &BigInt) -> BigInt {
    add_signed(a, b, b.sign)
}

pub(crate) fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    // Zero keeps its sign under negation
    let b_sign = if b.is_zero() { b.sign } else { b.sign.flip() };
    add_signed(a, b, b_sign)
}

/// Adds `a` to the value with the magnitude of `b` and sign `b_sign`.
fn add_signed(a: &BigInt, b: &BigInt, b_sign: Sign) -> BigInt {
    if a.sign == b_sign {
        return BigInt::from_mag(a.sign, magnitude::add(&a.mag, &b.mag));
    }

    match magnitude::cmp(&a.mag, &b.mag) {
        Ordering::Equal => BigInt::zero(),
        Ordering::Greater => BigInt::from_mag(a.sign, magnitude::sub(&a.mag, &b.mag)),
        Ordering::Less => BigInt::from_mag(b_sign, magnitude::sub(&b.mag, &a.mag)),
    }
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn large_sum() {
        let a = big("100000000000000000000");
        let b = big("99999999999999999999");
        assert_eq!(&a + &b, big("199999999999999999999"));
        assert_eq!(&a - &b, BigInt::one());
        assert_eq!(&b - &a, -BigInt::one());
    }

    #[test]
    fn mixed_signs() {
        assert_eq!(BigInt::from(5) + BigInt::from(-8), BigInt::from(-3));
        assert_eq!(BigInt::from(-5) + BigInt::from(8), BigInt::from(3));
        assert_eq!(BigInt::from(-5) - BigInt::from(-5), BigInt::zero());
        assert_eq!(BigInt::from(-5) + BigInt::from(5), BigInt::zero());
        assert_eq!(BigInt::from(-5) - BigInt::from(3), BigInt::from(-8));
        assert_eq!(BigInt::zero() - BigInt::from(3), BigInt::from(-3));
        assert_eq!(BigInt::from(3) - BigInt::zero(), BigInt::from(3));
    }

    #[test]
    fn cancellation_yields_positive_zero() {
        let a = big("-123456789123456789123456789");
        let sum = &a + &(-&a);
        assert_eq!(sum.sign(), Sign::Positive);
        assert_eq!(sum.chunks(), &[0]);
    }

    #[test]
    fn borrow_across_chunks() {
        assert_eq!(
            big("1000000000000000000000000000") - BigInt::one(),
            big("999999999999999999999999999")
        );
        assert_eq!(
            big("-1000000000000000000") + BigInt::one(),
            big("-999999999999999999")
        );
    }

    #[test]
    fn negate_zero_stays_positive() {
        let z = -BigInt::zero();
        assert_eq!(z.sign(), Sign::Positive);
        assert_eq!(-(-BigInt::from(9)), BigInt::from(9));
        assert_eq!(-&BigInt::from(9), BigInt::from(-9));
    }

    #[test]
    fn compound_assignment_rebinds() {
        let a = big("100000000000000000000");
        let alias = a.clone();
        let mut h = a.clone();
        h += big("99999999999999999999");
        assert_eq!(h, big("199999999999999999999"));
        h -= &alias;
        assert_eq!(h, big("99999999999999999999"));
        assert_eq!(alias, a);
    }

    #[quickcheck]
    fn add_commutes(a: BigInt, b: BigInt) -> bool {
        &a + &b == &b + &a
    }

    #[quickcheck]
    fn add_associates(a: BigInt, b: BigInt, c: BigInt) -> bool {
        (&a + &b) + &c == &a + (&b + &c)
    }

    #[quickcheck]
    fn sub_undoes_add(a: BigInt, b: BigInt) -> bool {
        (&a + &b) - &b == a
    }

    #[quickcheck]
    fn sub_is_add_of_negation(a: BigInt, b: BigInt) -> bool {
        &a - &b == &a + &(-&b)
    }

    #[quickcheck]
    fn add_matches_ibig(a: BigInt, b: BigInt) -> bool {
        let expected = a.to_string().parse::<ibig::IBig>().unwrap()
            + b.to_string().parse::<ibig::IBig>().unwrap();
        (&a + &b).to_string() == expected.to_string()
    }
}
