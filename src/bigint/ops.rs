// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

/// Implements a binary operator and its compound assignment for every owned/borrowed operand
/// pair on top of a single `fn(&BigInt, &BigInt) -> BigInt`.
///
/// Compound assignment computes a fresh value and rebinds `self`.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $func:path) => {
        impl<'a, 'b> ::std::ops::$imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &'b BigInt) -> BigInt {
                $func(self, rhs)
            }
        }

        impl<'b> ::std::ops::$imp<&'b BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: &'b BigInt) -> BigInt {
                $func(&self, rhs)
            }
        }

        impl<'a> ::std::ops::$imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(self, &rhs)
            }
        }

        impl ::std::ops::$imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: BigInt) -> BigInt {
                $func(&self, &rhs)
            }
        }

        impl<'b> ::std::ops::$assign_imp<&'b BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: &'b BigInt) {
                *self = $func(self, rhs);
            }
        }

        impl ::std::ops::$assign_imp<BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = $func(self, &rhs);
            }
        }
    };
}
