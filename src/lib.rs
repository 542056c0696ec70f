// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

//! # decint
//! Arbitrary-precision signed integers stored as little-endian base `10^9` chunks.
//!
//! ## Features
//! * **Decimal native**: values are kept in base `10^9`, so parsing and rendering decimal text
//!   is a plain regrouping of digits with no base conversion.
//! * **Floor division**: `/` and `%` round toward negative infinity, the remainder always
//!   carries the sign of the divisor.
//! * **Karatsuba**: multiplication switches from the schoolbook algorithm to Karatsuba once both
//!   operands reach a configurable chunk count.
//! * **Immutable values**: every operation produces a fresh normalized value, compound assignment
//!   simply rebinds.
//!
//! ## Example
//! ```
//! use decint::BigInt;
//!
//! let a: BigInt = "100000000000000000000".parse().unwrap();
//! let b: BigInt = "99999999999999999999".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "199999999999999999999");
//! assert_eq!(BigInt::from(-10) / BigInt::from(3), BigInt::from(-4));
//! assert_eq!(BigInt::from(-10) % BigInt::from(3), BigInt::from(2));
//! ```

pub mod bigint;
pub mod error;
pub mod settings;

pub use bigint::{BigInt, Sign, CHUNK_BASE, CHUNK_DIGITS};
pub use error::{BigIntErr, StreamErr};
