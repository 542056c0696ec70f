// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use super::magnitude;
use super::{BigInt, Sign};
use std::cmp::Ordering;

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // Negative sorts below Positive, and zero is always Positive
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => {}
            ord => return ord,
        }

        let ord = magnitude::cmp(&self.mag, &other.mag);
        match self.sign {
            Sign::Positive => ord,
            Sign::Negative => ord.reverse(),
        }
    }
}
