// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use super::{BigInt, Sign, CHUNK_BASE};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        // One in four values is a machine integer so that small and zero operands show up
        if u8::arbitrary(g) % 4 == 0 {
            return BigInt::from(i64::arbitrary(g));
        }

        let len = usize::arbitrary(g) % g.size().max(1) + 1;
        let chunks = (0..len).map(|_| u32::arbitrary(g) % CHUNK_BASE).collect();
        let sign = if bool::arbitrary(g) {
            Sign::Negative
        } else {
            Sign::Positive
        };

        BigInt::from_mag(sign, chunks)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let sign = self.sign;
        let mag = self.mag.clone();
        let shorter = (1..mag.len())
            .rev()
            .map(move |n| BigInt::from_mag(sign, mag[..n].to_vec()));
        let flipped = if self.is_negative() {
            Some(self.abs())
        } else {
            None
        };

        Box::new(flipped.into_iter().chain(shorter))
    }
}
