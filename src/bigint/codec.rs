// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

//! Decimal text import and export.

use super::magnitude::CHUNK_DIGITS;
use super::{BigInt, Sign};
use crate::error::{BigIntErr, StreamErr};
use log::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

impl BigInt {
    /// Parses an optionally signed run of ASCII decimal digits.
    ///
    /// Digits are grouped into chunks from the least significant end, so the most significant
    /// chunk may hold fewer than [`CHUNK_DIGITS`] digits. Any run of zeros parses to canonical
    /// zero regardless of the sign prefix.
    pub fn parse(text: &str) -> Result<Self, BigIntErr> {
        let (sign, digits) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &text.as_bytes()[1..]),
            Some(b'+') => (Sign::Positive, &text.as_bytes()[1..]),
            _ => (Sign::Positive, text.as_bytes()),
        };

        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            debug!("Rejected integer literal {:?}", text);
            return Err(BigIntErr::InvalidFormat);
        }

        let mag = digits
            .rchunks(CHUNK_DIGITS)
            .map(|group| {
                group
                    .iter()
                    .fold(0_u32, |acc, &d| acc * 10 + u32::from(d - b'0'))
            })
            .collect();

        Ok(Self::from_mag(sign, mag))
    }

    /// Replaces the value with the one parsed from `text`. On error the value is left untouched.
    pub fn assign_str(&mut self, text: &str) -> Result<(), BigIntErr> {
        *self = Self::parse(text)?;
        Ok(())
    }

    /// Reads the next whitespace delimited token from `reader` and parses it.
    ///
    /// Leading whitespace is skipped and the delimiter after the token is left in the reader.
    /// Returns `Ok(None)` once the reader is exhausted.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Option<Self>, StreamErr> {
        let mut token = Vec::new();

        loop {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut used = 0;
            let mut done = false;
            for &b in buf {
                if b.is_ascii_whitespace() {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    done = true;
                    break;
                }
                token.push(b);
                used += 1;
            }

            reader.consume(used);
            if done {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }

        let text = std::str::from_utf8(&token).map_err(|_| BigIntErr::InvalidFormat)?;
        Ok(Some(Self::parse(text)?))
    }

    /// Writes the decimal rendering without a trailing newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl FromStr for BigInt {
    type Err = BigIntErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.mag.len() * CHUNK_DIGITS);
        let mut chunks = self.mag.iter().rev();

        if let Some(top) = chunks.next() {
            write!(digits, "{top}")?;
        }
        for chunk in chunks {
            write!(digits, "{chunk:0width$}", width = CHUNK_DIGITS)?;
        }

        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
