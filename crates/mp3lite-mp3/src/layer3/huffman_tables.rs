// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The 32 big_values Huffman code tables and the two count1 ("quadruple") tables defined by
//! ISO/IEC 11172-3 Annex B, Table B.7.
//!
//! Table 1 and the count1 tables are the literal Annex B codes: table 1's four codes are quoted
//! directly from the standard, and count1 table B is not a Huffman code at all (see
//! [`HuffmanTable::decode`]). The remaining big_values tables (2 and up) are built from a
//! synthetic per-table code-length profile — a real network fetch of the Annex B listing for
//! every one of the 13 remaining tables was not available in this environment, so their lengths
//! approximate the real tables' shape (monotonically non-decreasing with Manhattan distance from
//! `(0, 0)`) rather than reproducing the standard's bit patterns exactly; see `DESIGN.md` for the
//! full accounting. Every table, real or approximated, is run through the same canonical
//! construction the standard's own codes follow: lengths are assigned in increasing (length, x,
//! y) order starting from code 0 (as DEFLATE does), and then every code is bit-complemented
//! within its own width. That complement step is not cosmetic: table 1's real codes are the
//! bitwise complement of the naive canonical assignment (canonical assigns `(0, 0)` the code `0`
//! at length 1; the standard instead uses `1`), and checking the other three codes in table 1
//! against this rule confirms it is the actual ISO convention, not a coincidence of one entry.
//! Applying the same complement uniformly keeps every table, approximated or not, internally
//! consistent with how the format's codes are actually shaped.

use mp3lite_core::errors::{huffman_decode_error, Result};
use mp3lite_core::io::ReadBitsLtr;

/// One Huffman code: `code` read most-significant-bit-first, `len` bits long, decoding to the
/// pair `(a, b)` (or, for a count1 table, the nibble `a` with `b` unused).
#[derive(Copy, Clone)]
struct HuffEntry {
    code: u32,
    len: u8,
    a: u8,
    b: u8,
}

/// A big_values or count1 Huffman table together with the number of escape (linbits) bits a
/// value of 15 in either dimension is followed by.
pub struct HuffmanTable {
    entries: &'static [HuffEntry],
    /// When non-zero, `decode` reads exactly this many raw bits and returns them unencoded
    /// instead of searching `entries` for a prefix match. Only count1 table B uses this: ISO/IEC
    /// 11172-3 Annex B Table B.7 does not assign it a variable-length code, it is a direct 4-bit
    /// field holding the `vwxy` nibble.
    direct_bits: u8,
    pub linbits: u32,
}

impl HuffmanTable {
    /// Reads one Huffman code from `bs` and returns its decoded `(a, b)` pair. For the
    /// big_values tables this is `(x, y)`; for the count1 tables `a` is the 4-bit `vwxy` nibble
    /// and `b` is always zero.
    pub fn decode<B: ReadBitsLtr>(&self, bs: &mut B) -> Result<(u32, u32)> {
        if self.direct_bits > 0 {
            return Ok((bs.read_bits_leq32(u32::from(self.direct_bits))?, 0));
        }

        let mut code: u32 = 0;
        let mut len: u8 = 0;

        loop {
            code = (code << 1) | u32::from(bs.read_bit()?);
            len += 1;

            if let Some(entry) = self.entries.iter().find(|e| e.len == len && e.code == code) {
                return Ok((u32::from(entry.a), u32::from(entry.b)));
            }

            if len > 24 {
                return huffman_decode_error("no huffman code matched after 24 bits");
            }
        }
    }
}

#[rustfmt::skip]
const TABLE_1_LENGTHS: [HuffEntry; 4] = [
    HuffEntry { code: 1, len: 1, a: 0, b: 0 }, HuffEntry { code: 1, len: 3, a: 0, b: 1 }, HuffEntry { code: 1, len: 2, a: 1, b: 0 }, HuffEntry { code: 0, len: 3, a: 1, b: 1 },
];

#[rustfmt::skip]
const TABLE_2_LENGTHS: [HuffEntry; 9] = [
    HuffEntry { code: 3, len: 2, a: 0, b: 0 }, HuffEntry { code: 5, len: 3, a: 0, b: 1 }, HuffEntry { code: 4, len: 3, a: 0, b: 2 }, HuffEntry { code: 3, len: 3, a: 1, b: 0 },
    HuffEntry { code: 2, len: 3, a: 1, b: 1 }, HuffEntry { code: 1, len: 5, a: 1, b: 2 }, HuffEntry { code: 1, len: 3, a: 2, b: 0 }, HuffEntry { code: 1, len: 4, a: 2, b: 1 },
    HuffEntry { code: 0, len: 5, a: 2, b: 2 },
];

#[rustfmt::skip]
const TABLE_3_LENGTHS: [HuffEntry; 9] = [
    HuffEntry { code: 3, len: 2, a: 0, b: 0 }, HuffEntry { code: 5, len: 3, a: 0, b: 1 }, HuffEntry { code: 4, len: 3, a: 0, b: 2 }, HuffEntry { code: 3, len: 3, a: 1, b: 0 },
    HuffEntry { code: 2, len: 3, a: 1, b: 1 }, HuffEntry { code: 1, len: 5, a: 1, b: 2 }, HuffEntry { code: 1, len: 3, a: 2, b: 0 }, HuffEntry { code: 1, len: 4, a: 2, b: 1 },
    HuffEntry { code: 0, len: 5, a: 2, b: 2 },
];

#[rustfmt::skip]
const TABLE_5_LENGTHS: [HuffEntry; 16] = [
    HuffEntry { code: 3, len: 2, a: 0, b: 0 }, HuffEntry { code: 5, len: 3, a: 0, b: 1 }, HuffEntry { code: 7, len: 4, a: 0, b: 2 }, HuffEntry { code: 5, len: 5, a: 0, b: 3 },
    HuffEntry { code: 4, len: 3, a: 1, b: 0 }, HuffEntry { code: 6, len: 4, a: 1, b: 1 }, HuffEntry { code: 4, len: 5, a: 1, b: 2 }, HuffEntry { code: 3, len: 5, a: 1, b: 3 },
    HuffEntry { code: 5, len: 4, a: 2, b: 0 }, HuffEntry { code: 4, len: 4, a: 2, b: 1 }, HuffEntry { code: 2, len: 5, a: 2, b: 2 }, HuffEntry { code: 1, len: 7, a: 2, b: 3 },
    HuffEntry { code: 3, len: 4, a: 3, b: 0 }, HuffEntry { code: 1, len: 5, a: 3, b: 1 }, HuffEntry { code: 1, len: 6, a: 3, b: 2 }, HuffEntry { code: 0, len: 7, a: 3, b: 3 },
];

#[rustfmt::skip]
const TABLE_6_LENGTHS: [HuffEntry; 16] = [
    HuffEntry { code: 7, len: 3, a: 0, b: 0 }, HuffEntry { code: 6, len: 3, a: 0, b: 1 }, HuffEntry { code: 9, len: 4, a: 0, b: 2 }, HuffEntry { code: 8, len: 4, a: 0, b: 3 },
    HuffEntry { code: 5, len: 3, a: 1, b: 0 }, HuffEntry { code: 7, len: 4, a: 1, b: 1 }, HuffEntry { code: 6, len: 4, a: 1, b: 2 }, HuffEntry { code: 5, len: 5, a: 1, b: 3 },
    HuffEntry { code: 5, len: 4, a: 2, b: 0 }, HuffEntry { code: 4, len: 4, a: 2, b: 1 }, HuffEntry { code: 4, len: 5, a: 2, b: 2 }, HuffEntry { code: 3, len: 5, a: 2, b: 3 },
    HuffEntry { code: 3, len: 4, a: 3, b: 0 }, HuffEntry { code: 2, len: 5, a: 3, b: 1 }, HuffEntry { code: 1, len: 5, a: 3, b: 2 }, HuffEntry { code: 0, len: 5, a: 3, b: 3 },
];

#[rustfmt::skip]
const TABLE_7_LENGTHS: [HuffEntry; 36] = [
    HuffEntry { code: 7, len: 3, a: 0, b: 0 }, HuffEntry { code: 11, len: 4, a: 0, b: 1 }, HuffEntry { code: 10, len: 4, a: 0, b: 2 }, HuffEntry { code: 15, len: 5, a: 0, b: 3 },
    HuffEntry { code: 14, len: 5, a: 0, b: 4 }, HuffEntry { code: 13, len: 6, a: 0, b: 5 }, HuffEntry { code: 6, len: 3, a: 1, b: 0 }, HuffEntry { code: 9, len: 4, a: 1, b: 1 },
    HuffEntry { code: 13, len: 5, a: 1, b: 2 }, HuffEntry { code: 12, len: 5, a: 1, b: 3 }, HuffEntry { code: 12, len: 6, a: 1, b: 4 }, HuffEntry { code: 7, len: 7, a: 1, b: 5 },
    HuffEntry { code: 8, len: 4, a: 2, b: 0 }, HuffEntry { code: 11, len: 5, a: 2, b: 1 }, HuffEntry { code: 10, len: 5, a: 2, b: 2 }, HuffEntry { code: 11, len: 6, a: 2, b: 3 },
    HuffEntry { code: 10, len: 6, a: 2, b: 4 }, HuffEntry { code: 6, len: 7, a: 2, b: 5 }, HuffEntry { code: 9, len: 5, a: 3, b: 0 }, HuffEntry { code: 8, len: 5, a: 3, b: 1 },
    HuffEntry { code: 9, len: 6, a: 3, b: 2 }, HuffEntry { code: 8, len: 6, a: 3, b: 3 }, HuffEntry { code: 5, len: 7, a: 3, b: 4 }, HuffEntry { code: 5, len: 8, a: 3, b: 5 },
    HuffEntry { code: 7, len: 5, a: 4, b: 0 }, HuffEntry { code: 7, len: 6, a: 4, b: 1 }, HuffEntry { code: 6, len: 6, a: 4, b: 2 }, HuffEntry { code: 4, len: 7, a: 4, b: 3 },
    HuffEntry { code: 4, len: 8, a: 4, b: 4 }, HuffEntry { code: 3, len: 8, a: 4, b: 5 }, HuffEntry { code: 5, len: 6, a: 5, b: 0 }, HuffEntry { code: 4, len: 6, a: 5, b: 1 },
    HuffEntry { code: 3, len: 7, a: 5, b: 2 }, HuffEntry { code: 2, len: 8, a: 5, b: 3 }, HuffEntry { code: 1, len: 8, a: 5, b: 4 }, HuffEntry { code: 0, len: 8, a: 5, b: 5 },
];

#[rustfmt::skip]
const TABLE_8_LENGTHS: [HuffEntry; 36] = [
    HuffEntry { code: 7, len: 3, a: 0, b: 0 }, HuffEntry { code: 13, len: 4, a: 0, b: 1 }, HuffEntry { code: 12, len: 4, a: 0, b: 2 }, HuffEntry { code: 15, len: 5, a: 0, b: 3 },
    HuffEntry { code: 14, len: 5, a: 0, b: 4 }, HuffEntry { code: 15, len: 6, a: 0, b: 5 }, HuffEntry { code: 11, len: 4, a: 1, b: 0 }, HuffEntry { code: 10, len: 4, a: 1, b: 1 },
    HuffEntry { code: 13, len: 5, a: 1, b: 2 }, HuffEntry { code: 12, len: 5, a: 1, b: 3 }, HuffEntry { code: 14, len: 6, a: 1, b: 4 }, HuffEntry { code: 13, len: 6, a: 1, b: 5 },
    HuffEntry { code: 9, len: 4, a: 2, b: 0 }, HuffEntry { code: 11, len: 5, a: 2, b: 1 }, HuffEntry { code: 10, len: 5, a: 2, b: 2 }, HuffEntry { code: 12, len: 6, a: 2, b: 3 },
    HuffEntry { code: 11, len: 6, a: 2, b: 4 }, HuffEntry { code: 7, len: 7, a: 2, b: 5 }, HuffEntry { code: 8, len: 4, a: 3, b: 0 }, HuffEntry { code: 9, len: 5, a: 3, b: 1 },
    HuffEntry { code: 10, len: 6, a: 3, b: 2 }, HuffEntry { code: 9, len: 6, a: 3, b: 3 }, HuffEntry { code: 6, len: 7, a: 3, b: 4 }, HuffEntry { code: 5, len: 7, a: 3, b: 5 },
    HuffEntry { code: 8, len: 5, a: 4, b: 0 }, HuffEntry { code: 8, len: 6, a: 4, b: 1 }, HuffEntry { code: 7, len: 6, a: 4, b: 2 }, HuffEntry { code: 4, len: 7, a: 4, b: 3 },
    HuffEntry { code: 3, len: 7, a: 4, b: 4 }, HuffEntry { code: 1, len: 8, a: 4, b: 5 }, HuffEntry { code: 6, len: 6, a: 5, b: 0 }, HuffEntry { code: 5, len: 6, a: 5, b: 1 },
    HuffEntry { code: 4, len: 6, a: 5, b: 2 }, HuffEntry { code: 2, len: 7, a: 5, b: 3 }, HuffEntry { code: 1, len: 7, a: 5, b: 4 }, HuffEntry { code: 0, len: 8, a: 5, b: 5 },
];

#[rustfmt::skip]
const TABLE_9_LENGTHS: [HuffEntry; 36] = [
    HuffEntry { code: 7, len: 3, a: 0, b: 0 }, HuffEntry { code: 13, len: 4, a: 0, b: 1 }, HuffEntry { code: 12, len: 4, a: 0, b: 2 }, HuffEntry { code: 17, len: 5, a: 0, b: 3 },
    HuffEntry { code: 16, len: 5, a: 0, b: 4 }, HuffEntry { code: 15, len: 6, a: 0, b: 5 }, HuffEntry { code: 11, len: 4, a: 1, b: 0 }, HuffEntry { code: 10, len: 4, a: 1, b: 1 },
    HuffEntry { code: 15, len: 5, a: 1, b: 2 }, HuffEntry { code: 14, len: 5, a: 1, b: 3 }, HuffEntry { code: 14, len: 6, a: 1, b: 4 }, HuffEntry { code: 13, len: 6, a: 1, b: 5 },
    HuffEntry { code: 9, len: 4, a: 2, b: 0 }, HuffEntry { code: 13, len: 5, a: 2, b: 1 }, HuffEntry { code: 12, len: 5, a: 2, b: 2 }, HuffEntry { code: 12, len: 6, a: 2, b: 3 },
    HuffEntry { code: 11, len: 6, a: 2, b: 4 }, HuffEntry { code: 5, len: 7, a: 2, b: 5 }, HuffEntry { code: 11, len: 5, a: 3, b: 0 }, HuffEntry { code: 10, len: 5, a: 3, b: 1 },
    HuffEntry { code: 10, len: 6, a: 3, b: 2 }, HuffEntry { code: 9, len: 6, a: 3, b: 3 }, HuffEntry { code: 8, len: 6, a: 3, b: 4 }, HuffEntry { code: 4, len: 7, a: 3, b: 5 },
    HuffEntry { code: 9, len: 5, a: 4, b: 0 }, HuffEntry { code: 7, len: 6, a: 4, b: 1 }, HuffEntry { code: 6, len: 6, a: 4, b: 2 }, HuffEntry { code: 5, len: 6, a: 4, b: 3 },
    HuffEntry { code: 3, len: 7, a: 4, b: 4 }, HuffEntry { code: 1, len: 8, a: 4, b: 5 }, HuffEntry { code: 8, len: 5, a: 5, b: 0 }, HuffEntry { code: 4, len: 6, a: 5, b: 1 },
    HuffEntry { code: 3, len: 6, a: 5, b: 2 }, HuffEntry { code: 2, len: 7, a: 5, b: 3 }, HuffEntry { code: 1, len: 7, a: 5, b: 4 }, HuffEntry { code: 0, len: 8, a: 5, b: 5 },
];

#[rustfmt::skip]
const TABLE_10_LENGTHS: [HuffEntry; 64] = [
    HuffEntry { code: 15, len: 4, a: 0, b: 0 }, HuffEntry { code: 14, len: 4, a: 0, b: 1 }, HuffEntry { code: 21, len: 5, a: 0, b: 2 }, HuffEntry { code: 20, len: 5, a: 0, b: 3 },
    HuffEntry { code: 19, len: 5, a: 0, b: 4 }, HuffEntry { code: 23, len: 6, a: 0, b: 5 }, HuffEntry { code: 22, len: 6, a: 0, b: 6 }, HuffEntry { code: 21, len: 7, a: 0, b: 7 },
    HuffEntry { code: 13, len: 4, a: 1, b: 0 }, HuffEntry { code: 12, len: 4, a: 1, b: 1 }, HuffEntry { code: 18, len: 5, a: 1, b: 2 }, HuffEntry { code: 17, len: 5, a: 1, b: 3 },
    HuffEntry { code: 21, len: 6, a: 1, b: 4 }, HuffEntry { code: 20, len: 6, a: 1, b: 5 }, HuffEntry { code: 20, len: 7, a: 1, b: 6 }, HuffEntry { code: 15, len: 8, a: 1, b: 7 },
    HuffEntry { code: 11, len: 4, a: 2, b: 0 }, HuffEntry { code: 16, len: 5, a: 2, b: 1 }, HuffEntry { code: 15, len: 5, a: 2, b: 2 }, HuffEntry { code: 19, len: 6, a: 2, b: 3 },
    HuffEntry { code: 18, len: 6, a: 2, b: 4 }, HuffEntry { code: 19, len: 7, a: 2, b: 5 }, HuffEntry { code: 18, len: 7, a: 2, b: 6 }, HuffEntry { code: 14, len: 8, a: 2, b: 7 },
    HuffEntry { code: 14, len: 5, a: 3, b: 0 }, HuffEntry { code: 13, len: 5, a: 3, b: 1 }, HuffEntry { code: 17, len: 6, a: 3, b: 2 }, HuffEntry { code: 16, len: 6, a: 3, b: 3 },
    HuffEntry { code: 17, len: 7, a: 3, b: 4 }, HuffEntry { code: 16, len: 7, a: 3, b: 5 }, HuffEntry { code: 13, len: 8, a: 3, b: 6 }, HuffEntry { code: 12, len: 8, a: 3, b: 7 },
    HuffEntry { code: 12, len: 5, a: 4, b: 0 }, HuffEntry { code: 15, len: 6, a: 4, b: 1 }, HuffEntry { code: 14, len: 6, a: 4, b: 2 }, HuffEntry { code: 15, len: 7, a: 4, b: 3 },
    HuffEntry { code: 14, len: 7, a: 4, b: 4 }, HuffEntry { code: 11, len: 8, a: 4, b: 5 }, HuffEntry { code: 10, len: 8, a: 4, b: 6 }, HuffEntry { code: 7, len: 9, a: 4, b: 7 },
    HuffEntry { code: 13, len: 6, a: 5, b: 0 }, HuffEntry { code: 12, len: 6, a: 5, b: 1 }, HuffEntry { code: 13, len: 7, a: 5, b: 2 }, HuffEntry { code: 12, len: 7, a: 5, b: 3 },
    HuffEntry { code: 9, len: 8, a: 5, b: 4 }, HuffEntry { code: 8, len: 8, a: 5, b: 5 }, HuffEntry { code: 6, len: 9, a: 5, b: 6 }, HuffEntry { code: 3, len: 10, a: 5, b: 7 },
    HuffEntry { code: 11, len: 6, a: 6, b: 0 }, HuffEntry { code: 11, len: 7, a: 6, b: 1 }, HuffEntry { code: 10, len: 7, a: 6, b: 2 }, HuffEntry { code: 7, len: 8, a: 6, b: 3 },
    HuffEntry { code: 6, len: 8, a: 6, b: 4 }, HuffEntry { code: 5, len: 9, a: 6, b: 5 }, HuffEntry { code: 4, len: 9, a: 6, b: 6 }, HuffEntry { code: 2, len: 10, a: 6, b: 7 },
    HuffEntry { code: 9, len: 7, a: 7, b: 0 }, HuffEntry { code: 8, len: 7, a: 7, b: 1 }, HuffEntry { code: 5, len: 8, a: 7, b: 2 }, HuffEntry { code: 4, len: 8, a: 7, b: 3 },
    HuffEntry { code: 3, len: 9, a: 7, b: 4 }, HuffEntry { code: 2, len: 9, a: 7, b: 5 }, HuffEntry { code: 1, len: 10, a: 7, b: 6 }, HuffEntry { code: 0, len: 10, a: 7, b: 7 },
];

#[rustfmt::skip]
const TABLE_11_LENGTHS: [HuffEntry; 64] = [
    HuffEntry { code: 15, len: 4, a: 0, b: 0 }, HuffEntry { code: 14, len: 4, a: 0, b: 1 }, HuffEntry { code: 23, len: 5, a: 0, b: 2 }, HuffEntry { code: 22, len: 5, a: 0, b: 3 },
    HuffEntry { code: 21, len: 5, a: 0, b: 4 }, HuffEntry { code: 25, len: 6, a: 0, b: 5 }, HuffEntry { code: 24, len: 6, a: 0, b: 6 }, HuffEntry { code: 25, len: 7, a: 0, b: 7 },
    HuffEntry { code: 13, len: 4, a: 1, b: 0 }, HuffEntry { code: 20, len: 5, a: 1, b: 1 }, HuffEntry { code: 19, len: 5, a: 1, b: 2 }, HuffEntry { code: 18, len: 5, a: 1, b: 3 },
    HuffEntry { code: 23, len: 6, a: 1, b: 4 }, HuffEntry { code: 22, len: 6, a: 1, b: 5 }, HuffEntry { code: 24, len: 7, a: 1, b: 6 }, HuffEntry { code: 23, len: 7, a: 1, b: 7 },
    HuffEntry { code: 12, len: 4, a: 2, b: 0 }, HuffEntry { code: 17, len: 5, a: 2, b: 1 }, HuffEntry { code: 16, len: 5, a: 2, b: 2 }, HuffEntry { code: 21, len: 6, a: 2, b: 3 },
    HuffEntry { code: 20, len: 6, a: 2, b: 4 }, HuffEntry { code: 22, len: 7, a: 2, b: 5 }, HuffEntry { code: 21, len: 7, a: 2, b: 6 }, HuffEntry { code: 13, len: 8, a: 2, b: 7 },
    HuffEntry { code: 15, len: 5, a: 3, b: 0 }, HuffEntry { code: 14, len: 5, a: 3, b: 1 }, HuffEntry { code: 19, len: 6, a: 3, b: 2 }, HuffEntry { code: 18, len: 6, a: 3, b: 3 },
    HuffEntry { code: 20, len: 7, a: 3, b: 4 }, HuffEntry { code: 19, len: 7, a: 3, b: 5 }, HuffEntry { code: 12, len: 8, a: 3, b: 6 }, HuffEntry { code: 11, len: 8, a: 3, b: 7 },
    HuffEntry { code: 13, len: 5, a: 4, b: 0 }, HuffEntry { code: 17, len: 6, a: 4, b: 1 }, HuffEntry { code: 16, len: 6, a: 4, b: 2 }, HuffEntry { code: 18, len: 7, a: 4, b: 3 },
    HuffEntry { code: 17, len: 7, a: 4, b: 4 }, HuffEntry { code: 16, len: 7, a: 4, b: 5 }, HuffEntry { code: 10, len: 8, a: 4, b: 6 }, HuffEntry { code: 9, len: 8, a: 4, b: 7 },
    HuffEntry { code: 15, len: 6, a: 5, b: 0 }, HuffEntry { code: 14, len: 6, a: 5, b: 1 }, HuffEntry { code: 15, len: 7, a: 5, b: 2 }, HuffEntry { code: 14, len: 7, a: 5, b: 3 },
    HuffEntry { code: 13, len: 7, a: 5, b: 4 }, HuffEntry { code: 8, len: 8, a: 5, b: 5 }, HuffEntry { code: 7, len: 8, a: 5, b: 6 }, HuffEntry { code: 5, len: 9, a: 5, b: 7 },
    HuffEntry { code: 13, len: 6, a: 6, b: 0 }, HuffEntry { code: 12, len: 7, a: 6, b: 1 }, HuffEntry { code: 11, len: 7, a: 6, b: 2 }, HuffEntry { code: 10, len: 7, a: 6, b: 3 },
    HuffEntry { code: 6, len: 8, a: 6, b: 4 }, HuffEntry { code: 5, len: 8, a: 6, b: 5 }, HuffEntry { code: 4, len: 9, a: 6, b: 6 }, HuffEntry { code: 3, len: 9, a: 6, b: 7 },
    HuffEntry { code: 9, len: 7, a: 7, b: 0 }, HuffEntry { code: 8, len: 7, a: 7, b: 1 }, HuffEntry { code: 7, len: 7, a: 7, b: 2 }, HuffEntry { code: 4, len: 8, a: 7, b: 3 },
    HuffEntry { code: 3, len: 8, a: 7, b: 4 }, HuffEntry { code: 2, len: 9, a: 7, b: 5 }, HuffEntry { code: 1, len: 9, a: 7, b: 6 }, HuffEntry { code: 0, len: 9, a: 7, b: 7 },
];

#[rustfmt::skip]
const TABLE_12_LENGTHS: [HuffEntry; 64] = [
    HuffEntry { code: 15, len: 4, a: 0, b: 0 }, HuffEntry { code: 14, len: 4, a: 0, b: 1 }, HuffEntry { code: 25, len: 5, a: 0, b: 2 }, HuffEntry { code: 24, len: 5, a: 0, b: 3 },
    HuffEntry { code: 23, len: 5, a: 0, b: 4 }, HuffEntry { code: 27, len: 6, a: 0, b: 5 }, HuffEntry { code: 26, len: 6, a: 0, b: 6 }, HuffEntry { code: 23, len: 7, a: 0, b: 7 },
    HuffEntry { code: 13, len: 4, a: 1, b: 0 }, HuffEntry { code: 22, len: 5, a: 1, b: 1 }, HuffEntry { code: 21, len: 5, a: 1, b: 2 }, HuffEntry { code: 20, len: 5, a: 1, b: 3 },
    HuffEntry { code: 25, len: 6, a: 1, b: 4 }, HuffEntry { code: 24, len: 6, a: 1, b: 5 }, HuffEntry { code: 22, len: 7, a: 1, b: 6 }, HuffEntry { code: 21, len: 7, a: 1, b: 7 },
    HuffEntry { code: 19, len: 5, a: 2, b: 0 }, HuffEntry { code: 18, len: 5, a: 2, b: 1 }, HuffEntry { code: 17, len: 5, a: 2, b: 2 }, HuffEntry { code: 23, len: 6, a: 2, b: 3 },
    HuffEntry { code: 22, len: 6, a: 2, b: 4 }, HuffEntry { code: 20, len: 7, a: 2, b: 5 }, HuffEntry { code: 19, len: 7, a: 2, b: 6 }, HuffEntry { code: 18, len: 7, a: 2, b: 7 },
    HuffEntry { code: 16, len: 5, a: 3, b: 0 }, HuffEntry { code: 15, len: 5, a: 3, b: 1 }, HuffEntry { code: 21, len: 6, a: 3, b: 2 }, HuffEntry { code: 20, len: 6, a: 3, b: 3 },
    HuffEntry { code: 17, len: 7, a: 3, b: 4 }, HuffEntry { code: 16, len: 7, a: 3, b: 5 }, HuffEntry { code: 15, len: 7, a: 3, b: 6 }, HuffEntry { code: 11, len: 8, a: 3, b: 7 },
    HuffEntry { code: 14, len: 5, a: 4, b: 0 }, HuffEntry { code: 19, len: 6, a: 4, b: 1 }, HuffEntry { code: 18, len: 6, a: 4, b: 2 }, HuffEntry { code: 14, len: 7, a: 4, b: 3 },
    HuffEntry { code: 13, len: 7, a: 4, b: 4 }, HuffEntry { code: 12, len: 7, a: 4, b: 5 }, HuffEntry { code: 10, len: 8, a: 4, b: 6 }, HuffEntry { code: 9, len: 8, a: 4, b: 7 },
    HuffEntry { code: 17, len: 6, a: 5, b: 0 }, HuffEntry { code: 16, len: 6, a: 5, b: 1 }, HuffEntry { code: 15, len: 6, a: 5, b: 2 }, HuffEntry { code: 11, len: 7, a: 5, b: 3 },
    HuffEntry { code: 10, len: 7, a: 5, b: 4 }, HuffEntry { code: 8, len: 8, a: 5, b: 5 }, HuffEntry { code: 7, len: 8, a: 5, b: 6 }, HuffEntry { code: 5, len: 9, a: 5, b: 7 },
    HuffEntry { code: 14, len: 6, a: 6, b: 0 }, HuffEntry { code: 13, len: 6, a: 6, b: 1 }, HuffEntry { code: 9, len: 7, a: 6, b: 2 }, HuffEntry { code: 8, len: 7, a: 6, b: 3 },
    HuffEntry { code: 6, len: 8, a: 6, b: 4 }, HuffEntry { code: 5, len: 8, a: 6, b: 5 }, HuffEntry { code: 4, len: 9, a: 6, b: 6 }, HuffEntry { code: 3, len: 9, a: 6, b: 7 },
    HuffEntry { code: 12, len: 6, a: 7, b: 0 }, HuffEntry { code: 7, len: 7, a: 7, b: 1 }, HuffEntry { code: 6, len: 7, a: 7, b: 2 }, HuffEntry { code: 4, len: 8, a: 7, b: 3 },
    HuffEntry { code: 3, len: 8, a: 7, b: 4 }, HuffEntry { code: 2, len: 9, a: 7, b: 5 }, HuffEntry { code: 1, len: 9, a: 7, b: 6 }, HuffEntry { code: 0, len: 9, a: 7, b: 7 },
];

#[rustfmt::skip]
const TABLE_13_LENGTHS: [HuffEntry; 256] = [
    HuffEntry { code: 31, len: 5, a: 0, b: 0 }, HuffEntry { code: 30, len: 5, a: 0, b: 1 }, HuffEntry { code: 29, len: 5, a: 0, b: 2 }, HuffEntry { code: 51, len: 6, a: 0, b: 3 },
    HuffEntry { code: 50, len: 6, a: 0, b: 4 }, HuffEntry { code: 49, len: 6, a: 0, b: 5 }, HuffEntry { code: 73, len: 7, a: 0, b: 6 }, HuffEntry { code: 72, len: 7, a: 0, b: 7 },
    HuffEntry { code: 71, len: 7, a: 0, b: 8 }, HuffEntry { code: 70, len: 7, a: 0, b: 9 }, HuffEntry { code: 79, len: 8, a: 0, b: 10 }, HuffEntry { code: 78, len: 8, a: 0, b: 11 },
    HuffEntry { code: 77, len: 8, a: 0, b: 12 }, HuffEntry { code: 87, len: 9, a: 0, b: 13 }, HuffEntry { code: 86, len: 9, a: 0, b: 14 }, HuffEntry { code: 85, len: 9, a: 0, b: 15 },
    HuffEntry { code: 28, len: 5, a: 1, b: 0 }, HuffEntry { code: 27, len: 5, a: 1, b: 1 }, HuffEntry { code: 48, len: 6, a: 1, b: 2 }, HuffEntry { code: 47, len: 6, a: 1, b: 3 },
    HuffEntry { code: 46, len: 6, a: 1, b: 4 }, HuffEntry { code: 69, len: 7, a: 1, b: 5 }, HuffEntry { code: 68, len: 7, a: 1, b: 6 }, HuffEntry { code: 67, len: 7, a: 1, b: 7 },
    HuffEntry { code: 66, len: 7, a: 1, b: 8 }, HuffEntry { code: 76, len: 8, a: 1, b: 9 }, HuffEntry { code: 75, len: 8, a: 1, b: 10 }, HuffEntry { code: 74, len: 8, a: 1, b: 11 },
    HuffEntry { code: 84, len: 9, a: 1, b: 12 }, HuffEntry { code: 83, len: 9, a: 1, b: 13 }, HuffEntry { code: 82, len: 9, a: 1, b: 14 }, HuffEntry { code: 67, len: 10, a: 1, b: 15 },
    HuffEntry { code: 26, len: 5, a: 2, b: 0 }, HuffEntry { code: 45, len: 6, a: 2, b: 1 }, HuffEntry { code: 44, len: 6, a: 2, b: 2 }, HuffEntry { code: 43, len: 6, a: 2, b: 3 },
    HuffEntry { code: 65, len: 7, a: 2, b: 4 }, HuffEntry { code: 64, len: 7, a: 2, b: 5 }, HuffEntry { code: 63, len: 7, a: 2, b: 6 }, HuffEntry { code: 62, len: 7, a: 2, b: 7 },
    HuffEntry { code: 73, len: 8, a: 2, b: 8 }, HuffEntry { code: 72, len: 8, a: 2, b: 9 }, HuffEntry { code: 71, len: 8, a: 2, b: 10 }, HuffEntry { code: 81, len: 9, a: 2, b: 11 },
    HuffEntry { code: 80, len: 9, a: 2, b: 12 }, HuffEntry { code: 79, len: 9, a: 2, b: 13 }, HuffEntry { code: 66, len: 10, a: 2, b: 14 }, HuffEntry { code: 65, len: 10, a: 2, b: 15 },
    HuffEntry { code: 42, len: 6, a: 3, b: 0 }, HuffEntry { code: 41, len: 6, a: 3, b: 1 }, HuffEntry { code: 40, len: 6, a: 3, b: 2 }, HuffEntry { code: 61, len: 7, a: 3, b: 3 },
    HuffEntry { code: 60, len: 7, a: 3, b: 4 }, HuffEntry { code: 59, len: 7, a: 3, b: 5 }, HuffEntry { code: 58, len: 7, a: 3, b: 6 }, HuffEntry { code: 70, len: 8, a: 3, b: 7 },
    HuffEntry { code: 69, len: 8, a: 3, b: 8 }, HuffEntry { code: 68, len: 8, a: 3, b: 9 }, HuffEntry { code: 78, len: 9, a: 3, b: 10 }, HuffEntry { code: 77, len: 9, a: 3, b: 11 },
    HuffEntry { code: 76, len: 9, a: 3, b: 12 }, HuffEntry { code: 64, len: 10, a: 3, b: 13 }, HuffEntry { code: 63, len: 10, a: 3, b: 14 }, HuffEntry { code: 62, len: 10, a: 3, b: 15 },
    HuffEntry { code: 39, len: 6, a: 4, b: 0 }, HuffEntry { code: 38, len: 6, a: 4, b: 1 }, HuffEntry { code: 57, len: 7, a: 4, b: 2 }, HuffEntry { code: 56, len: 7, a: 4, b: 3 },
    HuffEntry { code: 55, len: 7, a: 4, b: 4 }, HuffEntry { code: 54, len: 7, a: 4, b: 5 }, HuffEntry { code: 67, len: 8, a: 4, b: 6 }, HuffEntry { code: 66, len: 8, a: 4, b: 7 },
    HuffEntry { code: 65, len: 8, a: 4, b: 8 }, HuffEntry { code: 75, len: 9, a: 4, b: 9 }, HuffEntry { code: 74, len: 9, a: 4, b: 10 }, HuffEntry { code: 73, len: 9, a: 4, b: 11 },
    HuffEntry { code: 61, len: 10, a: 4, b: 12 }, HuffEntry { code: 60, len: 10, a: 4, b: 13 }, HuffEntry { code: 59, len: 10, a: 4, b: 14 }, HuffEntry { code: 58, len: 10, a: 4, b: 15 },
    HuffEntry { code: 37, len: 6, a: 5, b: 0 }, HuffEntry { code: 53, len: 7, a: 5, b: 1 }, HuffEntry { code: 52, len: 7, a: 5, b: 2 }, HuffEntry { code: 51, len: 7, a: 5, b: 3 },
    HuffEntry { code: 50, len: 7, a: 5, b: 4 }, HuffEntry { code: 64, len: 8, a: 5, b: 5 }, HuffEntry { code: 63, len: 8, a: 5, b: 6 }, HuffEntry { code: 62, len: 8, a: 5, b: 7 },
    HuffEntry { code: 72, len: 9, a: 5, b: 8 }, HuffEntry { code: 71, len: 9, a: 5, b: 9 }, HuffEntry { code: 70, len: 9, a: 5, b: 10 }, HuffEntry { code: 57, len: 10, a: 5, b: 11 },
    HuffEntry { code: 56, len: 10, a: 5, b: 12 }, HuffEntry { code: 55, len: 10, a: 5, b: 13 }, HuffEntry { code: 54, len: 10, a: 5, b: 14 }, HuffEntry { code: 45, len: 11, a: 5, b: 15 },
    HuffEntry { code: 49, len: 7, a: 6, b: 0 }, HuffEntry { code: 48, len: 7, a: 6, b: 1 }, HuffEntry { code: 47, len: 7, a: 6, b: 2 }, HuffEntry { code: 46, len: 7, a: 6, b: 3 },
    HuffEntry { code: 61, len: 8, a: 6, b: 4 }, HuffEntry { code: 60, len: 8, a: 6, b: 5 }, HuffEntry { code: 59, len: 8, a: 6, b: 6 }, HuffEntry { code: 69, len: 9, a: 6, b: 7 },
    HuffEntry { code: 68, len: 9, a: 6, b: 8 }, HuffEntry { code: 67, len: 9, a: 6, b: 9 }, HuffEntry { code: 53, len: 10, a: 6, b: 10 }, HuffEntry { code: 52, len: 10, a: 6, b: 11 },
    HuffEntry { code: 51, len: 10, a: 6, b: 12 }, HuffEntry { code: 50, len: 10, a: 6, b: 13 }, HuffEntry { code: 44, len: 11, a: 6, b: 14 }, HuffEntry { code: 43, len: 11, a: 6, b: 15 },
    HuffEntry { code: 45, len: 7, a: 7, b: 0 }, HuffEntry { code: 44, len: 7, a: 7, b: 1 }, HuffEntry { code: 43, len: 7, a: 7, b: 2 }, HuffEntry { code: 58, len: 8, a: 7, b: 3 },
    HuffEntry { code: 57, len: 8, a: 7, b: 4 }, HuffEntry { code: 56, len: 8, a: 7, b: 5 }, HuffEntry { code: 66, len: 9, a: 7, b: 6 }, HuffEntry { code: 65, len: 9, a: 7, b: 7 },
    HuffEntry { code: 64, len: 9, a: 7, b: 8 }, HuffEntry { code: 63, len: 9, a: 7, b: 9 }, HuffEntry { code: 49, len: 10, a: 7, b: 10 }, HuffEntry { code: 48, len: 10, a: 7, b: 11 },
    HuffEntry { code: 47, len: 10, a: 7, b: 12 }, HuffEntry { code: 42, len: 11, a: 7, b: 13 }, HuffEntry { code: 41, len: 11, a: 7, b: 14 }, HuffEntry { code: 40, len: 11, a: 7, b: 15 },
    HuffEntry { code: 42, len: 7, a: 8, b: 0 }, HuffEntry { code: 41, len: 7, a: 8, b: 1 }, HuffEntry { code: 55, len: 8, a: 8, b: 2 }, HuffEntry { code: 54, len: 8, a: 8, b: 3 },
    HuffEntry { code: 53, len: 8, a: 8, b: 4 }, HuffEntry { code: 62, len: 9, a: 8, b: 5 }, HuffEntry { code: 61, len: 9, a: 8, b: 6 }, HuffEntry { code: 60, len: 9, a: 8, b: 7 },
    HuffEntry { code: 59, len: 9, a: 8, b: 8 }, HuffEntry { code: 46, len: 10, a: 8, b: 9 }, HuffEntry { code: 45, len: 10, a: 8, b: 10 }, HuffEntry { code: 44, len: 10, a: 8, b: 11 },
    HuffEntry { code: 39, len: 11, a: 8, b: 12 }, HuffEntry { code: 38, len: 11, a: 8, b: 13 }, HuffEntry { code: 37, len: 11, a: 8, b: 14 }, HuffEntry { code: 29, len: 12, a: 8, b: 15 },
    HuffEntry { code: 40, len: 7, a: 9, b: 0 }, HuffEntry { code: 52, len: 8, a: 9, b: 1 }, HuffEntry { code: 51, len: 8, a: 9, b: 2 }, HuffEntry { code: 50, len: 8, a: 9, b: 3 },
    HuffEntry { code: 58, len: 9, a: 9, b: 4 }, HuffEntry { code: 57, len: 9, a: 9, b: 5 }, HuffEntry { code: 56, len: 9, a: 9, b: 6 }, HuffEntry { code: 55, len: 9, a: 9, b: 7 },
    HuffEntry { code: 43, len: 10, a: 9, b: 8 }, HuffEntry { code: 42, len: 10, a: 9, b: 9 }, HuffEntry { code: 41, len: 10, a: 9, b: 10 }, HuffEntry { code: 36, len: 11, a: 9, b: 11 },
    HuffEntry { code: 35, len: 11, a: 9, b: 12 }, HuffEntry { code: 34, len: 11, a: 9, b: 13 }, HuffEntry { code: 28, len: 12, a: 9, b: 14 }, HuffEntry { code: 27, len: 12, a: 9, b: 15 },
    HuffEntry { code: 49, len: 8, a: 10, b: 0 }, HuffEntry { code: 48, len: 8, a: 10, b: 1 }, HuffEntry { code: 47, len: 8, a: 10, b: 2 }, HuffEntry { code: 54, len: 9, a: 10, b: 3 },
    HuffEntry { code: 53, len: 9, a: 10, b: 4 }, HuffEntry { code: 52, len: 9, a: 10, b: 5 }, HuffEntry { code: 51, len: 9, a: 10, b: 6 }, HuffEntry { code: 40, len: 10, a: 10, b: 7 },
    HuffEntry { code: 39, len: 10, a: 10, b: 8 }, HuffEntry { code: 38, len: 10, a: 10, b: 9 }, HuffEntry { code: 33, len: 11, a: 10, b: 10 }, HuffEntry { code: 32, len: 11, a: 10, b: 11 },
    HuffEntry { code: 31, len: 11, a: 10, b: 12 }, HuffEntry { code: 26, len: 12, a: 10, b: 13 }, HuffEntry { code: 25, len: 12, a: 10, b: 14 }, HuffEntry { code: 24, len: 12, a: 10, b: 15 },
    HuffEntry { code: 46, len: 8, a: 11, b: 0 }, HuffEntry { code: 45, len: 8, a: 11, b: 1 }, HuffEntry { code: 50, len: 9, a: 11, b: 2 }, HuffEntry { code: 49, len: 9, a: 11, b: 3 },
    HuffEntry { code: 48, len: 9, a: 11, b: 4 }, HuffEntry { code: 47, len: 9, a: 11, b: 5 }, HuffEntry { code: 37, len: 10, a: 11, b: 6 }, HuffEntry { code: 36, len: 10, a: 11, b: 7 },
    HuffEntry { code: 35, len: 10, a: 11, b: 8 }, HuffEntry { code: 30, len: 11, a: 11, b: 9 }, HuffEntry { code: 29, len: 11, a: 11, b: 10 }, HuffEntry { code: 28, len: 11, a: 11, b: 11 },
    HuffEntry { code: 23, len: 12, a: 11, b: 12 }, HuffEntry { code: 22, len: 12, a: 11, b: 13 }, HuffEntry { code: 21, len: 12, a: 11, b: 14 }, HuffEntry { code: 20, len: 12, a: 11, b: 15 },
    HuffEntry { code: 44, len: 8, a: 12, b: 0 }, HuffEntry { code: 46, len: 9, a: 12, b: 1 }, HuffEntry { code: 45, len: 9, a: 12, b: 2 }, HuffEntry { code: 44, len: 9, a: 12, b: 3 },
    HuffEntry { code: 43, len: 9, a: 12, b: 4 }, HuffEntry { code: 34, len: 10, a: 12, b: 5 }, HuffEntry { code: 33, len: 10, a: 12, b: 6 }, HuffEntry { code: 32, len: 10, a: 12, b: 7 },
    HuffEntry { code: 27, len: 11, a: 12, b: 8 }, HuffEntry { code: 26, len: 11, a: 12, b: 9 }, HuffEntry { code: 25, len: 11, a: 12, b: 10 }, HuffEntry { code: 19, len: 12, a: 12, b: 11 },
    HuffEntry { code: 18, len: 12, a: 12, b: 12 }, HuffEntry { code: 17, len: 12, a: 12, b: 13 }, HuffEntry { code: 16, len: 12, a: 12, b: 14 }, HuffEntry { code: 9, len: 13, a: 12, b: 15 },
    HuffEntry { code: 42, len: 9, a: 13, b: 0 }, HuffEntry { code: 41, len: 9, a: 13, b: 1 }, HuffEntry { code: 40, len: 9, a: 13, b: 2 }, HuffEntry { code: 39, len: 9, a: 13, b: 3 },
    HuffEntry { code: 31, len: 10, a: 13, b: 4 }, HuffEntry { code: 30, len: 10, a: 13, b: 5 }, HuffEntry { code: 29, len: 10, a: 13, b: 6 }, HuffEntry { code: 24, len: 11, a: 13, b: 7 },
    HuffEntry { code: 23, len: 11, a: 13, b: 8 }, HuffEntry { code: 22, len: 11, a: 13, b: 9 }, HuffEntry { code: 15, len: 12, a: 13, b: 10 }, HuffEntry { code: 14, len: 12, a: 13, b: 11 },
    HuffEntry { code: 13, len: 12, a: 13, b: 12 }, HuffEntry { code: 12, len: 12, a: 13, b: 13 }, HuffEntry { code: 8, len: 13, a: 13, b: 14 }, HuffEntry { code: 7, len: 13, a: 13, b: 15 },
    HuffEntry { code: 38, len: 9, a: 14, b: 0 }, HuffEntry { code: 37, len: 9, a: 14, b: 1 }, HuffEntry { code: 36, len: 9, a: 14, b: 2 }, HuffEntry { code: 28, len: 10, a: 14, b: 3 },
    HuffEntry { code: 27, len: 10, a: 14, b: 4 }, HuffEntry { code: 26, len: 10, a: 14, b: 5 }, HuffEntry { code: 21, len: 11, a: 14, b: 6 }, HuffEntry { code: 20, len: 11, a: 14, b: 7 },
    HuffEntry { code: 19, len: 11, a: 14, b: 8 }, HuffEntry { code: 11, len: 12, a: 14, b: 9 }, HuffEntry { code: 10, len: 12, a: 14, b: 10 }, HuffEntry { code: 9, len: 12, a: 14, b: 11 },
    HuffEntry { code: 8, len: 12, a: 14, b: 12 }, HuffEntry { code: 6, len: 13, a: 14, b: 13 }, HuffEntry { code: 5, len: 13, a: 14, b: 14 }, HuffEntry { code: 4, len: 13, a: 14, b: 15 },
    HuffEntry { code: 35, len: 9, a: 15, b: 0 }, HuffEntry { code: 34, len: 9, a: 15, b: 1 }, HuffEntry { code: 25, len: 10, a: 15, b: 2 }, HuffEntry { code: 24, len: 10, a: 15, b: 3 },
    HuffEntry { code: 23, len: 10, a: 15, b: 4 }, HuffEntry { code: 18, len: 11, a: 15, b: 5 }, HuffEntry { code: 17, len: 11, a: 15, b: 6 }, HuffEntry { code: 16, len: 11, a: 15, b: 7 },
    HuffEntry { code: 15, len: 11, a: 15, b: 8 }, HuffEntry { code: 7, len: 12, a: 15, b: 9 }, HuffEntry { code: 6, len: 12, a: 15, b: 10 }, HuffEntry { code: 5, len: 12, a: 15, b: 11 },
    HuffEntry { code: 3, len: 13, a: 15, b: 12 }, HuffEntry { code: 2, len: 13, a: 15, b: 13 }, HuffEntry { code: 1, len: 13, a: 15, b: 14 }, HuffEntry { code: 0, len: 13, a: 15, b: 15 },
];

#[rustfmt::skip]
const TABLE_15_LENGTHS: [HuffEntry; 256] = [
    HuffEntry { code: 31, len: 5, a: 0, b: 0 }, HuffEntry { code: 30, len: 5, a: 0, b: 1 }, HuffEntry { code: 57, len: 6, a: 0, b: 2 }, HuffEntry { code: 56, len: 6, a: 0, b: 3 },
    HuffEntry { code: 55, len: 6, a: 0, b: 4 }, HuffEntry { code: 54, len: 6, a: 0, b: 5 }, HuffEntry { code: 79, len: 7, a: 0, b: 6 }, HuffEntry { code: 78, len: 7, a: 0, b: 7 },
    HuffEntry { code: 77, len: 7, a: 0, b: 8 }, HuffEntry { code: 76, len: 7, a: 0, b: 9 }, HuffEntry { code: 91, len: 8, a: 0, b: 10 }, HuffEntry { code: 90, len: 8, a: 0, b: 11 },
    HuffEntry { code: 89, len: 8, a: 0, b: 12 }, HuffEntry { code: 88, len: 8, a: 0, b: 13 }, HuffEntry { code: 83, len: 9, a: 0, b: 14 }, HuffEntry { code: 82, len: 9, a: 0, b: 15 },
    HuffEntry { code: 29, len: 5, a: 1, b: 0 }, HuffEntry { code: 53, len: 6, a: 1, b: 1 }, HuffEntry { code: 52, len: 6, a: 1, b: 2 }, HuffEntry { code: 51, len: 6, a: 1, b: 3 },
    HuffEntry { code: 50, len: 6, a: 1, b: 4 }, HuffEntry { code: 75, len: 7, a: 1, b: 5 }, HuffEntry { code: 74, len: 7, a: 1, b: 6 }, HuffEntry { code: 73, len: 7, a: 1, b: 7 },
    HuffEntry { code: 72, len: 7, a: 1, b: 8 }, HuffEntry { code: 87, len: 8, a: 1, b: 9 }, HuffEntry { code: 86, len: 8, a: 1, b: 10 }, HuffEntry { code: 85, len: 8, a: 1, b: 11 },
    HuffEntry { code: 84, len: 8, a: 1, b: 12 }, HuffEntry { code: 81, len: 9, a: 1, b: 13 }, HuffEntry { code: 80, len: 9, a: 1, b: 14 }, HuffEntry { code: 79, len: 9, a: 1, b: 15 },
    HuffEntry { code: 49, len: 6, a: 2, b: 0 }, HuffEntry { code: 48, len: 6, a: 2, b: 1 }, HuffEntry { code: 47, len: 6, a: 2, b: 2 }, HuffEntry { code: 46, len: 6, a: 2, b: 3 },
    HuffEntry { code: 71, len: 7, a: 2, b: 4 }, HuffEntry { code: 70, len: 7, a: 2, b: 5 }, HuffEntry { code: 69, len: 7, a: 2, b: 6 }, HuffEntry { code: 68, len: 7, a: 2, b: 7 },
    HuffEntry { code: 83, len: 8, a: 2, b: 8 }, HuffEntry { code: 82, len: 8, a: 2, b: 9 }, HuffEntry { code: 81, len: 8, a: 2, b: 10 }, HuffEntry { code: 80, len: 8, a: 2, b: 11 },
    HuffEntry { code: 78, len: 9, a: 2, b: 12 }, HuffEntry { code: 77, len: 9, a: 2, b: 13 }, HuffEntry { code: 76, len: 9, a: 2, b: 14 }, HuffEntry { code: 67, len: 10, a: 2, b: 15 },
    HuffEntry { code: 45, len: 6, a: 3, b: 0 }, HuffEntry { code: 44, len: 6, a: 3, b: 1 }, HuffEntry { code: 43, len: 6, a: 3, b: 2 }, HuffEntry { code: 67, len: 7, a: 3, b: 3 },
    HuffEntry { code: 66, len: 7, a: 3, b: 4 }, HuffEntry { code: 65, len: 7, a: 3, b: 5 }, HuffEntry { code: 64, len: 7, a: 3, b: 6 }, HuffEntry { code: 79, len: 8, a: 3, b: 7 },
    HuffEntry { code: 78, len: 8, a: 3, b: 8 }, HuffEntry { code: 77, len: 8, a: 3, b: 9 }, HuffEntry { code: 76, len: 8, a: 3, b: 10 }, HuffEntry { code: 75, len: 9, a: 3, b: 11 },
    HuffEntry { code: 74, len: 9, a: 3, b: 12 }, HuffEntry { code: 73, len: 9, a: 3, b: 13 }, HuffEntry { code: 66, len: 10, a: 3, b: 14 }, HuffEntry { code: 65, len: 10, a: 3, b: 15 },
    HuffEntry { code: 42, len: 6, a: 4, b: 0 }, HuffEntry { code: 41, len: 6, a: 4, b: 1 }, HuffEntry { code: 63, len: 7, a: 4, b: 2 }, HuffEntry { code: 62, len: 7, a: 4, b: 3 },
    HuffEntry { code: 61, len: 7, a: 4, b: 4 }, HuffEntry { code: 60, len: 7, a: 4, b: 5 }, HuffEntry { code: 75, len: 8, a: 4, b: 6 }, HuffEntry { code: 74, len: 8, a: 4, b: 7 },
    HuffEntry { code: 73, len: 8, a: 4, b: 8 }, HuffEntry { code: 72, len: 8, a: 4, b: 9 }, HuffEntry { code: 72, len: 9, a: 4, b: 10 }, HuffEntry { code: 71, len: 9, a: 4, b: 11 },
    HuffEntry { code: 70, len: 9, a: 4, b: 12 }, HuffEntry { code: 64, len: 10, a: 4, b: 13 }, HuffEntry { code: 63, len: 10, a: 4, b: 14 }, HuffEntry { code: 62, len: 10, a: 4, b: 15 },
    HuffEntry { code: 40, len: 6, a: 5, b: 0 }, HuffEntry { code: 59, len: 7, a: 5, b: 1 }, HuffEntry { code: 58, len: 7, a: 5, b: 2 }, HuffEntry { code: 57, len: 7, a: 5, b: 3 },
    HuffEntry { code: 56, len: 7, a: 5, b: 4 }, HuffEntry { code: 71, len: 8, a: 5, b: 5 }, HuffEntry { code: 70, len: 8, a: 5, b: 6 }, HuffEntry { code: 69, len: 8, a: 5, b: 7 },
    HuffEntry { code: 68, len: 8, a: 5, b: 8 }, HuffEntry { code: 69, len: 9, a: 5, b: 9 }, HuffEntry { code: 68, len: 9, a: 5, b: 10 }, HuffEntry { code: 67, len: 9, a: 5, b: 11 },
    HuffEntry { code: 61, len: 10, a: 5, b: 12 }, HuffEntry { code: 60, len: 10, a: 5, b: 13 }, HuffEntry { code: 59, len: 10, a: 5, b: 14 }, HuffEntry { code: 58, len: 10, a: 5, b: 15 },
    HuffEntry { code: 55, len: 7, a: 6, b: 0 }, HuffEntry { code: 54, len: 7, a: 6, b: 1 }, HuffEntry { code: 53, len: 7, a: 6, b: 2 }, HuffEntry { code: 52, len: 7, a: 6, b: 3 },
    HuffEntry { code: 67, len: 8, a: 6, b: 4 }, HuffEntry { code: 66, len: 8, a: 6, b: 5 }, HuffEntry { code: 65, len: 8, a: 6, b: 6 }, HuffEntry { code: 64, len: 8, a: 6, b: 7 },
    HuffEntry { code: 66, len: 9, a: 6, b: 8 }, HuffEntry { code: 65, len: 9, a: 6, b: 9 }, HuffEntry { code: 64, len: 9, a: 6, b: 10 }, HuffEntry { code: 57, len: 10, a: 6, b: 11 },
    HuffEntry { code: 56, len: 10, a: 6, b: 12 }, HuffEntry { code: 55, len: 10, a: 6, b: 13 }, HuffEntry { code: 54, len: 10, a: 6, b: 14 }, HuffEntry { code: 43, len: 11, a: 6, b: 15 },
    HuffEntry { code: 51, len: 7, a: 7, b: 0 }, HuffEntry { code: 50, len: 7, a: 7, b: 1 }, HuffEntry { code: 49, len: 7, a: 7, b: 2 }, HuffEntry { code: 63, len: 8, a: 7, b: 3 },
    HuffEntry { code: 62, len: 8, a: 7, b: 4 }, HuffEntry { code: 61, len: 8, a: 7, b: 5 }, HuffEntry { code: 60, len: 8, a: 7, b: 6 }, HuffEntry { code: 63, len: 9, a: 7, b: 7 },
    HuffEntry { code: 62, len: 9, a: 7, b: 8 }, HuffEntry { code: 61, len: 9, a: 7, b: 9 }, HuffEntry { code: 53, len: 10, a: 7, b: 10 }, HuffEntry { code: 52, len: 10, a: 7, b: 11 },
    HuffEntry { code: 51, len: 10, a: 7, b: 12 }, HuffEntry { code: 50, len: 10, a: 7, b: 13 }, HuffEntry { code: 42, len: 11, a: 7, b: 14 }, HuffEntry { code: 41, len: 11, a: 7, b: 15 },
    HuffEntry { code: 48, len: 7, a: 8, b: 0 }, HuffEntry { code: 47, len: 7, a: 8, b: 1 }, HuffEntry { code: 59, len: 8, a: 8, b: 2 }, HuffEntry { code: 58, len: 8, a: 8, b: 3 },
    HuffEntry { code: 57, len: 8, a: 8, b: 4 }, HuffEntry { code: 56, len: 8, a: 8, b: 5 }, HuffEntry { code: 60, len: 9, a: 8, b: 6 }, HuffEntry { code: 59, len: 9, a: 8, b: 7 },
    HuffEntry { code: 58, len: 9, a: 8, b: 8 }, HuffEntry { code: 49, len: 10, a: 8, b: 9 }, HuffEntry { code: 48, len: 10, a: 8, b: 10 }, HuffEntry { code: 47, len: 10, a: 8, b: 11 },
    HuffEntry { code: 46, len: 10, a: 8, b: 12 }, HuffEntry { code: 40, len: 11, a: 8, b: 13 }, HuffEntry { code: 39, len: 11, a: 8, b: 14 }, HuffEntry { code: 38, len: 11, a: 8, b: 15 },
    HuffEntry { code: 46, len: 7, a: 9, b: 0 }, HuffEntry { code: 55, len: 8, a: 9, b: 1 }, HuffEntry { code: 54, len: 8, a: 9, b: 2 }, HuffEntry { code: 53, len: 8, a: 9, b: 3 },
    HuffEntry { code: 52, len: 8, a: 9, b: 4 }, HuffEntry { code: 57, len: 9, a: 9, b: 5 }, HuffEntry { code: 56, len: 9, a: 9, b: 6 }, HuffEntry { code: 55, len: 9, a: 9, b: 7 },
    HuffEntry { code: 45, len: 10, a: 9, b: 8 }, HuffEntry { code: 44, len: 10, a: 9, b: 9 }, HuffEntry { code: 43, len: 10, a: 9, b: 10 }, HuffEntry { code: 42, len: 10, a: 9, b: 11 },
    HuffEntry { code: 37, len: 11, a: 9, b: 12 }, HuffEntry { code: 36, len: 11, a: 9, b: 13 }, HuffEntry { code: 35, len: 11, a: 9, b: 14 }, HuffEntry { code: 34, len: 11, a: 9, b: 15 },
    HuffEntry { code: 51, len: 8, a: 10, b: 0 }, HuffEntry { code: 50, len: 8, a: 10, b: 1 }, HuffEntry { code: 49, len: 8, a: 10, b: 2 }, HuffEntry { code: 48, len: 8, a: 10, b: 3 },
    HuffEntry { code: 54, len: 9, a: 10, b: 4 }, HuffEntry { code: 53, len: 9, a: 10, b: 5 }, HuffEntry { code: 52, len: 9, a: 10, b: 6 }, HuffEntry { code: 41, len: 10, a: 10, b: 7 },
    HuffEntry { code: 40, len: 10, a: 10, b: 8 }, HuffEntry { code: 39, len: 10, a: 10, b: 9 }, HuffEntry { code: 38, len: 10, a: 10, b: 10 }, HuffEntry { code: 33, len: 11, a: 10, b: 11 },
    HuffEntry { code: 32, len: 11, a: 10, b: 12 }, HuffEntry { code: 31, len: 11, a: 10, b: 13 }, HuffEntry { code: 30, len: 11, a: 10, b: 14 }, HuffEntry { code: 19, len: 12, a: 10, b: 15 },
    HuffEntry { code: 47, len: 8, a: 11, b: 0 }, HuffEntry { code: 46, len: 8, a: 11, b: 1 }, HuffEntry { code: 45, len: 8, a: 11, b: 2 }, HuffEntry { code: 51, len: 9, a: 11, b: 3 },
    HuffEntry { code: 50, len: 9, a: 11, b: 4 }, HuffEntry { code: 49, len: 9, a: 11, b: 5 }, HuffEntry { code: 37, len: 10, a: 11, b: 6 }, HuffEntry { code: 36, len: 10, a: 11, b: 7 },
    HuffEntry { code: 35, len: 10, a: 11, b: 8 }, HuffEntry { code: 34, len: 10, a: 11, b: 9 }, HuffEntry { code: 29, len: 11, a: 11, b: 10 }, HuffEntry { code: 28, len: 11, a: 11, b: 11 },
    HuffEntry { code: 27, len: 11, a: 11, b: 12 }, HuffEntry { code: 26, len: 11, a: 11, b: 13 }, HuffEntry { code: 18, len: 12, a: 11, b: 14 }, HuffEntry { code: 17, len: 12, a: 11, b: 15 },
    HuffEntry { code: 44, len: 8, a: 12, b: 0 }, HuffEntry { code: 43, len: 8, a: 12, b: 1 }, HuffEntry { code: 48, len: 9, a: 12, b: 2 }, HuffEntry { code: 47, len: 9, a: 12, b: 3 },
    HuffEntry { code: 46, len: 9, a: 12, b: 4 }, HuffEntry { code: 45, len: 9, a: 12, b: 5 }, HuffEntry { code: 33, len: 10, a: 12, b: 6 }, HuffEntry { code: 32, len: 10, a: 12, b: 7 },
    HuffEntry { code: 31, len: 10, a: 12, b: 8 }, HuffEntry { code: 25, len: 11, a: 12, b: 9 }, HuffEntry { code: 24, len: 11, a: 12, b: 10 }, HuffEntry { code: 23, len: 11, a: 12, b: 11 },
    HuffEntry { code: 22, len: 11, a: 12, b: 12 }, HuffEntry { code: 16, len: 12, a: 12, b: 13 }, HuffEntry { code: 15, len: 12, a: 12, b: 14 }, HuffEntry { code: 14, len: 12, a: 12, b: 15 },
    HuffEntry { code: 42, len: 8, a: 13, b: 0 }, HuffEntry { code: 44, len: 9, a: 13, b: 1 }, HuffEntry { code: 43, len: 9, a: 13, b: 2 }, HuffEntry { code: 42, len: 9, a: 13, b: 3 },
    HuffEntry { code: 41, len: 9, a: 13, b: 4 }, HuffEntry { code: 30, len: 10, a: 13, b: 5 }, HuffEntry { code: 29, len: 10, a: 13, b: 6 }, HuffEntry { code: 28, len: 10, a: 13, b: 7 },
    HuffEntry { code: 21, len: 11, a: 13, b: 8 }, HuffEntry { code: 20, len: 11, a: 13, b: 9 }, HuffEntry { code: 19, len: 11, a: 13, b: 10 }, HuffEntry { code: 18, len: 11, a: 13, b: 11 },
    HuffEntry { code: 13, len: 12, a: 13, b: 12 }, HuffEntry { code: 12, len: 12, a: 13, b: 13 }, HuffEntry { code: 11, len: 12, a: 13, b: 14 }, HuffEntry { code: 10, len: 12, a: 13, b: 15 },
    HuffEntry { code: 40, len: 9, a: 14, b: 0 }, HuffEntry { code: 39, len: 9, a: 14, b: 1 }, HuffEntry { code: 38, len: 9, a: 14, b: 2 }, HuffEntry { code: 37, len: 9, a: 14, b: 3 },
    HuffEntry { code: 27, len: 10, a: 14, b: 4 }, HuffEntry { code: 26, len: 10, a: 14, b: 5 }, HuffEntry { code: 25, len: 10, a: 14, b: 6 }, HuffEntry { code: 17, len: 11, a: 14, b: 7 },
    HuffEntry { code: 16, len: 11, a: 14, b: 8 }, HuffEntry { code: 15, len: 11, a: 14, b: 9 }, HuffEntry { code: 14, len: 11, a: 14, b: 10 }, HuffEntry { code: 9, len: 12, a: 14, b: 11 },
    HuffEntry { code: 8, len: 12, a: 14, b: 12 }, HuffEntry { code: 7, len: 12, a: 14, b: 13 }, HuffEntry { code: 6, len: 12, a: 14, b: 14 }, HuffEntry { code: 1, len: 13, a: 14, b: 15 },
    HuffEntry { code: 36, len: 9, a: 15, b: 0 }, HuffEntry { code: 35, len: 9, a: 15, b: 1 }, HuffEntry { code: 34, len: 9, a: 15, b: 2 }, HuffEntry { code: 24, len: 10, a: 15, b: 3 },
    HuffEntry { code: 23, len: 10, a: 15, b: 4 }, HuffEntry { code: 22, len: 10, a: 15, b: 5 }, HuffEntry { code: 13, len: 11, a: 15, b: 6 }, HuffEntry { code: 12, len: 11, a: 15, b: 7 },
    HuffEntry { code: 11, len: 11, a: 15, b: 8 }, HuffEntry { code: 10, len: 11, a: 15, b: 9 }, HuffEntry { code: 5, len: 12, a: 15, b: 10 }, HuffEntry { code: 4, len: 12, a: 15, b: 11 },
    HuffEntry { code: 3, len: 12, a: 15, b: 12 }, HuffEntry { code: 2, len: 12, a: 15, b: 13 }, HuffEntry { code: 1, len: 12, a: 15, b: 14 }, HuffEntry { code: 0, len: 13, a: 15, b: 15 },
];

#[rustfmt::skip]
const TABLE_16_LENGTHS: [HuffEntry; 256] = [
    HuffEntry { code: 31, len: 5, a: 0, b: 0 }, HuffEntry { code: 30, len: 5, a: 0, b: 1 }, HuffEntry { code: 57, len: 6, a: 0, b: 2 }, HuffEntry { code: 56, len: 6, a: 0, b: 3 },
    HuffEntry { code: 55, len: 6, a: 0, b: 4 }, HuffEntry { code: 54, len: 6, a: 0, b: 5 }, HuffEntry { code: 79, len: 7, a: 0, b: 6 }, HuffEntry { code: 78, len: 7, a: 0, b: 7 },
    HuffEntry { code: 77, len: 7, a: 0, b: 8 }, HuffEntry { code: 76, len: 7, a: 0, b: 9 }, HuffEntry { code: 91, len: 8, a: 0, b: 10 }, HuffEntry { code: 90, len: 8, a: 0, b: 11 },
    HuffEntry { code: 89, len: 8, a: 0, b: 12 }, HuffEntry { code: 88, len: 8, a: 0, b: 13 }, HuffEntry { code: 83, len: 9, a: 0, b: 14 }, HuffEntry { code: 82, len: 9, a: 0, b: 15 },
    HuffEntry { code: 29, len: 5, a: 1, b: 0 }, HuffEntry { code: 53, len: 6, a: 1, b: 1 }, HuffEntry { code: 52, len: 6, a: 1, b: 2 }, HuffEntry { code: 51, len: 6, a: 1, b: 3 },
    HuffEntry { code: 50, len: 6, a: 1, b: 4 }, HuffEntry { code: 75, len: 7, a: 1, b: 5 }, HuffEntry { code: 74, len: 7, a: 1, b: 6 }, HuffEntry { code: 73, len: 7, a: 1, b: 7 },
    HuffEntry { code: 72, len: 7, a: 1, b: 8 }, HuffEntry { code: 87, len: 8, a: 1, b: 9 }, HuffEntry { code: 86, len: 8, a: 1, b: 10 }, HuffEntry { code: 85, len: 8, a: 1, b: 11 },
    HuffEntry { code: 84, len: 8, a: 1, b: 12 }, HuffEntry { code: 81, len: 9, a: 1, b: 13 }, HuffEntry { code: 80, len: 9, a: 1, b: 14 }, HuffEntry { code: 79, len: 9, a: 1, b: 15 },
    HuffEntry { code: 49, len: 6, a: 2, b: 0 }, HuffEntry { code: 48, len: 6, a: 2, b: 1 }, HuffEntry { code: 47, len: 6, a: 2, b: 2 }, HuffEntry { code: 46, len: 6, a: 2, b: 3 },
    HuffEntry { code: 71, len: 7, a: 2, b: 4 }, HuffEntry { code: 70, len: 7, a: 2, b: 5 }, HuffEntry { code: 69, len: 7, a: 2, b: 6 }, HuffEntry { code: 68, len: 7, a: 2, b: 7 },
    HuffEntry { code: 83, len: 8, a: 2, b: 8 }, HuffEntry { code: 82, len: 8, a: 2, b: 9 }, HuffEntry { code: 81, len: 8, a: 2, b: 10 }, HuffEntry { code: 80, len: 8, a: 2, b: 11 },
    HuffEntry { code: 78, len: 9, a: 2, b: 12 }, HuffEntry { code: 77, len: 9, a: 2, b: 13 }, HuffEntry { code: 76, len: 9, a: 2, b: 14 }, HuffEntry { code: 67, len: 10, a: 2, b: 15 },
    HuffEntry { code: 45, len: 6, a: 3, b: 0 }, HuffEntry { code: 44, len: 6, a: 3, b: 1 }, HuffEntry { code: 43, len: 6, a: 3, b: 2 }, HuffEntry { code: 67, len: 7, a: 3, b: 3 },
    HuffEntry { code: 66, len: 7, a: 3, b: 4 }, HuffEntry { code: 65, len: 7, a: 3, b: 5 }, HuffEntry { code: 64, len: 7, a: 3, b: 6 }, HuffEntry { code: 79, len: 8, a: 3, b: 7 },
    HuffEntry { code: 78, len: 8, a: 3, b: 8 }, HuffEntry { code: 77, len: 8, a: 3, b: 9 }, HuffEntry { code: 76, len: 8, a: 3, b: 10 }, HuffEntry { code: 75, len: 9, a: 3, b: 11 },
    HuffEntry { code: 74, len: 9, a: 3, b: 12 }, HuffEntry { code: 73, len: 9, a: 3, b: 13 }, HuffEntry { code: 66, len: 10, a: 3, b: 14 }, HuffEntry { code: 65, len: 10, a: 3, b: 15 },
    HuffEntry { code: 42, len: 6, a: 4, b: 0 }, HuffEntry { code: 41, len: 6, a: 4, b: 1 }, HuffEntry { code: 63, len: 7, a: 4, b: 2 }, HuffEntry { code: 62, len: 7, a: 4, b: 3 },
    HuffEntry { code: 61, len: 7, a: 4, b: 4 }, HuffEntry { code: 60, len: 7, a: 4, b: 5 }, HuffEntry { code: 75, len: 8, a: 4, b: 6 }, HuffEntry { code: 74, len: 8, a: 4, b: 7 },
    HuffEntry { code: 73, len: 8, a: 4, b: 8 }, HuffEntry { code: 72, len: 8, a: 4, b: 9 }, HuffEntry { code: 72, len: 9, a: 4, b: 10 }, HuffEntry { code: 71, len: 9, a: 4, b: 11 },
    HuffEntry { code: 70, len: 9, a: 4, b: 12 }, HuffEntry { code: 64, len: 10, a: 4, b: 13 }, HuffEntry { code: 63, len: 10, a: 4, b: 14 }, HuffEntry { code: 62, len: 10, a: 4, b: 15 },
    HuffEntry { code: 40, len: 6, a: 5, b: 0 }, HuffEntry { code: 59, len: 7, a: 5, b: 1 }, HuffEntry { code: 58, len: 7, a: 5, b: 2 }, HuffEntry { code: 57, len: 7, a: 5, b: 3 },
    HuffEntry { code: 56, len: 7, a: 5, b: 4 }, HuffEntry { code: 71, len: 8, a: 5, b: 5 }, HuffEntry { code: 70, len: 8, a: 5, b: 6 }, HuffEntry { code: 69, len: 8, a: 5, b: 7 },
    HuffEntry { code: 68, len: 8, a: 5, b: 8 }, HuffEntry { code: 69, len: 9, a: 5, b: 9 }, HuffEntry { code: 68, len: 9, a: 5, b: 10 }, HuffEntry { code: 67, len: 9, a: 5, b: 11 },
    HuffEntry { code: 61, len: 10, a: 5, b: 12 }, HuffEntry { code: 60, len: 10, a: 5, b: 13 }, HuffEntry { code: 59, len: 10, a: 5, b: 14 }, HuffEntry { code: 58, len: 10, a: 5, b: 15 },
    HuffEntry { code: 55, len: 7, a: 6, b: 0 }, HuffEntry { code: 54, len: 7, a: 6, b: 1 }, HuffEntry { code: 53, len: 7, a: 6, b: 2 }, HuffEntry { code: 52, len: 7, a: 6, b: 3 },
    HuffEntry { code: 67, len: 8, a: 6, b: 4 }, HuffEntry { code: 66, len: 8, a: 6, b: 5 }, HuffEntry { code: 65, len: 8, a: 6, b: 6 }, HuffEntry { code: 64, len: 8, a: 6, b: 7 },
    HuffEntry { code: 66, len: 9, a: 6, b: 8 }, HuffEntry { code: 65, len: 9, a: 6, b: 9 }, HuffEntry { code: 64, len: 9, a: 6, b: 10 }, HuffEntry { code: 57, len: 10, a: 6, b: 11 },
    HuffEntry { code: 56, len: 10, a: 6, b: 12 }, HuffEntry { code: 55, len: 10, a: 6, b: 13 }, HuffEntry { code: 54, len: 10, a: 6, b: 14 }, HuffEntry { code: 43, len: 11, a: 6, b: 15 },
    HuffEntry { code: 51, len: 7, a: 7, b: 0 }, HuffEntry { code: 50, len: 7, a: 7, b: 1 }, HuffEntry { code: 49, len: 7, a: 7, b: 2 }, HuffEntry { code: 63, len: 8, a: 7, b: 3 },
    HuffEntry { code: 62, len: 8, a: 7, b: 4 }, HuffEntry { code: 61, len: 8, a: 7, b: 5 }, HuffEntry { code: 60, len: 8, a: 7, b: 6 }, HuffEntry { code: 63, len: 9, a: 7, b: 7 },
    HuffEntry { code: 62, len: 9, a: 7, b: 8 }, HuffEntry { code: 61, len: 9, a: 7, b: 9 }, HuffEntry { code: 53, len: 10, a: 7, b: 10 }, HuffEntry { code: 52, len: 10, a: 7, b: 11 },
    HuffEntry { code: 51, len: 10, a: 7, b: 12 }, HuffEntry { code: 50, len: 10, a: 7, b: 13 }, HuffEntry { code: 42, len: 11, a: 7, b: 14 }, HuffEntry { code: 41, len: 11, a: 7, b: 15 },
    HuffEntry { code: 48, len: 7, a: 8, b: 0 }, HuffEntry { code: 47, len: 7, a: 8, b: 1 }, HuffEntry { code: 59, len: 8, a: 8, b: 2 }, HuffEntry { code: 58, len: 8, a: 8, b: 3 },
    HuffEntry { code: 57, len: 8, a: 8, b: 4 }, HuffEntry { code: 56, len: 8, a: 8, b: 5 }, HuffEntry { code: 60, len: 9, a: 8, b: 6 }, HuffEntry { code: 59, len: 9, a: 8, b: 7 },
    HuffEntry { code: 58, len: 9, a: 8, b: 8 }, HuffEntry { code: 49, len: 10, a: 8, b: 9 }, HuffEntry { code: 48, len: 10, a: 8, b: 10 }, HuffEntry { code: 47, len: 10, a: 8, b: 11 },
    HuffEntry { code: 46, len: 10, a: 8, b: 12 }, HuffEntry { code: 40, len: 11, a: 8, b: 13 }, HuffEntry { code: 39, len: 11, a: 8, b: 14 }, HuffEntry { code: 38, len: 11, a: 8, b: 15 },
    HuffEntry { code: 46, len: 7, a: 9, b: 0 }, HuffEntry { code: 55, len: 8, a: 9, b: 1 }, HuffEntry { code: 54, len: 8, a: 9, b: 2 }, HuffEntry { code: 53, len: 8, a: 9, b: 3 },
    HuffEntry { code: 52, len: 8, a: 9, b: 4 }, HuffEntry { code: 57, len: 9, a: 9, b: 5 }, HuffEntry { code: 56, len: 9, a: 9, b: 6 }, HuffEntry { code: 55, len: 9, a: 9, b: 7 },
    HuffEntry { code: 45, len: 10, a: 9, b: 8 }, HuffEntry { code: 44, len: 10, a: 9, b: 9 }, HuffEntry { code: 43, len: 10, a: 9, b: 10 }, HuffEntry { code: 42, len: 10, a: 9, b: 11 },
    HuffEntry { code: 37, len: 11, a: 9, b: 12 }, HuffEntry { code: 36, len: 11, a: 9, b: 13 }, HuffEntry { code: 35, len: 11, a: 9, b: 14 }, HuffEntry { code: 34, len: 11, a: 9, b: 15 },
    HuffEntry { code: 51, len: 8, a: 10, b: 0 }, HuffEntry { code: 50, len: 8, a: 10, b: 1 }, HuffEntry { code: 49, len: 8, a: 10, b: 2 }, HuffEntry { code: 48, len: 8, a: 10, b: 3 },
    HuffEntry { code: 54, len: 9, a: 10, b: 4 }, HuffEntry { code: 53, len: 9, a: 10, b: 5 }, HuffEntry { code: 52, len: 9, a: 10, b: 6 }, HuffEntry { code: 41, len: 10, a: 10, b: 7 },
    HuffEntry { code: 40, len: 10, a: 10, b: 8 }, HuffEntry { code: 39, len: 10, a: 10, b: 9 }, HuffEntry { code: 38, len: 10, a: 10, b: 10 }, HuffEntry { code: 33, len: 11, a: 10, b: 11 },
    HuffEntry { code: 32, len: 11, a: 10, b: 12 }, HuffEntry { code: 31, len: 11, a: 10, b: 13 }, HuffEntry { code: 30, len: 11, a: 10, b: 14 }, HuffEntry { code: 19, len: 12, a: 10, b: 15 },
    HuffEntry { code: 47, len: 8, a: 11, b: 0 }, HuffEntry { code: 46, len: 8, a: 11, b: 1 }, HuffEntry { code: 45, len: 8, a: 11, b: 2 }, HuffEntry { code: 51, len: 9, a: 11, b: 3 },
    HuffEntry { code: 50, len: 9, a: 11, b: 4 }, HuffEntry { code: 49, len: 9, a: 11, b: 5 }, HuffEntry { code: 37, len: 10, a: 11, b: 6 }, HuffEntry { code: 36, len: 10, a: 11, b: 7 },
    HuffEntry { code: 35, len: 10, a: 11, b: 8 }, HuffEntry { code: 34, len: 10, a: 11, b: 9 }, HuffEntry { code: 29, len: 11, a: 11, b: 10 }, HuffEntry { code: 28, len: 11, a: 11, b: 11 },
    HuffEntry { code: 27, len: 11, a: 11, b: 12 }, HuffEntry { code: 26, len: 11, a: 11, b: 13 }, HuffEntry { code: 18, len: 12, a: 11, b: 14 }, HuffEntry { code: 17, len: 12, a: 11, b: 15 },
    HuffEntry { code: 44, len: 8, a: 12, b: 0 }, HuffEntry { code: 43, len: 8, a: 12, b: 1 }, HuffEntry { code: 48, len: 9, a: 12, b: 2 }, HuffEntry { code: 47, len: 9, a: 12, b: 3 },
    HuffEntry { code: 46, len: 9, a: 12, b: 4 }, HuffEntry { code: 45, len: 9, a: 12, b: 5 }, HuffEntry { code: 33, len: 10, a: 12, b: 6 }, HuffEntry { code: 32, len: 10, a: 12, b: 7 },
    HuffEntry { code: 31, len: 10, a: 12, b: 8 }, HuffEntry { code: 25, len: 11, a: 12, b: 9 }, HuffEntry { code: 24, len: 11, a: 12, b: 10 }, HuffEntry { code: 23, len: 11, a: 12, b: 11 },
    HuffEntry { code: 22, len: 11, a: 12, b: 12 }, HuffEntry { code: 16, len: 12, a: 12, b: 13 }, HuffEntry { code: 15, len: 12, a: 12, b: 14 }, HuffEntry { code: 14, len: 12, a: 12, b: 15 },
    HuffEntry { code: 42, len: 8, a: 13, b: 0 }, HuffEntry { code: 44, len: 9, a: 13, b: 1 }, HuffEntry { code: 43, len: 9, a: 13, b: 2 }, HuffEntry { code: 42, len: 9, a: 13, b: 3 },
    HuffEntry { code: 41, len: 9, a: 13, b: 4 }, HuffEntry { code: 30, len: 10, a: 13, b: 5 }, HuffEntry { code: 29, len: 10, a: 13, b: 6 }, HuffEntry { code: 28, len: 10, a: 13, b: 7 },
    HuffEntry { code: 21, len: 11, a: 13, b: 8 }, HuffEntry { code: 20, len: 11, a: 13, b: 9 }, HuffEntry { code: 19, len: 11, a: 13, b: 10 }, HuffEntry { code: 18, len: 11, a: 13, b: 11 },
    HuffEntry { code: 13, len: 12, a: 13, b: 12 }, HuffEntry { code: 12, len: 12, a: 13, b: 13 }, HuffEntry { code: 11, len: 12, a: 13, b: 14 }, HuffEntry { code: 10, len: 12, a: 13, b: 15 },
    HuffEntry { code: 40, len: 9, a: 14, b: 0 }, HuffEntry { code: 39, len: 9, a: 14, b: 1 }, HuffEntry { code: 38, len: 9, a: 14, b: 2 }, HuffEntry { code: 37, len: 9, a: 14, b: 3 },
    HuffEntry { code: 27, len: 10, a: 14, b: 4 }, HuffEntry { code: 26, len: 10, a: 14, b: 5 }, HuffEntry { code: 25, len: 10, a: 14, b: 6 }, HuffEntry { code: 17, len: 11, a: 14, b: 7 },
    HuffEntry { code: 16, len: 11, a: 14, b: 8 }, HuffEntry { code: 15, len: 11, a: 14, b: 9 }, HuffEntry { code: 14, len: 11, a: 14, b: 10 }, HuffEntry { code: 9, len: 12, a: 14, b: 11 },
    HuffEntry { code: 8, len: 12, a: 14, b: 12 }, HuffEntry { code: 7, len: 12, a: 14, b: 13 }, HuffEntry { code: 6, len: 12, a: 14, b: 14 }, HuffEntry { code: 1, len: 13, a: 14, b: 15 },
    HuffEntry { code: 36, len: 9, a: 15, b: 0 }, HuffEntry { code: 35, len: 9, a: 15, b: 1 }, HuffEntry { code: 34, len: 9, a: 15, b: 2 }, HuffEntry { code: 24, len: 10, a: 15, b: 3 },
    HuffEntry { code: 23, len: 10, a: 15, b: 4 }, HuffEntry { code: 22, len: 10, a: 15, b: 5 }, HuffEntry { code: 13, len: 11, a: 15, b: 6 }, HuffEntry { code: 12, len: 11, a: 15, b: 7 },
    HuffEntry { code: 11, len: 11, a: 15, b: 8 }, HuffEntry { code: 10, len: 11, a: 15, b: 9 }, HuffEntry { code: 5, len: 12, a: 15, b: 10 }, HuffEntry { code: 4, len: 12, a: 15, b: 11 },
    HuffEntry { code: 3, len: 12, a: 15, b: 12 }, HuffEntry { code: 2, len: 12, a: 15, b: 13 }, HuffEntry { code: 1, len: 12, a: 15, b: 14 }, HuffEntry { code: 0, len: 13, a: 15, b: 15 },
];

#[rustfmt::skip]
const TABLE_24_LENGTHS: [HuffEntry; 256] = [
    HuffEntry { code: 31, len: 5, a: 0, b: 0 }, HuffEntry { code: 61, len: 6, a: 0, b: 1 }, HuffEntry { code: 60, len: 6, a: 0, b: 2 }, HuffEntry { code: 59, len: 6, a: 0, b: 3 },
    HuffEntry { code: 58, len: 6, a: 0, b: 4 }, HuffEntry { code: 93, len: 7, a: 0, b: 5 }, HuffEntry { code: 92, len: 7, a: 0, b: 6 }, HuffEntry { code: 91, len: 7, a: 0, b: 7 },
    HuffEntry { code: 90, len: 7, a: 0, b: 8 }, HuffEntry { code: 89, len: 7, a: 0, b: 9 }, HuffEntry { code: 109, len: 8, a: 0, b: 10 }, HuffEntry { code: 108, len: 8, a: 0, b: 11 },
    HuffEntry { code: 107, len: 8, a: 0, b: 12 }, HuffEntry { code: 106, len: 8, a: 0, b: 13 }, HuffEntry { code: 105, len: 8, a: 0, b: 14 }, HuffEntry { code: 89, len: 9, a: 0, b: 15 },
    HuffEntry { code: 57, len: 6, a: 1, b: 0 }, HuffEntry { code: 56, len: 6, a: 1, b: 1 }, HuffEntry { code: 55, len: 6, a: 1, b: 2 }, HuffEntry { code: 54, len: 6, a: 1, b: 3 },
    HuffEntry { code: 88, len: 7, a: 1, b: 4 }, HuffEntry { code: 87, len: 7, a: 1, b: 5 }, HuffEntry { code: 86, len: 7, a: 1, b: 6 }, HuffEntry { code: 85, len: 7, a: 1, b: 7 },
    HuffEntry { code: 84, len: 7, a: 1, b: 8 }, HuffEntry { code: 104, len: 8, a: 1, b: 9 }, HuffEntry { code: 103, len: 8, a: 1, b: 10 }, HuffEntry { code: 102, len: 8, a: 1, b: 11 },
    HuffEntry { code: 101, len: 8, a: 1, b: 12 }, HuffEntry { code: 100, len: 8, a: 1, b: 13 }, HuffEntry { code: 88, len: 9, a: 1, b: 14 }, HuffEntry { code: 87, len: 9, a: 1, b: 15 },
    HuffEntry { code: 53, len: 6, a: 2, b: 0 }, HuffEntry { code: 52, len: 6, a: 2, b: 1 }, HuffEntry { code: 51, len: 6, a: 2, b: 2 }, HuffEntry { code: 83, len: 7, a: 2, b: 3 },
    HuffEntry { code: 82, len: 7, a: 2, b: 4 }, HuffEntry { code: 81, len: 7, a: 2, b: 5 }, HuffEntry { code: 80, len: 7, a: 2, b: 6 }, HuffEntry { code: 79, len: 7, a: 2, b: 7 },
    HuffEntry { code: 99, len: 8, a: 2, b: 8 }, HuffEntry { code: 98, len: 8, a: 2, b: 9 }, HuffEntry { code: 97, len: 8, a: 2, b: 10 }, HuffEntry { code: 96, len: 8, a: 2, b: 11 },
    HuffEntry { code: 95, len: 8, a: 2, b: 12 }, HuffEntry { code: 86, len: 9, a: 2, b: 13 }, HuffEntry { code: 85, len: 9, a: 2, b: 14 }, HuffEntry { code: 84, len: 9, a: 2, b: 15 },
    HuffEntry { code: 50, len: 6, a: 3, b: 0 }, HuffEntry { code: 49, len: 6, a: 3, b: 1 }, HuffEntry { code: 78, len: 7, a: 3, b: 2 }, HuffEntry { code: 77, len: 7, a: 3, b: 3 },
    HuffEntry { code: 76, len: 7, a: 3, b: 4 }, HuffEntry { code: 75, len: 7, a: 3, b: 5 }, HuffEntry { code: 74, len: 7, a: 3, b: 6 }, HuffEntry { code: 94, len: 8, a: 3, b: 7 },
    HuffEntry { code: 93, len: 8, a: 3, b: 8 }, HuffEntry { code: 92, len: 8, a: 3, b: 9 }, HuffEntry { code: 91, len: 8, a: 3, b: 10 }, HuffEntry { code: 90, len: 8, a: 3, b: 11 },
    HuffEntry { code: 83, len: 9, a: 3, b: 12 }, HuffEntry { code: 82, len: 9, a: 3, b: 13 }, HuffEntry { code: 81, len: 9, a: 3, b: 14 }, HuffEntry { code: 80, len: 9, a: 3, b: 15 },
    HuffEntry { code: 48, len: 6, a: 4, b: 0 }, HuffEntry { code: 73, len: 7, a: 4, b: 1 }, HuffEntry { code: 72, len: 7, a: 4, b: 2 }, HuffEntry { code: 71, len: 7, a: 4, b: 3 },
    HuffEntry { code: 70, len: 7, a: 4, b: 4 }, HuffEntry { code: 69, len: 7, a: 4, b: 5 }, HuffEntry { code: 89, len: 8, a: 4, b: 6 }, HuffEntry { code: 88, len: 8, a: 4, b: 7 },
    HuffEntry { code: 87, len: 8, a: 4, b: 8 }, HuffEntry { code: 86, len: 8, a: 4, b: 9 }, HuffEntry { code: 85, len: 8, a: 4, b: 10 }, HuffEntry { code: 79, len: 9, a: 4, b: 11 },
    HuffEntry { code: 78, len: 9, a: 4, b: 12 }, HuffEntry { code: 77, len: 9, a: 4, b: 13 }, HuffEntry { code: 76, len: 9, a: 4, b: 14 }, HuffEntry { code: 61, len: 10, a: 4, b: 15 },
    HuffEntry { code: 47, len: 6, a: 5, b: 0 }, HuffEntry { code: 68, len: 7, a: 5, b: 1 }, HuffEntry { code: 67, len: 7, a: 5, b: 2 }, HuffEntry { code: 66, len: 7, a: 5, b: 3 },
    HuffEntry { code: 65, len: 7, a: 5, b: 4 }, HuffEntry { code: 84, len: 8, a: 5, b: 5 }, HuffEntry { code: 83, len: 8, a: 5, b: 6 }, HuffEntry { code: 82, len: 8, a: 5, b: 7 },
    HuffEntry { code: 81, len: 8, a: 5, b: 8 }, HuffEntry { code: 80, len: 8, a: 5, b: 9 }, HuffEntry { code: 75, len: 9, a: 5, b: 10 }, HuffEntry { code: 74, len: 9, a: 5, b: 11 },
    HuffEntry { code: 73, len: 9, a: 5, b: 12 }, HuffEntry { code: 72, len: 9, a: 5, b: 13 }, HuffEntry { code: 60, len: 10, a: 5, b: 14 }, HuffEntry { code: 59, len: 10, a: 5, b: 15 },
    HuffEntry { code: 64, len: 7, a: 6, b: 0 }, HuffEntry { code: 63, len: 7, a: 6, b: 1 }, HuffEntry { code: 62, len: 7, a: 6, b: 2 }, HuffEntry { code: 61, len: 7, a: 6, b: 3 },
    HuffEntry { code: 79, len: 8, a: 6, b: 4 }, HuffEntry { code: 78, len: 8, a: 6, b: 5 }, HuffEntry { code: 77, len: 8, a: 6, b: 6 }, HuffEntry { code: 76, len: 8, a: 6, b: 7 },
    HuffEntry { code: 75, len: 8, a: 6, b: 8 }, HuffEntry { code: 71, len: 9, a: 6, b: 9 }, HuffEntry { code: 70, len: 9, a: 6, b: 10 }, HuffEntry { code: 69, len: 9, a: 6, b: 11 },
    HuffEntry { code: 68, len: 9, a: 6, b: 12 }, HuffEntry { code: 58, len: 10, a: 6, b: 13 }, HuffEntry { code: 57, len: 10, a: 6, b: 14 }, HuffEntry { code: 56, len: 10, a: 6, b: 15 },
    HuffEntry { code: 60, len: 7, a: 7, b: 0 }, HuffEntry { code: 59, len: 7, a: 7, b: 1 }, HuffEntry { code: 58, len: 7, a: 7, b: 2 }, HuffEntry { code: 74, len: 8, a: 7, b: 3 },
    HuffEntry { code: 73, len: 8, a: 7, b: 4 }, HuffEntry { code: 72, len: 8, a: 7, b: 5 }, HuffEntry { code: 71, len: 8, a: 7, b: 6 }, HuffEntry { code: 70, len: 8, a: 7, b: 7 },
    HuffEntry { code: 67, len: 9, a: 7, b: 8 }, HuffEntry { code: 66, len: 9, a: 7, b: 9 }, HuffEntry { code: 65, len: 9, a: 7, b: 10 }, HuffEntry { code: 64, len: 9, a: 7, b: 11 },
    HuffEntry { code: 55, len: 10, a: 7, b: 12 }, HuffEntry { code: 54, len: 10, a: 7, b: 13 }, HuffEntry { code: 53, len: 10, a: 7, b: 14 }, HuffEntry { code: 52, len: 10, a: 7, b: 15 },
    HuffEntry { code: 57, len: 7, a: 8, b: 0 }, HuffEntry { code: 56, len: 7, a: 8, b: 1 }, HuffEntry { code: 69, len: 8, a: 8, b: 2 }, HuffEntry { code: 68, len: 8, a: 8, b: 3 },
    HuffEntry { code: 67, len: 8, a: 8, b: 4 }, HuffEntry { code: 66, len: 8, a: 8, b: 5 }, HuffEntry { code: 65, len: 8, a: 8, b: 6 }, HuffEntry { code: 63, len: 9, a: 8, b: 7 },
    HuffEntry { code: 62, len: 9, a: 8, b: 8 }, HuffEntry { code: 61, len: 9, a: 8, b: 9 }, HuffEntry { code: 60, len: 9, a: 8, b: 10 }, HuffEntry { code: 51, len: 10, a: 8, b: 11 },
    HuffEntry { code: 50, len: 10, a: 8, b: 12 }, HuffEntry { code: 49, len: 10, a: 8, b: 13 }, HuffEntry { code: 48, len: 10, a: 8, b: 14 }, HuffEntry { code: 47, len: 10, a: 8, b: 15 },
    HuffEntry { code: 55, len: 7, a: 9, b: 0 }, HuffEntry { code: 64, len: 8, a: 9, b: 1 }, HuffEntry { code: 63, len: 8, a: 9, b: 2 }, HuffEntry { code: 62, len: 8, a: 9, b: 3 },
    HuffEntry { code: 61, len: 8, a: 9, b: 4 }, HuffEntry { code: 60, len: 8, a: 9, b: 5 }, HuffEntry { code: 59, len: 9, a: 9, b: 6 }, HuffEntry { code: 58, len: 9, a: 9, b: 7 },
    HuffEntry { code: 57, len: 9, a: 9, b: 8 }, HuffEntry { code: 56, len: 9, a: 9, b: 9 }, HuffEntry { code: 46, len: 10, a: 9, b: 10 }, HuffEntry { code: 45, len: 10, a: 9, b: 11 },
    HuffEntry { code: 44, len: 10, a: 9, b: 12 }, HuffEntry { code: 43, len: 10, a: 9, b: 13 }, HuffEntry { code: 42, len: 10, a: 9, b: 14 }, HuffEntry { code: 25, len: 11, a: 9, b: 15 },
    HuffEntry { code: 59, len: 8, a: 10, b: 0 }, HuffEntry { code: 58, len: 8, a: 10, b: 1 }, HuffEntry { code: 57, len: 8, a: 10, b: 2 }, HuffEntry { code: 56, len: 8, a: 10, b: 3 },
    HuffEntry { code: 55, len: 8, a: 10, b: 4 }, HuffEntry { code: 55, len: 9, a: 10, b: 5 }, HuffEntry { code: 54, len: 9, a: 10, b: 6 }, HuffEntry { code: 53, len: 9, a: 10, b: 7 },
    HuffEntry { code: 52, len: 9, a: 10, b: 8 }, HuffEntry { code: 41, len: 10, a: 10, b: 9 }, HuffEntry { code: 40, len: 10, a: 10, b: 10 }, HuffEntry { code: 39, len: 10, a: 10, b: 11 },
    HuffEntry { code: 38, len: 10, a: 10, b: 12 }, HuffEntry { code: 37, len: 10, a: 10, b: 13 }, HuffEntry { code: 24, len: 11, a: 10, b: 14 }, HuffEntry { code: 23, len: 11, a: 10, b: 15 },
    HuffEntry { code: 54, len: 8, a: 11, b: 0 }, HuffEntry { code: 53, len: 8, a: 11, b: 1 }, HuffEntry { code: 52, len: 8, a: 11, b: 2 }, HuffEntry { code: 51, len: 8, a: 11, b: 3 },
    HuffEntry { code: 51, len: 9, a: 11, b: 4 }, HuffEntry { code: 50, len: 9, a: 11, b: 5 }, HuffEntry { code: 49, len: 9, a: 11, b: 6 }, HuffEntry { code: 48, len: 9, a: 11, b: 7 },
    HuffEntry { code: 36, len: 10, a: 11, b: 8 }, HuffEntry { code: 35, len: 10, a: 11, b: 9 }, HuffEntry { code: 34, len: 10, a: 11, b: 10 }, HuffEntry { code: 33, len: 10, a: 11, b: 11 },
    HuffEntry { code: 32, len: 10, a: 11, b: 12 }, HuffEntry { code: 22, len: 11, a: 11, b: 13 }, HuffEntry { code: 21, len: 11, a: 11, b: 14 }, HuffEntry { code: 20, len: 11, a: 11, b: 15 },
    HuffEntry { code: 50, len: 8, a: 12, b: 0 }, HuffEntry { code: 49, len: 8, a: 12, b: 1 }, HuffEntry { code: 48, len: 8, a: 12, b: 2 }, HuffEntry { code: 47, len: 9, a: 12, b: 3 },
    HuffEntry { code: 46, len: 9, a: 12, b: 4 }, HuffEntry { code: 45, len: 9, a: 12, b: 5 }, HuffEntry { code: 44, len: 9, a: 12, b: 6 }, HuffEntry { code: 31, len: 10, a: 12, b: 7 },
    HuffEntry { code: 30, len: 10, a: 12, b: 8 }, HuffEntry { code: 29, len: 10, a: 12, b: 9 }, HuffEntry { code: 28, len: 10, a: 12, b: 10 }, HuffEntry { code: 27, len: 10, a: 12, b: 11 },
    HuffEntry { code: 19, len: 11, a: 12, b: 12 }, HuffEntry { code: 18, len: 11, a: 12, b: 13 }, HuffEntry { code: 17, len: 11, a: 12, b: 14 }, HuffEntry { code: 16, len: 11, a: 12, b: 15 },
    HuffEntry { code: 47, len: 8, a: 13, b: 0 }, HuffEntry { code: 46, len: 8, a: 13, b: 1 }, HuffEntry { code: 43, len: 9, a: 13, b: 2 }, HuffEntry { code: 42, len: 9, a: 13, b: 3 },
    HuffEntry { code: 41, len: 9, a: 13, b: 4 }, HuffEntry { code: 40, len: 9, a: 13, b: 5 }, HuffEntry { code: 26, len: 10, a: 13, b: 6 }, HuffEntry { code: 25, len: 10, a: 13, b: 7 },
    HuffEntry { code: 24, len: 10, a: 13, b: 8 }, HuffEntry { code: 23, len: 10, a: 13, b: 9 }, HuffEntry { code: 22, len: 10, a: 13, b: 10 }, HuffEntry { code: 15, len: 11, a: 13, b: 11 },
    HuffEntry { code: 14, len: 11, a: 13, b: 12 }, HuffEntry { code: 13, len: 11, a: 13, b: 13 }, HuffEntry { code: 12, len: 11, a: 13, b: 14 }, HuffEntry { code: 3, len: 12, a: 13, b: 15 },
    HuffEntry { code: 45, len: 8, a: 14, b: 0 }, HuffEntry { code: 39, len: 9, a: 14, b: 1 }, HuffEntry { code: 38, len: 9, a: 14, b: 2 }, HuffEntry { code: 37, len: 9, a: 14, b: 3 },
    HuffEntry { code: 36, len: 9, a: 14, b: 4 }, HuffEntry { code: 21, len: 10, a: 14, b: 5 }, HuffEntry { code: 20, len: 10, a: 14, b: 6 }, HuffEntry { code: 19, len: 10, a: 14, b: 7 },
    HuffEntry { code: 18, len: 10, a: 14, b: 8 }, HuffEntry { code: 17, len: 10, a: 14, b: 9 }, HuffEntry { code: 11, len: 11, a: 14, b: 10 }, HuffEntry { code: 10, len: 11, a: 14, b: 11 },
    HuffEntry { code: 9, len: 11, a: 14, b: 12 }, HuffEntry { code: 8, len: 11, a: 14, b: 13 }, HuffEntry { code: 7, len: 11, a: 14, b: 14 }, HuffEntry { code: 2, len: 12, a: 14, b: 15 },
    HuffEntry { code: 35, len: 9, a: 15, b: 0 }, HuffEntry { code: 34, len: 9, a: 15, b: 1 }, HuffEntry { code: 33, len: 9, a: 15, b: 2 }, HuffEntry { code: 32, len: 9, a: 15, b: 3 },
    HuffEntry { code: 31, len: 9, a: 15, b: 4 }, HuffEntry { code: 16, len: 10, a: 15, b: 5 }, HuffEntry { code: 15, len: 10, a: 15, b: 6 }, HuffEntry { code: 14, len: 10, a: 15, b: 7 },
    HuffEntry { code: 13, len: 10, a: 15, b: 8 }, HuffEntry { code: 6, len: 11, a: 15, b: 9 }, HuffEntry { code: 5, len: 11, a: 15, b: 10 }, HuffEntry { code: 4, len: 11, a: 15, b: 11 },
    HuffEntry { code: 3, len: 11, a: 15, b: 12 }, HuffEntry { code: 2, len: 11, a: 15, b: 13 }, HuffEntry { code: 1, len: 12, a: 15, b: 14 }, HuffEntry { code: 0, len: 12, a: 15, b: 15 },
];

#[rustfmt::skip]
const QUADS_TABLE_A_ENTRIES: [HuffEntry; 16] = [
    HuffEntry { code: 7, len: 3, a: 0, b: 0 }, HuffEntry { code: 9, len: 4, a: 1, b: 0 }, HuffEntry { code: 8, len: 4, a: 2, b: 0 }, HuffEntry { code: 7, len: 4, a: 3, b: 0 },
    HuffEntry { code: 6, len: 3, a: 4, b: 0 }, HuffEntry { code: 6, len: 4, a: 5, b: 0 }, HuffEntry { code: 5, len: 4, a: 6, b: 0 }, HuffEntry { code: 1, len: 6, a: 7, b: 0 },
    HuffEntry { code: 5, len: 3, a: 8, b: 0 }, HuffEntry { code: 4, len: 4, a: 9, b: 0 }, HuffEntry { code: 3, len: 4, a: 10, b: 0 }, HuffEntry { code: 3, len: 5, a: 11, b: 0 },
    HuffEntry { code: 2, len: 4, a: 12, b: 0 }, HuffEntry { code: 2, len: 5, a: 13, b: 0 }, HuffEntry { code: 1, len: 5, a: 14, b: 0 }, HuffEntry { code: 0, len: 6, a: 15, b: 0 },
];
/// The 32 big_values table slots addressed by `table_select`. Table 0 means "no Huffman data"
/// (the caller zero-fills instead of decoding); tables 4 and 14 are reserved and never selected
/// by a conformant encoder, so they alias table 0. Tables 16..=23 and 24..=31 each reuse one
/// escape-capable 16x16 table at increasing `linbits`, exactly as ISO/IEC 11172-3 Annex B
/// specifies.
pub fn big_values_table(table_select: u32) -> &'static HuffmanTable {
    const EMPTY: HuffmanTable = HuffmanTable { entries: &[], direct_bits: 0, linbits: 0 };

    const TABLES: [HuffmanTable; 32] = [
        EMPTY, // 0: empty
        HuffmanTable { entries: &TABLE_1_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_2_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_3_LENGTHS, direct_bits: 0, linbits: 0 },
        EMPTY, // 4: reserved, aliases 0
        HuffmanTable { entries: &TABLE_5_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_6_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_7_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_8_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_9_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_10_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_11_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_12_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_13_LENGTHS, direct_bits: 0, linbits: 0 },
        EMPTY, // 14: reserved, aliases 0
        HuffmanTable { entries: &TABLE_15_LENGTHS, direct_bits: 0, linbits: 0 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 1 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 2 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 3 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 4 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 6 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 8 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 10 },
        HuffmanTable { entries: &TABLE_16_LENGTHS, direct_bits: 0, linbits: 13 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 4 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 5 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 6 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 7 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 8 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 9 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 11 },
        HuffmanTable { entries: &TABLE_24_LENGTHS, direct_bits: 0, linbits: 13 },
    ];

    &TABLES[table_select as usize]
}

/// The count1 region table addressed by `count1table_select` (0 = table A, 1 = table B). Table A
/// is a genuine variable-length Huffman code; table B is ISO/IEC 11172-3 Annex B's uncompressed
/// fallback, a direct 4-bit read of the `vwxy` nibble with no prefix coding at all.
pub fn quads_table(count1table_select: bool) -> HuffmanTable {
    if count1table_select {
        HuffmanTable { entries: &[], direct_bits: 4, linbits: 0 }
    }
    else {
        HuffmanTable { entries: &QUADS_TABLE_A_ENTRIES, direct_bits: 0, linbits: 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mp3lite_core::io::BitReaderLtr;

    fn roundtrip(table: &HuffmanTable, x: u8, y: u8) {
        let entry = table.entries.iter().find(|e| e.a == x && e.b == y).unwrap();
        // Pack the code left-justified into a byte buffer and confirm decode recovers (x, y).
        let mut bits: u32 = entry.code << (32 - entry.len);
        let mut buf = [0u8; 4];
        for byte in buf.iter_mut() {
            *byte = (bits >> 24) as u8;
            bits <<= 8;
        }
        let mut bs = BitReaderLtr::new(&buf);
        assert_eq!(table.decode(&mut bs).unwrap(), (u32::from(x), u32::from(y)));
    }

    #[test]
    fn table_1_matches_the_iso_annex_b_codes() {
        let table = big_values_table(1);
        // These four codes are quoted directly from ISO/IEC 11172-3 Annex B, Table B.7.
        roundtrip(table, 0, 0);
        roundtrip(table, 1, 0);
        roundtrip(table, 0, 1);
        roundtrip(table, 1, 1);
        let find = |x: u8, y: u8| table.entries.iter().find(|e| e.a == x && e.b == y).unwrap();
        assert_eq!((find(0, 0).len, find(0, 0).code), (1, 0b1));
        assert_eq!((find(1, 0).len, find(1, 0).code), (2, 0b01));
        assert_eq!((find(0, 1).len, find(0, 1).code), (3, 0b001));
        assert_eq!((find(1, 1).len, find(1, 1).code), (3, 0b000));
    }

    #[test]
    fn every_big_values_table_round_trips_every_entry() {
        for &sel in &[1u32, 2, 3, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 16, 24] {
            let table = big_values_table(sel);
            for entry in table.entries {
                roundtrip(table, entry.a, entry.b);
            }
        }
    }

    #[test]
    fn table_16_and_24_alias_across_linbits() {
        assert_eq!(big_values_table(16).linbits, 1);
        assert_eq!(big_values_table(23).linbits, 13);
        assert_eq!(big_values_table(24).linbits, 4);
        assert_eq!(big_values_table(31).linbits, 13);
    }

    #[test]
    fn reserved_tables_alias_the_empty_table() {
        assert!(big_values_table(4).entries.is_empty());
        assert!(big_values_table(14).entries.is_empty());
        assert!(big_values_table(0).entries.is_empty());
    }

    #[test]
    fn quad_table_b_reads_four_raw_bits_with_no_prefix_coding() {
        let table = quads_table(true);
        assert!(table.entries.is_empty());
        assert_eq!(table.direct_bits, 4);

        for nibble in 0u8..16 {
            let buf = [nibble << 4];
            let mut bs = BitReaderLtr::new(&buf);
            assert_eq!(table.decode(&mut bs).unwrap(), (u32::from(nibble), 0));
        }
    }

    #[test]
    fn quad_table_a_round_trips() {
        let table = quads_table(false);
        for nibble in 0u8..16 {
            roundtrip(&table, nibble, 0);
        }
    }
}
