// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal TrueType font assembled in memory, so font-backed tests need no font files.
//!
//! Printable ASCII and U+00A0 map onto outline-free glyphs that all advance by half an em,
//! which matches the metrics of `FixedAdvanceEngine`.

const UNITS_PER_EM: u16 = 1000;
const ASCENT: i16 = 800;
const DESCENT: i16 = -200;
const ADVANCE: u16 = 500;
/// `.notdef` plus one glyph per character in U+0020..=U+007E.
const NUM_GLYPHS: u16 = 96;

/// Big-endian table writer.
#[derive(Default)]
struct Table(Vec<u8>);

impl Table {
    fn u16(mut self, value: u16) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn i16(mut self, value: i16) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn u32(mut self, value: u32) -> Self {
        self.0.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn bytes(mut self, bytes: &[u8]) -> Self {
        self.0.extend_from_slice(bytes);
        self
    }
}

/// Build a regular font named `family`.
pub(crate) fn fixed_advance_font(family: &str) -> Vec<u8> {
    // Sorted by tag.
    let tables = [
        (*b"OS/2", os2()),
        (*b"cmap", cmap()),
        (*b"head", head()),
        (*b"hhea", hhea()),
        (*b"hmtx", hmtx()),
        (*b"maxp", maxp()),
        (*b"name", name(family)),
        (*b"post", post()),
    ];
    let count = u16::try_from(tables.len()).unwrap();
    let search_range = 16 * (1 << count.ilog2());
    let mut font = Table::default()
        .u32(0x0001_0000)
        .u16(count)
        .u16(search_range)
        .u16(u16::try_from(count.ilog2()).unwrap())
        .u16(16 * count - search_range);
    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in &tables {
        font = font
            .bytes(tag)
            .u32(checksum(data))
            .u32(u32::try_from(offset).unwrap())
            .u32(u32::try_from(data.len()).unwrap());
        offset += data.len().next_multiple_of(4);
    }
    let mut font = font.0;
    for (_, data) in &tables {
        font.extend_from_slice(data);
        font.resize(font.len().next_multiple_of(4), 0);
    }
    font
}

fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0, |sum: u32, chunk| {
        let mut word = [0; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

fn head() -> Vec<u8> {
    Table::default()
        .u16(1)
        .u16(0)
        .u32(0x0001_0000) // fontRevision
        .u32(0) // checksumAdjustment
        .u32(0x5F0F_3CF5)
        .u16(0x000B)
        .u16(UNITS_PER_EM)
        .bytes(&[0; 16]) // created, modified
        .i16(0)
        .i16(DESCENT)
        .u16(ADVANCE)
        .i16(ASCENT)
        .u16(0) // macStyle
        .u16(8) // lowestRecPPEM
        .i16(2)
        .i16(0) // short loca offsets
        .i16(0)
        .0
}

fn hhea() -> Vec<u8> {
    Table::default()
        .u16(1)
        .u16(0)
        .i16(ASCENT)
        .i16(DESCENT)
        .i16(0) // lineGap
        .u16(ADVANCE)
        .i16(0)
        .i16(0)
        .u16(ADVANCE) // xMaxExtent
        .i16(1) // caretSlopeRise
        .i16(0)
        .i16(0)
        .bytes(&[0; 8])
        .i16(0)
        .u16(NUM_GLYPHS)
        .0
}

fn hmtx() -> Vec<u8> {
    (0..NUM_GLYPHS)
        .fold(Table::default(), |table, _| table.u16(ADVANCE).i16(0))
        .0
}

fn maxp() -> Vec<u8> {
    Table::default().u32(0x0000_5000).u16(NUM_GLYPHS).0
}

/// A format 12 subtable; U+00A0 shares the space glyph.
fn cmap() -> Vec<u8> {
    let groups: [[u32; 3]; 2] = [[0x20, 0x7E, 1], [0xA0, 0xA0, 1]];
    let count = u32::try_from(groups.len()).unwrap();
    let table = Table::default()
        .u16(0)
        .u16(1)
        .u16(3) // Windows
        .u16(10) // Unicode full repertoire
        .u32(12)
        .u16(12)
        .u16(0)
        .u32(16 + 12 * count)
        .u32(0)
        .u32(count);
    groups
        .iter()
        .fold(table, |table, [start, end, glyph]| {
            table.u32(*start).u32(*end).u32(*glyph)
        })
        .0
}

fn name(family: &str) -> Vec<u8> {
    let full = format!("{family} Regular");
    let postscript = format!("{}-Regular", family.replace(' ', ""));
    let names: [(u16, &str); 4] = [
        (1, family),
        (2, "Regular"),
        (4, full.as_str()),
        (6, postscript.as_str()),
    ];
    let encoded: Vec<Vec<u8>> = names
        .iter()
        .map(|(_, name)| name.encode_utf16().flat_map(u16::to_be_bytes).collect())
        .collect();
    let count = u16::try_from(names.len()).unwrap();
    let mut table = Table::default().u16(0).u16(count).u16(6 + 12 * count);
    let mut offset = 0;
    for ((id, _), data) in names.iter().zip(&encoded) {
        let len = u16::try_from(data.len()).unwrap();
        // Windows, Unicode BMP, English (United States).
        table = table.u16(3).u16(1).u16(0x0409).u16(*id).u16(len).u16(offset);
        offset += len;
    }
    encoded.iter().fold(table, |table, data| table.bytes(data)).0
}

fn os2() -> Vec<u8> {
    Table::default()
        .u16(4)
        .u16(ADVANCE) // xAvgCharWidth
        .u16(400) // usWeightClass
        .u16(5) // usWidthClass
        .u16(0)
        .i16(650)
        .i16(600)
        .i16(0)
        .i16(75)
        .i16(650)
        .i16(600)
        .i16(0)
        .i16(350)
        .i16(50)
        .i16(300)
        .i16(0)
        .bytes(&[0; 10]) // panose
        .u32(1) // Basic Latin
        .u32(0)
        .u32(0)
        .u32(0)
        .bytes(b"NONE")
        .u16(0x0040) // REGULAR
        .u16(0x20)
        .u16(0xA0)
        .i16(ASCENT)
        .i16(DESCENT)
        .i16(0)
        .i16(ASCENT) // usWinAscent
        .i16(-DESCENT)
        .u32(1) // Latin 1
        .u32(0)
        .i16(500)
        .i16(700)
        .u16(0)
        .u16(0x20)
        .u16(1)
        .0
}

fn post() -> Vec<u8> {
    Table::default()
        .u32(0x0003_0000)
        .u32(0)
        .i16(-100)
        .i16(50)
        .u32(0)
        .bytes(&[0; 16])
        .0
}
