//! Moderately useful functions

use md5::{Digest, Md5};

use crate::error::BishopError;
use crate::types::InputMode;

/// Split a byte into its four moves, least significant bit pair first.
///
/// Within a pair the low bit picks the horizontal direction and the high bit
/// the vertical one; a set bit means +1, a cleared bit -1.
pub fn step_directions(byte: u8) -> [(i32, i32); 4] {
    let mut w = byte;
    let mut steps = [(0, 0); 4];
    for step in steps.iter_mut() {
        let lo = (w & 1) as i32;
        w >>= 1;
        let hi = (w & 1) as i32;
        w >>= 1;
        *step = (lo * 2 - 1, hi * 2 - 1);
    }
    steps
}

/// Move one diagonal step, sliding along the walls instead of leaving the grid.
///
/// A zero-sized axis pins that coordinate to 0.
pub fn bishop_step(pos: (u32, u32), dir: (i32, i32), width: u32, height: u32) -> (u32, u32) {
    let max_x = (width as i64 - 1).max(0);
    let max_y = (height as i64 - 1).max(0);
    let x = (pos.0 as i64 + dir.0 as i64).clamp(0, max_x) as u32;
    let y = (pos.1 as i64 + dir.1 as i64).clamp(0, max_y) as u32;
    if x == pos.0 || y == pos.1 {
        tracing::trace!(x, y, "bishop slid along a wall");
    }
    (x, y)
}

/// Turn an input string into the bytes the bishop walks over.
pub fn decode_input(input: &str, mode: InputMode) -> Result<Vec<u8>, BishopError> {
    match mode {
        InputMode::Raw => Ok(input.as_bytes().to_vec()),
        InputMode::Hex => {
            hex::decode(input).map_err(|e| BishopError::InvalidEncoding(format!("{input:?}: {e}")))
        }
        InputMode::Md5 => Ok(Md5::digest(input.as_bytes()).to_vec()),
    }
}

/// Lay two text blocks next to each other under `EXPECTED` and `GOT` headings.
///
/// Column width is taken from the first line of `expected`.
pub fn side_by_side(expected: &str, got: &str) -> String {
    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let got_lines: Vec<&str> = got.split('\n').collect();
    let w = expected_lines.first().map_or(0, |l| l.chars().count());

    let rows = expected_lines.len().max(got_lines.len());
    let mut out = format!("{:^w$}    {:^w$}", "EXPECTED", "GOT");
    for i in 0..rows {
        let e = expected_lines.get(i).copied().unwrap_or("");
        let g = got_lines.get(i).copied().unwrap_or("");
        out.push('\n');
        out.push_str(&format!("{e:^w$}    {g:^w$}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_are_lsb_first() {
        // 0b00_01_10_11: pairs read 11, 10, 01, 00
        assert_eq!(
            step_directions(0b0001_1011),
            [(1, 1), (-1, 1), (1, -1), (-1, -1)]
        );
    }

    #[test]
    fn zero_and_full_bytes() {
        assert_eq!(step_directions(0x00), [(-1, -1); 4]);
        assert_eq!(step_directions(0xff), [(1, 1); 4]);
    }

    #[test]
    fn step_clamps_at_walls() {
        assert_eq!(bishop_step((0, 0), (-1, -1), 17, 9), (0, 0));
        assert_eq!(bishop_step((16, 3), (1, -1), 17, 9), (16, 2));
        assert_eq!(bishop_step((5, 8), (-1, 1), 17, 9), (4, 8));
        assert_eq!(bishop_step((8, 4), (1, 1), 17, 9), (9, 5));
    }

    #[test]
    fn step_on_empty_axis_stays_at_zero() {
        assert_eq!(bishop_step((0, 0), (1, 1), 0, 0), (0, 0));
        assert_eq!(bishop_step((3, 0), (1, 1), 17, 0), (4, 0));
        assert_eq!(bishop_step((0, 2), (-1, 1), 0, 9), (0, 3));
    }

    #[test]
    fn decode_hex() {
        assert_eq!(
            decode_input("fc94", InputMode::Hex).unwrap(),
            vec![0xfc, 0x94]
        );
        assert_eq!(decode_input("", InputMode::Hex).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn decode_hex_rejects_bad_input() {
        assert!(matches!(
            decode_input("abc", InputMode::Hex),
            Err(BishopError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode_input("zz", InputMode::Hex),
            Err(BishopError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn decode_md5_and_raw() {
        let digest = decode_input("", InputMode::Md5).unwrap();
        assert_eq!(hex::encode(digest), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(decode_input("hé", InputMode::Raw).unwrap(), "hé".as_bytes());
    }

    #[test]
    fn side_by_side_columns() {
        let out = side_by_side("abc\nxyz", "abc\nxy");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "EXPECTED    GOT");
        assert_eq!(lines[1], "abc    abc");
        assert_eq!(lines[2], "xyz    xy ");
    }
}
