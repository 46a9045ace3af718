//! Property tests for the walk and the renderer.
//!
//! 1. Determinism: the same bytes on a cleared board give the same grid and end
//! 2. Containment: every step stays inside the grid
//! 3. Conservation: a walk adds exactly four visits per byte
//! 4. Empty input leaves the grid alone and ends on the start cell
//! 5. Palette wraparound for any visit count
//! 6. Rendering has a fixed shape and never changes the board

use drunken_bishop::draw::{SYMBOLS, symbol_for};
use drunken_bishop::utils::{bishop_step, step_directions};
use drunken_bishop::{Board, InputMode};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (u32, u32)> {
    (3u32..40, 1u32..25)
}

proptest! {
    #[test]
    fn walk_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..64), (w, h) in dims()) {
        let mut a = Board::new(w, h, None).unwrap();
        let mut b = Board::new(w, h, None).unwrap();
        b.walk(&[0xaa, 0x55]);
        b.clear();

        prop_assert_eq!(a.walk(&bytes), b.walk(&bytes));
        prop_assert_eq!(a.get_grid(), b.get_grid());
        prop_assert_eq!(a.render(), b.render());
    }

    #[test]
    fn every_step_stays_inside(bytes in prop::collection::vec(any::<u8>(), 0..64), (w, h) in dims()) {
        let mut pos = (w / 2, h / 2);
        for dir in bytes.iter().flat_map(|&b| step_directions(b)) {
            pos = bishop_step(pos, dir, w, h);
            prop_assert!(pos.0 < w && pos.1 < h);
        }
        let mut board = Board::new(w, h, None).unwrap();
        prop_assert_eq!(board.walk(&bytes), pos);
    }

    #[test]
    fn four_visits_per_byte(
        first in prop::collection::vec(any::<u8>(), 0..32),
        second in prop::collection::vec(any::<u8>(), 0..32),
        (w, h) in dims(),
    ) {
        let mut board = Board::new(w, h, None).unwrap();
        board.walk(&first);
        prop_assert_eq!(board.total_visits(), 4 * first.len() as u64);
        board.walk(&second);
        prop_assert_eq!(board.total_visits(), 4 * (first.len() + second.len()) as u64);
    }

    #[test]
    fn empty_walk_changes_nothing(bytes in prop::collection::vec(any::<u8>(), 0..32), (w, h) in dims()) {
        let mut board = Board::new(w, h, None).unwrap();
        board.walk(&bytes);
        let grid = board.get_grid().clone();
        prop_assert_eq!(board.walk(&[]), board.start());
        prop_assert_eq!(board.get_grid(), &grid);
        prop_assert_eq!(board.end(), Some(board.start()));
    }

    #[test]
    fn palette_wraps_for_any_count(k in any::<u32>()) {
        prop_assert_eq!(symbol_for(k), SYMBOLS[(k % 15) as usize]);
        prop_assert_eq!(symbol_for(k), symbol_for(k % 15));
    }

    #[test]
    fn render_shape_is_fixed(
        input in ".{0,40}",
        title in proptest::option::of(".{0,30}"),
        (w, h) in dims(),
    ) {
        let mut board = Board::new(w, h, title.as_deref()).unwrap();
        let art = board.make_art(&input, InputMode::Md5).unwrap();
        prop_assert_eq!(board.render(), art.clone());

        let lines: Vec<&str> = art.split('\n').collect();
        prop_assert_eq!(lines.len(), h as usize + 2);
        for line in &lines {
            prop_assert_eq!(line.chars().count(), w as usize + 2);
        }
        prop_assert!(art.contains('S'));
    }
}
