//! Run detection and special spawn placement through the facade crate

use prism_match::core::{detect, Board};
use prism_match::types::{Element, Pos, SpecialKind, Tile};

fn checkerboard() -> Board {
    let mut board = Board::new();
    let mut id = 0;
    for pos in Board::positions() {
        let element = if (pos.row + pos.col) % 2 == 0 {
            Element::Nature
        } else {
            Element::Void
        };
        board.set(pos, Some(Tile::plain(id, element)));
        id += 1;
    }
    board
}

#[test]
fn test_checkerboard_has_no_matches() {
    assert!(detect(&checkerboard()).is_empty());
}

#[test]
fn test_triple_is_detected_without_specials() {
    let mut board = checkerboard();
    board.set(Pos::new(3, 3), Some(Tile::plain(100, Element::Fire)));
    board.set(Pos::new(3, 4), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(3, 5), Some(Tile::plain(102, Element::Fire)));

    let result = detect(&board);
    assert_eq!(result.coords().len(), 3);
    assert!(result.contains(Pos::new(3, 3)));
    assert!(result.contains(Pos::new(3, 4)));
    assert!(result.contains(Pos::new(3, 5)));
    assert!(result.specials().is_empty());
}

#[test]
fn test_four_run_requests_horizontal_beam() {
    let mut board = checkerboard();
    for col in 2..6 {
        board.set(Pos::new(0, col), Some(Tile::plain(100 + col as u32, Element::Water)));
    }

    let result = detect(&board);
    assert_eq!(result.coords().len(), 4);
    assert_eq!(result.specials().len(), 1);
    let spawn = result.specials()[0];
    assert_eq!(spawn.kind, SpecialKind::BeamH);
    assert_eq!(spawn.pos, Pos::new(0, 4));
    assert_eq!(spawn.element, Element::Water);
}

#[test]
fn test_vertical_four_run_requests_vertical_beam() {
    let mut board = checkerboard();
    for row in 2..6 {
        board.set(Pos::new(row, 6), Some(Tile::plain(100 + row as u32, Element::Fire)));
    }

    let result = detect(&board);
    assert_eq!(result.specials().len(), 1);
    assert_eq!(result.specials()[0].kind, SpecialKind::BeamV);
    assert_eq!(result.specials()[0].pos, Pos::new(4, 6));
}

#[test]
fn test_five_run_requests_rainbow_only() {
    let mut board = checkerboard();
    for col in 0..5 {
        board.set(Pos::new(7, col), Some(Tile::plain(100 + col as u32, Element::Fire)));
    }

    let result = detect(&board);
    assert_eq!(result.coords().len(), 5);
    assert_eq!(result.specials().len(), 1);
    assert_eq!(result.specials()[0].kind, SpecialKind::Rainbow);
    assert_eq!(result.specials()[0].pos, Pos::new(7, 2));
}

#[test]
fn test_row_column_intersection_requests_blast() {
    let mut board = checkerboard();
    // Horizontal triple through (4,4) crossed by a vertical triple.
    for col in 3..6 {
        board.set(Pos::new(4, col), Some(Tile::plain(100 + col as u32, Element::Prism)));
    }
    board.set(Pos::new(3, 4), Some(Tile::plain(110, Element::Prism)));
    board.set(Pos::new(5, 4), Some(Tile::plain(111, Element::Prism)));

    let result = detect(&board);
    assert_eq!(result.coords().len(), 5);
    let blasts: Vec<_> = result
        .specials()
        .iter()
        .filter(|s| s.kind == SpecialKind::Blast)
        .collect();
    assert_eq!(blasts.len(), 1);
    assert_eq!(blasts[0].pos, Pos::new(4, 4));
}

#[test]
fn test_empty_cell_breaks_a_run() {
    let mut board = checkerboard();
    board.set(Pos::new(2, 2), Some(Tile::plain(100, Element::Fire)));
    board.set(Pos::new(2, 3), None);
    board.set(Pos::new(2, 4), Some(Tile::plain(101, Element::Fire)));
    board.set(Pos::new(2, 5), Some(Tile::plain(102, Element::Fire)));

    assert!(detect(&board).is_empty());
}
