// vtcon VGA text console kernel
// Copyright (C) 2026 vtcon Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use super::constants::*;
use super::types::*;
use super::writer::Console;

fn fresh_grid() -> [Cell; GRID_CELLS] {
    [Cell::blank(DEFAULT_ATTR); GRID_CELLS]
}

fn cell_at(cells: &[Cell; GRID_CELLS], row: usize, col: usize) -> u16 {
    cells[cell_index(row, col)].as_u16()
}

// =============================================================================
// Attribute Packing
// =============================================================================

#[test]
fn test_pack_attr() {
    assert_eq!(pack_attr(Color::LightGrey, Color::Black), 0x07);
    assert_eq!(pack_attr(Color::White, Color::Blue), 0x1F);
    assert_eq!(pack_attr(Color::Red, Color::Blue), 0x14);
    assert_eq!(pack_attr(Color::Black, Color::White), 0xF0);
}

#[test]
fn test_attr_nibbles() {
    assert_eq!(attr_fg(0x1F), 0x0F);
    assert_eq!(attr_bg(0x1F), 0x01);
    assert_eq!(attr_fg(0x74), 0x04);
    assert_eq!(attr_bg(0x74), 0x07);
}

#[test]
fn test_attr_with_fg_preserves_bg() {
    let attr = pack_attr(Color::LightGrey, Color::Blue);
    let next = attr_with_fg(attr, Color::Red);
    assert_eq!(attr_fg(next), Color::Red.as_u8());
    assert_eq!(attr_bg(next), Color::Blue.as_u8());
}

#[test]
fn test_attr_with_bg_preserves_fg() {
    let attr = pack_attr(Color::White, Color::Black);
    let next = attr_with_bg(attr, Color::Green);
    assert_eq!(attr_fg(next), Color::White.as_u8());
    assert_eq!(attr_bg(next), Color::Green.as_u8());
}

#[test]
fn test_color_from_u8_masks_high_bits() {
    assert_eq!(Color::from_u8(0x4), Color::Red);
    assert_eq!(Color::from_u8(0x14), Color::Red);
    assert_eq!(Color::from_u8(0xFF), Color::White);
}

// =============================================================================
// Cell Encoding
// =============================================================================

#[test]
fn test_cell_round_trip() {
    for &glyph in &[b'A', b'~', 0x00u8, 0xFE] {
        for &attr in &[0x07u8, 0x14, 0xF0, 0xFF] {
            let cell = Cell::new(glyph, attr);
            let decoded = Cell::from_u16(cell.as_u16());
            assert_eq!({ decoded.glyph }, glyph);
            assert_eq!({ decoded.attr }, attr);
        }
    }
}

#[test]
fn test_cell_layout() {
    // The controller reads glyph from the low byte, attribute from the high.
    assert_eq!(core::mem::size_of::<Cell>(), 2);
    assert_eq!(Cell::new(b'A', 0x1F).as_u16(), 0x1F41);
    assert_eq!(Cell::blank(0x07).as_u16(), 0x0720);
}

// =============================================================================
// Constants
// =============================================================================

#[test]
fn test_grid_constants() {
    assert_eq!(GRID_WIDTH, 80);
    assert_eq!(GRID_HEIGHT, 25);
    assert_eq!(GRID_CELLS, 2000);
    assert_eq!(GRID_BYTES, 4000);
    assert_eq!(GRID_ADDR, 0xB8000);
}

#[test]
fn test_control_code_set() {
    assert!(is_control_code(0x07)); // bell
    assert!(is_control_code(0x08)); // backspace
    assert!(is_control_code(0x0A)); // line feed
    assert!(is_control_code(0x0C)); // form feed
    assert!(is_control_code(0x0D)); // carriage return
    assert!(!is_control_code(b'A'));
    assert!(!is_control_code(0x09)); // tab renders as a glyph here
    assert!(!is_control_code(0x1B));
}

// =============================================================================
// Console State
// =============================================================================

#[test]
fn test_new_console_state() {
    let mut cells = fresh_grid();
    let con = Console::new(cells.as_mut_ptr());
    assert_eq!(con.cursor(), (0, 0));
    assert_eq!(con.attr(), 0x07);
    assert_eq!(con.scrolls(), 0);
}

#[test]
fn test_init_blanks_grid_with_default_attribute() {
    let mut cells = [Cell::new(b'#', 0x4E); GRID_CELLS];
    let mut con = Console::new(cells.as_mut_ptr());
    con.init();
    assert_eq!(con.cursor(), (0, 0));
    let blank = Cell::new(b' ', 0x07).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_clear_uses_current_attribute_and_keeps_cursor() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(12, 7);
    con.set_color(Color::Yellow, Color::Blue);
    con.clear();
    assert_eq!(con.cursor(), (12, 7));
    let blank = Cell::blank(pack_attr(Color::Yellow, Color::Blue)).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_clear_twice_equals_clear_once() {
    let mut once = fresh_grid();
    let mut twice = fresh_grid();
    let mut a = Console::new(once.as_mut_ptr());
    let mut b = Console::new(twice.as_mut_ptr());
    a.set_background(Color::Green);
    b.set_background(Color::Green);
    a.clear();
    b.clear();
    b.clear();
    for i in 0..GRID_CELLS {
        assert_eq!(once[i].as_u16(), twice[i].as_u16());
    }
}

#[test]
fn test_goto_is_unclamped() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(79, 24);
    assert_eq!(con.cursor(), (79, 24));
    con.goto(100, 50);
    assert_eq!(con.cursor(), (100, 50));
    // A write from an out-of-range cursor places no cell and must not fault.
    con.write_char(b'X');
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

// =============================================================================
// Character Placement
// =============================================================================

#[test]
fn test_sequential_writes_fill_row_major() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    let count = 200;
    for i in 0..count {
        con.write_char(b'A' + (i % 26) as u8);
    }
    assert_eq!(con.cursor(), (count % GRID_WIDTH, count / GRID_WIDTH));
    for i in 0..count {
        let want = Cell::new(b'A' + (i % 26) as u8, 0x07).as_u16();
        assert_eq!(cells[i].as_u16(), want, "cell {}", i);
    }
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells[count..].iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_attribute_applies_only_from_change_onward() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.write_char(b'a');
    con.set_foreground(Color::LightRed);
    con.write_char(b'b');
    assert_eq!(cells[0].as_u16(), Cell::new(b'a', 0x07).as_u16());
    assert_eq!(cells[1].as_u16(), Cell::new(b'b', 0x0C).as_u16());
}

#[test]
fn test_red_on_blue_write() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.set_foreground(Color::Red);
    con.set_background(Color::Blue);
    assert_eq!(con.attr(), 0x14);
    con.write_char(b'A');
    assert_eq!(cells[0].as_u16(), Cell::new(b'A', 0x14).as_u16());
    assert_eq!(con.cursor(), (1, 0));
}

#[test]
fn test_wrap_at_line_end() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    for _ in 0..GRID_WIDTH {
        con.write_char(b'x');
    }
    assert_eq!(con.cursor(), (0, 1));
    assert_eq!(con.scrolls(), 0);
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert_eq!(cell_at(&cells, 0, 79), Cell::new(b'x', 0x07).as_u16());
    assert_eq!(cell_at(&cells, 1, 0), blank);
}

#[test]
fn test_put_at_places_without_moving_cursor() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.set_foreground(Color::LightCyan);
    con.goto(9, 9);
    con.put_at(3, 2, b'Z');
    assert_eq!(con.cursor(), (9, 9));
    assert_eq!(cell_at(&cells, 2, 3), Cell::new(b'Z', 0x0B).as_u16());
    // Control codes place nothing, positioned or not.
    con.put_at(4, 2, CTRL_LINE_FEED);
    assert_eq!(cell_at(&cells, 2, 4), Cell::blank(DEFAULT_ATTR).as_u16());
}

#[test]
fn test_write_str_is_repeated_write_char() {
    let mut via_str = fresh_grid();
    let mut via_char = fresh_grid();
    let mut a = Console::new(via_str.as_mut_ptr());
    let mut b = Console::new(via_char.as_mut_ptr());
    a.write_str("ab\rcd\ne");
    for &ch in b"ab\rcd\ne" {
        b.write_char(ch);
    }
    assert_eq!(a.cursor(), b.cursor());
    for i in 0..GRID_CELLS {
        assert_eq!(via_str[i].as_u16(), via_char[i].as_u16());
    }
}

// =============================================================================
// Control Codes
// =============================================================================

#[test]
fn test_line_feed_from_mid_row() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(5, 3);
    con.write_char(CTRL_LINE_FEED);
    // Generic advance moves to (6,3) without wrapping; the line-feed
    // adjustment then lands at column 0 of the next row.
    assert_eq!(con.cursor(), (0, 4));
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_line_feed_at_row_end_advances_twice() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(79, 3);
    con.write_char(CTRL_LINE_FEED);
    // The wrap already advanced to row 4; the line-feed adjustment adds
    // another row on top of it.
    assert_eq!(con.cursor(), (0, 5));
}

#[test]
fn test_carriage_return() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(5, 3);
    con.write_char(CTRL_CARRIAGE_RETURN);
    assert_eq!(con.cursor(), (0, 3));
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_backspace_moves_one_left_net() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(5, 3);
    con.write_char(CTRL_BACKSPACE);
    // Advance to 6, then back by two.
    assert_eq!(con.cursor(), (4, 3));
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

#[test]
fn test_backspace_at_start_of_row_rests_at_one() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(0, 2);
    con.write_char(CTRL_BACKSPACE);
    // The post-advance column is 1, which the floor check refuses to move.
    assert_eq!(con.cursor(), (1, 2));
}

#[test]
fn test_backspace_after_wrap_stays_at_zero() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(79, 2);
    con.write_char(CTRL_BACKSPACE);
    // The advance wraps to column 0 of the next row; the floor check
    // leaves it there.
    assert_eq!(con.cursor(), (0, 3));
}

#[test]
fn test_bell_advances_without_writing() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.goto(5, 3);
    con.write_char(CTRL_BELL);
    assert_eq!(con.cursor(), (6, 3));
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
    con.goto(79, 3);
    con.write_char(CTRL_BELL);
    assert_eq!(con.cursor(), (0, 4));
}

#[test]
fn test_form_feed_clears_with_current_attribute() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    con.write_str("some text");
    con.set_background(Color::Blue);
    con.goto(2, 1);
    con.write_char(CTRL_FORM_FEED);
    // Cursor took the generic advance; the clear touched only cells.
    assert_eq!(con.cursor(), (3, 1));
    let blank = Cell::blank(0x17).as_u16();
    assert!(cells.iter().all(|c| c.as_u16() == blank));
}

// =============================================================================
// Scrolling
// =============================================================================

#[test]
fn test_scroll_after_filling_grid() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    // Tag every row with its own letter so provenance survives the shift.
    for i in 0..GRID_CELLS {
        con.write_char(b'A' + (i / GRID_WIDTH) as u8);
    }
    // The advance after the last cell wrapped to row 25 and scrolled.
    assert_eq!(con.scrolls(), 1);
    assert_eq!(con.cursor(), (0, GRID_HEIGHT - 1));
    for row in 0..GRID_HEIGHT - 1 {
        let want = Cell::new(b'A' + (row + 1) as u8, 0x07).as_u16();
        for col in 0..GRID_WIDTH {
            assert_eq!(cell_at(&cells, row, col), want, "row {} col {}", row, col);
        }
    }
    let blank = Cell::blank(DEFAULT_ATTR).as_u16();
    for col in 0..GRID_WIDTH {
        assert_eq!(cell_at(&cells, GRID_HEIGHT - 1, col), blank);
    }
    // The next character lands at the start of the vacated last row.
    con.write_char(b'X');
    assert_eq!(cell_at(&cells, GRID_HEIGHT - 1, 0), Cell::new(b'X', 0x07).as_u16());
    assert_eq!(con.cursor(), (1, GRID_HEIGHT - 1));
}

#[test]
fn test_scroll_fill_uses_attribute_at_scroll_time() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    for _ in 0..GRID_CELLS - 1 {
        con.write_char(b'o');
    }
    con.set_background(Color::Blue);
    con.write_char(b'!');
    assert_eq!(con.scrolls(), 1);
    // The triggering character was placed before the scroll, so it now sits
    // one row up, carrying the changed attribute.
    assert_eq!(cell_at(&cells, GRID_HEIGHT - 2, GRID_WIDTH - 1), Cell::new(b'!', 0x17).as_u16());
    let blank = Cell::blank(0x17).as_u16();
    for col in 0..GRID_WIDTH {
        assert_eq!(cell_at(&cells, GRID_HEIGHT - 1, col), blank);
    }
}

#[test]
fn test_scroll_only_triggered_by_advance() {
    let mut cells = fresh_grid();
    let mut con = Console::new(cells.as_mut_ptr());
    // A form feed near the bottom clears instead of scrolling.
    con.goto(10, GRID_HEIGHT - 1);
    con.write_char(CTRL_FORM_FEED);
    assert_eq!(con.scrolls(), 0);
    assert_eq!(con.cursor(), (11, GRID_HEIGHT - 1));
}
