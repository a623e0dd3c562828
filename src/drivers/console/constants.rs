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

//! Text grid constants.
//!
//! The display controller scans a fixed 80x25 grid of 2-byte cells out of
//! the legacy color text-mode window at 0xB8000.

/// Physical address of the memory-mapped text grid.
pub const GRID_ADDR: usize = 0xB8000;

/// Number of columns in the grid.
pub const GRID_WIDTH: usize = 80;

/// Number of rows in the grid.
pub const GRID_HEIGHT: usize = 25;

/// Total number of character cells.
pub const GRID_CELLS: usize = GRID_WIDTH * GRID_HEIGHT;

/// Size of the grid in bytes (2 bytes per cell).
pub const GRID_BYTES: usize = GRID_CELLS * 2;

// =============================================================================
// CRT Controller Ports
// =============================================================================

/// CRT controller index port.
pub const CRTC_INDEX: u16 = 0x3D4;

/// CRT controller data port.
pub const CRTC_DATA: u16 = 0x3D5;

/// CRT controller register: cursor start scanline.
pub const CRTC_CURSOR_START: u8 = 0x0A;

/// CRT controller register: cursor end scanline.
pub const CRTC_CURSOR_END: u8 = 0x0B;

/// CRT controller register: cursor location high byte.
pub const CRTC_CURSOR_HIGH: u8 = 0x0E;

/// CRT controller register: cursor location low byte.
pub const CRTC_CURSOR_LOW: u8 = 0x0F;

/// Cursor disable bit in the cursor-start register.
pub const CURSOR_DISABLE: u8 = 0x20;

/// Block cursor start scanline.
pub const CURSOR_BLOCK_START: u8 = 0;

/// Block cursor end scanline.
pub const CURSOR_BLOCK_END: u8 = 15;

// =============================================================================
// Control Codes
// =============================================================================

/// Bell.
pub const CTRL_BELL: u8 = 0x07;

/// Backspace.
pub const CTRL_BACKSPACE: u8 = 0x08;

/// Line feed.
pub const CTRL_LINE_FEED: u8 = 0x0A;

/// Form feed.
pub const CTRL_FORM_FEED: u8 = 0x0C;

/// Carriage return.
pub const CTRL_CARRIAGE_RETURN: u8 = 0x0D;

/// The glyph used to blank cells.
pub const BLANK_GLYPH: u8 = b' ';

/// Returns true for the five byte values the driver treats as control
/// codes rather than glyphs.
#[inline]
pub const fn is_control_code(ch: u8) -> bool {
    matches!(
        ch,
        CTRL_BELL | CTRL_BACKSPACE | CTRL_LINE_FEED | CTRL_FORM_FEED | CTRL_CARRIAGE_RETURN
    )
}

/// Linear cell index of a position, row-major.
#[inline]
pub const fn cell_index(row: usize, col: usize) -> usize {
    row * GRID_WIDTH + col
}

/// Checks that a position lies inside the grid.
#[inline]
pub const fn in_bounds(row: usize, col: usize) -> bool {
    row < GRID_HEIGHT && col < GRID_WIDTH
}
