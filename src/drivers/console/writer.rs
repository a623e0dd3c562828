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

//! Console state and the character-placement state machine.

use core::fmt;

use super::constants::*;
use super::grid;
use super::types::Cell;
use super::types::{attr_with_bg, attr_with_fg, pack_attr, Color, DEFAULT_ATTR};

/// The console: cursor, current attribute, and the grid it draws into.
///
/// One value of this type owns the on-screen state. The kernel keeps exactly
/// one behind the module's mutex; tests and embedders may own their own over
/// any grid-sized region.
pub struct Console {
    /// Current column.
    col: usize,
    /// Current row.
    row: usize,
    /// Current color attribute byte.
    attr: u8,
    /// The memory-mapped grid. Bound once at construction; the region lives
    /// as long as the process and is never reallocated.
    grid: *mut Cell,
    /// Whether the hardware cursor lags the logical one.
    cursor_dirty: bool,
    /// Number of scrolls performed since construction.
    scrolls: u64,
}

// SAFETY: access to the grid behind the pointer is synchronized through the
// mutex wrapping the one kernel-owned instance; the region itself is fixed
// memory-mapped hardware.
unsafe impl Send for Console {}
unsafe impl Sync for Console {}

impl Console {
    /// Creates a console bound to `grid`.
    ///
    /// `grid` must point to a region valid for [`GRID_CELLS`] cells of reads
    /// and writes for as long as the console is used; the driver never
    /// releases or rebinds it. Construction itself touches nothing.
    pub const fn new(grid: *mut Cell) -> Self {
        Self {
            col: 0,
            row: 0,
            attr: DEFAULT_ATTR,
            grid,
            cursor_dirty: false,
            scrolls: 0,
        }
    }

    /// Resets cursor to the origin and the attribute to light grey on
    /// black, then clears the grid.
    pub fn init(&mut self) {
        self.col = 0;
        self.row = 0;
        self.attr = DEFAULT_ATTR;
        self.clear();
        self.mark_cursor();
    }

    /// Blanks every cell with the current attribute.
    ///
    /// The cursor is deliberately left where it is; callers wanting a true
    /// home position follow up with `goto(0, 0)`.
    pub fn clear(&mut self) {
        // SAFETY: grid validity per the `new` contract.
        unsafe {
            grid::fill(self.grid, self.attr);
        }
    }

    /// Replaces the foreground nibble of the current attribute.
    pub fn set_foreground(&mut self, color: Color) {
        self.attr = attr_with_fg(self.attr, color);
    }

    /// Replaces the background nibble of the current attribute.
    pub fn set_background(&mut self, color: Color) {
        self.attr = attr_with_bg(self.attr, color);
    }

    /// Sets both colors at once.
    pub fn set_color(&mut self, fg: Color, bg: Color) {
        self.attr = pack_attr(fg, bg);
    }

    /// Current attribute byte.
    #[inline]
    pub fn attr(&self) -> u8 {
        self.attr
    }

    /// Overwrites the attribute byte wholesale.
    pub fn set_attr(&mut self, attr: u8) {
        self.attr = attr;
    }

    /// Moves the cursor to (`x`, `y`) unconditionally.
    ///
    /// No clamping: positions outside the grid are a contract violation on
    /// the caller's side. Cell writes from such a position are dropped.
    pub fn goto(&mut self, x: usize, y: usize) {
        self.col = x;
        self.row = y;
        self.mark_cursor();
    }

    /// Cursor position as (column, row).
    #[inline]
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Number of scrolls performed so far.
    #[inline]
    pub fn scrolls(&self) -> u64 {
        self.scrolls
    }

    /// Places a glyph cell, skipping the five control codes.
    fn place(&mut self, x: usize, y: usize, ch: u8) {
        if is_control_code(ch) {
            return;
        }
        // SAFETY: grid validity per the `new` contract; position checks
        // happen inside the grid op.
        unsafe {
            grid::write_cell(self.grid, y, x, Cell::new(ch, self.attr));
        }
    }

    /// Writes a glyph at an explicit position with the current attribute,
    /// leaving the cursor alone. Control codes place nothing.
    pub fn put_at(&mut self, x: usize, y: usize, ch: u8) {
        self.place(x, y, ch);
    }

    /// Shifts the visible rows up by one and blanks the last row.
    fn scroll_up(&mut self) {
        // SAFETY: grid validity per the `new` contract.
        unsafe {
            grid::scroll_up(self.grid, self.attr);
        }
        self.row -= 1;
        self.scrolls += 1;
        self.mark_cursor();
    }

    /// Processes one character.
    ///
    /// The cell (if any) is placed first, then the cursor advances by one
    /// column with wrap and scroll, and only then do control codes apply
    /// their own adjustments on top of that advance. The ordering is part
    /// of the driver's contract; in particular a line feed advances the row
    /// once more than the wrap already did when the write ended a row.
    pub fn write_char(&mut self, ch: u8) {
        self.place(self.col, self.row, ch);
        self.col += 1;
        if self.col == GRID_WIDTH {
            self.col = 0;
            self.row += 1;
            if self.row == GRID_HEIGHT {
                self.scroll_up();
            }
        }
        match ch {
            CTRL_BACKSPACE => {
                if self.col > 1 {
                    self.col -= 2;
                }
            }
            CTRL_LINE_FEED => {
                self.col = 0;
                self.row += 1;
            }
            CTRL_FORM_FEED => {
                self.clear();
            }
            CTRL_CARRIAGE_RETURN => {
                self.col = 0;
            }
            _ => {}
        }
        self.mark_cursor();
    }

    /// Writes every byte of `s` through [`Self::write_char`], in order.
    pub fn write_str(&mut self, s: &str) {
        for b in s.bytes() {
            self.write_char(b);
        }
    }

    /// Marks the hardware cursor as stale.
    #[inline]
    fn mark_cursor(&mut self) {
        self.cursor_dirty = true;
    }

    /// Pushes the logical cursor out to the CRT controller.
    ///
    /// Only the kernel-owned instance over the real grid should flush;
    /// consoles over plain memory have no hardware cursor to move.
    pub fn flush_cursor(&mut self) {
        if self.cursor_dirty {
            grid::set_cursor(self.row, self.col);
            self.cursor_dirty = false;
        }
    }
}

impl fmt::Write for Console {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}
