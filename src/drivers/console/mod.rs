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

//! Text console driver.
//!
//! The kernel-facing surface over the 80x25 memory-mapped grid: one
//! mutex-guarded [`Console`] bound to the hardware grid, free functions
//! wrapping its operations, and the `kprint!`/`kprintln!` macros.

pub mod constants;
pub mod grid;
pub mod types;
pub mod writer;

#[cfg(test)]
mod tests;

use core::fmt;
use core::fmt::Write as _;
use core::sync::atomic::Ordering;

use spin::Mutex;

pub use constants::*;
pub use types::{
    attr_bg, attr_fg, attr_with_bg, attr_with_fg, pack_attr, Cell, Color, ConsoleStats,
    ConsoleStatsSnapshot, DEFAULT_ATTR, DEFAULT_BG, DEFAULT_FG,
};
pub use writer::Console;

/// The one kernel-owned console, bound to the hardware grid.
static CONSOLE: Mutex<Console> = Mutex::new(Console::new(GRID_ADDR as *mut Cell));

/// Global console statistics.
static CONSOLE_STATS: ConsoleStats = ConsoleStats::new();

/// Initializes the console: home cursor, default colors, cleared grid,
/// block hardware cursor.
pub fn init_console() {
    let mut con = CONSOLE.lock();
    con.init();
    grid::enable_cursor(CURSOR_BLOCK_START, CURSOR_BLOCK_END);
    con.flush_cursor();
}

/// Blanks the grid with the current attribute. The cursor stays put.
pub fn clear() {
    let mut con = CONSOLE.lock();
    con.clear();
    con.flush_cursor();
}

/// Replaces the foreground color, leaving the background untouched.
pub fn set_foreground(color: Color) {
    CONSOLE.lock().set_foreground(color);
}

/// Replaces the background color, leaving the foreground untouched.
pub fn set_background(color: Color) {
    CONSOLE.lock().set_background(color);
}

/// Sets both colors at once.
pub fn set_color(fg: Color, bg: Color) {
    CONSOLE.lock().set_color(fg, bg);
}

/// Current attribute byte.
pub fn attr() -> u8 {
    CONSOLE.lock().attr()
}

/// Overwrites the attribute byte wholesale.
pub fn set_attr(attr: u8) {
    CONSOLE.lock().set_attr(attr);
}

/// Moves the cursor to (`x`, `y`). No clamping is performed; staying inside
/// the grid is the caller's contract.
pub fn goto(x: usize, y: usize) {
    let mut con = CONSOLE.lock();
    con.goto(x, y);
    con.flush_cursor();
}

/// Cursor position as (column, row).
pub fn cursor() -> (usize, usize) {
    CONSOLE.lock().cursor()
}

/// Writes one character through the placement state machine.
pub fn put_char(ch: u8) {
    CONSOLE_STATS.add_bytes(1);
    let mut con = CONSOLE.lock();
    con.write_char(ch);
    con.flush_cursor();
}

/// Writes a glyph at an explicit position without moving the cursor.
pub fn put_at(x: usize, y: usize, ch: u8) {
    CONSOLE.lock().put_at(x, y, ch);
}

/// Prints a string.
pub fn print(s: &str) {
    CONSOLE_STATS.inc_messages();
    CONSOLE_STATS.add_bytes(s.len() as u64);
    let mut con = CONSOLE.lock();
    con.write_str(s);
    con.flush_cursor();
}

/// Prints a string followed by a line feed.
pub fn println(s: &str) {
    CONSOLE_STATS.inc_messages();
    CONSOLE_STATS.add_bytes(s.len() as u64 + 1);
    let mut con = CONSOLE.lock();
    con.write_str(s);
    con.write_char(CTRL_LINE_FEED);
    con.flush_cursor();
}

/// Prints formatted text.
pub fn printf(args: fmt::Arguments) {
    CONSOLE_STATS.inc_messages();
    let mut con = CONSOLE.lock();
    let _ = con.write_fmt(args);
    con.flush_cursor();
}

/// Best-effort output for panic context: never spins on the lock.
pub fn panic_print(args: fmt::Arguments) {
    if let Some(mut con) = CONSOLE.try_lock() {
        con.set_color(Color::LightRed, Color::Black);
        let _ = con.write_fmt(args);
        con.flush_cursor();
    }
}

/// Snapshot of the write counters and scroll count.
pub fn stats_snapshot() -> ConsoleStatsSnapshot {
    ConsoleStatsSnapshot {
        messages_written: CONSOLE_STATS.messages_written.load(Ordering::Relaxed),
        bytes_written: CONSOLE_STATS.bytes_written.load(Ordering::Relaxed),
        scrolls: CONSOLE.lock().scrolls(),
    }
}

/// Grid dimensions as (width, height).
pub fn size() -> (usize, usize) {
    (GRID_WIDTH, GRID_HEIGHT)
}

// =============================================================================
// Macros
// =============================================================================

/// Prints formatted text to the console.
#[macro_export]
macro_rules! kprint {
    ($($arg:tt)*) => ($crate::drivers::console::printf(format_args!($($arg)*)));
}

/// Prints formatted text followed by a line feed.
#[macro_export]
macro_rules! kprintln {
    () => ($crate::drivers::console::println(""));
    ($fmt:expr) => ($crate::drivers::console::println($fmt));
    ($fmt:expr, $($arg:tt)*) => ($crate::drivers::console::printf(format_args!(concat!($fmt, "\n"), $($arg)*)));
}
