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

//! Boot banner.
//!
//! Demo payload painted through the public console operations: a colored
//! band across the middle of the grid with the project title, and one
//! status line on the bottom row. Nothing here is load-bearing; any
//! embedder may drive the console differently.

use crate::drivers::console::{self, Color, GRID_HEIGHT, GRID_WIDTH};

const TITLE: &str = "vtcon :: VGA text console";

const STATUS: &str = "vtcon 0.1.0 | 80x25 text grid | interrupts masked, cpu halted";

/// Height of the title band, centered vertically.
const BAND_ROWS: usize = 3;

/// Paints the banner and the status line.
pub fn paint_boot_banner() {
    console::set_color(Color::LightGrey, Color::Blue);
    console::clear();

    // The band is painted the way everything else is written: straight
    // through the placement state machine, wrapping at each row end.
    let band_top = GRID_HEIGHT / 2 - BAND_ROWS / 2 - 1;
    console::set_color(Color::Blue, Color::LightGrey);
    console::goto(0, band_top);
    for _ in 0..BAND_ROWS * GRID_WIDTH {
        console::put_char(b' ');
    }

    let title_col = (GRID_WIDTH - TITLE.len()) / 2;
    console::goto(title_col, band_top + BAND_ROWS / 2);
    console::print(TITLE);

    console::set_color(Color::Black, Color::LightGrey);
    console::goto(0, GRID_HEIGHT - 1);
    console::print(STATUS);
}
