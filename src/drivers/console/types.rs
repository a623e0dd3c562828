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

//! Cell encoding:
//! - 16-color palette (`Color`)
//! - attribute byte packing helpers
//! - the 2-byte grid cell (`Cell`)
//! - console statistics

use core::sync::atomic::{AtomicU64, Ordering};

use super::constants::BLANK_GLYPH;

// =============================================================================
// Colors
// =============================================================================

/// The 16-color text-mode palette.
///
/// Each color is a 4-bit selector; the enumeration is closed, so every
/// attribute nibble decodes to exactly one variant.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black = 0x0,
    Blue = 0x1,
    Green = 0x2,
    Cyan = 0x3,
    Red = 0x4,
    Magenta = 0x5,
    Brown = 0x6,
    LightGrey = 0x7,
    DarkGrey = 0x8,
    LightBlue = 0x9,
    LightGreen = 0xA,
    LightCyan = 0xB,
    LightRed = 0xC,
    Pink = 0xD,
    Yellow = 0xE,
    White = 0xF,
}

impl Color {
    /// Decodes a nibble into a palette entry. Only the low 4 bits are used.
    pub const fn from_u8(value: u8) -> Self {
        match value & 0x0F {
            0x0 => Color::Black,
            0x1 => Color::Blue,
            0x2 => Color::Green,
            0x3 => Color::Cyan,
            0x4 => Color::Red,
            0x5 => Color::Magenta,
            0x6 => Color::Brown,
            0x7 => Color::LightGrey,
            0x8 => Color::DarkGrey,
            0x9 => Color::LightBlue,
            0xA => Color::LightGreen,
            0xB => Color::LightCyan,
            0xC => Color::LightRed,
            0xD => Color::Pink,
            0xE => Color::Yellow,
            _ => Color::White,
        }
    }

    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// True for the high-intensity half of the palette.
    #[inline]
    pub const fn is_bright(self) -> bool {
        (self as u8) >= 0x8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Brown => "Brown",
            Color::LightGrey => "LightGrey",
            Color::DarkGrey => "DarkGrey",
            Color::LightBlue => "LightBlue",
            Color::LightGreen => "LightGreen",
            Color::LightCyan => "LightCyan",
            Color::LightRed => "LightRed",
            Color::Pink => "Pink",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::LightGrey
    }
}

// =============================================================================
// Attribute Byte
// =============================================================================

/// Packs foreground and background into one attribute byte, background in
/// the high nibble.
#[inline]
pub const fn pack_attr(fg: Color, bg: Color) -> u8 {
    ((bg as u8) << 4) | (fg as u8 & 0x0F)
}

/// Extracts the foreground nibble.
#[inline]
pub const fn attr_fg(attr: u8) -> u8 {
    attr & 0x0F
}

/// Extracts the background nibble.
#[inline]
pub const fn attr_bg(attr: u8) -> u8 {
    (attr >> 4) & 0x0F
}

/// Replaces the foreground nibble, preserving the background.
#[inline]
pub const fn attr_with_fg(attr: u8, fg: Color) -> u8 {
    (attr & 0xF0) | (fg as u8 & 0x0F)
}

/// Replaces the background nibble, preserving the foreground.
#[inline]
pub const fn attr_with_bg(attr: u8, bg: Color) -> u8 {
    ((bg as u8) << 4) | (attr & 0x0F)
}

/// Default foreground color.
pub const DEFAULT_FG: Color = Color::LightGrey;

/// Default background color.
pub const DEFAULT_BG: Color = Color::Black;

/// Default attribute (light grey on black).
pub const DEFAULT_ATTR: u8 = pack_attr(DEFAULT_FG, DEFAULT_BG);

// =============================================================================
// Grid Cell
// =============================================================================

/// One character cell of the grid.
///
/// `repr(C, packed)` pins the 2-byte hardware layout: glyph byte first,
/// attribute byte second. Field reads must use copy semantics
/// (`{ cell.glyph }`) to avoid unaligned references.
#[repr(C, packed)]
#[derive(Clone, Copy)]
pub struct Cell {
    /// Character code.
    pub glyph: u8,
    /// Color attribute (fg low nibble, bg high nibble).
    pub attr: u8,
}

impl Cell {
    #[inline]
    pub const fn new(glyph: u8, attr: u8) -> Self {
        Self { glyph, attr }
    }

    /// A space cell in the given attribute.
    #[inline]
    pub const fn blank(attr: u8) -> Self {
        Self {
            glyph: BLANK_GLYPH,
            attr,
        }
    }

    /// The cell as the 16-bit value the display controller reads: glyph in
    /// the low byte, attribute in the high byte.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        ((self.attr as u16) << 8) | (self.glyph as u16)
    }

    #[inline]
    pub const fn from_u16(value: u16) -> Self {
        Self {
            glyph: (value & 0xFF) as u8,
            attr: ((value >> 8) & 0xFF) as u8,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_ATTR)
    }
}

impl core::fmt::Debug for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let glyph = { self.glyph };
        let attr = { self.attr };
        f.debug_struct("Cell")
            .field("glyph", &(glyph as char))
            .field("fg", &Color::from_u8(attr_fg(attr)).name())
            .field("bg", &Color::from_u8(attr_bg(attr)).name())
            .finish()
    }
}

// =============================================================================
// Console Statistics
// =============================================================================

/// Write-path counters, updated at the public API boundary.
#[derive(Debug)]
pub struct ConsoleStats {
    pub messages_written: AtomicU64,
    pub bytes_written: AtomicU64,
}

impl ConsoleStats {
    pub const fn new() -> Self {
        Self {
            messages_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn inc_messages(&self) {
        self.messages_written.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn add_bytes(&self, count: u64) {
        self.bytes_written.fetch_add(count, Ordering::Relaxed);
    }
}

impl Default for ConsoleStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-atomic snapshot of the counters, plus the scroll count held by the
/// console state itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleStatsSnapshot {
    pub messages_written: u64,
    pub bytes_written: u64,
    pub scrolls: u64,
}
