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

//! Boot logger.
//!
//! Severity-tagged messages sunk to the console with per-level colors, plus
//! a bounded in-memory ring of recent lines for post-hoc inspection. No
//! allocation; the ring is a fixed `heapless` deque.

use core::fmt;
use core::fmt::Write as _;
use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use spin::Mutex;

use crate::drivers::console::{self, Color};

/// Maximum length of one retained log line.
pub const LOG_LINE_MAX: usize = 128;

/// Number of retained log lines.
pub const LOG_RING_CAPACITY: usize = 64;

/// Log severity levels.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    /// Console color used for this level.
    pub const fn color(self) -> Color {
        match self {
            Severity::Debug => Color::DarkGrey,
            Severity::Info => Color::LightGrey,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::LightRed,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

struct Logger {
    ring: Mutex<heapless::Deque<heapless::String<LOG_LINE_MAX>, LOG_RING_CAPACITY>>,
    min_level: Mutex<Severity>,
    sequence: AtomicU64,
}

static LOGGER: Logger = Logger {
    ring: Mutex::new(heapless::Deque::new()),
    min_level: Mutex::new(Severity::Info),
    sequence: AtomicU64::new(0),
};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Brings the logger up. Idempotent.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    log(Severity::Info, format_args!("log: boot logger online"));
}

/// Sets the minimum severity that reaches the console and the ring.
pub fn set_min_level(level: Severity) {
    *LOGGER.min_level.lock() = level;
}

/// Records one message: console sink plus the retained ring.
pub fn log(severity: Severity, args: fmt::Arguments) {
    if severity < *LOGGER.min_level.lock() {
        return;
    }
    LOGGER.sequence.fetch_add(1, Ordering::Relaxed);

    let mut line = heapless::String::<LOG_LINE_MAX>::new();
    // Overlong messages are truncated at the ring boundary.
    let _ = write!(line, "{}", args);

    {
        let mut ring = LOGGER.ring.lock();
        if ring.is_full() {
            ring.pop_front();
        }
        let _ = ring.push_back(line.clone());
    }

    let saved = console::attr();
    console::set_foreground(severity.color());
    console::print("[ ");
    console::print(severity.as_str());
    console::print(" ] ");
    console::print(line.as_str());
    console::print("\n");
    console::set_attr(saved);
}

/// Number of messages recorded since boot.
pub fn sequence() -> u64 {
    LOGGER.sequence.load(Ordering::Relaxed)
}

/// Visits the retained lines, oldest first.
pub fn for_each_recent(mut f: impl FnMut(&str)) {
    for line in LOGGER.ring.lock().iter() {
        f(line.as_str());
    }
}

// =============================================================================
// Macros
// =============================================================================

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => ($crate::log::log($crate::log::Severity::Debug, format_args!($($arg)*)));
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => ($crate::log::log($crate::log::Severity::Info, format_args!($($arg)*)));
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => ($crate::log::log($crate::log::Severity::Warn, format_args!($($arg)*)));
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => ($crate::log::log($crate::log::Severity::Error, format_args!($($arg)*)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_severity_strings() {
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warn.as_str(), "WARN");
        assert_eq!(Severity::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Debug.color(), Color::DarkGrey);
        assert_eq!(Severity::Info.color(), Color::LightGrey);
        assert_eq!(Severity::Warn.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::LightRed);
    }

    #[test]
    fn test_default_severity() {
        assert_eq!(Severity::default(), Severity::Info);
    }
}
