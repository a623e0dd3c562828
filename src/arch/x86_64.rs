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

//! x86_64 platform implementation.

use super::Platform;

/// The x86_64 target.
pub struct X64;

impl Platform for X64 {
    #[inline]
    fn disable_interrupts() {
        x86_64::instructions::interrupts::disable();
    }

    #[inline]
    fn enable_interrupts() {
        x86_64::instructions::interrupts::enable();
    }

    #[inline]
    fn halt() {
        x86_64::instructions::hlt();
    }
}
