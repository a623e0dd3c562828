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

//! Platform capabilities.
//!
//! The three privileged operations the boot sequence needs. The rest of the
//! kernel depends only on this trait; the concrete target lives below.

pub mod x86_64;

/// The privileged CPU operations the kernel core relies on.
pub trait Platform {
    /// Masks external interrupt delivery.
    fn disable_interrupts();

    /// Unmasks external interrupt delivery.
    fn enable_interrupts();

    /// Stops the CPU until the next interrupt.
    fn halt();
}
