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

//! vtcon: a freestanding text console driver for the VGA 80x25 grid.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod arch;
pub mod drivers;
pub mod log;
pub mod mem;
pub mod splash;

use arch::Platform;

/// Kernel main: console bring-up, banner, permanent idle.
///
/// This never returns; the final state is the CPU halted with interrupts
/// masked, waking for nothing.
pub fn kernel_main<P: Platform>() -> ! {
    drivers::console::init_console();
    log::init();

    let (w, h) = drivers::console::size();
    crate::log_info!("console: {}x{} grid online", w, h);

    splash::paint_boot_banner();

    P::disable_interrupts();
    loop {
        P::halt();
    }
}
