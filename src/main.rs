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

//! Kernel entry point.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[cfg(target_os = "none")]
use core::panic::PanicInfo;

#[cfg(target_os = "none")]
use vtcon::arch::{x86_64::X64, Platform};

#[cfg(target_os = "none")]
#[no_mangle]
pub extern "C" fn _start() -> ! {
    vtcon::kernel_main::<X64>()
}

#[cfg(target_os = "none")]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    X64::disable_interrupts();
    vtcon::drivers::console::panic_print(format_args!("\nKERNEL PANIC: {}\n", info));
    loop {
        X64::halt();
    }
}

// Hosted builds only need something linkable; the entry above is the real
// program.
#[cfg(not(target_os = "none"))]
fn main() {}
